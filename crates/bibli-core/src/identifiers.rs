//! Identifier types used across the bibli platform
//!
//! The backend keys every entity with an integer id. Each id gets its own
//! newtype so a `BookId` can never be passed where a `UserId` is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub struct $name(pub i64);

        impl $name {
            /// Create from a raw backend id.
            pub fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the raw backend id.
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// A registered user account.
    UserId
);

define_id!(
    /// A book in the catalog.
    BookId
);

define_id!(
    /// A user's review of a book.
    ReviewId
);

define_id!(
    /// A shelf of books (bookmarked, reading, finished, or custom).
    CollectionId
);

define_id!(
    /// An entry in the social activity feed.
    ActivityId
);

define_id!(
    /// An author in the catalog.
    AuthorId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_bare_integers() {
        let id = BookId::new(42);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "42");

        let back: BookId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn ids_display_without_decoration() {
        assert_eq!(UserId::new(7).to_string(), "7");
    }
}
