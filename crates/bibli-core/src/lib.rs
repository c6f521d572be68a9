//! # bibli Core Domain Model
//!
//! Shared domain types for the bibli reading platform: identifiers, books,
//! reviews and pairwise comparisons, collections, users, and the activity
//! feed. Everything here is plain serde data with no I/O, usable from the
//! API client, the application core, and tests alike.

pub mod activity;
pub mod books;
pub mod collections;
pub mod identifiers;
pub mod reviews;
pub mod users;

pub use identifiers::{ActivityId, AuthorId, BookId, CollectionId, ReviewId, UserId};

// Re-export the wire types most callers touch.
pub use books::{Author, Book, Tag, UserBook};
pub use collections::{
    Collection, CollectionBookLink, CollectionDraft, CollectionType, CollectionsFilter,
};
pub use reviews::{Comparison, Reaction, Review, ReviewDraft, ReviewsFilter};
pub use users::{
    LinkedUsersFilter, TagValidation, User, UserDraft, UserLink, UserLinkType, UserPage,
};
