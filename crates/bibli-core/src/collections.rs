//! Shelf types: collections and their book links
//!
//! Every user gets three default shelves (bookmarked / reading / finished);
//! additional custom shelves have no `CollectionType`.

use crate::identifiers::{BookId, CollectionId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which default shelf a collection is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionType {
    /// Books the user wants to read.
    Saved,
    /// Books the user is reading.
    Active,
    /// Books the user finished.
    Complete,
}

impl CollectionType {
    /// Wire name of the shelf type (matches the serde encoding).
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionType::Saved => "saved",
            CollectionType::Active => "active",
            CollectionType::Complete => "complete",
        }
    }

    /// Default display name for the shelf.
    pub fn display_name(&self) -> &'static str {
        match self {
            CollectionType::Saved => "Bookmarked",
            CollectionType::Active => "Reading",
            CollectionType::Complete => "Finished",
        }
    }
}

impl fmt::Display for CollectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A shelf of books.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    /// Collection id.
    pub id: CollectionId,
    /// Shelf name.
    pub name: String,
    /// Default-shelf type; `None` for custom shelves.
    #[serde(rename = "type")]
    pub kind: Option<CollectionType>,
}

/// Body of `PUT /collection`: create a shelf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionDraft {
    /// Shelf name.
    pub name: String,
}

/// Membership of a book on a shelf, used as both link payload and response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionBookLink {
    /// The shelf.
    pub collection_id: CollectionId,
    /// The book on it.
    pub book_id: BookId,
}

/// Query filter for `GET /collections`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionsFilter {
    /// Restrict to shelves owned by this user.
    pub user_id: Option<UserId>,
    /// Restrict to one default-shelf type.
    #[serde(rename = "type")]
    pub kind: Option<CollectionType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_type_round_trips_on_the_wire() {
        let json = serde_json::to_string(&CollectionType::Saved).unwrap();
        assert_eq!(json, "\"saved\"");
        let back: CollectionType = serde_json::from_str("\"complete\"").unwrap();
        assert_eq!(back, CollectionType::Complete);
    }

    #[test]
    fn custom_shelves_deserialize_without_a_type() {
        let json = r#"{"id": 4, "name": "Space operas", "type": null}"#;
        let shelf: Collection = serde_json::from_str(json).unwrap();
        assert_eq!(shelf.kind, None);
        assert_eq!(shelf.name, "Space operas");
    }

    #[test]
    fn default_shelf_names_match_the_apps_labels() {
        assert_eq!(CollectionType::Saved.display_name(), "Bookmarked");
        assert_eq!(CollectionType::Active.display_name(), "Reading");
        assert_eq!(CollectionType::Complete.display_name(), "Finished");
    }
}
