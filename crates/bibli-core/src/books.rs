//! Catalog types: books, authors, and community tags

use crate::collections::Collection;
use crate::identifiers::{AuthorId, BookId, UserId};
use crate::reviews::Review;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A book in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Book id.
    pub id: BookId,
    /// Title.
    pub title: String,
    /// Subtitle, when the edition has one.
    pub subtitle: Option<String>,
    /// Jacket-copy summary.
    pub summary: Option<String>,
    /// Publication date of this edition.
    pub publication_date: Option<NaiveDate>,
    /// First publication date, as free text from the catalog source.
    pub first_publication_date: Option<String>,
    /// Page count.
    pub pages: Option<i32>,
    /// Cover image URL.
    pub cover_link: Option<String>,
    /// Open Library id, when the book was imported from there.
    pub olid: Option<String>,
    /// Community tags attached to the book.
    pub tags: Option<Vec<Tag>>,
}

/// An author in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    /// Author id.
    pub id: AuthorId,
    /// Display name.
    pub name: String,
    /// Open Library id, when imported from there.
    pub olid: Option<String>,
}

/// A community tag on a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Tag text.
    pub name: String,
    /// Whether a moderator verified the tag.
    pub verified: bool,
    /// How many users applied it.
    pub count: i32,
}

/// A book as seen by one user: the catalog entry plus that user's review
/// and the shelves they filed it under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserBook {
    /// The viewing user.
    pub user_id: UserId,
    /// The catalog entry.
    pub book: Book,
    /// The user's review, if they wrote one.
    pub review: Option<Review>,
    /// Shelves of this user containing the book.
    pub collections: Option<Vec<Collection>>,
    /// The book's authors.
    #[serde(default)]
    pub authors: Vec<Author>,
}
