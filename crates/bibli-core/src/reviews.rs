//! Review types: reactions, ranked reviews, and pairwise comparisons
//!
//! A review records how a user felt about a book (its [`Reaction`]) and where
//! the book sits inside that reaction bucket (its `rank`). Ranks are ordinal
//! and ascending: a higher rank means the user liked the book more than its
//! lower-ranked neighbors. The displayed `rating` is derived server-side from
//! the rank by linear interpolation over the reaction's slice of the 0-10
//! scale; [`Reaction::rating_for_rank`] mirrors that formula for previews.

use crate::identifiers::{BookId, ReviewId, UserId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a user felt about a book.
///
/// Each reaction owns a disjoint interval of the 0-10 rating scale, so a
/// "liked" book always rates above every "meh" book regardless of rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    /// Liked it.
    Positive,
    /// Middling.
    Neutral,
    /// Disliked it.
    Negative,
}

impl Reaction {
    /// All reactions, in display order.
    pub fn all() -> [Reaction; 3] {
        [Reaction::Positive, Reaction::Neutral, Reaction::Negative]
    }

    /// Wire name of the reaction (matches the serde encoding).
    pub fn as_str(&self) -> &'static str {
        match self {
            Reaction::Positive => "positive",
            Reaction::Neutral => "neutral",
            Reaction::Negative => "negative",
        }
    }

    /// The `(low, high)` slice of the 0-10 rating scale this reaction owns.
    pub fn rating_interval(&self) -> (f64, f64) {
        match self {
            Reaction::Negative => (0.0, 10.0 / 3.0),
            Reaction::Neutral => (10.0 / 3.0, 20.0 / 3.0),
            Reaction::Positive => (20.0 / 3.0, 10.0),
        }
    }

    /// Interpolate the rating a review would display at `rank` out of
    /// `max_rank` books in this bucket.
    ///
    /// Mirrors the server formula `rank * (high - low) / max_rank + low`
    /// with 1-based ranks; rank `max_rank` lands on the interval's high end.
    /// Returns the interval's low end when the bucket is empty.
    pub fn rating_for_rank(&self, rank: i32, max_rank: i32) -> f64 {
        let (low, high) = self.rating_interval();
        if max_rank < 1 {
            return low;
        }
        f64::from(rank) * (high - low) / f64::from(max_rank) + low
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user's review of a book, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    /// Review id.
    pub id: ReviewId,
    /// Reviewing user.
    pub user_id: UserId,
    /// Reviewed book.
    pub book_id: BookId,
    /// Free-form notes, if the user wrote any.
    pub notes: Option<String>,
    /// Derived 0-10 rating (see [`Reaction::rating_for_rank`]).
    pub rating: f64,
    /// Whether the rank/rating is suppressed from display (the book has too
    /// few reviews overall for a rank to be meaningful).
    pub hide_rank: bool,
    /// Ordinal position within the reaction bucket, ascending. Reviews the
    /// user judged equal share a rank.
    pub rank: i32,
    /// The reaction bucket this review lives in.
    pub reaction: Reaction,
}

/// Where a new review slots into the user's existing ranking.
///
/// Field orientation is from the new review's point of view:
/// `less_than_id` names the book the new review sits immediately **below**
/// (its upper neighbor), `greater_than_id` the book it sits immediately
/// **above** (its lower neighbor). `equal_to_id` declares a tie and excludes
/// the other two. A comparison with no fields set is only meaningful when
/// the user has no other reviews with the same reaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    /// Book the new review ranks immediately below.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub less_than_id: Option<BookId>,
    /// Book the new review ranks immediately above.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greater_than_id: Option<BookId>,
    /// Book the new review ties with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equal_to_id: Option<BookId>,
}

impl Comparison {
    /// Comparison for the first review in a bucket.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Comparison declaring a tie with `book_id`.
    pub fn equal_to(book_id: BookId) -> Self {
        Self {
            equal_to_id: Some(book_id),
            ..Self::default()
        }
    }

    /// Comparison placing the new review between two neighbors. Either side
    /// may be open when the review lands at the top or bottom of the bucket.
    pub fn between(greater_than_id: Option<BookId>, less_than_id: Option<BookId>) -> Self {
        Self {
            less_than_id,
            greater_than_id,
            equal_to_id: None,
        }
    }

    /// True when no placement information is present.
    pub fn is_empty(&self) -> bool {
        self.less_than_id.is_none() && self.greater_than_id.is_none() && self.equal_to_id.is_none()
    }

    /// True when this comparison declares a tie.
    pub fn is_tie(&self) -> bool {
        self.equal_to_id.is_some()
    }
}

/// Body of `PUT /review`: create or replace the user's review of a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewDraft {
    /// Reviewing user.
    pub user_id: UserId,
    /// Reviewed book.
    pub book_id: BookId,
    /// Free-form notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Chosen reaction bucket.
    pub reaction: Reaction,
    /// Placement within the bucket, from the comparison flow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<Comparison>,
}

/// Query filter for `GET /reviews`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewsFilter {
    /// Restrict to one user's reviews.
    pub user_id: Option<UserId>,
    /// Restrict to reviews of one book.
    pub book_id: Option<BookId>,
}

impl ReviewsFilter {
    /// Filter for all reviews by one user.
    pub fn for_user(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
            book_id: None,
        }
    }

    /// Filter for all reviews of one book.
    pub fn for_book(book_id: BookId) -> Self {
        Self {
            user_id: None,
            book_id: Some(book_id),
        }
    }
}
