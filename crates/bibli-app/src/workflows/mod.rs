//! Portable application workflows
//!
//! Business logic shared by every UI shell: the pure ranking comparator and
//! the async rating session that drives it against the backend services.

pub mod ranking;
pub mod rating;

pub use ranking::{
    validate_placement, ComparisonState, PlacementError, RankChoice, RankedReview,
    RankingComparator, StepOutcome,
};
pub use rating::RatingFlow;
