//! # bibli Application Core
//!
//! Portable, headless application logic for the bibli reading app: the
//! pairwise-comparison ranking machine, the review rating flow, view state
//! for UI shells, toast notifications, and the service seams to the
//! backend. Rendering, navigation, and platform bindings live in the shells
//! that embed this crate.
//!
//! The centerpiece is [`workflows::ranking::RankingComparator`], an
//! interactive binary-insertion search that finds where a new review ranks
//! among the user's existing same-reaction reviews, one user-answered
//! comparison at a time. [`workflows::rating::RatingFlow`] wraps it with
//! the fetches and the submission against the backend.

pub mod errors;
pub mod services;
pub mod views;
pub mod workflows;

pub use errors::{AppError, ErrorCategory};
pub use services::{BookService, ReviewService};
pub use views::{RatingStep, RatingView, Toast, ToastLevel, ToastQueue};
pub use workflows::{RankChoice, RankingComparator, RatingFlow};
