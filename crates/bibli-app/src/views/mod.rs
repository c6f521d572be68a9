//! View state consumed by UI shells
//!
//! Plain serializable structs describing what to render; no rendering or
//! navigation logic lives here.

pub mod notifications;
pub mod rating;

pub use notifications::{Toast, ToastLevel, ToastQueue};
pub use rating::{ComparisonPrompt, RatingStep, RatingView};
