//! Rating flow view state
//!
//! Portable step enum and render state for the review rating wizard. The UI
//! shell reads [`RatingView`] after every flow call and renders accordingly;
//! it never mutates this state directly.

use bibli_core::books::Book;
use bibli_core::identifiers::BookId;
use bibli_core::reviews::Reaction;
use serde::{Deserialize, Serialize};

/// Steps in the rating wizard.
///
/// The logical flow for reviewing a book:
/// 1. Reaction - Pick positive / neutral / negative
/// 2. Compare - Rank the book against existing same-reaction reviews
/// 3. Notes - Optional written notes, then submit
/// 4. Done - Review persisted
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatingStep {
    /// Pick a reaction bucket
    #[default]
    Reaction,
    /// Pairwise comparisons
    Compare,
    /// Write notes and submit
    Notes,
    /// Review submitted
    Done,
}

impl RatingStep {
    /// Get all steps in order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::Reaction, Self::Compare, Self::Notes, Self::Done]
    }

    /// Get the next step, or None if at the last step.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Reaction => Some(Self::Compare),
            Self::Compare => Some(Self::Notes),
            Self::Notes => Some(Self::Done),
            Self::Done => None,
        }
    }

    /// Get the previous step, or None if at the first step.
    #[must_use]
    pub fn prev(self) -> Option<Self> {
        match self {
            Self::Reaction => None,
            Self::Compare => Some(Self::Reaction),
            Self::Notes => Some(Self::Compare),
            Self::Done => Some(Self::Notes),
        }
    }

    /// Check if this is the first step.
    #[must_use]
    pub fn is_first(self) -> bool {
        self == Self::Reaction
    }

    /// Check if this is the last step.
    #[must_use]
    pub fn is_last(self) -> bool {
        self == Self::Done
    }

    /// Get step number (1-indexed for display).
    #[must_use]
    pub fn number(self) -> u8 {
        match self {
            Self::Reaction => 1,
            Self::Compare => 2,
            Self::Notes => 3,
            Self::Done => 4,
        }
    }

    /// Get total number of steps.
    #[must_use]
    pub fn total_steps() -> u8 {
        4
    }

    /// Get step title for display.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Reaction => "How was it?",
            Self::Compare => "Which did you prefer?",
            Self::Notes => "Add notes",
            Self::Done => "Done",
        }
    }
}

/// One pairwise comparison as presented to the user: the book being rated
/// against an already-ranked book from the same reaction bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonPrompt {
    /// The new, not-yet-ranked book.
    pub new_book: Book,
    /// The already-ranked book to compare against.
    pub existing_book: Book,
    /// Id of the ranked book (candidate for this comparison).
    pub existing_book_id: BookId,
}

/// Render state of the rating flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatingView {
    /// Current wizard step.
    pub step: RatingStep,
    /// Chosen reaction, once picked.
    pub reaction: Option<Reaction>,
    /// The pair currently on screen, when comparing.
    pub prompt: Option<ComparisonPrompt>,
    /// Comparisons the user has answered so far.
    pub comparisons_answered: u32,
    /// Whether a network call is in flight; user actions are rejected
    /// while set.
    pub busy: bool,
}

impl RatingView {
    /// Format the wizard position for display, e.g. "Step 2 of 4".
    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("Step {} of {}", self.step.number(), RatingStep::total_steps())
    }

    /// Wizard progress percentage (0-100).
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        let total = u16::from(RatingStep::total_steps());
        ((u16::from(self.step.number()) * 100) / total).min(100) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_navigation() {
        assert_eq!(RatingStep::Reaction.next(), Some(RatingStep::Compare));
        assert_eq!(RatingStep::Compare.next(), Some(RatingStep::Notes));
        assert_eq!(RatingStep::Done.next(), None);

        assert_eq!(RatingStep::Reaction.prev(), None);
        assert_eq!(RatingStep::Notes.prev(), Some(RatingStep::Compare));
    }

    #[test]
    fn step_boundaries() {
        assert!(RatingStep::Reaction.is_first());
        assert!(!RatingStep::Reaction.is_last());
        assert!(RatingStep::Done.is_last());
    }

    #[test]
    fn step_numbers() {
        assert_eq!(RatingStep::Reaction.number(), 1);
        assert_eq!(RatingStep::Done.number(), 4);
        assert_eq!(RatingStep::total_steps(), 4);
        assert_eq!(RatingStep::all().len(), 4);
    }

    #[test]
    fn progress_formatting() {
        let view = RatingView {
            step: RatingStep::Compare,
            ..RatingView::default()
        };
        assert_eq!(view.progress_label(), "Step 2 of 4");
        assert_eq!(view.progress_percent(), 50);
    }
}
