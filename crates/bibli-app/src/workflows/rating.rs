//! Rating flow session
//!
//! The async driver around [`RankingComparator`]: reaction choice, bucket
//! fetch, the comparison loop with candidate book lookups, notes, and the
//! final submission. One session exists per open rating modal; dropping it
//! at any step submits nothing.
//!
//! At most one network call is in flight at a time. The `busy` view flag is
//! set for its duration and user actions arriving meanwhile are rejected
//! with an [`AppError::State`].

use crate::errors::AppError;
use crate::services::{BookService, ReviewService};
use crate::views::notifications::{Toast, ToastQueue};
use crate::views::rating::{ComparisonPrompt, RatingStep, RatingView};
use crate::workflows::ranking::{
    validate_placement, RankChoice, RankedReview, RankingComparator, StepOutcome,
};
use bibli_core::books::Book;
use bibli_core::identifiers::UserId;
use bibli_core::reviews::{Comparison, Reaction, Review, ReviewDraft};
use std::sync::Arc;

/// One run of the review rating wizard for a single book.
pub struct RatingFlow {
    reviews: Arc<dyn ReviewService>,
    books: Arc<dyn BookService>,
    user_id: UserId,
    book: Book,
    bucket: Vec<RankedReview>,
    comparator: Option<RankingComparator>,
    comparison: Option<Comparison>,
    view: RatingView,
    toasts: ToastQueue,
}

impl RatingFlow {
    /// Open the flow for a book the user is about to review.
    pub fn begin(
        reviews: Arc<dyn ReviewService>,
        books: Arc<dyn BookService>,
        user_id: UserId,
        book: Book,
    ) -> Self {
        tracing::debug!(%user_id, book_id = %book.id, "rating flow opened");
        Self {
            reviews,
            books,
            user_id,
            book,
            bucket: Vec::new(),
            comparator: None,
            comparison: None,
            view: RatingView::default(),
            toasts: ToastQueue::new(),
        }
    }

    /// Current render state.
    #[must_use]
    pub fn view(&self) -> &RatingView {
        &self.view
    }

    /// The book being rated.
    #[must_use]
    pub fn book(&self) -> &Book {
        &self.book
    }

    /// Pending toasts, oldest-first.
    #[must_use]
    pub fn toasts(&self) -> &ToastQueue {
        &self.toasts
    }

    /// Drain the oldest pending toast.
    pub fn take_toast(&mut self) -> Option<Toast> {
        self.toasts.pop()
    }

    /// The decided placement, once the comparison loop has settled.
    #[must_use]
    pub fn comparison(&self) -> Option<&Comparison> {
        self.comparison.as_ref()
    }

    /// Pick a reaction: fetch the user's reviews, build the same-reaction
    /// bucket, and start comparing.
    ///
    /// An empty bucket jumps straight to the notes step with the empty
    /// placement. A failed fetch keeps the flow on the reaction step; the
    /// error is recoverable and the user can pick again.
    pub async fn choose_reaction(&mut self, reaction: Reaction) -> Result<(), AppError> {
        self.ensure_step(RatingStep::Reaction, "choose a reaction")?;
        self.view.reaction = Some(reaction);

        self.view.busy = true;
        let fetched = self.reviews.reviews_for_user(self.user_id).await;
        self.view.busy = false;

        let all = match fetched {
            Ok(reviews) => reviews,
            Err(err) => {
                self.view.reaction = None;
                return Err(self.surface(err));
            }
        };

        let mut bucket_reviews: Vec<Review> = all
            .into_iter()
            .filter(|r| r.reaction == reaction && r.book_id != self.book.id)
            .collect();
        bucket_reviews.sort_by_key(|r| r.rank);
        self.bucket = bucket_reviews.iter().map(RankedReview::from).collect();

        let comparator = RankingComparator::new(self.bucket.clone());
        tracing::info!(
            %reaction,
            bucket_len = self.bucket.len(),
            "reaction chosen"
        );

        if let Some(result) = comparator.result() {
            // First review in this bucket: nothing to compare against.
            self.comparison = Some(*result);
            self.comparator = Some(comparator);
            self.view.step = RatingStep::Notes;
            return Ok(());
        }

        self.comparator = Some(comparator);
        self.view.step = RatingStep::Compare;
        self.refresh_prompt().await
    }

    /// Answer the current comparison prompt.
    ///
    /// On settle the flow advances to the notes step carrying the decided
    /// [`Comparison`]; otherwise the next candidate's book is fetched for
    /// the new prompt.
    pub async fn apply(&mut self, choice: RankChoice) -> Result<(), AppError> {
        self.ensure_step(RatingStep::Compare, "answer a comparison")?;
        let comparator = self
            .comparator
            .as_mut()
            .ok_or_else(|| AppError::internal("comparing without a comparator"))?;

        let depth_before = comparator.depth();
        let outcome = comparator.apply(choice);
        match choice {
            RankChoice::ExistingWins | RankChoice::NewWins | RankChoice::Equal => {
                self.view.comparisons_answered += 1;
            }
            RankChoice::Undo => {
                if comparator.depth() < depth_before {
                    self.view.comparisons_answered =
                        self.view.comparisons_answered.saturating_sub(1);
                }
            }
            RankChoice::Skip => {}
        }

        match outcome {
            StepOutcome::Continue => self.refresh_prompt().await,
            StepOutcome::Settled(result) => {
                tracing::info!(
                    answered = self.view.comparisons_answered,
                    "comparison settled"
                );
                self.comparison = Some(result);
                self.view.prompt = None;
                self.view.step = RatingStep::Notes;
                Ok(())
            }
        }
    }

    /// Re-fetch the current candidate's book after a failed prompt load.
    pub async fn retry_candidate(&mut self) -> Result<(), AppError> {
        self.ensure_step(RatingStep::Compare, "retry the comparison prompt")?;
        self.refresh_prompt().await
    }

    /// Preflight the placement and persist the review.
    ///
    /// A failed submission leaves the flow on the notes step so the user
    /// can retry.
    pub async fn submit(&mut self, notes: Option<String>) -> Result<Review, AppError> {
        self.ensure_step(RatingStep::Notes, "submit the review")?;
        let reaction = self
            .view
            .reaction
            .ok_or_else(|| AppError::internal("submitting without a reaction"))?;
        let comparison = self
            .comparison
            .ok_or_else(|| AppError::internal("submitting without a placement"))?;

        if let Err(err) = validate_placement(&self.bucket, &comparison) {
            let err = AppError::validation(err.to_string());
            return Err(self.surface(err));
        }

        let draft = ReviewDraft {
            user_id: self.user_id,
            book_id: self.book.id,
            notes: notes.filter(|n| !n.trim().is_empty()),
            reaction,
            comparison: (!comparison.is_empty()).then_some(comparison),
        };

        self.view.busy = true;
        let submitted = self.reviews.submit_review(&draft).await;
        self.view.busy = false;

        match submitted {
            Ok(review) => {
                tracing::info!(
                    user_id = %self.user_id,
                    book_id = %self.book.id,
                    rank = review.rank,
                    "review submitted"
                );
                self.view.step = RatingStep::Done;
                Ok(review)
            }
            Err(err) => Err(self.surface(err)),
        }
    }

    /// Fetch the current candidate's book and rebuild the prompt. On
    /// failure the previous prompt is kept and the error surfaces as a
    /// toast; the user can retry or dismiss.
    async fn refresh_prompt(&mut self) -> Result<(), AppError> {
        let candidate_id = match self.comparator.as_ref().and_then(|c| c.candidate()) {
            Some(candidate) => candidate.book_id,
            None => return Ok(()),
        };

        self.view.busy = true;
        let fetched = self.books.book(candidate_id).await;
        self.view.busy = false;

        match fetched {
            Ok(existing_book) => {
                self.view.prompt = Some(ComparisonPrompt {
                    new_book: self.book.clone(),
                    existing_book,
                    existing_book_id: candidate_id,
                });
                Ok(())
            }
            Err(err) => Err(self.surface(err)),
        }
    }

    fn ensure_step(&self, expected: RatingStep, action: &str) -> Result<(), AppError> {
        if self.view.busy {
            return Err(AppError::state(format!(
                "cannot {action} while a request is in flight"
            )));
        }
        if self.view.step != expected {
            return Err(AppError::state(format!(
                "cannot {action} at the {:?} step",
                self.view.step
            )));
        }
        Ok(())
    }

    fn surface(&mut self, err: AppError) -> AppError {
        tracing::warn!(code = err.code(), error = %err, "rating flow step failed");
        self.toasts
            .push(Toast::new(err.toast_severity(), err.to_string()));
        err
    }
}
