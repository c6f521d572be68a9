//! Pairwise-comparison ranking
//!
//! When a user reviews a new book, its position inside their existing ranked
//! list for the same reaction is found by interactive binary insertion: the
//! machine proposes one already-ranked book at a time, the user answers which
//! of the two they prefer (or equal / skip / undo), and the candidate
//! interval narrows until the insertion point is decided.
//!
//! [`RankingComparator`] is pure and synchronous: every transition is
//! `(stack, choice) -> outcome` with no I/O, so the machine is testable
//! without the surrounding session (`workflows::rating`) or any UI.

use bibli_core::identifiers::BookId;
use bibli_core::reviews::{Comparison, Review};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// One entry of the rank-ordered bucket the comparator searches.
///
/// The bucket must be filtered to a single reaction and sorted ascending by
/// `rank` before construction. Equal ranks are legal; they are ties produced
/// by earlier "equal" answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedReview {
    /// The reviewed book.
    pub book_id: BookId,
    /// Ordinal position within the bucket, ascending.
    pub rank: i32,
}

impl RankedReview {
    /// Build an entry.
    pub fn new(book_id: BookId, rank: i32) -> Self {
        Self { book_id, rank }
    }
}

impl From<&Review> for RankedReview {
    fn from(review: &Review) -> Self {
        Self {
            book_id: review.book_id,
            rank: review.rank,
        }
    }
}

/// One snapshot of the still-undetermined insertion interval.
///
/// Bounds are inclusive indices into the bucket. The pinned placement bounds
/// ride inside every snapshot, so undo restores them together with the
/// interval.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonState {
    low: usize,
    high: usize,
    skipped: BTreeSet<usize>,
    less_than_id: Option<BookId>,
    greater_than_id: Option<BookId>,
}

impl ComparisonState {
    fn initial(len: usize) -> Self {
        Self {
            low: 0,
            high: len - 1,
            skipped: BTreeSet::new(),
            less_than_id: None,
            greater_than_id: None,
        }
    }

    /// Inclusive lower index bound.
    #[must_use]
    pub fn low(&self) -> usize {
        self.low
    }

    /// Inclusive upper index bound.
    #[must_use]
    pub fn high(&self) -> usize {
        self.high
    }

    /// Indices the user declined to compare against.
    #[must_use]
    pub fn skipped(&self) -> &BTreeSet<usize> {
        &self.skipped
    }

    /// Book the new review is so far pinned immediately below, if any.
    #[must_use]
    pub fn less_than_id(&self) -> Option<BookId> {
        self.less_than_id
    }

    /// Book the new review is so far pinned immediately above, if any.
    #[must_use]
    pub fn greater_than_id(&self) -> Option<BookId> {
        self.greater_than_id
    }

    fn all_skipped(&self) -> bool {
        (self.low..=self.high).all(|i| self.skipped.contains(&i))
    }
}

/// One user answer to a comparison prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankChoice {
    /// The already-ranked book wins; the new review belongs below it.
    ExistingWins,
    /// The new book wins; the new review belongs above the candidate.
    NewWins,
    /// The two books are equally good; tie the ranks.
    Equal,
    /// Defer this candidate; propose a different one.
    Skip,
    /// Revert the most recent answer.
    Undo,
}

/// Result of feeding one [`RankChoice`] to the comparator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// More comparisons are needed; present the candidate at
    /// [`RankingComparator::next_index`] again.
    Continue,
    /// The placement is decided.
    Settled(Comparison),
}

/// Interactive binary-insertion search over one reaction bucket.
///
/// Each directional answer pins one placement bound and narrows the
/// interval; a search that walks both directions before terminating emits
/// both bounds ("insert between these two books"). Equal short-circuits.
/// An empty bucket settles immediately with the empty [`Comparison`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingComparator {
    bucket: Vec<RankedReview>,
    stack: Vec<ComparisonState>,
    settled: Option<Comparison>,
}

impl RankingComparator {
    /// Start a comparison over `bucket` (rank-sorted, single reaction).
    pub fn new(bucket: Vec<RankedReview>) -> Self {
        if bucket.is_empty() {
            // First review in this bucket: nothing to compare against.
            return Self {
                bucket,
                stack: Vec::new(),
                settled: Some(Comparison::empty()),
            };
        }
        let initial = ComparisonState::initial(bucket.len());
        Self {
            bucket,
            stack: vec![initial],
            settled: None,
        }
    }

    /// The bucket being searched.
    #[must_use]
    pub fn bucket(&self) -> &[RankedReview] {
        &self.bucket
    }

    /// The current interval snapshot, if the search is still open.
    #[must_use]
    pub fn state(&self) -> Option<&ComparisonState> {
        if self.settled.is_some() {
            None
        } else {
            self.stack.last()
        }
    }

    /// How many narrowing steps are on the stack (1 = nothing to undo).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The final placement, once decided.
    #[must_use]
    pub fn result(&self) -> Option<&Comparison> {
        self.settled.as_ref()
    }

    /// Whether the search has terminated.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.settled.is_some()
    }

    /// Index of the next candidate to present, or `None` once settled.
    ///
    /// Prefers the interval midpoint; when the midpoint is skipped, scans
    /// outward by growing distance (left neighbor before right) for the
    /// first unskipped index. A fully-skipped interval falls back to the
    /// midpoint so a previously-skipped book is re-presented rather than
    /// wedging the flow.
    #[must_use]
    pub fn next_index(&self) -> Option<usize> {
        let state = self.state()?;
        Some(Self::candidate_index(state))
    }

    /// The next candidate entry, or `None` once settled.
    #[must_use]
    pub fn candidate(&self) -> Option<&RankedReview> {
        self.next_index().map(|idx| &self.bucket[idx])
    }

    /// Feed one user answer to the machine.
    ///
    /// Once settled, further calls return the same [`StepOutcome::Settled`]
    /// without changing anything.
    pub fn apply(&mut self, choice: RankChoice) -> StepOutcome {
        if let Some(result) = &self.settled {
            return StepOutcome::Settled(*result);
        }
        match choice {
            RankChoice::ExistingWins => self.existing_wins(),
            RankChoice::NewWins => self.new_wins(),
            RankChoice::Equal => self.equal(),
            RankChoice::Skip => self.skip(),
            RankChoice::Undo => self.undo(),
        }
    }

    fn candidate_index(state: &ComparisonState) -> usize {
        let mid = (state.high - state.low) / 2 + state.low;
        if !state.skipped.contains(&mid) {
            return mid;
        }
        for distance in 1..=(state.high - state.low) {
            if mid >= distance {
                let left = mid - distance;
                if left >= state.low && !state.skipped.contains(&left) {
                    return left;
                }
            }
            let right = mid + distance;
            if right <= state.high && !state.skipped.contains(&right) {
                return right;
            }
        }
        // Everything in the interval is skipped; re-present the midpoint.
        mid
    }

    fn top(&self) -> &ComparisonState {
        // The stack is non-empty whenever the search is open; `new` seeds it
        // and `undo` never pops the last state.
        match self.stack.last() {
            Some(state) => state,
            None => unreachable!("open comparator has at least one state"),
        }
    }

    /// The user preferred the ranked book: the new review belongs below the
    /// candidate. Entries tied with the candidate cannot be ordered against
    /// it, so the next interval also excludes the tie block beneath it.
    fn existing_wins(&mut self) -> StepOutcome {
        let state = self.top().clone();
        let idx = Self::candidate_index(&state);
        let mut next = state.clone();
        next.less_than_id = Some(self.bucket[idx].book_id);

        match self.tie_boundary_below(state.low, idx) {
            None => self.settle(Comparison::between(next.greater_than_id, next.less_than_id)),
            Some(high) => {
                next.high = high;
                self.push(next)
            }
        }
    }

    /// The user preferred the new book: it belongs above the candidate.
    fn new_wins(&mut self) -> StepOutcome {
        let state = self.top().clone();
        let idx = Self::candidate_index(&state);
        let mut next = state.clone();
        next.greater_than_id = Some(self.bucket[idx].book_id);

        match self.tie_boundary_above(state.high, idx) {
            None => self.settle(Comparison::between(next.greater_than_id, next.less_than_id)),
            Some(low) => {
                next.low = low;
                self.push(next)
            }
        }
    }

    fn equal(&mut self) -> StepOutcome {
        let idx = Self::candidate_index(self.top());
        // A tie needs no ordering decision; pinned bounds are discarded.
        self.settle(Comparison::equal_to(self.bucket[idx].book_id))
    }

    /// Defer the current candidate. When the skip would cover the whole
    /// interval, the set resets to just this index: earlier skips are
    /// forgotten so the flow can always continue. This mirrors the original
    /// product behavior and is intentional, not an error path.
    fn skip(&mut self) -> StepOutcome {
        let state = self.top().clone();
        let idx = Self::candidate_index(&state);
        let mut next = state;
        next.skipped.insert(idx);
        if next.all_skipped() {
            next.skipped = BTreeSet::from([idx]);
        }
        self.push(next)
    }

    fn undo(&mut self) -> StepOutcome {
        if self.stack.len() > 1 {
            self.stack.pop();
        } else {
            tracing::debug!("undo with nothing to undo; ignored");
        }
        StepOutcome::Continue
    }

    /// Highest index strictly below `idx` not tied with it, or `None` when
    /// the tie block reaches `low` (the answer is terminal).
    fn tie_boundary_below(&self, low: usize, idx: usize) -> Option<usize> {
        let rank = self.bucket[idx].rank;
        let mut r = idx;
        while r > low && self.bucket[r - 1].rank == rank {
            r -= 1;
        }
        if r == low {
            None
        } else {
            Some(r - 1)
        }
    }

    /// Lowest index strictly above `idx` not tied with it, or `None` when
    /// the tie block reaches `high`.
    fn tie_boundary_above(&self, high: usize, idx: usize) -> Option<usize> {
        let rank = self.bucket[idx].rank;
        let mut l = idx;
        while l < high && self.bucket[l + 1].rank == rank {
            l += 1;
        }
        if l == high {
            None
        } else {
            Some(l + 1)
        }
    }

    fn push(&mut self, state: ComparisonState) -> StepOutcome {
        tracing::debug!(
            low = state.low,
            high = state.high,
            skipped = state.skipped.len(),
            "comparison interval narrowed"
        );
        self.stack.push(state);
        StepOutcome::Continue
    }

    fn settle(&mut self, result: Comparison) -> StepOutcome {
        tracing::debug!(?result, "comparison settled");
        self.settled = Some(result);
        StepOutcome::Settled(result)
    }
}

/// Why a [`Comparison`] fails the placement preflight.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// `equal_to_id` combined with a directional bound.
    #[error("a tie excludes directional bounds")]
    TieWithBounds,
    /// A referenced book is not in the bucket.
    #[error("book {0} is not in the reaction bucket")]
    UnknownBook(BookId),
    /// Both bounds set but not adjacent in rank.
    #[error("bounds are not rank-adjacent (above rank {greater_rank}, below rank {less_rank})")]
    NotAdjacent {
        /// Rank of the `greater_than_id` book.
        greater_rank: i32,
        /// Rank of the `less_than_id` book.
        less_rank: i32,
    },
    /// Sole upper bound does not hold the bucket's minimum rank.
    #[error("lone upper bound must hold the bucket's minimum rank")]
    NotBottom,
    /// Sole lower bound does not hold the bucket's maximum rank.
    #[error("lone lower bound must hold the bucket's maximum rank")]
    NotTop,
    /// Empty comparison against a non-empty bucket.
    #[error("a placement is required when the bucket is not empty")]
    MissingPlacement,
}

/// Client-side mirror of the server's comparison validation.
///
/// Run before submitting a review so an inconsistent placement is rejected
/// locally instead of by the backend. Also serves as the oracle for the
/// comparator's property tests.
pub fn validate_placement(
    bucket: &[RankedReview],
    comparison: &Comparison,
) -> Result<(), PlacementError> {
    let rank_of = |book_id: BookId| -> Result<i32, PlacementError> {
        bucket
            .iter()
            .find(|entry| entry.book_id == book_id)
            .map(|entry| entry.rank)
            .ok_or(PlacementError::UnknownBook(book_id))
    };

    if let Some(equal_id) = comparison.equal_to_id {
        if comparison.less_than_id.is_some() || comparison.greater_than_id.is_some() {
            return Err(PlacementError::TieWithBounds);
        }
        rank_of(equal_id)?;
        return Ok(());
    }

    match (comparison.greater_than_id, comparison.less_than_id) {
        (Some(lower), Some(upper)) => {
            let greater_rank = rank_of(lower)?;
            let less_rank = rank_of(upper)?;
            if less_rank - greater_rank != 1 {
                return Err(PlacementError::NotAdjacent {
                    greater_rank,
                    less_rank,
                });
            }
            Ok(())
        }
        (None, Some(upper)) => {
            let less_rank = rank_of(upper)?;
            let min_rank = bucket.iter().map(|entry| entry.rank).min();
            if Some(less_rank) != min_rank {
                return Err(PlacementError::NotBottom);
            }
            Ok(())
        }
        (Some(lower), None) => {
            let greater_rank = rank_of(lower)?;
            let max_rank = bucket.iter().map(|entry| entry.rank).max();
            if Some(greater_rank) != max_rank {
                return Err(PlacementError::NotTop);
            }
            Ok(())
        }
        (None, None) => {
            if bucket.is_empty() {
                Ok(())
            } else {
                Err(PlacementError::MissingPlacement)
            }
        }
    }
}
