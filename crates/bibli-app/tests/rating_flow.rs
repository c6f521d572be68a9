//! End-to-end drive of the rating flow against in-memory services.

use async_trait::async_trait;
use bibli_app::errors::AppError;
use bibli_app::services::{BookService, ReviewService};
use bibli_app::views::notifications::ToastLevel;
use bibli_app::views::rating::RatingStep;
use bibli_app::workflows::ranking::RankChoice;
use bibli_app::workflows::rating::RatingFlow;
use bibli_core::books::Book;
use bibli_core::identifiers::{BookId, ReviewId, UserId};
use bibli_core::reviews::{Comparison, Reaction, Review, ReviewDraft};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn sample_book(id: i64) -> Book {
    Book {
        id: BookId::new(id),
        title: format!("Book {id}"),
        subtitle: None,
        summary: None,
        publication_date: None,
        first_publication_date: None,
        pages: None,
        cover_link: None,
        olid: None,
        tags: None,
    }
}

fn review(user: i64, book: i64, rank: i32, reaction: Reaction) -> Review {
    Review {
        id: ReviewId::new(book * 10),
        user_id: UserId::new(user),
        book_id: BookId::new(book),
        notes: None,
        rating: 8.0,
        hide_rank: false,
        rank,
        reaction,
    }
}

/// Scripted review backend.
#[derive(Default)]
struct FakeReviews {
    reviews: Vec<Review>,
    fail_fetch: AtomicBool,
    fail_submit: AtomicBool,
    submitted: Mutex<Vec<ReviewDraft>>,
}

impl FakeReviews {
    fn with_reviews(reviews: Vec<Review>) -> Self {
        Self {
            reviews,
            ..Self::default()
        }
    }

    fn submitted(&self) -> Vec<ReviewDraft> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReviewService for FakeReviews {
    async fn reviews_for_user(&self, _user_id: UserId) -> Result<Vec<Review>, AppError> {
        if self.fail_fetch.load(Ordering::SeqCst) {
            return Err(AppError::network("connection reset"));
        }
        Ok(self.reviews.clone())
    }

    async fn submit_review(&self, draft: &ReviewDraft) -> Result<Review, AppError> {
        if self.fail_submit.load(Ordering::SeqCst) {
            return Err(AppError::api("503 service unavailable", true));
        }
        self.submitted.lock().unwrap().push(draft.clone());
        Ok(Review {
            id: ReviewId::new(1000),
            user_id: draft.user_id,
            book_id: draft.book_id,
            notes: draft.notes.clone(),
            rating: 9.0,
            hide_rank: false,
            rank: 0,
            reaction: draft.reaction,
        })
    }
}

/// Book lookups resolved from thin air; optionally failing.
#[derive(Default)]
struct FakeBooks {
    fail: AtomicBool,
    fetches: AtomicUsize,
}

#[async_trait]
impl BookService for FakeBooks {
    async fn book(&self, book_id: BookId) -> Result<Book, AppError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail.load(Ordering::SeqCst) {
            return Err(AppError::network("timed out"));
        }
        Ok(sample_book(book_id.value()))
    }
}

fn positive_bucket() -> Vec<Review> {
    vec![
        review(7, 1, 0, Reaction::Positive),
        review(7, 2, 1, Reaction::Positive),
        review(7, 3, 2, Reaction::Positive),
    ]
}

fn flow_with(reviews: Arc<FakeReviews>, books: Arc<FakeBooks>) -> RatingFlow {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
    RatingFlow::begin(reviews, books, UserId::new(7), sample_book(9))
}

#[tokio::test]
async fn full_walk_inserts_between_two_neighbors() {
    let reviews = Arc::new(FakeReviews::with_reviews(positive_bucket()));
    let books = Arc::new(FakeBooks::default());
    let mut flow = flow_with(reviews.clone(), books.clone());

    flow.choose_reaction(Reaction::Positive).await.unwrap();
    assert_eq!(flow.view().step, RatingStep::Compare);
    let prompt = flow.view().prompt.clone().unwrap();
    assert_eq!(prompt.existing_book_id, BookId::new(2));
    assert_eq!(prompt.new_book.id, BookId::new(9));

    // The new book beats book 2; book 3 beats the new book.
    flow.apply(RankChoice::NewWins).await.unwrap();
    assert_eq!(
        flow.view().prompt.as_ref().unwrap().existing_book_id,
        BookId::new(3)
    );
    flow.apply(RankChoice::ExistingWins).await.unwrap();

    assert_eq!(flow.view().step, RatingStep::Notes);
    assert_eq!(flow.view().comparisons_answered, 2);
    assert_eq!(
        flow.comparison(),
        Some(&Comparison::between(
            Some(BookId::new(2)),
            Some(BookId::new(3))
        ))
    );

    let saved = flow.submit(Some("loved it".to_string())).await.unwrap();
    assert_eq!(flow.view().step, RatingStep::Done);
    assert_eq!(saved.book_id, BookId::new(9));

    let drafts = reviews.submitted();
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].reaction, Reaction::Positive);
    assert_eq!(drafts[0].notes.as_deref(), Some("loved it"));
    assert_eq!(
        drafts[0].comparison,
        Some(Comparison::between(
            Some(BookId::new(2)),
            Some(BookId::new(3))
        ))
    );
}

#[tokio::test]
async fn empty_bucket_jumps_to_notes_without_fetching_books() {
    let reviews = Arc::new(FakeReviews::default());
    let books = Arc::new(FakeBooks::default());
    let mut flow = flow_with(reviews.clone(), books.clone());

    flow.choose_reaction(Reaction::Neutral).await.unwrap();
    assert_eq!(flow.view().step, RatingStep::Notes);
    assert_eq!(flow.comparison(), Some(&Comparison::empty()));
    assert_eq!(books.fetches.load(Ordering::SeqCst), 0);

    flow.submit(None).await.unwrap();
    let drafts = reviews.submitted();
    assert_eq!(drafts[0].comparison, None);
    assert_eq!(drafts[0].notes, None);
}

#[tokio::test]
async fn bucket_excludes_other_reactions_and_the_rated_book() {
    let mut all = positive_bucket();
    all.push(review(7, 5, 0, Reaction::Negative));
    all.push(review(7, 9, 3, Reaction::Positive)); // prior review of book 9
    let reviews = Arc::new(FakeReviews::with_reviews(all));
    let books = Arc::new(FakeBooks::default());
    let mut flow = flow_with(reviews, books);

    flow.choose_reaction(Reaction::Positive).await.unwrap();
    // Bucket is books 1..3 only; the midpoint candidate is book 2.
    assert_eq!(
        flow.view().prompt.as_ref().unwrap().existing_book_id,
        BookId::new(2)
    );
}

#[tokio::test]
async fn equal_short_circuits_to_notes() {
    let reviews = Arc::new(FakeReviews::with_reviews(positive_bucket()));
    let books = Arc::new(FakeBooks::default());
    let mut flow = flow_with(reviews, books);

    flow.choose_reaction(Reaction::Positive).await.unwrap();
    flow.apply(RankChoice::Equal).await.unwrap();

    assert_eq!(flow.view().step, RatingStep::Notes);
    assert_eq!(flow.comparison(), Some(&Comparison::equal_to(BookId::new(2))));
}

#[tokio::test]
async fn fetch_failure_keeps_the_reaction_step() {
    let reviews = Arc::new(FakeReviews::with_reviews(positive_bucket()));
    reviews.fail_fetch.store(true, Ordering::SeqCst);
    let books = Arc::new(FakeBooks::default());
    let mut flow = flow_with(reviews.clone(), books);

    let err = flow.choose_reaction(Reaction::Positive).await.unwrap_err();
    assert!(err.is_recoverable());
    assert_eq!(flow.view().step, RatingStep::Reaction);
    assert_eq!(flow.view().reaction, None);
    assert_eq!(flow.take_toast().unwrap().level, ToastLevel::Warning);

    // The user tries again once connectivity is back.
    reviews.fail_fetch.store(false, Ordering::SeqCst);
    flow.choose_reaction(Reaction::Positive).await.unwrap();
    assert_eq!(flow.view().step, RatingStep::Compare);
}

#[tokio::test]
async fn candidate_fetch_failure_keeps_the_previous_prompt() {
    let reviews = Arc::new(FakeReviews::with_reviews(positive_bucket()));
    let books = Arc::new(FakeBooks::default());
    let mut flow = flow_with(reviews, books.clone());

    flow.choose_reaction(Reaction::Positive).await.unwrap();
    books.fail.store(true, Ordering::SeqCst);

    let err = flow.apply(RankChoice::NewWins).await.unwrap_err();
    assert!(err.is_recoverable());
    assert_eq!(flow.view().step, RatingStep::Compare);
    // Stale but present: the pair from before the failed narrowing.
    assert_eq!(
        flow.view().prompt.as_ref().unwrap().existing_book_id,
        BookId::new(2)
    );

    books.fail.store(false, Ordering::SeqCst);
    flow.retry_candidate().await.unwrap();
    assert_eq!(
        flow.view().prompt.as_ref().unwrap().existing_book_id,
        BookId::new(3)
    );
}

#[tokio::test]
async fn submit_failure_leaves_the_flow_open_for_retry() {
    let reviews = Arc::new(FakeReviews::default());
    reviews.fail_submit.store(true, Ordering::SeqCst);
    let books = Arc::new(FakeBooks::default());
    let mut flow = flow_with(reviews.clone(), books);

    flow.choose_reaction(Reaction::Positive).await.unwrap();
    let err = flow.submit(None).await.unwrap_err();
    assert!(err.is_recoverable());
    assert_eq!(flow.view().step, RatingStep::Notes);

    reviews.fail_submit.store(false, Ordering::SeqCst);
    flow.submit(None).await.unwrap();
    assert_eq!(flow.view().step, RatingStep::Done);
    assert_eq!(reviews.submitted().len(), 1);
}

#[tokio::test]
async fn actions_out_of_step_are_rejected() {
    let reviews = Arc::new(FakeReviews::with_reviews(positive_bucket()));
    let books = Arc::new(FakeBooks::default());
    let mut flow = flow_with(reviews, books);

    let err = flow.apply(RankChoice::NewWins).await.unwrap_err();
    assert!(matches!(err, AppError::State { .. }));

    flow.choose_reaction(Reaction::Positive).await.unwrap();
    let err = flow.choose_reaction(Reaction::Negative).await.unwrap_err();
    assert!(matches!(err, AppError::State { .. }));

    let err = flow.submit(None).await.unwrap_err();
    assert!(matches!(err, AppError::State { .. }));
}

#[tokio::test]
async fn undo_walks_the_prompt_back() {
    let reviews = Arc::new(FakeReviews::with_reviews(positive_bucket()));
    let books = Arc::new(FakeBooks::default());
    let mut flow = flow_with(reviews, books);

    flow.choose_reaction(Reaction::Positive).await.unwrap();
    flow.apply(RankChoice::NewWins).await.unwrap();
    assert_eq!(
        flow.view().prompt.as_ref().unwrap().existing_book_id,
        BookId::new(3)
    );

    flow.apply(RankChoice::Undo).await.unwrap();
    assert_eq!(
        flow.view().prompt.as_ref().unwrap().existing_book_id,
        BookId::new(2)
    );
    assert_eq!(flow.view().comparisons_answered, 0);
}
