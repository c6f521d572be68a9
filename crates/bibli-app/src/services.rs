//! Service seams between the app core and the backend
//!
//! The workflows talk to these traits rather than to [`ApiClient`] directly,
//! so the app core is testable against in-memory fakes. The API client
//! implements both traits; it is the only production implementation.

use crate::errors::AppError;
use async_trait::async_trait;
use bibli_api::ApiClient;
use bibli_core::books::Book;
use bibli_core::identifiers::{BookId, UserId};
use bibli_core::reviews::{Review, ReviewDraft, ReviewsFilter};

/// Review reads and writes needed by the rating flow.
#[async_trait]
pub trait ReviewService: Send + Sync {
    /// All reviews by `user_id`, across every reaction bucket.
    async fn reviews_for_user(&self, user_id: UserId) -> Result<Vec<Review>, AppError>;

    /// Create or replace the user's review of a book.
    async fn submit_review(&self, draft: &ReviewDraft) -> Result<Review, AppError>;
}

/// Book metadata lookups needed to present a comparison pair.
#[async_trait]
pub trait BookService: Send + Sync {
    /// Display metadata for one book.
    async fn book(&self, book_id: BookId) -> Result<Book, AppError>;
}

#[async_trait]
impl ReviewService for ApiClient {
    async fn reviews_for_user(&self, user_id: UserId) -> Result<Vec<Review>, AppError> {
        let reviews = self.reviews(ReviewsFilter::for_user(user_id)).await?;
        Ok(reviews)
    }

    async fn submit_review(&self, draft: &ReviewDraft) -> Result<Review, AppError> {
        let review = self.put_review(draft).await?;
        Ok(review)
    }
}

#[async_trait]
impl BookService for ApiClient {
    async fn book(&self, book_id: BookId) -> Result<Book, AppError> {
        let book = ApiClient::book(self, book_id).await?;
        Ok(book)
    }
}
