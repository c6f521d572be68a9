//! Review endpoints

use crate::client::ApiClient;
use crate::error::ApiError;
use bibli_core::identifiers::{BookId, UserId};
use bibli_core::reviews::{Review, ReviewDraft, ReviewsFilter};
use reqwest::Method;

impl ApiClient {
    /// Fetch reviews matching `filter` (`GET /reviews`).
    pub async fn reviews(&self, filter: ReviewsFilter) -> Result<Vec<Review>, ApiError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(user_id) = filter.user_id {
            query.push(("user_id", user_id.to_string()));
        }
        if let Some(book_id) = filter.book_id {
            query.push(("book_id", book_id.to_string()));
        }
        let builder = self.request(Method::GET, "/reviews").query(&query);
        self.execute("/reviews", builder).await
    }

    /// Create or replace the user's review of a book (`PUT /review`).
    ///
    /// The draft's comparison decides where the review slots into the
    /// user's ranking; the backend recomputes ranks and ratings for the
    /// whole reaction bucket.
    pub async fn put_review(&self, draft: &ReviewDraft) -> Result<Review, ApiError> {
        let builder = self.request(Method::PUT, "/review").json(draft);
        self.execute("/review", builder).await
    }

    /// Delete a user's review of a book
    /// (`DELETE /review/{user_id}/{book_id}`).
    pub async fn delete_review(&self, user_id: UserId, book_id: BookId) -> Result<(), ApiError> {
        let path = format!("/review/{user_id}/{book_id}");
        let builder = self.request(Method::DELETE, &path);
        self.execute_unit(&path, builder).await
    }
}
