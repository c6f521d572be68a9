//! Book endpoints

use crate::client::ApiClient;
use crate::error::ApiError;
use bibli_core::books::{Book, UserBook};
use bibli_core::identifiers::{BookId, UserId};
use reqwest::Method;

impl ApiClient {
    /// Fetch a catalog entry (`GET /books/{book_id}`).
    pub async fn book(&self, book_id: BookId) -> Result<Book, ApiError> {
        let path = format!("/books/{book_id}");
        let builder = self.request(Method::GET, &path);
        self.execute(&path, builder).await
    }

    /// Fetch a book as one user sees it: catalog entry plus that user's
    /// review and shelves (`GET /books/{book_id}/{user_id}`).
    pub async fn user_book(&self, book_id: BookId, user_id: UserId) -> Result<UserBook, ApiError> {
        let path = format!("/books/{book_id}/{user_id}");
        let builder = self.request(Method::GET, &path);
        self.execute(&path, builder).await
    }
}
