//! Collection (shelf) endpoints

use crate::client::ApiClient;
use crate::error::ApiError;
use bibli_core::collections::{Collection, CollectionBookLink, CollectionDraft, CollectionsFilter};
use bibli_core::identifiers::CollectionId;
use reqwest::Method;
use serde::Serialize;

/// Body of `PATCH /collection_book_link`: move a book between shelves.
#[derive(Debug, Serialize)]
struct CollectionBookLinkPatch {
    current_link: CollectionBookLink,
    new_link: CollectionBookLink,
}

impl ApiClient {
    /// Fetch one shelf (`GET /collection/{collection_id}`).
    pub async fn collection(&self, collection_id: CollectionId) -> Result<Collection, ApiError> {
        let path = format!("/collection/{collection_id}");
        let builder = self.request(Method::GET, &path);
        self.execute(&path, builder).await
    }

    /// Fetch shelves matching `filter` (`GET /collections`).
    pub async fn collections(&self, filter: CollectionsFilter) -> Result<Vec<Collection>, ApiError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(user_id) = filter.user_id {
            query.push(("user_id", user_id.to_string()));
        }
        if let Some(kind) = filter.kind {
            query.push(("type", kind.as_str().to_string()));
        }
        let builder = self.request(Method::GET, "/collections").query(&query);
        self.execute("/collections", builder).await
    }

    /// Create a shelf (`PUT /collection`).
    pub async fn put_collection(&self, draft: &CollectionDraft) -> Result<Collection, ApiError> {
        let builder = self.request(Method::PUT, "/collection").json(draft);
        self.execute("/collection", builder).await
    }

    /// Delete a shelf (`DELETE /collection/{collection_id}`).
    pub async fn delete_collection(&self, collection_id: CollectionId) -> Result<(), ApiError> {
        let path = format!("/collection/{collection_id}");
        let builder = self.request(Method::DELETE, &path);
        self.execute_unit(&path, builder).await
    }

    /// Put a book on a shelf (`POST /collection_book_link`).
    pub async fn add_collection_book_link(
        &self,
        link: CollectionBookLink,
    ) -> Result<CollectionBookLink, ApiError> {
        let builder = self.request(Method::POST, "/collection_book_link").json(&link);
        self.execute("/collection_book_link", builder).await
    }

    /// Take a book off a shelf (`DELETE /collection_book_link`).
    pub async fn remove_collection_book_link(
        &self,
        link: CollectionBookLink,
    ) -> Result<(), ApiError> {
        let builder = self
            .request(Method::DELETE, "/collection_book_link")
            .json(&link);
        self.execute_unit("/collection_book_link", builder).await
    }

    /// Move a book from one shelf to another in a single call
    /// (`PATCH /collection_book_link`), e.g. reading to finished.
    pub async fn move_collection_book_link(
        &self,
        current_link: CollectionBookLink,
        new_link: CollectionBookLink,
    ) -> Result<CollectionBookLink, ApiError> {
        let body = CollectionBookLinkPatch {
            current_link,
            new_link,
        };
        let builder = self
            .request(Method::PATCH, "/collection_book_link")
            .json(&body);
        self.execute("/collection_book_link", builder).await
    }
}
