//! User and social-graph endpoints

use crate::client::ApiClient;
use crate::error::ApiError;
use bibli_core::identifiers::UserId;
use bibli_core::users::{
    Feedback, FeedbackRecord, LinkedUsersFilter, TagValidation, User, UserDraft, UserLink,
    UserPage,
};
use reqwest::Method;

impl ApiClient {
    /// Fetch the authenticated user's own profile (`GET /user/current`).
    pub async fn current_user(&self) -> Result<User, ApiError> {
        let builder = self.request(Method::GET, "/user/current");
        self.execute("/user/current", builder).await
    }

    /// Fetch a profile by id (`GET /user/{user_id}`).
    pub async fn user(&self, user_id: UserId) -> Result<User, ApiError> {
        let path = format!("/user/{user_id}");
        let builder = self.request(Method::GET, &path);
        self.execute(&path, builder).await
    }

    /// Fetch a profile by handle (`GET /user/tag/{tag}`).
    pub async fn user_by_tag(&self, tag: &str) -> Result<User, ApiError> {
        let path = format!("/user/tag/{tag}");
        let builder = self.request(Method::GET, &path);
        self.execute(&path, builder).await
    }

    /// Search profiles by name or handle
    /// (`GET /user/search/{q}?offset=&limit=`).
    pub async fn search_users(
        &self,
        q: &str,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> Result<UserPage, ApiError> {
        let path = format!("/user/search/{q}");
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(offset) = offset {
            query.push(("offset", offset.to_string()));
        }
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }
        let builder = self.request(Method::GET, &path).query(&query);
        self.execute(&path, builder).await
    }

    /// Create or update the authenticated user's profile (`PUT /user`).
    pub async fn put_user(&self, draft: &UserDraft) -> Result<User, ApiError> {
        let builder = self.request(Method::PUT, "/user").json(draft);
        self.execute("/user", builder).await
    }

    /// Check whether a handle can be claimed
    /// (`GET /user/validate/tag?tag=`).
    pub async fn validate_tag(&self, tag: &str) -> Result<TagValidation, ApiError> {
        let builder = self
            .request(Method::GET, "/user/validate/tag")
            .query(&[("tag", tag)]);
        self.execute("/user/validate/tag", builder).await
    }

    /// Submit app feedback (`POST /user/feedback`).
    pub async fn send_feedback(&self, feedback: &Feedback) -> Result<FeedbackRecord, ApiError> {
        let builder = self.request(Method::POST, "/user/feedback").json(feedback);
        self.execute("/user/feedback", builder).await
    }

    /// List users linked by follow/block edges (`GET /users/linked`).
    pub async fn linked_users(&self, filter: LinkedUsersFilter) -> Result<Vec<User>, ApiError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(parent_id) = filter.parent_id {
            query.push(("parent_id", parent_id.to_string()));
        }
        if let Some(child_id) = filter.child_id {
            query.push(("child_id", child_id.to_string()));
        }
        query.push(("type", filter.kind.as_str().to_string()));
        let builder = self.request(Method::GET, "/users/linked").query(&query);
        self.execute("/users/linked", builder).await
    }

    /// Create or update a follow/block edge (`PUT /users/link`).
    pub async fn put_user_link(&self, link: UserLink) -> Result<UserLink, ApiError> {
        let builder = self.request(Method::PUT, "/users/link").json(&link);
        self.execute("/users/link", builder).await
    }

    /// Remove a follow/block edge
    /// (`DELETE /users/link/{parent_user_id}/{child_user_id}`).
    pub async fn delete_user_link(
        &self,
        parent_id: UserId,
        child_id: UserId,
    ) -> Result<(), ApiError> {
        let path = format!("/users/link/{parent_id}/{child_id}");
        let builder = self.request(Method::DELETE, &path);
        self.execute_unit(&path, builder).await
    }
}
