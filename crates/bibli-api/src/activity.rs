//! Activity feed endpoints

use crate::client::ApiClient;
use crate::error::ApiError;
use bibli_core::activity::{
    Activity, ActivityComment, ActivityCommentDraft, ActivityFilter, ActivityPage,
    ActivityReactionDraft,
};
use bibli_core::identifiers::ActivityId;
use reqwest::Method;

impl ApiClient {
    /// Fetch a page of the feed (`POST /activities`).
    ///
    /// A POST because the cursor filter travels in the body.
    pub async fn activities(&self, filter: &ActivityFilter) -> Result<ActivityPage, ApiError> {
        let builder = self.request(Method::POST, "/activities").json(filter);
        self.execute("/activities", builder).await
    }

    /// Fetch one feed entry with its reactions and comments
    /// (`GET /activity/{activity_id}`).
    pub async fn activity(&self, activity_id: ActivityId) -> Result<Activity, ApiError> {
        let path = format!("/activity/{activity_id}");
        let builder = self.request(Method::GET, &path);
        self.execute(&path, builder).await
    }

    /// Comment on a feed entry (`PUT /activity_comment`).
    pub async fn put_activity_comment(
        &self,
        draft: &ActivityCommentDraft,
    ) -> Result<ActivityComment, ApiError> {
        let builder = self.request(Method::PUT, "/activity_comment").json(draft);
        self.execute("/activity_comment", builder).await
    }

    /// Like a feed entry (`POST /activity_reaction`).
    pub async fn add_activity_reaction(
        &self,
        draft: ActivityReactionDraft,
    ) -> Result<(), ApiError> {
        let builder = self.request(Method::POST, "/activity_reaction").json(&draft);
        self.execute_unit("/activity_reaction", builder).await
    }

    /// Remove a like from a feed entry (`DELETE /activity_reaction`).
    pub async fn remove_activity_reaction(
        &self,
        draft: ActivityReactionDraft,
    ) -> Result<(), ApiError> {
        let builder = self
            .request(Method::DELETE, "/activity_reaction")
            .json(&draft);
        self.execute_unit("/activity_reaction", builder).await
    }
}
