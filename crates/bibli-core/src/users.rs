//! User types: profiles, the follow/block graph, and feedback

use crate::identifiers::UserId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Edge type in the directed user graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserLinkType {
    /// Parent follows child.
    Follow,
    /// Parent blocked child.
    Block,
}

impl UserLinkType {
    /// Wire name of the link type (matches the serde encoding).
    pub fn as_str(&self) -> &'static str {
        match self {
            UserLinkType::Follow => "follow",
            UserLinkType::Block => "block",
        }
    }
}

impl fmt::Display for UserLinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user profile as returned by the backend.
///
/// `link` is filled in relative to the requesting user: it reports whether
/// the caller follows or blocked this user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// User id.
    pub id: UserId,
    /// Display name.
    pub name: Option<String>,
    /// Unique handle.
    pub tag: Option<String>,
    /// Profile bio.
    pub bio: Option<String>,
    /// The caller's relationship to this user, if any.
    #[serde(default)]
    pub link: Option<UserLinkType>,
    /// Server-side avatar path.
    pub avatar_filepath: Option<String>,
}

/// Body of `PUT /user`: create or update a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDraft {
    /// Existing id for updates; `None` on first save.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    /// Display name.
    pub name: Option<String>,
    /// Unique handle.
    pub tag: Option<String>,
    /// Profile bio.
    pub bio: Option<String>,
}

/// One page of user search results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPage {
    /// Total matches, across all pages.
    pub total_count: i64,
    /// This page of users.
    #[serde(default)]
    pub users: Vec<User>,
}

/// An edge in the user graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLink {
    /// Origin of the edge.
    pub parent_id: UserId,
    /// Target of the edge.
    pub child_id: UserId,
    /// Follow or block.
    #[serde(rename = "type")]
    pub kind: UserLinkType,
}

/// Query filter for `GET /users/linked`.
///
/// Exactly one of `parent_id` / `child_id` is normally set: parent lists
/// who a user follows, child lists a user's followers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedUsersFilter {
    /// Edges leaving this user.
    pub parent_id: Option<UserId>,
    /// Edges arriving at this user.
    pub child_id: Option<UserId>,
    /// Edge type to list.
    #[serde(rename = "type")]
    pub kind: UserLinkType,
}

impl LinkedUsersFilter {
    /// Users that `user_id` follows.
    pub fn following(user_id: UserId) -> Self {
        Self {
            parent_id: Some(user_id),
            child_id: None,
            kind: UserLinkType::Follow,
        }
    }

    /// Users that follow `user_id`.
    pub fn followers(user_id: UserId) -> Self {
        Self {
            parent_id: None,
            child_id: Some(user_id),
            kind: UserLinkType::Follow,
        }
    }
}

/// Result of checking a prospective handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagValidation {
    /// Whether the handle can be claimed.
    pub valid: bool,
    /// Optional reason shown when the handle is discouraged.
    pub warning: Option<String>,
}

/// Body of `POST /user/feedback`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    /// Submitting user.
    pub user_id: UserId,
    /// Free-form feedback text.
    pub comment: String,
}

/// A stored feedback entry, as acknowledged by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Feedback id.
    pub id: i64,
    /// Submitting user.
    pub user_id: UserId,
    /// Free-form feedback text.
    pub comment: String,
    /// Server receipt time (the backend emits naive UTC timestamps).
    pub created_at: NaiveDateTime,
}
