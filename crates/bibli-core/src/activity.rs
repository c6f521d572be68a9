//! Activity feed types
//!
//! The feed is a cursor-paged stream of events from followed users. Each
//! [`Activity`] carries exactly one event payload (a follow, a review, or a
//! shelf addition) plus its reactions and comments.

use crate::books::Book;
use crate::collections::Collection;
use crate::identifiers::{ActivityId, UserId};
use crate::reviews::Review;
use crate::users::User;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One user started following another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowUserActivity {
    /// Who followed.
    pub follower: User,
    /// Who they followed.
    pub following: User,
}

/// A user reviewed a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewActivity {
    /// The reviewer.
    pub user: User,
    /// The review.
    pub review: Review,
}

/// A user shelved a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddToCollectionActivity {
    /// Who shelved it.
    pub user: User,
    /// The shelf.
    pub collection: Collection,
    /// The book.
    pub book: Book,
}

/// A like on an activity, as embedded in the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityReaction {
    /// Who liked it.
    pub user_id: UserId,
}

/// Body of `POST /activity_reaction` and `DELETE /activity_reaction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityReactionDraft {
    /// The liked activity.
    pub activity_id: ActivityId,
    /// The liking user.
    pub user_id: UserId,
}

/// A comment on an activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityComment {
    /// Comment id.
    pub id: i64,
    /// The commented activity.
    pub activity_id: ActivityId,
    /// The commenting user.
    pub user_id: UserId,
    /// Comment text.
    pub comment: String,
    /// Server receipt time (the backend emits naive UTC timestamps).
    pub created_at: NaiveDateTime,
}

/// Body of `PUT /activity_comment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityCommentDraft {
    /// The commented activity.
    pub activity_id: ActivityId,
    /// The commenting user.
    pub user_id: UserId,
    /// Comment text.
    pub comment: String,
}

/// One feed entry. Exactly one of the payload fields is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Activity id.
    pub id: ActivityId,
    /// Event time (the backend emits naive UTC timestamps).
    pub created_at: NaiveDateTime,
    /// Payload: a book was shelved.
    #[serde(default)]
    pub add_to_collection: Option<AddToCollectionActivity>,
    /// Payload: a book was reviewed.
    #[serde(default)]
    pub review: Option<ReviewActivity>,
    /// Payload: a user was followed.
    #[serde(default)]
    pub follow_user: Option<FollowUserActivity>,
    /// Likes on this activity.
    #[serde(default)]
    pub reactions: Vec<ActivityReaction>,
    /// Comments on this activity.
    #[serde(default)]
    pub comments: Vec<ActivityComment>,
}

/// Resume point for feed paging: strictly-older-than this entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityCursor {
    /// Id of the last entry of the previous page.
    pub id: ActivityId,
    /// Its event time.
    pub created_at: NaiveDateTime,
}

/// Body of `POST /activities`: what slice of the feed to return.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityFilter {
    /// Resume after this cursor; `None` starts from the newest entry.
    pub cursor: Option<ActivityCursor>,
    /// Page size.
    pub limit: Option<i32>,
    /// Events visible to this user via their follow graph.
    pub following_user_id: Option<UserId>,
    /// Events performed by this user only.
    pub primary_user_id: Option<UserId>,
}

/// One page of the feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityPage {
    /// Cursor for the next page; `None` when the feed is exhausted.
    pub next_cursor: Option<ActivityCursor>,
    /// This page of entries, newest first.
    #[serde(default)]
    pub activities: Vec<Activity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_page_deserializes_naive_timestamps() {
        let json = r#"{
            "next_cursor": {"id": 40, "created_at": "2024-03-01T12:30:00"},
            "activities": [{
                "id": 41,
                "created_at": "2024-03-02T09:00:00.120000",
                "reactions": [{"user_id": 5}],
                "comments": []
            }]
        }"#;
        let page: ActivityPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.activities.len(), 1);
        let entry = &page.activities[0];
        assert!(entry.review.is_none() && entry.follow_user.is_none());
        assert_eq!(entry.reactions, vec![ActivityReaction { user_id: UserId::new(5) }]);
        assert!(page.next_cursor.is_some());
    }

    #[test]
    fn filter_serializes_cursor_inline() {
        let filter = ActivityFilter {
            limit: Some(20),
            following_user_id: Some(UserId::new(9)),
            ..ActivityFilter::default()
        };
        let json = serde_json::to_value(&filter).unwrap();
        assert_eq!(json["limit"], 20);
        assert_eq!(json["following_user_id"], 9);
        assert!(json["cursor"].is_null());
    }
}
