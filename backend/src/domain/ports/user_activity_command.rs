//! Driving port for the actions users take against restaurants and peers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Comment, CommentId, Error, Favorite, Followship, RestaurantId, UserId};

/// Request to post a review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentRequest {
    pub user_id: UserId,
    pub restaurant_id: RestaurantId,
    pub content: String,
}

/// Driving port for reviews, bookmarks, and follows.
///
/// Removal of favorites and followships is unrestricted and reports how many
/// rows went away.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserActivityCommand: Send + Sync {
    /// Post a review.
    async fn add_comment(&self, request: AddCommentRequest) -> Result<Comment, Error>;

    /// Remove a single review.
    async fn remove_comment(&self, comment_id: &CommentId) -> Result<(), Error>;

    /// Bookmark a restaurant.
    async fn add_favorite(
        &self,
        user_id: &UserId,
        restaurant_id: &RestaurantId,
    ) -> Result<Favorite, Error>;

    /// Drop every bookmark `user_id` holds on `restaurant_id`.
    async fn remove_favorite(
        &self,
        user_id: &UserId,
        restaurant_id: &RestaurantId,
    ) -> Result<u64, Error>;

    /// Make `follower` follow `followed`.
    async fn add_followship(
        &self,
        follower: &UserId,
        followed: &UserId,
    ) -> Result<Followship, Error>;

    /// Drop every edge from `follower` to `followed`.
    async fn remove_followship(&self, follower: &UserId, followed: &UserId)
    -> Result<u64, Error>;
}
