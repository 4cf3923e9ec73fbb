//! Driving port for read-only questions about users.
//!
//! Every answer reflects the store at call time. Counts and lookups over
//! empty data return zero, `false`, or an empty list rather than an error.

use async_trait::async_trait;

use crate::domain::{Comment, Error, Restaurant, User, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserQuery: Send + Sync {
    /// Fetch a user by identifier.
    async fn find_user(&self, user_id: &UserId) -> Result<Option<User>, Error>;

    /// Whether `user_id` has an outgoing follow edge to `other`.
    async fn is_following(&self, user_id: &UserId, other: &UserId) -> Result<bool, Error>;

    /// Number of users in the store.
    async fn total_user_count(&self) -> Result<u64, Error>;

    /// Number of reviews written by `user_id`.
    async fn comment_count_for(&self, user_id: &UserId) -> Result<u64, Error>;

    /// Reviews written by `user_id`.
    async fn comments_for(&self, user_id: &UserId) -> Result<Vec<Comment>, Error>;

    /// Restaurants reached through the user's reviews.
    async fn reviewed_restaurants(&self, user_id: &UserId) -> Result<Vec<Restaurant>, Error>;

    /// Restaurants reached through the user's bookmarks.
    async fn favorited_restaurants(&self, user_id: &UserId) -> Result<Vec<Restaurant>, Error>;

    /// Users that `user_id` follows.
    async fn followings(&self, user_id: &UserId) -> Result<Vec<User>, Error>;

    /// Users that follow `user_id`.
    async fn followers(&self, user_id: &UserId) -> Result<Vec<User>, Error>;
}
