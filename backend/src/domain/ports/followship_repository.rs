//! Port for the directed follow graph between users.
use async_trait::async_trait;

use crate::domain::{Followship, User, UserId};

use super::RepositoryError;

/// Port for followship storage.
///
/// The same table is read in two directions: outgoing edges by follower
/// (`followings`) and incoming edges by followed user (`followers`).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FollowshipRepository: Send + Sync {
    /// Insert a follow edge. Duplicates and self-follows are accepted.
    ///
    /// Fails with [`RepositoryError::Validation`] when either user does not
    /// exist.
    async fn insert(&self, followship: &Followship) -> Result<(), RepositoryError>;

    /// Remove every edge from `follower` to `followed`.
    ///
    /// Returns the number of rows removed; zero is not an error.
    async fn delete_matching(
        &self,
        follower: &UserId,
        followed: &UserId,
    ) -> Result<u64, RepositoryError>;

    /// Whether at least one edge goes from `follower` to `followed`.
    async fn exists(&self, follower: &UserId, followed: &UserId) -> Result<bool, RepositoryError>;

    /// Users followed by `user_id`, one per outgoing edge, oldest first.
    async fn followings(&self, user_id: &UserId) -> Result<Vec<User>, RepositoryError>;

    /// Users following `user_id`, one per incoming edge, oldest first.
    async fn followers(&self, user_id: &UserId) -> Result<Vec<User>, RepositoryError>;
}
