//! Port for review (comment) storage and the traversals that go through it.
use async_trait::async_trait;

use crate::domain::{Comment, CommentId, Restaurant, UserId};

use super::RepositoryError;

/// Port for comment storage.
///
/// Listing methods return rows in insertion order and never fail on an
/// empty result.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Insert a comment.
    ///
    /// Fails with [`RepositoryError::Validation`] when the user or the
    /// restaurant does not exist.
    async fn insert(&self, comment: &Comment) -> Result<(), RepositoryError>;

    /// Delete a single comment.
    ///
    /// Fails with [`RepositoryError::NotFound`] when no such comment exists.
    async fn delete(&self, id: &CommentId) -> Result<(), RepositoryError>;

    /// Comments written by `user_id`.
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Comment>, RepositoryError>;

    /// Number of comments written by `user_id`.
    async fn count_for_user(&self, user_id: &UserId) -> Result<u64, RepositoryError>;

    /// Restaurants reached through the user's comments, one per comment.
    async fn reviewed_restaurants(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Restaurant>, RepositoryError>;
}
