//! Port abstraction for user persistence adapters.
use async_trait::async_trait;

use crate::domain::{Credentials, User, UserId};

use super::RepositoryError;

/// Rows removed alongside a deleted user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UserDeletion {
    /// Favorites owned by the user.
    pub favorites: u64,
    /// Follow edges in either direction that touched the user.
    pub followships: u64,
}

/// Port for user storage.
///
/// # Deletion
///
/// [`UserRepository::delete_restricted`] is restrict-with-error on comments
/// and cascading on favorites, followships (both directions), and
/// credentials. The comment check and the deletes must be atomic: no comment
/// may be inserted for the user between the check and the removal.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new user together with its credentials.
    ///
    /// Fails with [`RepositoryError::Validation`] when the email is taken.
    async fn insert(&self, user: &User, credentials: &Credentials) -> Result<(), RepositoryError>;

    /// Overwrite the mutable attributes of an existing user.
    ///
    /// Fails with [`RepositoryError::NotFound`] when the user is absent.
    async fn update(&self, user: &User) -> Result<(), RepositoryError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;

    /// Count every stored user regardless of role or associations.
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// Delete a user unless it owns comments.
    ///
    /// Fails with [`RepositoryError::HasComments`] and mutates nothing when
    /// at least one comment references the user.
    async fn delete_restricted(&self, id: &UserId) -> Result<UserDeletion, RepositoryError>;
}
