//! Driving port for account lifecycle operations.
//!
//! Registration, profile edits, and account removal enter the model here.
//! Deletion applies the restrict-on-comments rule.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{Error, User, UserId};

use super::UserDeletion;

/// Request to register a new user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Display name; must not be blank.
    pub name: String,
    /// Login email supplied by the authentication collaborator.
    pub email: String,
    /// Password digest supplied by the authentication collaborator.
    pub encrypted_password: String,
    /// Optional role label, e.g. `"admin"`.
    #[serde(default)]
    pub role: Option<String>,
    /// Optional avatar reference from the upload collaborator.
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Request to edit an existing user.
///
/// Fields are set-only: `None` leaves the stored value unchanged, so a role
/// or avatar cannot be cleared through this request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub user_id: UserId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl UpdateUserRequest {
    /// Start an update that changes nothing.
    pub fn for_user(user_id: UserId) -> Self {
        Self {
            user_id,
            name: None,
            role: None,
            avatar: None,
        }
    }
}

/// Driving port for account lifecycle operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserAccountCommand: Send + Sync {
    /// Register a user.
    ///
    /// # Errors
    ///
    /// [`crate::domain::ErrorCode::InvalidRequest`] when the name is blank,
    /// the credentials are malformed, or the email is already registered.
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, Error>;

    /// Edit a user's profile.
    ///
    /// The stored row is read, patched, and written back whole. Concurrent
    /// updates to the same user are last-writer-wins across all fields.
    ///
    /// # Errors
    ///
    /// [`crate::domain::ErrorCode::InvalidRequest`] when a supplied field is
    /// blank; [`crate::domain::ErrorCode::NotFound`] when the user is absent.
    async fn update_user(&self, request: UpdateUserRequest) -> Result<User, Error>;

    /// Delete a user, cascading favorites, followships, and credentials.
    ///
    /// # Errors
    ///
    /// [`crate::domain::ErrorCode::IntegrityViolation`] when the user owns
    /// comments; nothing is removed in that case.
    async fn delete_user(&self, user_id: &UserId) -> Result<UserDeletion, Error>;
}
