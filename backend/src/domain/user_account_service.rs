//! Account lifecycle service.
//!
//! Implements [`UserAccountCommand`] on top of a [`UserRepository`]. Input is
//! validated here before anything reaches the store, so a rejected request
//! leaves the store untouched.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};

use crate::domain::ports::{
    CreateUserRequest, RepositoryError, UpdateUserRequest, UserAccountCommand, UserDeletion,
    UserRepository,
};
use crate::domain::{
    AvatarRef, Credentials, Error, ErrorCode, Role, User, UserId, UserName, UserValidationError,
};

use super::repository_error_mapping::map_repository_error;

/// Account service implementing the account driving port.
#[derive(Clone)]
pub struct UserAccountService<U> {
    users: Arc<U>,
}

impl<U> UserAccountService<U> {
    /// Create a new service over the given user repository.
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

fn user_validation_error(error: &UserValidationError) -> Error {
    let field = match error {
        UserValidationError::EmptyName => "name",
        UserValidationError::EmptyRole => "role",
        UserValidationError::EmptyAvatar => "avatar",
    };
    Error::invalid_request(error.to_string()).with_details(json!({ "field": field }))
}

fn build_user(id: UserId, request: &CreateUserRequest) -> Result<User, UserValidationError> {
    User::try_from_parts(
        id,
        request.name.as_str(),
        request.role.clone(),
        request.avatar.clone(),
    )
}

fn apply_update(user: User, request: &UpdateUserRequest) -> Result<User, UserValidationError> {
    let mut user = user;
    if let Some(name) = &request.name {
        user = user.with_name(UserName::new(name.as_str())?);
    }
    if let Some(role) = &request.role {
        user = user.with_role(Some(Role::new(role.as_str())?));
    }
    if let Some(avatar) = &request.avatar {
        user = user.with_avatar(Some(AvatarRef::new(avatar.as_str())?));
    }
    Ok(user)
}

#[async_trait]
impl<U> UserAccountCommand for UserAccountService<U>
where
    U: UserRepository,
{
    async fn create_user(&self, request: CreateUserRequest) -> Result<User, Error> {
        let id = UserId::random();
        let user = build_user(id, &request).map_err(|err| user_validation_error(&err))?;
        let credentials = Credentials::try_new(
            id,
            request.email.as_str(),
            request.encrypted_password.as_str(),
        )
        .map_err(|err| {
            Error::invalid_request(err.to_string()).with_details(json!({ "field": "credentials" }))
        })?;

        self.users
            .insert(&user, &credentials)
            .await
            .map_err(map_repository_error)?;

        info!(user_id = %user.id(), admin = user.is_admin(), "user created");
        Ok(user)
    }

    async fn update_user(&self, request: UpdateUserRequest) -> Result<User, Error> {
        let current = self
            .users
            .find_by_id(&request.user_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| {
                map_repository_error(RepositoryError::not_found(
                    "user",
                    request.user_id.to_string(),
                ))
            })?;

        let updated = apply_update(current, &request).map_err(|err| user_validation_error(&err))?;
        self.users
            .update(&updated)
            .await
            .map_err(map_repository_error)?;
        Ok(updated)
    }

    async fn delete_user(&self, user_id: &UserId) -> Result<UserDeletion, Error> {
        match self.users.delete_restricted(user_id).await {
            Ok(deletion) => {
                info!(
                    %user_id,
                    favorites = deletion.favorites,
                    followships = deletion.followships,
                    "user deleted"
                );
                Ok(deletion)
            }
            Err(err) => {
                let error = map_repository_error(err);
                if error.code() == ErrorCode::IntegrityViolation {
                    warn!(%user_id, "user deletion restricted by existing comments");
                }
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests;
