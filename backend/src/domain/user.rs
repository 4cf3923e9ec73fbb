//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};

pub use super::ids::UserId;

/// Role value that grants administrative rights.
pub const ADMIN_ROLE: &str = "admin";

/// Validation errors returned by the [`User`] component constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyName,
    EmptyRole,
    EmptyAvatar,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::EmptyRole => write!(f, "role must not be blank when present"),
            Self::EmptyAvatar => write!(f, "avatar reference must not be blank when present"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Name shown next to a user's reviews.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`] from owned input.
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Free-form role label. Only [`ADMIN_ROLE`] carries meaning in this model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Role(String);

impl Role {
    /// Validate and construct a [`Role`].
    pub fn new(role: impl Into<String>) -> Result<Self, UserValidationError> {
        let role = role.into();
        if role.trim().is_empty() {
            return Err(UserValidationError::EmptyRole);
        }
        Ok(Self(role))
    }

    /// The administrator role.
    pub fn admin() -> Self {
        Self(ADMIN_ROLE.to_owned())
    }

    /// Whether this is exactly the administrator role.
    pub fn is_admin(&self) -> bool {
        self.0 == ADMIN_ROLE
    }
}

impl AsRef<str> for Role {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.0
    }
}

impl TryFrom<String> for Role {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Opaque reference to an avatar image held by the upload collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AvatarRef(String);

impl AvatarRef {
    /// Wrap a storage reference, rejecting blank values.
    pub fn new(reference: impl Into<String>) -> Result<Self, UserValidationError> {
        let reference = reference.into();
        if reference.trim().is_empty() {
            return Err(UserValidationError::EmptyAvatar);
        }
        Ok(Self(reference))
    }
}

impl AsRef<str> for AvatarRef {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<AvatarRef> for String {
    fn from(value: AvatarRef) -> Self {
        value.0
    }
}

impl TryFrom<String> for AvatarRef {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Forum member.
///
/// ## Invariants
/// - `name` is non-empty once trimmed of whitespace.
/// - `role` and `avatar`, when present, are non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    name: UserName,
    role: Option<Role>,
    avatar: Option<AvatarRef>,
}

impl User {
    /// Build a new [`User`] without a role or avatar.
    pub fn new(id: UserId, name: UserName) -> Self {
        Self {
            id,
            name,
            role: None,
            avatar: None,
        }
    }

    /// Fallible constructor from raw strings.
    pub fn try_from_parts(
        id: UserId,
        name: impl Into<String>,
        role: Option<String>,
        avatar: Option<String>,
    ) -> Result<Self, UserValidationError> {
        let user = Self::new(id, UserName::new(name)?)
            .with_role(role.map(Role::new).transpose()?)
            .with_avatar(avatar.map(AvatarRef::new).transpose()?);
        Ok(user)
    }

    /// Replace the role.
    pub fn with_role(mut self, role: Option<Role>) -> Self {
        self.role = role;
        self
    }

    /// Replace the avatar reference.
    pub fn with_avatar(mut self, avatar: Option<AvatarRef>) -> Self {
        self.avatar = avatar;
        self
    }

    /// Replace the name.
    pub fn with_name(mut self, name: UserName) -> Self {
        self.name = name;
        self
    }

    /// Stable user identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Name shown to other users.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Role label, if one was assigned.
    pub fn role(&self) -> Option<&Role> {
        self.role.as_ref()
    }

    /// Avatar storage reference, if one was uploaded.
    pub fn avatar(&self) -> Option<&AvatarRef> {
        self.avatar.as_ref()
    }

    /// True iff the role is exactly `"admin"`. An unset role is not admin.
    pub fn is_admin(&self) -> bool {
        self.role.as_ref().is_some_and(Role::is_admin)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDto {
    id: UserId,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User {
            id,
            name,
            role,
            avatar,
        } = value;
        Self {
            id,
            name: name.into(),
            role: role.map(Into::into),
            avatar: avatar.map(Into::into),
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        Self::try_from_parts(value.id, value.name, value.role, value.avatar)
    }
}

#[cfg(test)]
mod tests;
