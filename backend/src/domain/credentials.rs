//! Login credentials kept apart from the user entity.
//!
//! The authentication collaborator owns hashing, sessions, and recovery. The
//! core only stores what it is handed, keyed by the owning [`UserId`], and
//! removes it together with the user.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::UserId;

/// Validation errors returned by [`Credentials::try_new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsValidationError {
    EmptyEmail,
    InvalidEmail,
    EmptyEncryptedPassword,
}

impl fmt::Display for CredentialsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => write!(f, "email must contain a local part and a domain"),
            Self::EmptyEncryptedPassword => write!(f, "encrypted password must not be empty"),
        }
    }
}

impl std::error::Error for CredentialsValidationError {}

/// Login email, stored lower-cased so uniqueness is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Normalise and validate an email address.
    pub fn new(email: impl AsRef<str>) -> Result<Self, CredentialsValidationError> {
        let normalised = email.as_ref().trim().to_lowercase();
        if normalised.is_empty() {
            return Err(CredentialsValidationError::EmptyEmail);
        }
        match normalised.split_once('@') {
            Some((local, domain))
                if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
            {
                Ok(Self(normalised))
            }
            _ => Err(CredentialsValidationError::InvalidEmail),
        }
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = CredentialsValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Credentials row owned by the authentication collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    user_id: UserId,
    email: Email,
    encrypted_password: String,
}

impl Credentials {
    /// Validate raw credential inputs for `user_id`.
    pub fn try_new(
        user_id: UserId,
        email: impl AsRef<str>,
        encrypted_password: impl Into<String>,
    ) -> Result<Self, CredentialsValidationError> {
        let email = Email::new(email)?;
        let encrypted_password = encrypted_password.into();
        if encrypted_password.is_empty() {
            return Err(CredentialsValidationError::EmptyEncryptedPassword);
        }
        Ok(Self {
            user_id,
            email,
            encrypted_password,
        })
    }

    /// Owning user.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Normalised login email.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Opaque password digest produced by the authentication collaborator.
    pub fn encrypted_password(&self) -> &str {
        self.encrypted_password.as_str()
    }
}
