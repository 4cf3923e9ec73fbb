//! Restaurant reference entity.
//!
//! Only the attributes the user model traverses to are kept here; the full
//! restaurant catalogue lives elsewhere in the application.

use std::fmt;

use serde::{Deserialize, Serialize};

pub use super::ids::RestaurantId;

/// Validation errors returned by [`Restaurant::try_new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestaurantValidationError {
    EmptyName,
}

impl fmt::Display for RestaurantValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "restaurant name must not be empty"),
        }
    }
}

impl std::error::Error for RestaurantValidationError {}

/// Restaurant that users review and bookmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    id: RestaurantId,
    name: String,
}

impl Restaurant {
    /// Fallible constructor enforcing a non-blank name.
    pub fn try_new(
        id: RestaurantId,
        name: impl Into<String>,
    ) -> Result<Self, RestaurantValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RestaurantValidationError::EmptyName);
        }
        Ok(Self { id, name })
    }

    /// Stable restaurant identifier.
    pub fn id(&self) -> &RestaurantId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
