//! Reviews (comments) users leave on restaurants.

use std::fmt;

use serde::{Deserialize, Serialize};

pub use super::ids::CommentId;
use super::{RestaurantId, UserId};

/// Validation errors returned by [`Comment::try_new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommentValidationError {
    EmptyContent,
}

impl fmt::Display for CommentValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyContent => write!(f, "comment content must not be empty"),
        }
    }
}

impl std::error::Error for CommentValidationError {}

/// A user's review of a restaurant.
///
/// ## Invariants
/// - Belongs to exactly one user and exactly one restaurant.
/// - `content` is non-empty once trimmed of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    id: CommentId,
    user_id: UserId,
    restaurant_id: RestaurantId,
    content: String,
}

impl Comment {
    /// Fallible constructor enforcing non-blank content.
    pub fn try_new(
        id: CommentId,
        user_id: UserId,
        restaurant_id: RestaurantId,
        content: impl Into<String>,
    ) -> Result<Self, CommentValidationError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(CommentValidationError::EmptyContent);
        }
        Ok(Self {
            id,
            user_id,
            restaurant_id,
            content,
        })
    }

    /// Review identifier.
    pub fn id(&self) -> &CommentId {
        &self.id
    }

    /// Author of the review.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Reviewed restaurant.
    pub fn restaurant_id(&self) -> &RestaurantId {
        &self.restaurant_id
    }

    /// Review body as written.
    pub fn content(&self) -> &str {
        self.content.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("  \n")]
    fn blank_content_is_rejected(#[case] content: &str) {
        let result = Comment::try_new(
            CommentId::random(),
            UserId::random(),
            RestaurantId::random(),
            content,
        );
        assert_eq!(result, Err(CommentValidationError::EmptyContent));
    }
}
