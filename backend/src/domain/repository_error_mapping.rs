//! Shared mapping from repository failures to caller-facing domain errors.

use serde_json::json;

use crate::domain::Error;
use crate::domain::ports::RepositoryError;

/// Message surfaced when an account cannot be removed because of its reviews.
pub const ACCOUNT_HAS_REVIEWS: &str = "cannot delete account: existing reviews";

pub(crate) fn map_repository_error(error: RepositoryError) -> Error {
    match error {
        RepositoryError::Connection { message } => {
            Error::service_unavailable(format!("forum store unavailable: {message}"))
        }
        RepositoryError::Query { message } => {
            Error::internal(format!("forum store error: {message}"))
        }
        RepositoryError::Validation { message } => Error::invalid_request(message),
        RepositoryError::HasComments { user_id, count } => {
            Error::integrity_violation(ACCOUNT_HAS_REVIEWS).with_details(json!({
                "userId": user_id,
                "commentCount": count,
                "code": "has_comments",
            }))
        }
        RepositoryError::NotFound { entity, id } => {
            Error::not_found(format!("{entity} {id} not found"))
                .with_details(json!({ "entity": entity, "id": id }))
        }
    }
}
