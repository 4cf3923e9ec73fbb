//! Shared Diesel error mapping for the forum repositories.
//!
//! Constraint violations carry meaning for callers (a missing user, a taken
//! email), so they are mapped to validation errors by constraint name. All
//! other failures collapse to connection or query errors.

use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
use tracing::{debug, warn};

use crate::domain::ports::{
    EMAIL_TAKEN, RESTAURANT_MUST_EXIST, RepositoryError, USER_MUST_EXIST,
};

use super::pool::PoolError;

/// Map pool errors to repository connection errors.
pub(crate) fn map_pool_error(error: PoolError) -> RepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            RepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to repository errors.
pub(crate) fn map_diesel_error(error: DieselError) -> RepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = info.constraint_name(),
                "diesel operation failed"
            );
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => RepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => RepositoryError::query("database query error"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            RepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(
            kind @ (DatabaseErrorKind::ForeignKeyViolation
            | DatabaseErrorKind::UniqueViolation
            | DatabaseErrorKind::CheckViolation
            | DatabaseErrorKind::NotNullViolation),
            info,
        ) => map_constraint_violation(kind, info.as_ref()),
        DieselError::DatabaseError(_, _) => RepositoryError::query("database error"),
        _ => RepositoryError::query("database error"),
    }
}

fn map_constraint_violation(
    kind: DatabaseErrorKind,
    info: &(dyn DatabaseErrorInformation + Send + Sync),
) -> RepositoryError {
    let constraint = info.constraint_name().unwrap_or_default();
    match kind {
        DatabaseErrorKind::UniqueViolation if constraint == "user_credentials_email_key" => {
            RepositoryError::validation(EMAIL_TAKEN)
        }
        DatabaseErrorKind::ForeignKeyViolation => {
            if constraint.ends_with("restaurant_id_fkey") {
                RepositoryError::validation(RESTAURANT_MUST_EXIST)
            } else {
                RepositoryError::validation(USER_MUST_EXIST)
            }
        }
        DatabaseErrorKind::CheckViolation | DatabaseErrorKind::NotNullViolation => {
            RepositoryError::validation(format!("constraint {constraint} rejected the row"))
        }
        _ => {
            warn!(?kind, constraint, "unrecognised constraint violation");
            RepositoryError::query("database constraint violated")
        }
    }
}
