//! Error type shared by every forum repository port.
//!
//! All five repositories sit on one store and one transaction discipline, so
//! they report failures through a single enum. Domain services translate
//! these into [`crate::domain::Error`] values.

use super::define_port_error;

/// Validation message for a credential email that is already registered.
pub const EMAIL_TAKEN: &str = "email has already been taken";
/// Validation message for a row that references an absent user.
pub const USER_MUST_EXIST: &str = "user must exist";
/// Validation message for a row that references an absent restaurant.
pub const RESTAURANT_MUST_EXIST: &str = "restaurant must exist";

define_port_error! {
    /// Persistence errors raised by forum repository adapters.
    pub enum RepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "repository query failed: {message}",
        /// A row violated a presence, uniqueness, or reference rule.
        Validation { message: String } => "validation failed: {message}",
        /// The user still owns reviews and may not be deleted.
        HasComments { user_id: String, count: u64 } =>
            "cannot delete user {user_id}: {count} existing reviews",
        /// The addressed row does not exist.
        NotFound { entity: String, id: String } => "{entity} {id} not found",
    }
}
