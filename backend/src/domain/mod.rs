//! Domain primitives, aggregates, and services.
//!
//! Purpose: define the forum user model and the rules that govern it. Types
//! are immutable once validated; invariants and serialisation contracts are
//! documented on each type.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — transport-agnostic failure payload.
//! - User, Credentials, Restaurant, Comment, Favorite, Followship — entities.
//! - UserAccountService, UserActivityService, UserQueryService,
//!   RestaurantService — driving port implementations.

pub mod associations;
pub mod credentials;
pub mod error;
pub mod ids;
pub mod ports;
mod repository_error_mapping;
pub mod restaurant;
pub mod restaurant_service;
pub mod review;
pub mod user;
pub mod user_account_service;
pub mod user_activity_service;
pub mod user_query_service;

pub use self::associations::{Favorite, FavoriteId, Followship, FollowshipId};
pub use self::credentials::{Credentials, CredentialsValidationError, Email};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::ids::IdValidationError;
pub use self::repository_error_mapping::ACCOUNT_HAS_REVIEWS;
pub use self::restaurant::{Restaurant, RestaurantId, RestaurantValidationError};
pub use self::restaurant_service::RestaurantService;
pub use self::review::{Comment, CommentId, CommentValidationError};
pub use self::user::{ADMIN_ROLE, AvatarRef, Role, User, UserId, UserName, UserValidationError};
pub use self::user_account_service::UserAccountService;
pub use self::user_activity_service::UserActivityService;
pub use self::user_query_service::UserQueryService;

/// Convenient domain result alias.
///
/// # Examples
/// ```
/// use forum_backend::domain::{DomainResult, Error};
///
/// fn refuse() -> DomainResult<()> {
///     Err(Error::integrity_violation("cannot delete account: existing reviews"))
/// }
/// assert!(refuse().is_err());
/// ```
pub type DomainResult<T> = Result<T, Error>;
