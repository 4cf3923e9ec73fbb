//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters.
//! Driving ports (`*Command`, `*Query`) are implemented by domain services
//! and consumed by whatever fronts the model.

mod macros;
pub(crate) use macros::define_port_error;

mod comment_repository;
mod favorite_repository;
mod followship_repository;
mod repository_error;
mod restaurant_command;
mod restaurant_repository;
mod user_account_command;
mod user_activity_command;
mod user_query;
mod user_repository;

pub use comment_repository::CommentRepository;
#[cfg(test)]
pub use comment_repository::MockCommentRepository;
pub use favorite_repository::FavoriteRepository;
#[cfg(test)]
pub use favorite_repository::MockFavoriteRepository;
pub use followship_repository::FollowshipRepository;
#[cfg(test)]
pub use followship_repository::MockFollowshipRepository;
pub use repository_error::{
    EMAIL_TAKEN, RESTAURANT_MUST_EXIST, RepositoryError, USER_MUST_EXIST,
};
#[cfg(test)]
pub use restaurant_command::MockRestaurantCommand;
pub use restaurant_command::RestaurantCommand;
#[cfg(test)]
pub use restaurant_repository::MockRestaurantRepository;
pub use restaurant_repository::RestaurantRepository;
#[cfg(test)]
pub use user_account_command::MockUserAccountCommand;
pub use user_account_command::{CreateUserRequest, UpdateUserRequest, UserAccountCommand};
pub use user_activity_command::AddCommentRequest;
#[cfg(test)]
pub use user_activity_command::MockUserActivityCommand;
pub use user_activity_command::UserActivityCommand;
#[cfg(test)]
pub use user_query::MockUserQuery;
pub use user_query::UserQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserDeletion, UserRepository};
