//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! This module provides concrete implementations of the forum repository
//! ports backed by PostgreSQL via Diesel, with async support through
//! `diesel-async` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: repositories translate between Diesel rows and
//!   domain types. The only rule enforced here is the restricted account
//!   delete, because it must be atomic with the rows it inspects.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leave this module.
//! - **Strongly typed errors**: database failures map to
//!   [`crate::domain::ports::RepositoryError`]; constraint violations become
//!   validation errors.
//!
//! # Example
//!
//! ```ignore
//! use forum_backend::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/forum")).await?;
//! let users = DieselUserRepository::new(pool);
//! ```

mod diesel_comment_repository;
mod diesel_error_mapping;
mod diesel_favorite_repository;
mod diesel_followship_repository;
mod diesel_restaurant_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_comment_repository::DieselCommentRepository;
pub use diesel_favorite_repository::DieselFavoriteRepository;
pub use diesel_followship_repository::DieselFollowshipRepository;
pub use diesel_restaurant_repository::DieselRestaurantRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};

/// Convert an affected-row count from Diesel into the ports' count type.
pub(crate) fn row_count(rows: usize) -> u64 {
    u64::try_from(rows).unwrap_or(u64::MAX)
}
