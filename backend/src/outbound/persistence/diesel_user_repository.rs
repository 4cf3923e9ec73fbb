//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.
//!
//! Account creation writes the user and credentials rows in one transaction.
//! Account deletion locks the user row, refuses when reviews exist, and
//! otherwise removes bookmarks, follow edges in both directions, credentials,
//! and the user row before committing.

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{RepositoryError, UserDeletion, UserRepository};
use crate::domain::{Credentials, User, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewCredentialsRow, NewUserRow, UserRow, UserUpdate};
use super::pool::DbPool;
use super::row_count;
use super::schema::{comments, favorites, followships, user_credentials, users};

/// Diesel-backed implementation of the `UserRepository` port.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Reasons the restricted delete transaction rolls back.
#[derive(Debug)]
enum DeleteFailure {
    Missing,
    HasComments(u64),
    Diesel(diesel::result::Error),
}

impl From<diesel::result::Error> for DeleteFailure {
    fn from(error: diesel::result::Error) -> Self {
        Self::Diesel(error)
    }
}

fn map_delete_failure(failure: DeleteFailure, user_id: &UserId) -> RepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match failure {
        DeleteFailure::Missing => RepositoryError::not_found("user", user_id.to_string()),
        DeleteFailure::HasComments(count) => {
            RepositoryError::has_comments(user_id.to_string(), count)
        }
        // The RESTRICT foreign key on comments.user_id fired: a review landed
        // between the count and the delete.
        DeleteFailure::Diesel(DieselError::DatabaseError(
            DatabaseErrorKind::ForeignKeyViolation,
            _,
        )) => RepositoryError::has_comments(user_id.to_string(), 1_u64),
        DeleteFailure::Diesel(error) => map_diesel_error(error),
    }
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, user: &User, credentials: &Credentials) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let user_row = NewUserRow {
            id: *user.id().as_uuid(),
            name: user.name().as_ref(),
            role: user.role().map(AsRef::as_ref),
            avatar: user.avatar().map(AsRef::as_ref),
        };
        let credentials_row = NewCredentialsRow {
            user_id: *credentials.user_id().as_uuid(),
            email: credentials.email().as_ref(),
            encrypted_password: credentials.encrypted_password(),
        };

        conn.transaction(|conn| {
            async move {
                diesel::insert_into(users::table)
                    .values(&user_row)
                    .execute(conn)
                    .await?;
                diesel::insert_into(user_credentials::table)
                    .values(&credentials_row)
                    .execute(conn)
                    .await?;
                Ok::<_, diesel::result::Error>(())
            }
            .scope_boxed()
        })
        .await
        .map_err(map_diesel_error)
    }

    async fn update(&self, user: &User) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changes = UserUpdate {
            name: user.name().as_ref(),
            role: user.role().map(AsRef::as_ref),
            avatar: user.avatar().map(AsRef::as_ref),
            updated_at: Utc::now(),
        };

        let updated = diesel::update(users::table.find(user.id().as_uuid()))
            .set(&changes)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if updated == 0 {
            return Err(RepositoryError::not_found("user", user.id().to_string()));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = users::table
            .find(id.as_uuid())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(User::try_from).transpose()
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = users::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn delete_restricted(&self, id: &UserId) -> Result<UserDeletion, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let user_uuid: Uuid = *id.as_uuid();

        let deletion = conn
            .transaction(|conn| {
                async move {
                    // Blocks concurrent comment inserts, whose foreign key
                    // check takes a key-share lock on this row.
                    let locked = users::table
                        .find(user_uuid)
                        .select(users::id)
                        .for_update()
                        .first::<Uuid>(conn)
                        .await
                        .optional()?;
                    if locked.is_none() {
                        return Err(DeleteFailure::Missing);
                    }

                    let reviews: i64 = comments::table
                        .filter(comments::user_id.eq(user_uuid))
                        .count()
                        .get_result(conn)
                        .await?;
                    if reviews > 0 {
                        return Err(DeleteFailure::HasComments(
                            u64::try_from(reviews).unwrap_or_default(),
                        ));
                    }

                    let favorites_removed =
                        diesel::delete(favorites::table.filter(favorites::user_id.eq(user_uuid)))
                            .execute(conn)
                            .await?;
                    let followships_removed = diesel::delete(
                        followships::table.filter(
                            followships::user_id
                                .eq(user_uuid)
                                .or(followships::following_id.eq(user_uuid)),
                        ),
                    )
                    .execute(conn)
                    .await?;
                    diesel::delete(user_credentials::table.find(user_uuid))
                        .execute(conn)
                        .await?;
                    diesel::delete(users::table.find(user_uuid))
                        .execute(conn)
                        .await?;

                    Ok(UserDeletion {
                        favorites: row_count(favorites_removed),
                        followships: row_count(followships_removed),
                    })
                }
                .scope_boxed()
            })
            .await
            .map_err(|failure| map_delete_failure(failure, id))?;

        debug!(user_id = %id, ?deletion, "user row removed");
        Ok(deletion)
    }
}
