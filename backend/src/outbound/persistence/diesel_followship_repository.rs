//! PostgreSQL-backed `FollowshipRepository` implementation.
//!
//! `followships` has two foreign keys into `users`, so the traversals join
//! with an explicit `ON` clause naming which end of the edge to follow.

use async_trait::async_trait;
use diesel::dsl::exists;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{FollowshipRepository, RepositoryError};
use crate::domain::{Followship, User, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewFollowshipRow, UserRow, collect_rows};
use super::pool::DbPool;
use super::row_count;
use super::schema::{followships, users};

/// Diesel-backed implementation of the `FollowshipRepository` port.
#[derive(Clone)]
pub struct DieselFollowshipRepository {
    pool: DbPool,
}

impl DieselFollowshipRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowshipRepository for DieselFollowshipRepository {
    async fn insert(&self, followship: &Followship) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewFollowshipRow {
            id: *followship.id.as_uuid(),
            user_id: *followship.user_id.as_uuid(),
            following_id: *followship.following_id.as_uuid(),
        };
        diesel::insert_into(followships::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn delete_matching(
        &self,
        follower: &UserId,
        followed: &UserId,
    ) -> Result<u64, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(
            followships::table.filter(
                followships::user_id
                    .eq(follower.as_uuid())
                    .and(followships::following_id.eq(followed.as_uuid())),
            ),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;
        Ok(row_count(removed))
    }

    async fn exists(&self, follower: &UserId, followed: &UserId) -> Result<bool, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::select(exists(
            followships::table.filter(
                followships::user_id
                    .eq(follower.as_uuid())
                    .and(followships::following_id.eq(followed.as_uuid())),
            ),
        ))
        .get_result(&mut conn)
        .await
        .map_err(map_diesel_error)
    }

    async fn followings(&self, user_id: &UserId) -> Result<Vec<User>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = followships::table
            .inner_join(users::table.on(users::id.eq(followships::following_id)))
            .filter(followships::user_id.eq(user_id.as_uuid()))
            .order((followships::created_at.asc(), followships::id.asc()))
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        collect_rows(rows)
    }

    async fn followers(&self, user_id: &UserId) -> Result<Vec<User>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<UserRow> = followships::table
            .inner_join(users::table.on(users::id.eq(followships::user_id)))
            .filter(followships::following_id.eq(user_id.as_uuid()))
            .order((followships::created_at.asc(), followships::id.asc()))
            .select(UserRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        collect_rows(rows)
    }
}
