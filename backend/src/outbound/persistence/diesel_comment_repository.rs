//! PostgreSQL-backed `CommentRepository` implementation.
//!
//! Listings are ordered by `(created_at, id)` so traversals return one entry
//! per review in the order the reviews were written.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CommentRepository, RepositoryError};
use crate::domain::{Comment, CommentId, Restaurant, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{CommentRow, NewCommentRow, RestaurantRow, collect_rows};
use super::pool::DbPool;
use super::schema::{comments, restaurants};

/// Diesel-backed implementation of the `CommentRepository` port.
#[derive(Clone)]
pub struct DieselCommentRepository {
    pool: DbPool,
}

impl DieselCommentRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CommentRepository for DieselCommentRepository {
    async fn insert(&self, comment: &Comment) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewCommentRow {
            id: *comment.id().as_uuid(),
            user_id: *comment.user_id().as_uuid(),
            restaurant_id: *comment.restaurant_id().as_uuid(),
            content: comment.content(),
        };
        diesel::insert_into(comments::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: &CommentId) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(comments::table.find(id.as_uuid()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        if removed == 0 {
            return Err(RepositoryError::not_found("comment", id.to_string()));
        }
        Ok(())
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Comment>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<CommentRow> = comments::table
            .filter(comments::user_id.eq(user_id.as_uuid()))
            .order((comments::created_at.asc(), comments::id.asc()))
            .select(CommentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        collect_rows(rows)
    }

    async fn count_for_user(&self, user_id: &UserId) -> Result<u64, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = comments::table
            .filter(comments::user_id.eq(user_id.as_uuid()))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(u64::try_from(total).unwrap_or_default())
    }

    async fn reviewed_restaurants(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Restaurant>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<RestaurantRow> = comments::table
            .inner_join(restaurants::table)
            .filter(comments::user_id.eq(user_id.as_uuid()))
            .order((comments::created_at.asc(), comments::id.asc()))
            .select(RestaurantRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        collect_rows(rows)
    }
}
