//! PostgreSQL-backed `FavoriteRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{FavoriteRepository, RepositoryError};
use crate::domain::{Favorite, Restaurant, RestaurantId, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewFavoriteRow, RestaurantRow, collect_rows};
use super::pool::DbPool;
use super::row_count;
use super::schema::{favorites, restaurants};

/// Diesel-backed implementation of the `FavoriteRepository` port.
#[derive(Clone)]
pub struct DieselFavoriteRepository {
    pool: DbPool,
}

impl DieselFavoriteRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FavoriteRepository for DieselFavoriteRepository {
    async fn insert(&self, favorite: &Favorite) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewFavoriteRow {
            id: *favorite.id.as_uuid(),
            user_id: *favorite.user_id.as_uuid(),
            restaurant_id: *favorite.restaurant_id.as_uuid(),
        };
        diesel::insert_into(favorites::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn delete_matching(
        &self,
        user_id: &UserId,
        restaurant_id: &RestaurantId,
    ) -> Result<u64, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(
            favorites::table.filter(
                favorites::user_id
                    .eq(user_id.as_uuid())
                    .and(favorites::restaurant_id.eq(restaurant_id.as_uuid())),
            ),
        )
        .execute(&mut conn)
        .await
        .map_err(map_diesel_error)?;
        Ok(row_count(removed))
    }

    async fn favorited_restaurants(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Restaurant>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<RestaurantRow> = favorites::table
            .inner_join(restaurants::table)
            .filter(favorites::user_id.eq(user_id.as_uuid()))
            .order((favorites::created_at.asc(), favorites::id.asc()))
            .select(RestaurantRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        collect_rows(rows)
    }
}
