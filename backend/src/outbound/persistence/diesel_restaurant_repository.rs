//! PostgreSQL-backed `RestaurantRepository` implementation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{RepositoryError, RestaurantRepository};
use crate::domain::{Restaurant, RestaurantId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewRestaurantRow, RestaurantRow};
use super::pool::DbPool;
use super::schema::restaurants;

/// Diesel-backed implementation of the `RestaurantRepository` port.
#[derive(Clone)]
pub struct DieselRestaurantRepository {
    pool: DbPool,
}

impl DieselRestaurantRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RestaurantRepository for DieselRestaurantRepository {
    async fn insert(&self, restaurant: &Restaurant) -> Result<(), RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewRestaurantRow {
            id: *restaurant.id().as_uuid(),
            name: restaurant.name(),
        };
        diesel::insert_into(restaurants::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn find_by_id(&self, id: &RestaurantId) -> Result<Option<Restaurant>, RepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = restaurants::table
            .find(id.as_uuid())
            .select(RestaurantRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(Restaurant::try_from).transpose()
    }
}
