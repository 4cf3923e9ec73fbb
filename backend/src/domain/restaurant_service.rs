//! Minimal restaurant catalogue so reviews and bookmarks have targets.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::ports::{RestaurantCommand, RestaurantRepository};
use crate::domain::{Error, Restaurant, RestaurantId};

use super::repository_error_mapping::map_repository_error;

/// Restaurant service implementing [`RestaurantCommand`].
#[derive(Clone)]
pub struct RestaurantService<R> {
    restaurants: Arc<R>,
}

impl<R> RestaurantService<R> {
    /// Create a new service with the given repository.
    pub fn new(restaurants: Arc<R>) -> Self {
        Self { restaurants }
    }
}

#[async_trait]
impl<R> RestaurantCommand for RestaurantService<R>
where
    R: RestaurantRepository,
{
    async fn create_restaurant(&self, name: &str) -> Result<Restaurant, Error> {
        let restaurant = Restaurant::try_new(RestaurantId::random(), name).map_err(|err| {
            Error::invalid_request(err.to_string()).with_details(json!({ "field": "name" }))
        })?;
        self.restaurants
            .insert(&restaurant)
            .await
            .map_err(map_repository_error)?;
        Ok(restaurant)
    }

    async fn find_restaurant(&self, id: &RestaurantId) -> Result<Option<Restaurant>, Error> {
        self.restaurants
            .find_by_id(id)
            .await
            .map_err(map_repository_error)
    }
}
