//! Port for the restaurant rows that reviews and bookmarks point at.
use async_trait::async_trait;

use crate::domain::{Restaurant, RestaurantId};

use super::RepositoryError;

/// Driven port for restaurant persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Insert a new restaurant.
    async fn insert(&self, restaurant: &Restaurant) -> Result<(), RepositoryError>;

    /// Fetch a restaurant by identifier.
    async fn find_by_id(&self, id: &RestaurantId) -> Result<Option<Restaurant>, RepositoryError>;
}
