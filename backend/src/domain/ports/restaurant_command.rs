//! Driving port for registering restaurants that users can review.

use async_trait::async_trait;

use crate::domain::{Error, Restaurant, RestaurantId};

/// Driving port for restaurant registration and lookup.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantCommand: Send + Sync {
    /// Register a restaurant under a fresh identifier.
    async fn create_restaurant(&self, name: &str) -> Result<Restaurant, Error>;

    /// Fetch a restaurant by identifier.
    async fn find_restaurant(&self, id: &RestaurantId) -> Result<Option<Restaurant>, Error>;
}
