//! Port for restaurant bookmarks.
use async_trait::async_trait;

use crate::domain::{Favorite, Restaurant, RestaurantId, UserId};

use super::RepositoryError;

/// Port for favorite storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    /// Insert a bookmark. Duplicates are accepted.
    ///
    /// Fails with [`RepositoryError::Validation`] when the user or the
    /// restaurant does not exist.
    async fn insert(&self, favorite: &Favorite) -> Result<(), RepositoryError>;

    /// Remove every bookmark of `restaurant_id` held by `user_id`.
    ///
    /// Returns the number of rows removed; zero is not an error.
    async fn delete_matching(
        &self,
        user_id: &UserId,
        restaurant_id: &RestaurantId,
    ) -> Result<u64, RepositoryError>;

    /// Restaurants bookmarked by `user_id`, one per bookmark, oldest first.
    async fn favorited_restaurants(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Restaurant>, RepositoryError>;
}
