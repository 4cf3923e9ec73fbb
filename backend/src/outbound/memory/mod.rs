//! In-process implementation of every forum repository port.
//!
//! [`InMemoryForumStore`] keeps all tables behind one mutex. Cloning the
//! store shares the tables, so one instance can back every service. It
//! enforces the same rules the PostgreSQL schema does: referenced rows must
//! exist, emails are unique, and a user with reviews cannot be deleted.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{
    CommentRepository, EMAIL_TAKEN, FavoriteRepository, FollowshipRepository,
    RESTAURANT_MUST_EXIST, RepositoryError, RestaurantRepository, USER_MUST_EXIST, UserDeletion,
    UserRepository,
};
use crate::domain::{
    Comment, CommentId, Credentials, Favorite, Followship, Restaurant, RestaurantId, User, UserId,
};

/// Tables held by the store. Join tables are vectors so listings come back
/// in insertion order.
#[derive(Debug, Default)]
struct ForumTables {
    users: HashMap<UserId, User>,
    credentials: HashMap<UserId, Credentials>,
    restaurants: HashMap<RestaurantId, Restaurant>,
    comments: Vec<Comment>,
    favorites: Vec<Favorite>,
    followships: Vec<Followship>,
}

impl ForumTables {
    fn require_user(&self, id: &UserId) -> Result<(), RepositoryError> {
        if self.users.contains_key(id) {
            Ok(())
        } else {
            Err(RepositoryError::validation(USER_MUST_EXIST))
        }
    }

    fn require_restaurant(&self, id: &RestaurantId) -> Result<(), RepositoryError> {
        if self.restaurants.contains_key(id) {
            Ok(())
        } else {
            Err(RepositoryError::validation(RESTAURANT_MUST_EXIST))
        }
    }

    fn restaurants_for<'a>(
        &self,
        ids: impl Iterator<Item = &'a RestaurantId>,
    ) -> Vec<Restaurant> {
        ids.filter_map(|id| self.restaurants.get(id).cloned())
            .collect()
    }

    fn users_for<'a>(&self, ids: impl Iterator<Item = &'a UserId>) -> Vec<User> {
        ids.filter_map(|id| self.users.get(id).cloned()).collect()
    }
}

/// Shared in-memory forum store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryForumStore {
    tables: Arc<Mutex<ForumTables>>,
}

impl InMemoryForumStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, ForumTables>, RepositoryError> {
        self.tables
            .lock()
            .map_err(|_| RepositoryError::query("in-memory store lock poisoned"))
    }
}

fn count_of(len: usize) -> u64 {
    u64::try_from(len).unwrap_or(u64::MAX)
}

#[async_trait]
impl UserRepository for InMemoryForumStore {
    async fn insert(&self, user: &User, credentials: &Credentials) -> Result<(), RepositoryError> {
        let mut tables = self.lock()?;
        if tables.users.contains_key(user.id()) {
            return Err(RepositoryError::query(format!(
                "duplicate user id {}",
                user.id()
            )));
        }
        if tables
            .credentials
            .values()
            .any(|existing| existing.email() == credentials.email())
        {
            return Err(RepositoryError::validation(EMAIL_TAKEN));
        }
        tables.users.insert(*user.id(), user.clone());
        tables
            .credentials
            .insert(*credentials.user_id(), credentials.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> Result<(), RepositoryError> {
        let mut tables = self.lock()?;
        match tables.users.get_mut(user.id()) {
            Some(stored) => {
                *stored = user.clone();
                Ok(())
            }
            None => Err(RepositoryError::not_found("user", user.id().to_string())),
        }
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.lock()?.users.get(id).cloned())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(count_of(self.lock()?.users.len()))
    }

    async fn delete_restricted(&self, id: &UserId) -> Result<UserDeletion, RepositoryError> {
        let mut tables = self.lock()?;
        if !tables.users.contains_key(id) {
            return Err(RepositoryError::not_found("user", id.to_string()));
        }

        let reviews = tables
            .comments
            .iter()
            .filter(|comment| comment.user_id() == id)
            .count();
        if reviews > 0 {
            return Err(RepositoryError::has_comments(id.to_string(), count_of(reviews)));
        }

        let favorites_before = tables.favorites.len();
        tables.favorites.retain(|favorite| &favorite.user_id != id);
        let followships_before = tables.followships.len();
        tables.followships.retain(|edge| !edge.touches(id));
        let deletion = UserDeletion {
            favorites: count_of(favorites_before - tables.favorites.len()),
            followships: count_of(followships_before - tables.followships.len()),
        };
        tables.credentials.remove(id);
        tables.users.remove(id);
        Ok(deletion)
    }
}

#[async_trait]
impl RestaurantRepository for InMemoryForumStore {
    async fn insert(&self, restaurant: &Restaurant) -> Result<(), RepositoryError> {
        let mut tables = self.lock()?;
        if tables.restaurants.contains_key(restaurant.id()) {
            return Err(RepositoryError::query(format!(
                "duplicate restaurant id {}",
                restaurant.id()
            )));
        }
        tables
            .restaurants
            .insert(*restaurant.id(), restaurant.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &RestaurantId) -> Result<Option<Restaurant>, RepositoryError> {
        Ok(self.lock()?.restaurants.get(id).cloned())
    }
}

#[async_trait]
impl CommentRepository for InMemoryForumStore {
    async fn insert(&self, comment: &Comment) -> Result<(), RepositoryError> {
        let mut tables = self.lock()?;
        tables.require_user(comment.user_id())?;
        tables.require_restaurant(comment.restaurant_id())?;
        tables.comments.push(comment.clone());
        Ok(())
    }

    async fn delete(&self, id: &CommentId) -> Result<(), RepositoryError> {
        let mut tables = self.lock()?;
        let position = tables
            .comments
            .iter()
            .position(|comment| comment.id() == id)
            .ok_or_else(|| RepositoryError::not_found("comment", id.to_string()))?;
        tables.comments.remove(position);
        Ok(())
    }

    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<Comment>, RepositoryError> {
        let tables = self.lock()?;
        Ok(tables
            .comments
            .iter()
            .filter(|comment| comment.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn count_for_user(&self, user_id: &UserId) -> Result<u64, RepositoryError> {
        let tables = self.lock()?;
        Ok(count_of(
            tables
                .comments
                .iter()
                .filter(|comment| comment.user_id() == user_id)
                .count(),
        ))
    }

    async fn reviewed_restaurants(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Restaurant>, RepositoryError> {
        let tables = self.lock()?;
        Ok(tables.restaurants_for(
            tables
                .comments
                .iter()
                .filter(|comment| comment.user_id() == user_id)
                .map(Comment::restaurant_id),
        ))
    }
}

#[async_trait]
impl FavoriteRepository for InMemoryForumStore {
    async fn insert(&self, favorite: &Favorite) -> Result<(), RepositoryError> {
        let mut tables = self.lock()?;
        tables.require_user(&favorite.user_id)?;
        tables.require_restaurant(&favorite.restaurant_id)?;
        tables.favorites.push(favorite.clone());
        Ok(())
    }

    async fn delete_matching(
        &self,
        user_id: &UserId,
        restaurant_id: &RestaurantId,
    ) -> Result<u64, RepositoryError> {
        let mut tables = self.lock()?;
        let before = tables.favorites.len();
        tables.favorites.retain(|favorite| {
            !(&favorite.user_id == user_id && &favorite.restaurant_id == restaurant_id)
        });
        Ok(count_of(before - tables.favorites.len()))
    }

    async fn favorited_restaurants(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Restaurant>, RepositoryError> {
        let tables = self.lock()?;
        Ok(tables.restaurants_for(
            tables
                .favorites
                .iter()
                .filter(|favorite| &favorite.user_id == user_id)
                .map(|favorite| &favorite.restaurant_id),
        ))
    }
}

#[async_trait]
impl FollowshipRepository for InMemoryForumStore {
    async fn insert(&self, followship: &Followship) -> Result<(), RepositoryError> {
        let mut tables = self.lock()?;
        tables.require_user(&followship.user_id)?;
        tables.require_user(&followship.following_id)?;
        tables.followships.push(followship.clone());
        Ok(())
    }

    async fn delete_matching(
        &self,
        follower: &UserId,
        followed: &UserId,
    ) -> Result<u64, RepositoryError> {
        let mut tables = self.lock()?;
        let before = tables.followships.len();
        tables
            .followships
            .retain(|edge| !edge.connects(follower, followed));
        Ok(count_of(before - tables.followships.len()))
    }

    async fn exists(&self, follower: &UserId, followed: &UserId) -> Result<bool, RepositoryError> {
        let tables = self.lock()?;
        Ok(tables
            .followships
            .iter()
            .any(|edge| edge.connects(follower, followed)))
    }

    async fn followings(&self, user_id: &UserId) -> Result<Vec<User>, RepositoryError> {
        let tables = self.lock()?;
        Ok(tables.users_for(
            tables
                .followships
                .iter()
                .filter(|edge| &edge.user_id == user_id)
                .map(|edge| &edge.following_id),
        ))
    }

    async fn followers(&self, user_id: &UserId) -> Result<Vec<User>, RepositoryError> {
        let tables = self.lock()?;
        Ok(tables.users_for(
            tables
                .followships
                .iter()
                .filter(|edge| &edge.following_id == user_id)
                .map(|edge| &edge.user_id),
        ))
    }
}

#[cfg(test)]
mod tests;
