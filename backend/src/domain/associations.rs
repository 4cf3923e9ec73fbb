//! Join entities linking users to restaurants and to each other.
//!
//! Neither join carries a uniqueness constraint: a user may bookmark the
//! same restaurant, or follow the same user, more than once.

use serde::{Deserialize, Serialize};

pub use super::ids::{FavoriteId, FollowshipId};
use super::{RestaurantId, UserId};

/// A user's bookmark of a restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: FavoriteId,
    pub user_id: UserId,
    pub restaurant_id: RestaurantId,
}

impl Favorite {
    /// Create a new bookmark with a fresh identifier.
    pub fn new(user_id: UserId, restaurant_id: RestaurantId) -> Self {
        Self {
            id: FavoriteId::random(),
            user_id,
            restaurant_id,
        }
    }
}

/// Directed follow edge: `user_id` follows `following_id`.
///
/// (A follows B) and (B follows A) are distinct edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Followship {
    pub id: FollowshipId,
    /// The follower.
    pub user_id: UserId,
    /// The followed user.
    pub following_id: UserId,
}

impl Followship {
    /// Create a new follow edge with a fresh identifier.
    pub fn new(follower: UserId, followed: UserId) -> Self {
        Self {
            id: FollowshipId::random(),
            user_id: follower,
            following_id: followed,
        }
    }

    /// Whether this edge goes from `follower` to `followed`.
    pub fn connects(&self, follower: &UserId, followed: &UserId) -> bool {
        &self.user_id == follower && &self.following_id == followed
    }

    /// Whether `user` sits at either end of the edge.
    pub fn touches(&self, user: &UserId) -> bool {
        &self.user_id == user || &self.following_id == user
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn followship_direction_is_preserved() {
        let (a, b) = (UserId::random(), UserId::random());
        let edge = Followship::new(a, b);

        assert!(edge.connects(&a, &b));
        assert!(!edge.connects(&b, &a));
        assert!(edge.touches(&a));
        assert!(edge.touches(&b));
        assert!(!edge.touches(&UserId::random()));
    }
}
