//! Reviews, bookmarks, and follow edges.
//!
//! Implements [`UserActivityCommand`]. Referential checks (does the user or
//! restaurant exist) belong to the store; this service validates content and
//! translates store failures.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::debug;

use crate::domain::ports::{
    AddCommentRequest, CommentRepository, FavoriteRepository, FollowshipRepository,
    UserActivityCommand,
};
use crate::domain::{
    Comment, CommentId, Error, Favorite, Followship, RestaurantId, UserId,
};

use super::repository_error_mapping::map_repository_error;

/// Activity service implementing the activity driving port.
#[derive(Clone)]
pub struct UserActivityService<C, F, S> {
    comments: Arc<C>,
    favorites: Arc<F>,
    followships: Arc<S>,
}

impl<C, F, S> UserActivityService<C, F, S> {
    /// Create a new service over the association repositories.
    pub fn new(comments: Arc<C>, favorites: Arc<F>, followships: Arc<S>) -> Self {
        Self {
            comments,
            favorites,
            followships,
        }
    }
}

#[async_trait]
impl<C, F, S> UserActivityCommand for UserActivityService<C, F, S>
where
    C: CommentRepository,
    F: FavoriteRepository,
    S: FollowshipRepository,
{
    async fn add_comment(&self, request: AddCommentRequest) -> Result<Comment, Error> {
        let AddCommentRequest {
            user_id,
            restaurant_id,
            content,
        } = request;
        let comment = Comment::try_new(CommentId::random(), user_id, restaurant_id, content)
            .map_err(|err| {
                Error::invalid_request(err.to_string()).with_details(json!({ "field": "content" }))
            })?;

        self.comments
            .insert(&comment)
            .await
            .map_err(map_repository_error)?;
        debug!(comment_id = %comment.id(), %user_id, %restaurant_id, "comment added");
        Ok(comment)
    }

    async fn remove_comment(&self, comment_id: &CommentId) -> Result<(), Error> {
        self.comments
            .delete(comment_id)
            .await
            .map_err(map_repository_error)
    }

    async fn add_favorite(
        &self,
        user_id: &UserId,
        restaurant_id: &RestaurantId,
    ) -> Result<Favorite, Error> {
        let favorite = Favorite::new(*user_id, *restaurant_id);
        self.favorites
            .insert(&favorite)
            .await
            .map_err(map_repository_error)?;
        Ok(favorite)
    }

    async fn remove_favorite(
        &self,
        user_id: &UserId,
        restaurant_id: &RestaurantId,
    ) -> Result<u64, Error> {
        self.favorites
            .delete_matching(user_id, restaurant_id)
            .await
            .map_err(map_repository_error)
    }

    async fn add_followship(
        &self,
        follower: &UserId,
        followed: &UserId,
    ) -> Result<Followship, Error> {
        let followship = Followship::new(*follower, *followed);
        self.followships
            .insert(&followship)
            .await
            .map_err(map_repository_error)?;
        Ok(followship)
    }

    async fn remove_followship(
        &self,
        follower: &UserId,
        followed: &UserId,
    ) -> Result<u64, Error> {
        self.followships
            .delete_matching(follower, followed)
            .await
            .map_err(map_repository_error)
    }
}
