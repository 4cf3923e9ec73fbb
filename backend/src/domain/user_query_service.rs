//! Read-side facade over the forum repositories.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    CommentRepository, FavoriteRepository, FollowshipRepository, UserQuery, UserRepository,
};
use crate::domain::{Comment, Error, Restaurant, User, UserId};

use super::repository_error_mapping::map_repository_error;

/// Query service implementing [`UserQuery`].
#[derive(Clone)]
pub struct UserQueryService<U, C, F, S> {
    users: Arc<U>,
    comments: Arc<C>,
    favorites: Arc<F>,
    followships: Arc<S>,
}

impl<U, C, F, S> UserQueryService<U, C, F, S> {
    /// Create a new query service.
    pub fn new(users: Arc<U>, comments: Arc<C>, favorites: Arc<F>, followships: Arc<S>) -> Self {
        Self {
            users,
            comments,
            favorites,
            followships,
        }
    }
}

#[async_trait]
impl<U, C, F, S> UserQuery for UserQueryService<U, C, F, S>
where
    U: UserRepository,
    C: CommentRepository,
    F: FavoriteRepository,
    S: FollowshipRepository,
{
    async fn find_user(&self, user_id: &UserId) -> Result<Option<User>, Error> {
        self.users
            .find_by_id(user_id)
            .await
            .map_err(map_repository_error)
    }

    async fn is_following(&self, user_id: &UserId, other: &UserId) -> Result<bool, Error> {
        self.followships
            .exists(user_id, other)
            .await
            .map_err(map_repository_error)
    }

    async fn total_user_count(&self) -> Result<u64, Error> {
        self.users.count().await.map_err(map_repository_error)
    }

    async fn comment_count_for(&self, user_id: &UserId) -> Result<u64, Error> {
        self.comments
            .count_for_user(user_id)
            .await
            .map_err(map_repository_error)
    }

    async fn comments_for(&self, user_id: &UserId) -> Result<Vec<Comment>, Error> {
        self.comments
            .list_for_user(user_id)
            .await
            .map_err(map_repository_error)
    }

    async fn reviewed_restaurants(&self, user_id: &UserId) -> Result<Vec<Restaurant>, Error> {
        self.comments
            .reviewed_restaurants(user_id)
            .await
            .map_err(map_repository_error)
    }

    async fn favorited_restaurants(&self, user_id: &UserId) -> Result<Vec<Restaurant>, Error> {
        self.favorites
            .favorited_restaurants(user_id)
            .await
            .map_err(map_repository_error)
    }

    async fn followings(&self, user_id: &UserId) -> Result<Vec<User>, Error> {
        self.followships
            .followings(user_id)
            .await
            .map_err(map_repository_error)
    }

    async fn followers(&self, user_id: &UserId) -> Result<Vec<User>, Error> {
        self.followships
            .followers(user_id)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{
        MockCommentRepository, MockFavoriteRepository, MockFollowshipRepository,
        MockUserRepository, RepositoryError,
    };
    use rstest::{fixture, rstest};

    struct Mocks {
        users: MockUserRepository,
        comments: MockCommentRepository,
        favorites: MockFavoriteRepository,
        followships: MockFollowshipRepository,
    }

    impl Mocks {
        fn into_service(
            self,
        ) -> UserQueryService<
            MockUserRepository,
            MockCommentRepository,
            MockFavoriteRepository,
            MockFollowshipRepository,
        > {
            UserQueryService::new(
                Arc::new(self.users),
                Arc::new(self.comments),
                Arc::new(self.favorites),
                Arc::new(self.followships),
            )
        }
    }

    #[fixture]
    fn mocks() -> Mocks {
        Mocks {
            users: MockUserRepository::new(),
            comments: MockCommentRepository::new(),
            favorites: MockFavoriteRepository::new(),
            followships: MockFollowshipRepository::new(),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn is_following_asks_for_the_outgoing_edge(mut mocks: Mocks) {
        let (alice, bob) = (UserId::random(), UserId::random());
        mocks
            .followships
            .expect_exists()
            .withf(move |follower, followed| *follower == alice && *followed == bob)
            .times(1)
            .return_once(|_, _| Ok(true));

        let following = mocks
            .into_service()
            .is_following(&alice, &bob)
            .await
            .expect("lookup succeeds");
        assert!(following);
    }

    #[rstest]
    #[tokio::test]
    async fn total_user_count_is_unfiltered(mut mocks: Mocks) {
        mocks.users.expect_count().times(1).return_once(|| Ok(3));

        let count = mocks
            .into_service()
            .total_user_count()
            .await
            .expect("count succeeds");
        assert_eq!(count, 3);
    }

    #[rstest]
    #[tokio::test]
    async fn empty_traversals_are_not_errors(mut mocks: Mocks) {
        mocks
            .favorites
            .expect_favorited_restaurants()
            .times(1)
            .return_once(|_| Ok(Vec::new()));

        let restaurants = mocks
            .into_service()
            .favorited_restaurants(&UserId::random())
            .await
            .expect("empty list");
        assert!(restaurants.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn store_outage_maps_to_service_unavailable(mut mocks: Mocks) {
        mocks
            .comments
            .expect_count_for_user()
            .times(1)
            .return_once(|_| Err(RepositoryError::connection("pool exhausted")));

        let error = mocks
            .into_service()
            .comment_count_for(&UserId::random())
            .await
            .expect_err("outage");
        assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
    }
}
