//! Integrity rules enforced by the in-memory store.

use super::*;
use rstest::{fixture, rstest};

fn user(name: &str) -> (User, Credentials) {
    let id = UserId::random();
    let user = User::try_from_parts(id, name, None, None).expect("valid user");
    let credentials = Credentials::try_new(id, format!("{name}@example.com"), "digest")
        .expect("valid credentials");
    (user, credentials)
}

#[fixture]
fn store() -> InMemoryForumStore {
    InMemoryForumStore::new()
}

async fn seed_user(store: &InMemoryForumStore, name: &str) -> User {
    let (user, credentials) = user(name);
    UserRepository::insert(store, &user, &credentials)
        .await
        .expect("insert user");
    user
}

async fn seed_restaurant(store: &InMemoryForumStore, name: &str) -> Restaurant {
    let restaurant = Restaurant::try_new(RestaurantId::random(), name).expect("valid restaurant");
    RestaurantRepository::insert(store, &restaurant)
        .await
        .expect("insert restaurant");
    restaurant
}

#[rstest]
#[tokio::test]
async fn duplicate_email_is_rejected(store: InMemoryForumStore) {
    seed_user(&store, "ada").await;
    let (other, _) = user("grace");
    let clash = Credentials::try_new(*other.id(), "ADA@example.com", "digest")
        .expect("valid credentials");

    let error = UserRepository::insert(&store, &other, &clash)
        .await
        .expect_err("email taken");
    assert_eq!(error, RepositoryError::validation(EMAIL_TAKEN));
    assert_eq!(UserRepository::count(&store).await.expect("count"), 1);
}

#[rstest]
#[tokio::test]
async fn comment_for_unknown_restaurant_is_rejected(store: InMemoryForumStore) {
    let author = seed_user(&store, "ada").await;
    let comment = Comment::try_new(
        CommentId::random(),
        *author.id(),
        RestaurantId::random(),
        "Lovely",
    )
    .expect("valid comment");

    let error = CommentRepository::insert(&store, &comment)
        .await
        .expect_err("restaurant missing");
    assert_eq!(error, RepositoryError::validation(RESTAURANT_MUST_EXIST));
}

#[rstest]
#[tokio::test]
async fn followship_to_unknown_user_is_rejected(store: InMemoryForumStore) {
    let follower = seed_user(&store, "ada").await;
    let edge = Followship::new(*follower.id(), UserId::random());

    let error = FollowshipRepository::insert(&store, &edge)
        .await
        .expect_err("followed user missing");
    assert_eq!(error, RepositoryError::validation(USER_MUST_EXIST));
}

#[rstest]
#[tokio::test]
async fn restricted_delete_leaves_everything_in_place(store: InMemoryForumStore) {
    let author = seed_user(&store, "ada").await;
    let fan = seed_user(&store, "grace").await;
    let restaurant = seed_restaurant(&store, "Noodle Bar").await;
    let comment = Comment::try_new(CommentId::random(), *author.id(), *restaurant.id(), "Good")
        .expect("valid comment");
    CommentRepository::insert(&store, &comment)
        .await
        .expect("insert comment");
    FollowshipRepository::insert(&store, &Followship::new(*fan.id(), *author.id()))
        .await
        .expect("follow");

    let error = store
        .delete_restricted(author.id())
        .await
        .expect_err("author has reviews");
    assert_eq!(
        error,
        RepositoryError::has_comments(author.id().to_string(), 1_u64)
    );
    assert!(
        UserRepository::find_by_id(&store, author.id())
            .await
            .expect("lookup")
            .is_some()
    );
    assert!(store.exists(fan.id(), author.id()).await.expect("edge lookup"));
    assert_eq!(store.count_for_user(author.id()).await.expect("count"), 1);
}

#[rstest]
#[tokio::test]
async fn delete_cascades_favorites_and_both_edge_directions(store: InMemoryForumStore) {
    let leaving = seed_user(&store, "ada").await;
    let staying = seed_user(&store, "grace").await;
    let restaurant = seed_restaurant(&store, "Noodle Bar").await;
    FavoriteRepository::insert(&store, &Favorite::new(*leaving.id(), *restaurant.id()))
        .await
        .expect("favorite");
    FollowshipRepository::insert(&store, &Followship::new(*leaving.id(), *staying.id()))
        .await
        .expect("outgoing");
    FollowshipRepository::insert(&store, &Followship::new(*staying.id(), *leaving.id()))
        .await
        .expect("incoming");

    let deletion = store
        .delete_restricted(leaving.id())
        .await
        .expect("delete succeeds");

    assert_eq!(
        deletion,
        UserDeletion {
            favorites: 1,
            followships: 2
        }
    );
    assert!(store.followers(staying.id()).await.expect("followers").is_empty());
    assert!(store.followings(staying.id()).await.expect("followings").is_empty());
    assert_eq!(UserRepository::count(&store).await.expect("count"), 1);
}

#[rstest]
#[tokio::test]
async fn traversals_repeat_duplicate_join_rows_in_order(store: InMemoryForumStore) {
    let user = seed_user(&store, "ada").await;
    let first = seed_restaurant(&store, "Noodle Bar").await;
    let second = seed_restaurant(&store, "Taco Stand").await;
    for restaurant in [&first, &second, &first] {
        FavoriteRepository::insert(&store, &Favorite::new(*user.id(), *restaurant.id()))
            .await
            .expect("favorite");
    }

    let favorited = store
        .favorited_restaurants(user.id())
        .await
        .expect("traversal");
    assert_eq!(favorited, vec![first.clone(), second, first.clone()]);

    let removed = FavoriteRepository::delete_matching(&store, user.id(), first.id())
        .await
        .expect("unfavorite");
    assert_eq!(removed, 2);
}

#[rstest]
#[tokio::test]
async fn deleting_unknown_user_is_not_found(store: InMemoryForumStore) {
    let id = UserId::random();
    let error = store.delete_restricted(&id).await.expect_err("missing");
    assert_eq!(error, RepositoryError::not_found("user", id.to_string()));
}
