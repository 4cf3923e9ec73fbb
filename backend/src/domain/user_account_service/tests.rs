//! Tests for the account lifecycle service.

use std::sync::Arc;

use super::*;
use crate::domain::ports::MockUserRepository;
use rstest::{fixture, rstest};

fn make_service(repo: MockUserRepository) -> UserAccountService<MockUserRepository> {
    UserAccountService::new(Arc::new(repo))
}

#[fixture]
fn create_request() -> CreateUserRequest {
    CreateUserRequest {
        name: "Ada Lovelace".to_owned(),
        email: "Ada@Example.com".to_owned(),
        encrypted_password: "$2a$11$digest".to_owned(),
        role: None,
        avatar: None,
    }
}

#[rstest]
#[tokio::test]
async fn create_user_persists_user_and_credentials(create_request: CreateUserRequest) {
    let mut repo = MockUserRepository::new();
    repo.expect_insert()
        .withf(|user, credentials| {
            user.name().as_ref() == "Ada Lovelace"
                && credentials.user_id() == user.id()
                && credentials.email().as_ref() == "ada@example.com"
        })
        .times(1)
        .return_once(|_, _| Ok(()));

    let user = make_service(repo)
        .create_user(create_request)
        .await
        .expect("user created");

    assert_eq!(user.name().as_ref(), "Ada Lovelace");
    assert!(!user.is_admin());
}

#[rstest]
#[case("")]
#[case("   ")]
#[tokio::test]
async fn create_user_rejects_blank_name_without_touching_store(
    mut create_request: CreateUserRequest,
    #[case] name: &str,
) {
    let mut repo = MockUserRepository::new();
    repo.expect_insert().never();
    create_request.name = name.to_owned();

    let error = make_service(repo)
        .create_user(create_request)
        .await
        .expect_err("blank name rejected");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.details(), Some(&json!({ "field": "name" })));
}

#[rstest]
#[tokio::test]
async fn create_user_rejects_malformed_email(mut create_request: CreateUserRequest) {
    let mut repo = MockUserRepository::new();
    repo.expect_insert().never();
    create_request.email = "not-an-email".to_owned();

    let error = make_service(repo)
        .create_user(create_request)
        .await
        .expect_err("malformed email rejected");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[rstest]
#[tokio::test]
async fn create_user_surfaces_duplicate_email_as_validation(create_request: CreateUserRequest) {
    let mut repo = MockUserRepository::new();
    repo.expect_insert()
        .times(1)
        .return_once(|_, _| Err(RepositoryError::validation("email has already been taken")));

    let error = make_service(repo)
        .create_user(create_request)
        .await
        .expect_err("duplicate email rejected");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), "email has already been taken");
}

#[rstest]
#[tokio::test]
async fn create_user_keeps_admin_role(mut create_request: CreateUserRequest) {
    let mut repo = MockUserRepository::new();
    repo.expect_insert().times(1).return_once(|_, _| Ok(()));
    create_request.role = Some("admin".to_owned());

    let user = make_service(repo)
        .create_user(create_request)
        .await
        .expect("admin created");

    assert!(user.is_admin());
}

#[tokio::test]
async fn update_user_rejects_blank_name() {
    let existing = User::new(UserId::random(), UserName::new("Chef").expect("valid name"));
    let user_id = *existing.id();
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(existing)));
    repo.expect_update().never();

    let mut request = UpdateUserRequest::for_user(user_id);
    request.name = Some(" ".to_owned());

    let error = make_service(repo)
        .update_user(request)
        .await
        .expect_err("blank name rejected");
    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn update_user_applies_supplied_fields_only() {
    let existing = User::new(UserId::random(), UserName::new("Chef").expect("valid name"))
        .with_avatar(Some(AvatarRef::new("chef.png").expect("valid avatar")));
    let user_id = *existing.id();
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(move |_| Ok(Some(existing)));
    repo.expect_update()
        .withf(|user| user.is_admin() && user.name().as_ref() == "Chef")
        .times(1)
        .return_once(|_| Ok(()));

    let mut request = UpdateUserRequest::for_user(user_id);
    request.role = Some("admin".to_owned());

    let updated = make_service(repo)
        .update_user(request)
        .await
        .expect("update succeeds");
    assert!(updated.is_admin());
    assert_eq!(updated.avatar().map(AsRef::as_ref), Some("chef.png"));
}

#[tokio::test]
async fn update_user_reports_missing_user() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().times(1).return_once(|_| Ok(None));

    let error = make_service(repo)
        .update_user(UpdateUserRequest::for_user(UserId::random()))
        .await
        .expect_err("missing user");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[tokio::test]
async fn delete_user_returns_cascade_counts() {
    let mut repo = MockUserRepository::new();
    repo.expect_delete_restricted().times(1).return_once(|_| {
        Ok(UserDeletion {
            favorites: 2,
            followships: 3,
        })
    });

    let deletion = make_service(repo)
        .delete_user(&UserId::random())
        .await
        .expect("delete succeeds");
    assert_eq!(deletion.favorites, 2);
    assert_eq!(deletion.followships, 3);
}

#[tokio::test]
async fn delete_user_with_comments_is_an_integrity_violation() {
    let user_id = UserId::random();
    let mut repo = MockUserRepository::new();
    repo.expect_delete_restricted()
        .times(1)
        .return_once(|id| Err(RepositoryError::has_comments(id.to_string(), 1_u64)));

    let error = make_service(repo)
        .delete_user(&user_id)
        .await
        .expect_err("restricted");

    assert_eq!(error.code(), ErrorCode::IntegrityViolation);
    assert_eq!(error.message(), "cannot delete account: existing reviews");
}

#[rstest]
#[case(RepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
#[case(RepositoryError::not_found("user", "u"), ErrorCode::NotFound)]
#[tokio::test]
async fn delete_user_maps_store_failures(
    #[case] failure: RepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut repo = MockUserRepository::new();
    repo.expect_delete_restricted()
        .times(1)
        .return_once(move |_| Err(failure));

    let error = make_service(repo)
        .delete_user(&UserId::random())
        .await
        .expect_err("failure surfaces");
    assert_eq!(error.code(), expected);
}
