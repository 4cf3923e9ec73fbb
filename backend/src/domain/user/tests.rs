//! Tests for the domain user model.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[fixture]
fn user_id() -> UserId {
    UserId::new(VALID_ID).expect("fixture id is valid")
}

#[fixture]
fn member(user_id: UserId) -> User {
    User::new(user_id, UserName::new("Ada Lovelace").expect("valid name"))
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn blank_names_are_rejected(#[case] raw: &str) {
    assert_eq!(UserName::new(raw), Err(UserValidationError::EmptyName));
}

#[rstest]
#[case("a")]
#[case("Anthony Bourdain")]
#[case("美食家")]
fn any_non_blank_name_is_accepted(#[case] raw: &str) {
    let name = UserName::new(raw).expect("name accepted");
    assert_eq!(name.as_ref(), raw);
}

#[rstest]
fn user_without_role_is_not_admin(member: User) {
    assert!(member.role().is_none());
    assert!(!member.is_admin());
}

#[rstest]
#[case("admin", true)]
#[case("Admin", false)]
#[case("normal", false)]
#[case("admin ", false)]
fn is_admin_matches_role_exactly(member: User, #[case] role: &str, #[case] expected: bool) {
    let user = member.with_role(Some(Role::new(role).expect("non-blank role")));
    assert_eq!(user.is_admin(), expected);
}

#[rstest]
fn admin_role_constructor_is_admin(member: User) {
    assert!(member.with_role(Some(Role::admin())).is_admin());
}

#[rstest]
fn blank_role_is_rejected() {
    assert_eq!(Role::new(" "), Err(UserValidationError::EmptyRole));
}

#[rstest]
fn try_from_parts_validates_every_component(user_id: UserId) {
    let err = User::try_from_parts(user_id, "Ada", None, Some(String::new()))
        .expect_err("blank avatar rejected");
    assert_eq!(err, UserValidationError::EmptyAvatar);

    let err = User::try_from_parts(user_id, "", Some("admin".to_owned()), None)
        .expect_err("blank name rejected");
    assert_eq!(err, UserValidationError::EmptyName);
}

#[rstest]
fn serialises_with_camel_case_and_omits_absent_fields(member: User) {
    let value = serde_json::to_value(&member).expect("serialise user");
    assert_eq!(value, json!({ "id": VALID_ID, "name": "Ada Lovelace" }));
}

#[rstest]
fn deserialisation_enforces_name_presence() {
    let payload = json!({ "id": VALID_ID, "name": "  ", "role": "admin" });
    let result: Result<User, _> = serde_json::from_value(payload);
    assert!(result.is_err());
}

#[rstest]
fn deserialises_role_and_avatar() {
    let payload = json!({
        "id": VALID_ID,
        "name": "Chef",
        "role": "admin",
        "avatar": "uploads/user/avatar/1/chef.png"
    });
    let user: User = serde_json::from_value(payload).expect("valid payload");
    assert!(user.is_admin());
    assert_eq!(
        user.avatar().map(AsRef::as_ref),
        Some("uploads/user/avatar/1/chef.png")
    );
}
