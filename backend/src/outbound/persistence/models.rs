//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain. Conversions into domain types live next
//! to the row they read.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::domain::ports::RepositoryError;
use crate::domain::{
    Comment, CommentId, Restaurant, RestaurantId, User, UserId,
};

use super::schema::{comments, favorites, followships, restaurants, user_credentials, users};

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub role: Option<String>,
    pub avatar: Option<String>,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Self::try_from_parts(UserId::from_uuid(row.id), row.name, row.role, row.avatar)
            .map_err(|err| RepositoryError::query(format!("corrupt user row {}: {err}", row.id)))
    }
}

/// Insertable struct for creating new user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
    pub role: Option<&'a str>,
    pub avatar: Option<&'a str>,
}

/// Changeset for updating user records.
///
/// `None` clears the column rather than skipping it.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct UserUpdate<'a> {
    pub name: &'a str,
    pub role: Option<&'a str>,
    pub avatar: Option<&'a str>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for a user's credentials.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = user_credentials)]
pub(crate) struct NewCredentialsRow<'a> {
    pub user_id: Uuid,
    pub email: &'a str,
    pub encrypted_password: &'a str,
}

/// Row struct for reading from the restaurants table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = restaurants)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RestaurantRow {
    pub id: Uuid,
    pub name: String,
}

impl TryFrom<RestaurantRow> for Restaurant {
    type Error = RepositoryError;

    fn try_from(row: RestaurantRow) -> Result<Self, Self::Error> {
        Self::try_new(RestaurantId::from_uuid(row.id), row.name).map_err(|err| {
            RepositoryError::query(format!("corrupt restaurant row {}: {err}", row.id))
        })
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = restaurants)]
pub(crate) struct NewRestaurantRow<'a> {
    pub id: Uuid,
    pub name: &'a str,
}

/// Row struct for reading from the comments table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CommentRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub restaurant_id: Uuid,
    pub content: String,
}

impl TryFrom<CommentRow> for Comment {
    type Error = RepositoryError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Self::try_new(
            CommentId::from_uuid(row.id),
            UserId::from_uuid(row.user_id),
            RestaurantId::from_uuid(row.restaurant_id),
            row.content,
        )
        .map_err(|err| RepositoryError::query(format!("corrupt comment row {}: {err}", row.id)))
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = comments)]
pub(crate) struct NewCommentRow<'a> {
    pub id: Uuid,
    pub user_id: Uuid,
    pub restaurant_id: Uuid,
    pub content: &'a str,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = favorites)]
pub(crate) struct NewFavoriteRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub restaurant_id: Uuid,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = followships)]
pub(crate) struct NewFollowshipRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub following_id: Uuid,
}

/// Convert a batch of rows, failing on the first corrupt one.
pub(crate) fn collect_rows<R, T>(rows: Vec<R>) -> Result<Vec<T>, RepositoryError>
where
    T: TryFrom<R, Error = RepositoryError>,
{
    rows.into_iter().map(T::try_from).collect()
}
