//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the migrations under `backend/migrations`
//! exactly. When a migration changes a table, update the matching block here
//! (or regenerate it with `diesel print-schema`).

diesel::table! {
    /// Forum members.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Name shown to other users; never blank.
        name -> Varchar,
        /// Optional role label; `admin` grants moderation rights.
        role -> Nullable<Varchar>,
        /// Opaque reference to an externally stored avatar image.
        avatar -> Nullable<Varchar>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Authentication credentials, one row per user.
    user_credentials (user_id) {
        /// Primary key and foreign key to `users.id`.
        user_id -> Uuid,
        /// Normalised (lowercase) email, unique across users.
        email -> Varchar,
        /// Opaque password digest supplied by the auth collaborator.
        encrypted_password -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Restaurants that users review and bookmark.
    restaurants (id) {
        id -> Uuid,
        name -> Varchar,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Reviews. `user_id` is `ON DELETE RESTRICT`.
    comments (id) {
        id -> Uuid,
        user_id -> Uuid,
        restaurant_id -> Uuid,
        content -> Text,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Restaurant bookmarks.
    favorites (id) {
        id -> Uuid,
        user_id -> Uuid,
        restaurant_id -> Uuid,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Directed follow edges: `user_id` follows `following_id`.
    followships (id) {
        id -> Uuid,
        user_id -> Uuid,
        following_id -> Uuid,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(user_credentials -> users (user_id));
diesel::joinable!(comments -> users (user_id));
diesel::joinable!(comments -> restaurants (restaurant_id));
diesel::joinable!(favorites -> users (user_id));
diesel::joinable!(favorites -> restaurants (restaurant_id));

diesel::allow_tables_to_appear_in_same_query!(
    users,
    user_credentials,
    restaurants,
    comments,
    favorites,
    followships,
);
