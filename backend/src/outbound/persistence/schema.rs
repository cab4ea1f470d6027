//! Diesel table definitions for the PostgreSQL schema.
//!
//! These must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Recipes submitted by users.
    recipes (id) {
        id -> Uuid,
        title -> Varchar,
        description -> Text,
        /// Category wire key, for example `soups`.
        category -> Varchar,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Star ratings left on recipes.
    feedbacks (id) {
        id -> Uuid,
        recipe_id -> Uuid,
        /// Constrained to 1..=5 by a check constraint.
        rating -> Int4,
        comment -> Nullable<Text>,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(feedbacks -> recipes (recipe_id));
diesel::allow_tables_to_appear_in_same_query!(recipes, feedbacks);
