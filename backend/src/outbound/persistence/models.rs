//! Internal Diesel row structs.
//!
//! These never leave the persistence layer.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::recipes;

/// Row struct for reading from the recipes table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct RecipeRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

/// Feedback aggregate for one recipe: `(recipe_id, COUNT(*), SUM(rating))`.
pub(crate) type FeedbackTotalsRow = (Uuid, i64, Option<i64>);
