//! Builders for seeding recipe catalogues in tests.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::outbound::persistence::StoredRecipe;

/// Recipe in `category` created at `created_at` with the given feedback.
pub fn stored_recipe(
    title: &str,
    category: &str,
    created_at: DateTime<Utc>,
    ratings: &[i32],
) -> StoredRecipe {
    StoredRecipe {
        id: Uuid::new_v4(),
        title: title.to_owned(),
        description: format!("{title} from the test kitchen"),
        category: category.to_owned(),
        created_at,
        ratings: ratings.to_vec(),
    }
}
