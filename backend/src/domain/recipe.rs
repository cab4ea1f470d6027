//! Persisted recipes as seen by the ranking core.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::{AggregatedRating, RecipeCategory};

/// A stored recipe annotated with its freshly computed rating.
///
/// `category` is kept as the stored key: a row whose key is no longer part
/// of the registry still ranks, it simply has no display name.
#[derive(Debug, Clone, PartialEq)]
pub struct RatedRecipe {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub rating: AggregatedRating,
}

impl RatedRecipe {
    /// Registry entry for the stored category key, if it is still known.
    pub fn known_category(&self) -> Option<RecipeCategory> {
        RecipeCategory::parse(&self.category).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn recipe(category: &str) -> RatedRecipe {
        RatedRecipe {
            id: Uuid::nil(),
            title: "Lentil soup".to_owned(),
            description: String::new(),
            category: category.to_owned(),
            created_at: DateTime::<Utc>::UNIX_EPOCH,
            rating: AggregatedRating::UNRATED,
        }
    }

    #[rstest]
    #[case("soups", Some(RecipeCategory::Soups))]
    #[case("retired_category", None)]
    fn resolves_stored_category_leniently(
        #[case] stored: &str,
        #[case] expected: Option<RecipeCategory>,
    ) {
        assert_eq!(recipe(stored).known_category(), expected);
    }
}
