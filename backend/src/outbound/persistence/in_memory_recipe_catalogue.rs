//! Process-local recipe catalogue.
//!
//! Serves the read ports when no database is configured and backs handler
//! and behaviour tests. Contents are fixed at construction.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::ports::{RecipeCatalogueRepository, RecipeCatalogueRepositoryError};
use crate::domain::{AggregatedRating, RatedRecipe, RatingTotals, RecipeCategory};

/// A recipe and the raw ratings of its feedback records.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecipe {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: String,
    pub created_at: DateTime<Utc>,
    pub ratings: Vec<i32>,
}

impl StoredRecipe {
    fn totals(&self) -> RatingTotals {
        RatingTotals {
            count: u64::try_from(self.ratings.len()).unwrap_or(u64::MAX),
            sum: self.ratings.iter().map(|rating| i64::from(*rating)).sum(),
        }
    }

    fn to_rated(&self) -> RatedRecipe {
        RatedRecipe {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            created_at: self.created_at,
            rating: AggregatedRating::from_ratings(&self.ratings),
        }
    }
}

/// In-memory implementation of [`RecipeCatalogueRepository`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecipeCatalogue {
    recipes: Vec<StoredRecipe>,
}

impl InMemoryRecipeCatalogue {
    pub fn new(recipes: Vec<StoredRecipe>) -> Self {
        Self { recipes }
    }
}

#[async_trait]
impl RecipeCatalogueRepository for InMemoryRecipeCatalogue {
    async fn list_rated_recipes(&self) -> Result<Vec<RatedRecipe>, RecipeCatalogueRepositoryError> {
        Ok(self.recipes.iter().map(StoredRecipe::to_rated).collect())
    }

    async fn list_rated_recipes_in(
        &self,
        category: RecipeCategory,
    ) -> Result<Vec<RatedRecipe>, RecipeCatalogueRepositoryError> {
        Ok(self
            .recipes
            .iter()
            .filter(|recipe| recipe.category == category.as_str())
            .map(StoredRecipe::to_rated)
            .collect())
    }

    async fn rating_totals(
        &self,
        recipe_id: Uuid,
    ) -> Result<Option<RatingTotals>, RecipeCatalogueRepositoryError> {
        Ok(self
            .recipes
            .iter()
            .find(|recipe| recipe.id == recipe_id)
            .map(StoredRecipe::totals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::catalogue::stored_recipe;
    use rstest::{fixture, rstest};

    #[fixture]
    fn catalogue() -> (InMemoryRecipeCatalogue, Uuid) {
        let soup = stored_recipe("Leek soup", "soups", Utc::now(), &[4, 5, 3]);
        let id = soup.id;
        let tea = stored_recipe("Mint tea", "drinks", Utc::now(), &[]);
        (InMemoryRecipeCatalogue::new(vec![soup, tea]), id)
    }

    #[rstest]
    #[tokio::test]
    async fn lists_every_recipe_with_its_rating(catalogue: (InMemoryRecipeCatalogue, Uuid)) {
        let (repository, soup_id) = catalogue;
        let recipes = repository.list_rated_recipes().await.expect("list");

        assert_eq!(recipes.len(), 2);
        let soup = recipes
            .iter()
            .find(|recipe| recipe.id == soup_id)
            .expect("soup listed");
        assert_eq!(soup.rating.average(), 4.0);
        assert_eq!(soup.rating.count(), 3);
    }

    #[rstest]
    #[case::populated(RecipeCategory::Soups, 1)]
    #[case::other(RecipeCategory::Drinks, 1)]
    #[case::empty(RecipeCategory::Pastries, 0)]
    #[tokio::test]
    async fn category_listing_keeps_only_matching_keys(
        catalogue: (InMemoryRecipeCatalogue, Uuid),
        #[case] category: RecipeCategory,
        #[case] expected: usize,
    ) {
        let (repository, _) = catalogue;
        let recipes = repository
            .list_rated_recipes_in(category)
            .await
            .expect("list");

        assert_eq!(recipes.len(), expected);
        assert!(recipes.iter().all(|recipe| recipe.category == category.as_str()));
    }

    #[rstest]
    #[tokio::test]
    async fn totals_for_known_and_unknown_recipes(catalogue: (InMemoryRecipeCatalogue, Uuid)) {
        let (repository, soup_id) = catalogue;

        let totals = repository.rating_totals(soup_id).await.expect("totals");
        assert_eq!(totals, Some(RatingTotals { count: 3, sum: 12 }));

        let missing = repository.rating_totals(Uuid::new_v4()).await.expect("totals");
        assert_eq!(missing, None);
    }
}
