//! By-category listing service implementing [`CategoryRecipesQuery`].

use std::cmp::Reverse;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{CategoryRecipesQuery, RecipeCatalogueRepository};
use crate::domain::{Error, RatedRecipe, RecipeCategory};

/// Lists one category's stored recipes, newest first.
#[derive(Clone)]
pub struct CategoryRecipesService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> CategoryRecipesService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CategoryRecipesQuery for CategoryRecipesService<R>
where
    R: RecipeCatalogueRepository + ?Sized,
{
    async fn recipes_in(&self, category: RecipeCategory) -> Result<Vec<RatedRecipe>, Error> {
        let mut recipes = self.repository.list_rated_recipes_in(category).await?;
        // Id breaks timestamp ties so repeated reads agree.
        recipes.sort_by_key(|recipe| (Reverse(recipe.created_at), recipe.id));
        debug!(category = %category, count = recipes.len(), "listed category recipes");
        Ok(recipes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{MockRecipeCatalogueRepository, RecipeCatalogueRepositoryError};
    use crate::domain::{AggregatedRating, RatingTotals};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use rstest::{fixture, rstest};
    use uuid::Uuid;

    #[fixture]
    fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn soup(title: &str, created_at: DateTime<Utc>, totals: RatingTotals) -> RatedRecipe {
        RatedRecipe {
            id: Uuid::new_v4(),
            title: title.to_owned(),
            description: String::new(),
            category: "soups".to_owned(),
            created_at,
            rating: AggregatedRating::from_totals(totals),
        }
    }

    #[rstest]
    #[tokio::test]
    async fn lists_newest_first_with_ratings(epoch: DateTime<Utc>) {
        let old = soup("Minestrone", epoch - Duration::days(90), RatingTotals { count: 2, sum: 10 });
        let new = soup("Leek soup", epoch, RatingTotals { count: 0, sum: 0 });
        let rows = vec![old.clone(), new.clone()];
        let mut repository = MockRecipeCatalogueRepository::new();
        repository
            .expect_list_rated_recipes_in()
            .withf(|category| *category == RecipeCategory::Soups)
            .times(1)
            .returning(move |_| Ok(rows.clone()));
        repository.expect_list_rated_recipes().never();

        let recipes = CategoryRecipesService::new(Arc::new(repository))
            .recipes_in(RecipeCategory::Soups)
            .await
            .expect("listing");

        assert_eq!(recipes, vec![new, old]);
        assert_eq!(recipes[1].rating.average(), 5.0);
        assert_eq!(recipes[0].rating, AggregatedRating::UNRATED);
    }

    #[rstest]
    #[case::connection(RecipeCatalogueRepositoryError::connection("refused"), ErrorCode::ServiceUnavailable)]
    #[case::query(RecipeCatalogueRepositoryError::query("bad column"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn repository_failures_surface_as_domain_errors(
        #[case] failure: RecipeCatalogueRepositoryError,
        #[case] expected: ErrorCode,
    ) {
        let mut repository = MockRecipeCatalogueRepository::new();
        repository
            .expect_list_rated_recipes_in()
            .times(1)
            .returning(move |_| Err(failure.clone()));

        let err = CategoryRecipesService::new(Arc::new(repository))
            .recipes_in(RecipeCategory::Drinks)
            .await
            .expect_err("repository failure");
        assert_eq!(err.code(), expected);
    }
}
