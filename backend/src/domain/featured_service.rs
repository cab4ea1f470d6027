//! Featured listing service implementing [`FeaturedRecipesQuery`].
//!
//! One repository call fetches every recipe with its feedback totals already
//! aggregated; selection, ordering, and windowing then run in memory.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use pagination::{Page, PageRequest};
use tracing::debug;

use crate::domain::ports::{FeaturedRecipesQuery, RecipeCatalogueRepository};
use crate::domain::{Error, RatedRecipe, rank_featured};

/// Ranks the catalogue against the clock's current time.
#[derive(Clone)]
pub struct FeaturedRecipesService<R: ?Sized> {
    repository: Arc<R>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl<R: ?Sized> FeaturedRecipesService<R> {
    /// Create a service reading from `repository` and evaluating recency
    /// against `clock`.
    ///
    /// # Examples
    /// ```
    /// # use std::sync::Arc;
    /// # use mockable::DefaultClock;
    /// # use recipes_backend::domain::FeaturedRecipesService;
    /// # use recipes_backend::domain::ports::FixtureRecipeCatalogueRepository;
    /// let service = FeaturedRecipesService::new(
    ///     Arc::new(FixtureRecipeCatalogueRepository),
    ///     Arc::new(DefaultClock),
    /// );
    /// # let _ = service;
    /// ```
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self { repository, clock }
    }
}

#[async_trait]
impl<R> FeaturedRecipesQuery for FeaturedRecipesService<R>
where
    R: RecipeCatalogueRepository + ?Sized,
{
    async fn featured(&self, request: PageRequest) -> Result<Page<RatedRecipe>, Error> {
        let recipes = self.repository.list_rated_recipes().await?;
        let candidates = recipes.len();
        let page = rank_featured(recipes, self.clock.utc(), request);
        debug!(
            candidates,
            featured = page.total_items(),
            page = page.current_page(),
            "ranked featured recipes"
        );
        Ok(page)
    }
}
