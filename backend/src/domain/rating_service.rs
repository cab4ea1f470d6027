//! Rating service implementing [`RecipeRatingQuery`].

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{RecipeCatalogueRepository, RecipeRatingQuery};
use crate::domain::{AggregatedRating, Error};

/// Reads feedback totals on every call and averages them.
#[derive(Clone)]
pub struct RecipeRatingService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> RecipeRatingService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> RecipeRatingQuery for RecipeRatingService<R>
where
    R: RecipeCatalogueRepository + ?Sized,
{
    async fn rating_for(&self, recipe_id: Uuid) -> Result<AggregatedRating, Error> {
        let totals = self
            .repository
            .rating_totals(recipe_id)
            .await?
            .ok_or_else(|| Error::not_found(format!("recipe {recipe_id} not found")))?;
        Ok(AggregatedRating::from_totals(totals))
    }
}
