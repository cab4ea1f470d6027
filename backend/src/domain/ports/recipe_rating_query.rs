//! Driving port for a single recipe's rating.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{AggregatedRating, Error};

/// Domain use-case port for reading one recipe's aggregated rating.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeRatingQuery: Send + Sync {
    /// Mean rating and feedback count for `recipe_id`, recomputed per call.
    ///
    /// Unknown recipes fail with [`crate::domain::ErrorCode::NotFound`].
    async fn rating_for(&self, recipe_id: Uuid) -> Result<AggregatedRating, Error>;
}

/// Fixture query reporting every recipe as unrated.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRecipeRatingQuery;

#[async_trait]
impl RecipeRatingQuery for FixtureRecipeRatingQuery {
    async fn rating_for(&self, _recipe_id: Uuid) -> Result<AggregatedRating, Error> {
        Ok(AggregatedRating::UNRATED)
    }
}
