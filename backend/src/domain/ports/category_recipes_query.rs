//! Driving port for listing the stored recipes of one category.

use async_trait::async_trait;

use crate::domain::{Error, RatedRecipe, RecipeCategory};

/// Domain use-case port for the by-category recipe listing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRecipesQuery: Send + Sync {
    /// Every stored recipe in `category` with its rating, newest first.
    async fn recipes_in(&self, category: RecipeCategory) -> Result<Vec<RatedRecipe>, Error>;
}

/// Fixture query reporting every category as empty.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureCategoryRecipesQuery;

#[async_trait]
impl CategoryRecipesQuery for FixtureCategoryRecipesQuery {
    async fn recipes_in(&self, _category: RecipeCategory) -> Result<Vec<RatedRecipe>, Error> {
        Ok(Vec::new())
    }
}
