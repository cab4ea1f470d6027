//! Driving port for the featured recipe listing.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{Error, RatedRecipe};

/// Domain use-case port for the ranked, paginated featured listing.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeaturedRecipesQuery: Send + Sync {
    /// Featured recipes for the requested page, best first.
    async fn featured(&self, request: PageRequest) -> Result<Page<RatedRecipe>, Error>;
}

/// Fixture query with nothing featured.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFeaturedRecipesQuery;

#[async_trait]
impl FeaturedRecipesQuery for FixtureFeaturedRecipesQuery {
    async fn featured(&self, request: PageRequest) -> Result<Page<RatedRecipe>, Error> {
        Ok(Page::from_ordered(Vec::new(), request))
    }
}
