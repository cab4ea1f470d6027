//! Driving port for category discovery.
//!
//! Inbound adapters resolve the category key and limit through this port
//! without knowing which provider (if any) backs it.

use async_trait::async_trait;

use crate::domain::Error;
use crate::domain::discovery::{CategoryDiscovery, DiscoveryLimit, DiscoveryOutcome, substitutes};
use crate::domain::RecipeCategory;

/// Domain use-case port for discovering recipes by category.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeDiscoveryQuery: Send + Sync {
    /// Discover up to `limit` recipes for the category with wire key
    /// `category_key`.
    ///
    /// Fails only with [`crate::domain::ErrorCode::InvalidRequest`] when the key
    /// is not a known category. Provider degradation is reported through
    /// [`DiscoveryOutcome::Fallback`].
    async fn discover(
        &self,
        category_key: &str,
        limit: DiscoveryLimit,
    ) -> Result<CategoryDiscovery, Error>;
}

/// Fixture query that always serves substitutes.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRecipeDiscoveryQuery;

#[async_trait]
impl RecipeDiscoveryQuery for FixtureRecipeDiscoveryQuery {
    async fn discover(
        &self,
        category_key: &str,
        limit: DiscoveryLimit,
    ) -> Result<CategoryDiscovery, Error> {
        let category = RecipeCategory::parse(category_key)
            .map_err(|err| Error::invalid_request(err.to_string()))?;
        Ok(CategoryDiscovery {
            category,
            outcome: DiscoveryOutcome::Fallback(substitutes(category, limit.as_usize())),
        })
    }
}
