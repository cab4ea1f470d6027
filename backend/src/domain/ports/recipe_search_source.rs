//! Driven port for third-party recipe search.
//!
//! The domain owns the request shape and the normalised result so the
//! discovery service stays provider agnostic.

use async_trait::async_trait;

use crate::domain::{ProviderQuery, RecipeCategory, RecipeSummary};

use super::define_port_error;

/// One search issued on behalf of a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSearchRequest {
    pub category: RecipeCategory,
    /// Category search parameters; unset fields are omitted on the wire.
    pub query: ProviderQuery,
    /// Maximum number of results to ask for.
    pub limit: u32,
}

impl RecipeSearchRequest {
    /// Build the request for `category` using its registered parameters.
    pub fn for_category(category: RecipeCategory, limit: u32) -> Self {
        Self {
            category,
            query: *category.provider_query(),
            limit,
        }
    }
}

define_port_error! {
    /// Errors surfaced while calling the search provider.
    pub enum RecipeSearchSourceError {
        /// Network transport failed before a response arrived.
        Transport { message: String } =>
            "recipe search transport failed: {message}",
        /// The call exceeded its deadline.
        Timeout { message: String } =>
            "recipe search timed out: {message}",
        /// The provider answered with a non-success status.
        Status { status: u16, message: String } =>
            "recipe search returned status {status}: {message}",
        /// The response body did not match the expected schema.
        Decode { message: String } =>
            "recipe search response decode failed: {message}",
    }
}

/// Port for querying a recipe search provider.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeSearchSource: Send + Sync {
    /// Run one search. Implementations must not retry.
    async fn search(
        &self,
        request: &RecipeSearchRequest,
    ) -> Result<Vec<RecipeSummary>, RecipeSearchSourceError>;
}

/// Source that is never reachable; every search degrades to substitutes.
///
/// Used when no provider API key is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableRecipeSearchSource;

#[async_trait]
impl RecipeSearchSource for UnavailableRecipeSearchSource {
    async fn search(
        &self,
        _request: &RecipeSearchRequest,
    ) -> Result<Vec<RecipeSummary>, RecipeSearchSourceError> {
        Err(RecipeSearchSourceError::transport(
            "recipe search provider is not configured",
        ))
    }
}
