//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    CategoryRecipesQuery, FeaturedRecipesQuery, FixtureCategoryRecipesQuery,
    FixtureFeaturedRecipesQuery, FixtureRecipeDiscoveryQuery, FixtureRecipeRatingQuery,
    RecipeDiscoveryQuery, RecipeRatingQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub discovery: Arc<dyn RecipeDiscoveryQuery>,
    pub featured: Arc<dyn FeaturedRecipesQuery>,
    pub ratings: Arc<dyn RecipeRatingQuery>,
    pub category_recipes: Arc<dyn CategoryRecipesQuery>,
}

impl HttpState {
    /// Construct state from the driving ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use recipes_backend::domain::ports::{
    ///     FixtureCategoryRecipesQuery, FixtureFeaturedRecipesQuery, FixtureRecipeDiscoveryQuery,
    ///     FixtureRecipeRatingQuery,
    /// };
    /// use recipes_backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(
    ///     Arc::new(FixtureRecipeDiscoveryQuery),
    ///     Arc::new(FixtureFeaturedRecipesQuery),
    ///     Arc::new(FixtureRecipeRatingQuery),
    ///     Arc::new(FixtureCategoryRecipesQuery),
    /// );
    /// let _discovery = state.discovery.clone();
    /// ```
    pub fn new(
        discovery: Arc<dyn RecipeDiscoveryQuery>,
        featured: Arc<dyn FeaturedRecipesQuery>,
        ratings: Arc<dyn RecipeRatingQuery>,
        category_recipes: Arc<dyn CategoryRecipesQuery>,
    ) -> Self {
        Self {
            discovery,
            featured,
            ratings,
            category_recipes,
        }
    }
}

impl Default for HttpState {
    /// Fixture-backed state: discovery serves substitutes, nothing is
    /// featured, every recipe is unrated, every category is empty.
    fn default() -> Self {
        Self::new(
            Arc::new(FixtureRecipeDiscoveryQuery),
            Arc::new(FixtureFeaturedRecipesQuery),
            Arc::new(FixtureRecipeRatingQuery),
            Arc::new(FixtureCategoryRecipesQuery),
        )
    }
}
