//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`RecipeCatalogueRepository`, `RecipeSearchSource`) are
//! implemented by outbound adapters. Driving ports (`*Query`) are implemented
//! by domain services and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod category_recipes_query;
mod featured_recipes_query;
mod recipe_catalogue_repository;
mod recipe_discovery_query;
mod recipe_rating_query;
mod recipe_search_source;

#[cfg(test)]
pub use category_recipes_query::MockCategoryRecipesQuery;
pub use category_recipes_query::{CategoryRecipesQuery, FixtureCategoryRecipesQuery};
#[cfg(test)]
pub use featured_recipes_query::MockFeaturedRecipesQuery;
pub use featured_recipes_query::{FeaturedRecipesQuery, FixtureFeaturedRecipesQuery};
#[cfg(test)]
pub use recipe_catalogue_repository::MockRecipeCatalogueRepository;
pub use recipe_catalogue_repository::{
    FixtureRecipeCatalogueRepository, RecipeCatalogueRepository, RecipeCatalogueRepositoryError,
};
#[cfg(test)]
pub use recipe_discovery_query::MockRecipeDiscoveryQuery;
pub use recipe_discovery_query::{FixtureRecipeDiscoveryQuery, RecipeDiscoveryQuery};
#[cfg(test)]
pub use recipe_rating_query::MockRecipeRatingQuery;
pub use recipe_rating_query::{FixtureRecipeRatingQuery, RecipeRatingQuery};
#[cfg(test)]
pub use recipe_search_source::MockRecipeSearchSource;
pub use recipe_search_source::{
    RecipeSearchRequest, RecipeSearchSource, RecipeSearchSourceError,
    UnavailableRecipeSearchSource,
};
