//! Domain primitives, services, and ports for recipe discovery and ranking.
//!
//! Purpose: keep category rules, rating arithmetic, discovery degradation,
//! and featured ranking free of HTTP and persistence concerns. Adapters in
//! `inbound` and `outbound` talk to this module only through the traits in
//! [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode: transport agnostic failure payload.
//! - RecipeCategory / CategoryRegistry: closed category set and metadata.
//! - AggregatedRating / RatingTotals: per-recipe rating values.
//! - rank_featured: pure featured selection, ordering, and windowing.
//! - CategoryRecipesService: stored recipes of one category, newest first.
//! - discovery: provider-backed category discovery with substitutes.

pub mod category;
mod category_recipes_service;
pub mod discovery;
pub mod error;
pub mod featured;
mod featured_service;
pub mod ports;
pub mod rating;
mod rating_service;
pub mod recipe;
pub mod trace_id;

pub use self::category::{
    CATEGORY_REGISTRY, CategoryDefinition, CategoryRegistry, ProviderQuery, RecipeCategory,
    UnknownCategoryError,
};
pub use self::category_recipes_service::CategoryRecipesService;
pub use self::discovery::{
    CategoryDiscovery, DiscoveryLimit, DiscoveryOutcome, DiscoveryService, Provenance,
    RecipeSummary,
};
pub use self::error::{Error, ErrorCode};
pub use self::featured::{is_featured, rank_featured};
pub use self::featured_service::FeaturedRecipesService;
pub use self::rating::{AggregatedRating, RatingTotals};
pub use self::rating_service::RecipeRatingService;
pub use self::recipe::RatedRecipe;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
