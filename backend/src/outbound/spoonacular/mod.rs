//! Spoonacular outbound adapter.
//!
//! A thin HTTP implementation of the `RecipeSearchSource` port backed by the
//! Spoonacular `complexSearch` endpoint.

mod dto;
mod http_source;

pub use http_source::{DEFAULT_SPOONACULAR_BASE_URL, SpoonacularHttpSource};
