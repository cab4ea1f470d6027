//! Category discovery endpoints.
//!
//! ```text
//! GET /api/v1/discovery/mappings
//! GET /api/v1/discovery/{category}?limit=N
//! ```
//!
//! Provider degradation never fails a discovery request: the response is
//! still 200 and `source` reports `fallback`.

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::discovery::{ProviderMapping, provider_mappings};
use crate::domain::{CategoryDiscovery, ProviderQuery, RecipeSummary};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_limit;

/// Query parameters accepted by the discovery endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DiscoveryQuery {
    /// Result count; defaults to 12 and is clamped into 1..=50.
    pub limit: Option<String>,
}

/// Recipe card returned by discovery.
#[derive(Debug, Serialize, ToSchema)]
pub struct RecipeSummaryResponse {
    /// Provider identifier, or `mock_*` for substitutes.
    #[schema(example = "716429")]
    pub id: String,
    pub title: String,
    /// Markup-free description of at most 200 characters plus `...`.
    pub description: String,
    pub image: String,
    /// Preparation time in minutes.
    pub ready_time: u32,
    pub servings: u32,
    /// Name of the provider or substitute source.
    #[schema(example = "Spoonacular")]
    pub source: String,
    pub source_url: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

impl From<RecipeSummary> for RecipeSummaryResponse {
    fn from(summary: RecipeSummary) -> Self {
        Self {
            id: summary.id,
            title: summary.title,
            description: summary.description,
            image: summary.image,
            ready_time: summary.ready_in_minutes,
            servings: summary.servings,
            source: summary.source_name,
            source_url: summary.source_url,
            ingredients: summary.ingredients,
            instructions: summary.instructions,
        }
    }
}

/// Response payload for one discovery call.
#[derive(Debug, Serialize, ToSchema)]
pub struct DiscoveryResponse {
    /// Display name of the requested category.
    #[schema(example = "Soups")]
    pub category: String,
    pub recipes: Vec<RecipeSummaryResponse>,
    /// `live` when the provider answered, `fallback` for substitutes.
    #[schema(example = "fallback")]
    pub source: String,
    /// Number of entries in `recipes`.
    pub count: usize,
}

impl From<CategoryDiscovery> for DiscoveryResponse {
    fn from(discovery: CategoryDiscovery) -> Self {
        let source = discovery.outcome.provenance().as_str().to_owned();
        let recipes: Vec<RecipeSummaryResponse> = discovery
            .outcome
            .into_summaries()
            .into_iter()
            .map(RecipeSummaryResponse::from)
            .collect();
        Self {
            category: discovery.category.display_name().to_owned(),
            count: recipes.len(),
            recipes,
            source,
        }
    }
}

/// Provider parameters for one category. Absent filters are omitted.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProviderQueryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_calories: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_calories: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_fat: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_protein: Option<u32>,
}

fn text(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}

fn bound(value: u32) -> Option<u32> {
    (value > 0).then_some(value)
}

impl From<ProviderQuery> for ProviderQueryResponse {
    fn from(query: ProviderQuery) -> Self {
        Self {
            query: text(query.query),
            diet: text(query.diet),
            meal_type: text(query.meal_type),
            cuisine: text(query.cuisine),
            min_calories: bound(query.min_calories),
            max_calories: bound(query.max_calories),
            max_fat: bound(query.max_fat),
            min_protein: bound(query.min_protein),
        }
    }
}

/// Provider mapping for one category.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProviderMappingResponse {
    #[schema(example = "hearty_meals")]
    pub category: String,
    #[schema(example = "Hearty Meals (Weight Gain)")]
    pub name: String,
    pub parameters: ProviderQueryResponse,
}

impl From<ProviderMapping> for ProviderMappingResponse {
    fn from(mapping: ProviderMapping) -> Self {
        Self {
            category: mapping.category.as_str().to_owned(),
            name: mapping.display_name.to_owned(),
            parameters: mapping.query.into(),
        }
    }
}

/// Response payload for the mapping listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProviderMappingsResponse {
    pub mappings: Vec<ProviderMappingResponse>,
}

/// List the provider search parameters registered for each category.
#[utoipa::path(
    get,
    path = "/api/v1/discovery/mappings",
    description = "Return the search parameters sent to the recipe provider for every category. Example request: GET /api/v1/discovery/mappings",
    responses(
        (status = 200, description = "Provider mappings", body = ProviderMappingsResponse)
    ),
    tags = ["discovery"],
    operation_id = "listProviderMappings"
)]
#[get("/discovery/mappings")]
pub async fn list_mappings() -> web::Json<ProviderMappingsResponse> {
    web::Json(ProviderMappingsResponse {
        mappings: provider_mappings()
            .into_iter()
            .map(ProviderMappingResponse::from)
            .collect(),
    })
}

/// Discover recipes for one category.
#[utoipa::path(
    get,
    path = "/api/v1/discovery/{category}",
    description = "Search the recipe provider for a category, serving substitutes when the provider is degraded. Example request: GET /api/v1/discovery/soups?limit=3",
    params(
        ("category" = String, Path, description = "Category key, for example `soups`"),
        DiscoveryQuery
    ),
    responses(
        (status = 200, description = "Discovered recipes", body = DiscoveryResponse),
        (status = 400, description = "Unknown category or malformed limit", body = ErrorSchema)
    ),
    tags = ["discovery"],
    operation_id = "discoverRecipes"
)]
#[get("/discovery/{category}")]
pub async fn discover(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<DiscoveryQuery>,
) -> ApiResult<web::Json<DiscoveryResponse>> {
    let limit = parse_limit(query.limit.as_deref())?;
    let category = path.into_inner();
    let discovery = state.discovery.discover(&category, limit).await?;
    Ok(web::Json(DiscoveryResponse::from(discovery)))
}
