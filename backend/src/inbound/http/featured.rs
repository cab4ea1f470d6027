//! Featured recipe listing.
//!
//! ```text
//! GET /api/v1/recipes/featured?page=N
//! ```

use actix_web::{get, web};
use chrono::{DateTime, Utc};
use pagination::Page;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::domain::RatedRecipe;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_page;

/// Query parameters accepted by the featured listing.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FeaturedQuery {
    /// 1-based page number; defaults to 1.
    pub page: Option<String>,
}

/// A stored recipe with its aggregated rating.
#[derive(Debug, Serialize, ToSchema)]
pub struct RatedRecipeResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    /// Stored category key.
    #[schema(example = "soups")]
    pub category: String,
    /// Display name, absent when the stored key is no longer registered.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "Soups")]
    pub category_name: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Mean feedback rating.
    #[schema(example = 4.5)]
    pub average_rating: f64,
    pub feedback_count: u64,
}

impl From<RatedRecipe> for RatedRecipeResponse {
    fn from(recipe: RatedRecipe) -> Self {
        Self {
            category_name: recipe
                .known_category()
                .map(|category| category.display_name().to_owned()),
            id: recipe.id,
            title: recipe.title,
            description: recipe.description,
            category: recipe.category,
            created_at: recipe.created_at,
            average_rating: recipe.rating.average(),
            feedback_count: recipe.rating.count(),
        }
    }
}

/// One page of the featured listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct FeaturedPageResponse {
    pub recipes: Vec<RatedRecipeResponse>,
    pub current_page: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl From<Page<RatedRecipe>> for FeaturedPageResponse {
    fn from(page: Page<RatedRecipe>) -> Self {
        let current_page = page.current_page();
        let total_pages = page.total_pages();
        let has_next = page.has_next();
        let has_prev = page.has_prev();
        Self {
            recipes: page
                .into_items()
                .into_iter()
                .map(RatedRecipeResponse::from)
                .collect(),
            current_page,
            total_pages,
            has_next,
            has_prev,
        }
    }
}

/// Ranked featured recipes, twelve per page.
#[utoipa::path(
    get,
    path = "/api/v1/recipes/featured",
    description = "Return recent, well rated recipes ordered by rating, feedback count, and recency. Example request: GET /api/v1/recipes/featured?page=2",
    params(FeaturedQuery),
    responses(
        (status = 200, description = "Featured page", body = FeaturedPageResponse),
        (status = 400, description = "Malformed page number", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "listFeaturedRecipes"
)]
#[get("/recipes/featured")]
pub async fn list_featured(
    state: web::Data<HttpState>,
    query: web::Query<FeaturedQuery>,
) -> ApiResult<web::Json<FeaturedPageResponse>> {
    let request = parse_page(query.page.as_deref())?;
    let page = state.featured.featured(request).await?;
    Ok(web::Json(FeaturedPageResponse::from(page)))
}
