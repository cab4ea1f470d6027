//! Category registry listing and stored recipes per category.
//!
//! ```text
//! GET /api/v1/categories
//! GET /api/v1/categories/{category}/recipes
//! ```

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{CategoryDefinition, CategoryRegistry, RatedRecipe, RecipeCategory};
use crate::inbound::http::ApiResult;
use crate::inbound::http::featured::RatedRecipeResponse;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_category;

/// One registered category.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryResponse {
    /// Wire key used in discovery paths.
    #[schema(example = "soups")]
    pub key: String,
    /// Display name.
    #[schema(example = "Soups")]
    pub name: String,
    #[schema(example = "Warm, comforting soups")]
    pub description: String,
    /// Default image path for category cards.
    #[schema(example = "/images/soups.jpeg")]
    pub image: String,
}

impl From<&CategoryDefinition> for CategoryResponse {
    fn from(definition: &CategoryDefinition) -> Self {
        Self {
            key: definition.key().to_owned(),
            name: definition.display_name.to_owned(),
            description: definition.description.to_owned(),
            image: definition.default_image.to_owned(),
        }
    }
}

/// Response payload for the category listing.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryResponse>,
}

/// List every recipe category in registry order.
#[utoipa::path(
    get,
    path = "/api/v1/categories",
    description = "Return the closed set of recipe categories. Example request: GET /api/v1/categories",
    responses(
        (status = 200, description = "Registered categories", body = CategoriesResponse)
    ),
    tags = ["categories"],
    operation_id = "listCategories"
)]
#[get("/categories")]
pub async fn list_categories() -> web::Json<CategoriesResponse> {
    web::Json(CategoriesResponse {
        categories: CategoryRegistry::all()
            .iter()
            .map(CategoryResponse::from)
            .collect(),
    })
}

/// Stored recipes of one category.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryRecipesResponse {
    /// Category key from the path.
    #[schema(example = "soups")]
    pub category: String,
    #[schema(example = "Soups")]
    pub category_name: String,
    pub recipes: Vec<RatedRecipeResponse>,
    /// Number of entries in `recipes`.
    pub count: usize,
}

impl CategoryRecipesResponse {
    fn new(category: RecipeCategory, recipes: Vec<RatedRecipe>) -> Self {
        let recipes: Vec<RatedRecipeResponse> =
            recipes.into_iter().map(RatedRecipeResponse::from).collect();
        Self {
            category: category.as_str().to_owned(),
            category_name: category.display_name().to_owned(),
            count: recipes.len(),
            recipes,
        }
    }
}

/// List the stored recipes of one category with their ratings.
#[utoipa::path(
    get,
    path = "/api/v1/categories/{category}/recipes",
    description = "Return every stored recipe in a category with its aggregated rating, newest first. Example request: GET /api/v1/categories/soups/recipes",
    params(
        ("category" = String, Path, description = "Category key, for example `soups`")
    ),
    responses(
        (status = 200, description = "Recipes in the category", body = CategoryRecipesResponse),
        (status = 400, description = "Unknown category", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["categories"],
    operation_id = "listCategoryRecipes"
)]
#[get("/categories/{category}/recipes")]
pub async fn list_category_recipes(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<CategoryRecipesResponse>> {
    let category = parse_category(&path)?;
    let recipes = state.category_recipes.recipes_in(category).await?;
    Ok(web::Json(CategoryRecipesResponse::new(category, recipes)))
}
