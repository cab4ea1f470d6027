//! Per-recipe rating lookup.
//!
//! ```text
//! GET /api/v1/recipes/{id}/rating
//! ```

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::AggregatedRating;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{RECIPE_ID, parse_uuid};

/// Aggregated rating for one recipe.
#[derive(Debug, Serialize, ToSchema)]
pub struct RatingResponse {
    pub recipe_id: Uuid,
    /// Mean of all feedback ratings; `0.0` when unrated.
    #[schema(example = 4.0)]
    pub average_rating: f64,
    pub feedback_count: u64,
}

impl RatingResponse {
    fn new(recipe_id: Uuid, rating: AggregatedRating) -> Self {
        Self {
            recipe_id,
            average_rating: rating.average(),
            feedback_count: rating.count(),
        }
    }
}

/// Fetch a recipe's aggregated rating, recomputed on every call.
#[utoipa::path(
    get,
    path = "/api/v1/recipes/{id}/rating",
    description = "Return the mean feedback rating and feedback count for a stored recipe. Example request: GET /api/v1/recipes/3fa85f64-5717-4562-b3fc-2c963f66afa6/rating",
    params(("id" = String, Path, description = "Recipe identifier (UUID)")),
    responses(
        (status = 200, description = "Aggregated rating", body = RatingResponse),
        (status = 400, description = "Malformed recipe identifier", body = ErrorSchema),
        (status = 404, description = "Unknown recipe", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["recipes"],
    operation_id = "getRecipeRating"
)]
#[get("/recipes/{id}/rating")]
pub async fn get_rating(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<RatingResponse>> {
    let recipe_id = parse_uuid(&path.into_inner(), RECIPE_ID)?;
    let rating = state.ratings.rating_for(recipe_id).await?;
    Ok(web::Json(RatingResponse::new(recipe_id, rating)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::domain::RecipeRatingService;
    use crate::inbound::http::test_utils::test_app;
    use crate::outbound::persistence::InMemoryRecipeCatalogue;
    use crate::test_support::catalogue::stored_recipe;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use chrono::Utc;
    use rstest::{fixture, rstest};
    use serde_json::Value;

    struct Catalogue {
        state: HttpState,
        rated: Uuid,
        unrated: Uuid,
    }

    #[fixture]
    fn catalogue() -> Catalogue {
        let rated = stored_recipe("Pea soup", "soups", Utc::now(), &[4, 5, 3]);
        let unrated = stored_recipe("Flatbread", "pastries", Utc::now(), &[]);
        let ids = (rated.id, unrated.id);
        let repository = Arc::new(InMemoryRecipeCatalogue::new(vec![rated, unrated]));
        Catalogue {
            state: HttpState {
                ratings: Arc::new(RecipeRatingService::new(repository)),
                ..HttpState::default()
            },
            rated: ids.0,
            unrated: ids.1,
        }
    }

    async fn get(state: HttpState, uri: &str) -> (StatusCode, Value) {
        let app = test::init_service(test_app(state)).await;
        let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = response.status();
        let body = test::read_body(response).await;
        (status, serde_json::from_slice(&body).expect("JSON body"))
    }

    #[rstest]
    #[actix_web::test]
    async fn averages_stored_feedback(catalogue: Catalogue) {
        let uri = format!("/api/v1/recipes/{}/rating", catalogue.rated);
        let (status, body) = get(catalogue.state, &uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recipe_id"], catalogue.rated.to_string());
        assert_eq!(body["average_rating"], 4.0);
        assert_eq!(body["feedback_count"], 3);
    }

    #[rstest]
    #[actix_web::test]
    async fn recipe_without_feedback_rates_zero(catalogue: Catalogue) {
        let uri = format!("/api/v1/recipes/{}/rating", catalogue.unrated);
        let (status, body) = get(catalogue.state, &uri).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["average_rating"], 0.0);
        assert_eq!(body["feedback_count"], 0);
    }

    #[rstest]
    #[actix_web::test]
    async fn unknown_recipe_is_not_found(catalogue: Catalogue) {
        let uri = format!("/api/v1/recipes/{}/rating", Uuid::new_v4());
        let (status, body) = get(catalogue.state, &uri).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "not_found");
    }

    #[rstest]
    #[actix_web::test]
    async fn malformed_identifier_is_rejected(catalogue: Catalogue) {
        let (status, body) = get(catalogue.state, "/api/v1/recipes/soup/rating").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["details"]["code"], "invalid_uuid");
    }
}
