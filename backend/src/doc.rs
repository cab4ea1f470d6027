//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint from the inbound layer together
//! with the schema wrappers ([`ErrorSchema`], [`ErrorCodeSchema`]) that keep
//! domain types free of utoipa derives.
//!
//! The generated document is served by Swagger UI in debug builds and printed
//! by the `openapi-dump` binary for external tooling.

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Recipes backend API",
        description = "Category discovery backed by a recipe search provider, featured recipe ranking, and rating lookups.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::categories::list_categories,
        crate::inbound::http::categories::list_category_recipes,
        crate::inbound::http::discovery::list_mappings,
        crate::inbound::http::discovery::discover,
        crate::inbound::http::featured::list_featured,
        crate::inbound::http::ratings::get_rating,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "categories", description = "Recipe category registry and stored recipes per category"),
        (name = "discovery", description = "Provider-backed recipe discovery"),
        (name = "recipes", description = "Featured listing and ratings for stored recipes"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
