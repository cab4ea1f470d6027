//! Builders wiring adapters into the HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::warn;

use recipes_backend::domain::ports::{
    RecipeCatalogueRepository, RecipeSearchSource, UnavailableRecipeSearchSource,
};
use recipes_backend::domain::{
    CategoryRecipesService, DiscoveryService, FeaturedRecipesService, RecipeRatingService,
};
use recipes_backend::inbound::http::state::HttpState;
use recipes_backend::outbound::persistence::{
    DieselRecipeCatalogueRepository, InMemoryRecipeCatalogue,
};

use super::ServerConfig;

fn build_catalogue(config: &ServerConfig) -> Arc<dyn RecipeCatalogueRepository> {
    match &config.db_pool {
        Some(pool) => Arc::new(DieselRecipeCatalogueRepository::new(pool.clone())),
        None => {
            warn!("no database configured; serving an empty in-memory catalogue");
            Arc::new(InMemoryRecipeCatalogue::default())
        }
    }
}

fn build_search_source(config: &ServerConfig) -> Arc<dyn RecipeSearchSource> {
    match &config.search_source {
        Some(source) => Arc::clone(source),
        None => {
            warn!("no recipe search provider configured; discovery serves substitutes only");
            Arc::new(UnavailableRecipeSearchSource)
        }
    }
}

/// Assemble the domain services behind the HTTP driving ports.
///
/// The catalogue is shared by the featured listing, rating lookups, and the
/// by-category listing; the featured listing evaluates recency against the
/// system clock.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let catalogue = build_catalogue(config);
    let search_source = build_search_source(config);

    web::Data::new(HttpState::new(
        Arc::new(DiscoveryService::new(search_source)),
        Arc::new(FeaturedRecipesService::new(
            Arc::clone(&catalogue),
            Arc::new(DefaultClock),
        )),
        Arc::new(RecipeRatingService::new(Arc::clone(&catalogue))),
        Arc::new(CategoryRecipesService::new(catalogue)),
    ))
}
