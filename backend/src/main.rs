//! Backend entry-point: loads settings, wires adapters, and serves the API.

mod server;

use std::io;
use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use recipes_backend::inbound::http::health::HealthState;
use recipes_backend::outbound::persistence::{DbPool, PoolConfig, apply_migrations};
use recipes_backend::outbound::spoonacular::SpoonacularHttpSource;
use server::{ServerConfig, ServerSettings, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load_from_iter(std::env::args_os())
        .map_err(|e| io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;

    let mut config = ServerConfig::new(bind_addr);

    if let Some(database_url) = settings.database_url.clone() {
        let migration_url = database_url.clone();
        let applied = tokio::task::spawn_blocking(move || apply_migrations(&migration_url))
            .await
            .map_err(|e| io::Error::other(format!("migration task failed: {e}")))?
            .map_err(io::Error::other)?;
        info!(applied, "database migrations applied");

        let pool = DbPool::new(PoolConfig::new(database_url))
            .await
            .map_err(io::Error::other)?;
        config = config.with_db_pool(pool);
    } else {
        warn!("RECIPES_DATABASE_URL not set; featured recipes and ratings use an empty catalogue");
    }

    if let Some(api_key) = settings.spoonacular_api_key() {
        let base_url = settings.spoonacular_base_url().map_err(io::Error::other)?;
        let source = SpoonacularHttpSource::new(base_url, api_key, settings.provider_timeout())
            .map_err(|e| io::Error::other(format!("failed to build provider client: {e}")))?;
        config = config.with_search_source(Arc::new(source));
    } else {
        warn!("RECIPES_SPOONACULAR_API_KEY not set; discovery serves substitute recipes");
    }

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting recipes backend");
    create_server(health_state, config)?.await
}
