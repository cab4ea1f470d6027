//! Server settings loaded via OrthoConfig and the resulting server
//! configuration object.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use ortho_config::OrthoConfig;
use reqwest::Url;
use serde::Deserialize;

use recipes_backend::domain::ports::RecipeSearchSource;
use recipes_backend::outbound::persistence::DbPool;
use recipes_backend::outbound::spoonacular::DEFAULT_SPOONACULAR_BASE_URL;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        value: String,
        source: std::net::AddrParseError,
    },
    #[error("invalid Spoonacular base URL {value:?}: {message}")]
    BaseUrl { value: String, message: String },
}

/// Runtime settings, layered from defaults, configuration file, `RECIPES_*`
/// environment variables, and command-line flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RECIPES")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. Without it the catalogue is empty and in-memory.
    pub database_url: Option<String>,
    /// Root of the Spoonacular recipes API.
    pub spoonacular_base_url: Option<String>,
    /// Spoonacular API key. Without it discovery serves substitutes only.
    pub spoonacular_api_key: Option<String>,
    /// Provider request timeout in seconds.
    #[ortho_config(default = 15)]
    pub provider_timeout_secs: u64,
}

impl ServerSettings {
    /// Configured bind address, defaulting to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let value = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        value.parse().map_err(|source| SettingsError::BindAddr {
            value: value.to_owned(),
            source,
        })
    }

    /// Configured provider root, defaulting to the public API.
    pub fn spoonacular_base_url(&self) -> Result<Url, SettingsError> {
        let value = self
            .spoonacular_base_url
            .as_deref()
            .unwrap_or(DEFAULT_SPOONACULAR_BASE_URL);
        Url::parse(value).map_err(|err| SettingsError::BaseUrl {
            value: value.to_owned(),
            message: err.to_string(),
        })
    }

    /// API key, treating a blank value as absent.
    pub fn spoonacular_api_key(&self) -> Option<&str> {
        self.spoonacular_api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }

    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs.max(1))
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: Option<DbPool>,
    pub(crate) search_source: Option<Arc<dyn RecipeSearchSource>>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            db_pool: None,
            search_source: None,
        }
    }

    /// Attach a database connection pool for the recipe catalogue.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Attach the recipe search provider used by discovery.
    #[must_use]
    pub fn with_search_source(mut self, source: Arc<dyn RecipeSearchSource>) -> Self {
        self.search_source = Some(source);
        self
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 5] = [
        "RECIPES_BIND_ADDR",
        "RECIPES_DATABASE_URL",
        "RECIPES_SPOONACULAR_BASE_URL",
        "RECIPES_SPOONACULAR_API_KEY",
        "RECIPES_PROVIDER_TIMEOUT_SECS",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("recipes-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default bind address"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("literal address")
        );
        assert_eq!(
            settings.spoonacular_base_url().expect("default URL").as_str(),
            DEFAULT_SPOONACULAR_BASE_URL
        );
        assert!(settings.database_url.is_none());
        assert!(settings.spoonacular_api_key().is_none());
        assert_eq!(settings.provider_timeout(), Duration::from_secs(15));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("RECIPES_BIND_ADDR", Some("127.0.0.1:9090".to_owned())),
            (
                "RECIPES_DATABASE_URL",
                Some("postgres://localhost/recipes".to_owned()),
            ),
            (
                "RECIPES_SPOONACULAR_BASE_URL",
                Some("http://localhost:4010/recipes".to_owned()),
            ),
            ("RECIPES_SPOONACULAR_API_KEY", Some("secret".to_owned())),
            ("RECIPES_PROVIDER_TIMEOUT_SECS", Some("3".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("bind address").port(),
            9090
        );
        assert_eq!(
            settings.database_url.as_deref(),
            Some("postgres://localhost/recipes")
        );
        assert_eq!(settings.spoonacular_api_key(), Some("secret"));
        assert_eq!(settings.provider_timeout(), Duration::from_secs(3));
    }

    #[rstest]
    fn blank_api_key_counts_as_absent() {
        let _guard = lock_env([("RECIPES_SPOONACULAR_API_KEY", Some("   ".to_owned()))]);

        assert!(load_from_empty_args().spoonacular_api_key().is_none());
    }

    #[rstest]
    fn malformed_bind_address_is_reported() {
        let _guard = lock_env([("RECIPES_BIND_ADDR", Some("localhost".to_owned()))]);

        assert!(matches!(
            load_from_empty_args().bind_addr(),
            Err(SettingsError::BindAddr { .. })
        ));
    }
}
