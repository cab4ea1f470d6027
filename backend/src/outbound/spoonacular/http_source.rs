//! Reqwest-backed Spoonacular search adapter.
//!
//! This adapter owns transport details only: query-string construction,
//! timeout and HTTP error mapping, and JSON decoding into recipe summaries.
//! It never retries; the discovery service decides what a failure means.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};

use super::dto::SearchResponseDto;
use crate::domain::RecipeSummary;
use crate::domain::ports::{RecipeSearchRequest, RecipeSearchSource, RecipeSearchSourceError};

/// Public Spoonacular API root.
pub const DEFAULT_SPOONACULAR_BASE_URL: &str = "https://api.spoonacular.com/recipes";

const SEARCH_PATH: &str = "complexSearch";

/// Spoonacular source that issues one GET per search.
pub struct SpoonacularHttpSource {
    client: Client,
    endpoint: Url,
    api_key: String,
}

impl SpoonacularHttpSource {
    /// Build an adapter rooted at `base_url` with an explicit request timeout.
    ///
    /// ```rust,ignore
    /// let base = Url::parse(DEFAULT_SPOONACULAR_BASE_URL)?;
    /// let source = SpoonacularHttpSource::new(base, "key", Duration::from_secs(15))?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(
        base_url: Url,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: search_endpoint(base_url),
            api_key: api_key.into(),
        })
    }
}

#[async_trait]
impl RecipeSearchSource for SpoonacularHttpSource {
    async fn search(
        &self,
        request: &RecipeSearchRequest,
    ) -> Result<Vec<RecipeSummary>, RecipeSearchSourceError> {
        let mut params = vec![("apiKey", self.api_key.clone())];
        params.extend(search_params(request));

        let response = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .query(&params)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }
        parse_summaries(body.as_ref())
    }
}

fn search_endpoint(mut base_url: Url) -> Url {
    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }
    base_url.join(SEARCH_PATH).unwrap_or(base_url)
}

/// Query parameters for `request`, excluding credentials.
///
/// Blank text filters and zero numeric bounds are left off the wire.
fn search_params(request: &RecipeSearchRequest) -> Vec<(&'static str, String)> {
    let query = &request.query;
    let mut params = vec![
        ("number", request.limit.to_string()),
        ("addRecipeInformation", "true".to_owned()),
        ("fillIngredients", "false".to_owned()),
        ("instructionsRequired", "true".to_owned()),
    ];

    let text_filters = [
        ("query", query.query),
        ("diet", query.diet),
        ("type", query.meal_type),
        ("cuisine", query.cuisine),
    ];
    params.extend(
        text_filters
            .into_iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(name, value)| (name, value.to_owned())),
    );

    let bounds = [
        ("minCalories", query.min_calories),
        ("maxCalories", query.max_calories),
        ("maxFat", query.max_fat),
        ("minProtein", query.min_protein),
    ];
    params.extend(
        bounds
            .into_iter()
            .filter(|(_, value)| *value > 0)
            .map(|(name, value)| (name, value.to_string())),
    );
    params
}

fn parse_summaries(body: &[u8]) -> Result<Vec<RecipeSummary>, RecipeSearchSourceError> {
    let decoded: SearchResponseDto = serde_json::from_slice(body).map_err(|error| {
        RecipeSearchSourceError::decode(format!("invalid Spoonacular JSON payload: {error}"))
    })?;
    Ok(decoded.into_summaries())
}

fn map_transport_error(error: reqwest::Error) -> RecipeSearchSourceError {
    let error = error.without_url();
    if error.is_timeout() {
        RecipeSearchSourceError::timeout(error.to_string())
    } else {
        RecipeSearchSourceError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> RecipeSearchSourceError {
    match status {
        StatusCode::REQUEST_TIMEOUT | StatusCode::GATEWAY_TIMEOUT => {
            RecipeSearchSourceError::timeout(format!("status {}", status.as_u16()))
        }
        _ => RecipeSearchSourceError::status(status.as_u16(), body_preview(body)),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
