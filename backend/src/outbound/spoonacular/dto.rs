//! DTOs for decoding Spoonacular `complexSearch` responses.
//!
//! Every field is defaulted: the provider omits keys freely and a missing
//! value should degrade a card, not the whole response.

use serde::Deserialize;

use crate::domain::RecipeSummary;
use crate::domain::discovery::{fallback_source_url, normalise_description};

pub(super) const SOURCE_NAME: &str = "Spoonacular";
pub(super) const INSTRUCTIONS_PLACEHOLDER: &str = "Visit source for full instructions";

#[derive(Debug, Deserialize)]
pub(super) struct SearchResponseDto {
    #[serde(default)]
    pub(super) results: Vec<SearchResultDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SearchResultDto {
    pub(super) id: i64,
    #[serde(default)]
    pub(super) title: String,
    #[serde(default)]
    pub(super) summary: String,
    #[serde(default)]
    pub(super) image: String,
    #[serde(default)]
    pub(super) ready_in_minutes: u32,
    #[serde(default)]
    pub(super) servings: u32,
    #[serde(default)]
    pub(super) source_url: Option<String>,
}

impl SearchResponseDto {
    pub(super) fn into_summaries(self) -> Vec<RecipeSummary> {
        self.results
            .into_iter()
            .map(SearchResultDto::into_summary)
            .collect()
    }
}

impl SearchResultDto {
    fn into_summary(self) -> RecipeSummary {
        let source_url = self
            .source_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| fallback_source_url(&self.title, self.id));
        RecipeSummary {
            id: self.id.to_string(),
            description: normalise_description(&self.summary),
            title: self.title,
            image: self.image,
            ready_in_minutes: self.ready_in_minutes,
            servings: self.servings,
            source_name: SOURCE_NAME.to_owned(),
            source_url,
            ingredients: Vec::new(),
            instructions: INSTRUCTIONS_PLACEHOLDER.to_owned(),
        }
    }
}
