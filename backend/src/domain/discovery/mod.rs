//! Category-driven recipe discovery against a third-party search provider.
//!
//! Discovery always produces results for a known category. When the
//! provider cannot be reached, answers with a failure status, or sends a body
//! that does not decode, the service serves deterministic substitutes and
//! marks the outcome as [`DiscoveryOutcome::Fallback`]. The only hard failure
//! is an unknown category key.

mod fallback;
mod normalise;
mod service;

use serde::Serialize;

use super::{ProviderQuery, RecipeCategory};

pub use fallback::substitutes;
pub use normalise::{
    MAX_DESCRIPTION_CHARS, fallback_source_url, normalise_description, strip_markup,
    truncate_description,
};
pub use service::DiscoveryService;

/// Result count used when the caller does not ask for one.
pub const DEFAULT_DISCOVERY_LIMIT: u32 = 12;
/// Hard cap on the number of results per discovery call.
pub const MAX_DISCOVERY_LIMIT: u32 = 50;

/// Provider-agnostic recipe card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub ready_in_minutes: u32,
    pub servings: u32,
    pub source_name: String,
    pub source_url: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
}

/// Requested result count, clamped into `1..=MAX_DISCOVERY_LIMIT`.
///
/// # Examples
/// ```
/// use recipes_backend::domain::discovery::DiscoveryLimit;
///
/// assert_eq!(DiscoveryLimit::clamped(500).get(), 50);
/// assert_eq!(DiscoveryLimit::clamped(0).get(), 1);
/// assert_eq!(DiscoveryLimit::default().get(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct DiscoveryLimit(u32);

impl DiscoveryLimit {
    /// Clamp an arbitrary requested count into the accepted range.
    pub fn clamped(requested: i64) -> Self {
        let bounded = requested.clamp(1, i64::from(MAX_DISCOVERY_LIMIT));
        Self(u32::try_from(bounded).unwrap_or(DEFAULT_DISCOVERY_LIMIT))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// The limit as a collection length.
    pub fn as_usize(self) -> usize {
        usize::try_from(self.0).unwrap_or(usize::MAX)
    }
}

impl Default for DiscoveryLimit {
    fn default() -> Self {
        Self(DEFAULT_DISCOVERY_LIMIT)
    }
}

/// Where a set of discovery results came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    Live,
    Fallback,
}

impl Provenance {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Fallback => "fallback",
        }
    }
}

/// Discovery results tagged with their provenance.
///
/// Callers must match on the variant (or ask for [`Self::provenance`]) before
/// treating results as authoritative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryOutcome {
    /// The provider answered; the list may be empty.
    Live(Vec<RecipeSummary>),
    /// The provider was degraded; the list holds substitutes.
    Fallback(Vec<RecipeSummary>),
}

impl DiscoveryOutcome {
    pub fn provenance(&self) -> Provenance {
        match self {
            Self::Live(_) => Provenance::Live,
            Self::Fallback(_) => Provenance::Fallback,
        }
    }

    pub fn summaries(&self) -> &[RecipeSummary] {
        match self {
            Self::Live(summaries) | Self::Fallback(summaries) => summaries,
        }
    }

    pub fn into_summaries(self) -> Vec<RecipeSummary> {
        match self {
            Self::Live(summaries) | Self::Fallback(summaries) => summaries,
        }
    }
}

/// Discovery results for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDiscovery {
    pub category: RecipeCategory,
    pub outcome: DiscoveryOutcome,
}

/// Search parameters registered for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderMapping {
    pub category: RecipeCategory,
    pub display_name: &'static str,
    pub query: ProviderQuery,
}

/// Provider parameters for every category, in registry order.
pub fn provider_mappings() -> Vec<ProviderMapping> {
    super::CategoryRegistry::all()
        .iter()
        .map(|definition| ProviderMapping {
            category: definition.category,
            display_name: definition.display_name,
            query: definition.provider_query,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::negative(-4, 1)]
    #[case::zero(0, 1)]
    #[case::in_range(7, 7)]
    #[case::at_cap(50, 50)]
    #[case::above_cap(51, 50)]
    #[case::huge(i64::MAX, 50)]
    fn clamps_requested_limit(#[case] requested: i64, #[case] expected: u32) {
        assert_eq!(DiscoveryLimit::clamped(requested).get(), expected);
    }

    #[rstest]
    fn outcome_reports_provenance() {
        assert_eq!(DiscoveryOutcome::Live(Vec::new()).provenance(), Provenance::Live);
        assert_eq!(
            DiscoveryOutcome::Fallback(Vec::new()).provenance().as_str(),
            "fallback"
        );
    }

    #[rstest]
    fn mappings_follow_registry_order() {
        let mappings = provider_mappings();
        assert_eq!(mappings.len(), 11);
        let first = mappings.first().expect("first mapping");
        assert_eq!(first.category, RecipeCategory::PlantBasedMeals);
        assert_eq!(first.query.diet, "vegan,vegetarian");
    }
}
