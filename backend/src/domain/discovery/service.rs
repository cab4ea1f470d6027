//! Discovery service implementing [`RecipeDiscoveryQuery`].

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{debug, warn};

use crate::domain::ports::{RecipeDiscoveryQuery, RecipeSearchRequest, RecipeSearchSource};
use crate::domain::{Error, RecipeCategory};

use super::{CategoryDiscovery, DiscoveryLimit, DiscoveryOutcome, substitutes};

/// Queries the search provider once and degrades to substitutes on failure.
#[derive(Clone)]
pub struct DiscoveryService<S: ?Sized> {
    source: Arc<S>,
}

impl<S: ?Sized> DiscoveryService<S> {
    pub fn new(source: Arc<S>) -> Self {
        Self { source }
    }
}

impl<S> DiscoveryService<S>
where
    S: RecipeSearchSource + ?Sized,
{
    fn parse_category(category_key: &str) -> Result<RecipeCategory, Error> {
        RecipeCategory::parse(category_key).map_err(|err| {
            Error::invalid_request(err.to_string()).with_details(json!({
                "field": "category",
                "value": category_key,
                "code": "unknown_category",
            }))
        })
    }

    async fn search(&self, category: RecipeCategory, limit: DiscoveryLimit) -> DiscoveryOutcome {
        let request = RecipeSearchRequest::for_category(category, limit.get());
        match self.source.search(&request).await {
            Ok(mut summaries) => {
                summaries.truncate(limit.as_usize());
                debug!(
                    category = %category,
                    count = summaries.len(),
                    "recipe search answered"
                );
                DiscoveryOutcome::Live(summaries)
            }
            Err(error) => {
                warn!(
                    category = %category,
                    error = %error,
                    "recipe search degraded; serving substitutes"
                );
                DiscoveryOutcome::Fallback(substitutes(category, limit.as_usize()))
            }
        }
    }
}

#[async_trait]
impl<S> RecipeDiscoveryQuery for DiscoveryService<S>
where
    S: RecipeSearchSource + ?Sized,
{
    async fn discover(
        &self,
        category_key: &str,
        limit: DiscoveryLimit,
    ) -> Result<CategoryDiscovery, Error> {
        let category = Self::parse_category(category_key)?;
        let outcome = self.search(category, limit).await;
        Ok(CategoryDiscovery { category, outcome })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::discovery::{Provenance, RecipeSummary};
    use crate::domain::ports::{MockRecipeSearchSource, RecipeSearchSourceError};
    use crate::domain::{CategoryRegistry, ErrorCode};
    use rstest::rstest;

    fn summary(id: u32) -> RecipeSummary {
        RecipeSummary {
            id: id.to_string(),
            title: format!("Recipe {id}"),
            description: String::new(),
            image: String::new(),
            ready_in_minutes: 20,
            servings: 2,
            source_name: "Spoonacular".to_owned(),
            source_url: String::new(),
            ingredients: Vec::new(),
            instructions: String::new(),
        }
    }

    fn service_with(source: MockRecipeSearchSource) -> DiscoveryService<MockRecipeSearchSource> {
        DiscoveryService::new(Arc::new(source))
    }

    fn failing_source(error: RecipeSearchSourceError) -> MockRecipeSearchSource {
        let mut source = MockRecipeSearchSource::new();
        source
            .expect_search()
            .returning(move |_| Err(error.clone()));
        source
    }

    #[tokio::test]
    async fn unknown_category_is_invalid_request_without_provider_call() {
        let mut source = MockRecipeSearchSource::new();
        source.expect_search().never();

        let err = service_with(source)
            .discover("breakfast", DiscoveryLimit::default())
            .await
            .expect_err("unknown category");

        assert_eq!(err.code(), ErrorCode::InvalidRequest);
        let details = err.details().expect("details");
        assert_eq!(details["field"], "category");
    }

    #[tokio::test]
    async fn live_results_pass_category_parameters_and_limit() {
        let mut source = MockRecipeSearchSource::new();
        source
            .expect_search()
            .withf(|request| {
                request.category == RecipeCategory::KidsMeals
                    && request.limit == 2
                    && request.query.max_calories == 500
            })
            .times(1)
            .returning(|_| Ok(vec![summary(1), summary(2)]));

        let discovery = service_with(source)
            .discover("kids_meals", DiscoveryLimit::clamped(2))
            .await
            .expect("discovery succeeds");

        assert_eq!(discovery.outcome.provenance(), Provenance::Live);
        assert_eq!(discovery.outcome.summaries().len(), 2);
    }

    #[tokio::test]
    async fn live_results_never_exceed_limit() {
        let mut source = MockRecipeSearchSource::new();
        source
            .expect_search()
            .returning(|_| Ok((1..=10).map(summary).collect()));

        let discovery = service_with(source)
            .discover("drinks", DiscoveryLimit::clamped(4))
            .await
            .expect("discovery succeeds");

        assert_eq!(discovery.outcome.summaries().len(), 4);
    }

    #[tokio::test]
    async fn empty_live_answer_stays_live() {
        let mut source = MockRecipeSearchSource::new();
        source.expect_search().returning(|_| Ok(Vec::new()));

        let discovery = service_with(source)
            .discover("fusion_stews", DiscoveryLimit::default())
            .await
            .expect("discovery succeeds");

        assert_eq!(discovery.outcome, DiscoveryOutcome::Live(Vec::new()));
    }

    #[rstest]
    #[case::transport(RecipeSearchSourceError::transport("connection refused"))]
    #[case::timeout(RecipeSearchSourceError::timeout("15s elapsed"))]
    #[case::status(RecipeSearchSourceError::status(402_u16, "quota exhausted"))]
    #[case::decode(RecipeSearchSourceError::decode("missing results"))]
    #[tokio::test]
    async fn provider_failures_degrade_to_fallback(#[case] error: RecipeSearchSourceError) {
        let discovery = service_with(failing_source(error))
            .discover("soups", DiscoveryLimit::clamped(3))
            .await
            .expect("degraded discovery still succeeds");

        assert_eq!(discovery.category.display_name(), "Soups");
        assert_eq!(discovery.outcome.provenance(), Provenance::Fallback);
        assert_eq!(discovery.outcome.summaries().len(), 3);
    }

    #[tokio::test]
    async fn fallback_is_non_empty_and_bounded_for_every_category() {
        for definition in CategoryRegistry::all() {
            let service =
                service_with(failing_source(RecipeSearchSourceError::transport("down")));
            let limit = DiscoveryLimit::clamped(500);
            let discovery = service
                .discover(definition.key(), limit)
                .await
                .expect("degraded discovery still succeeds");

            let count = discovery.outcome.summaries().len();
            assert!(count > 0);
            assert!(count <= limit.as_usize());
            assert_eq!(count, substitutes(definition.category, limit.as_usize()).len());
        }
    }
}
