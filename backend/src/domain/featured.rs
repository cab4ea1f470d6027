//! Featured recipe selection and ordering.
//!
//! A recipe is featured when any of these holds at evaluation time: its
//! average rating is at least [`FEATURED_MIN_AVERAGE`], it has at least
//! [`FEATURED_MIN_FEEDBACK`] feedback records, or it was created within
//! [`RECENCY_WINDOW_DAYS`] days. Featured recipes are ordered by average
//! rating, then feedback count, then creation time, all descending.
//!
//! Recency uses the supplied `now`, so membership of recipes close to the
//! window edge changes as the calendar moves on.

use std::cmp::Ordering;

use chrono::{DateTime, Duration, Utc};
use pagination::{Page, PageRequest};

use super::RatedRecipe;

/// Average rating at or above which a recipe is featured.
pub const FEATURED_MIN_AVERAGE: f64 = 4.0;
/// Feedback count at or above which a recipe is featured.
pub const FEATURED_MIN_FEEDBACK: u64 = 2;
/// Recipes younger than this many days are featured.
pub const RECENCY_WINDOW_DAYS: i64 = 30;

/// Whether `recipe` qualifies for the featured listing at `now`.
pub fn is_featured(recipe: &RatedRecipe, now: DateTime<Utc>) -> bool {
    let recent_after = now - Duration::days(RECENCY_WINDOW_DAYS);
    recipe.rating.average() >= FEATURED_MIN_AVERAGE
        || recipe.rating.count() >= FEATURED_MIN_FEEDBACK
        || recipe.created_at > recent_after
}

/// Presentation order for featured recipes.
pub fn featured_order(left: &RatedRecipe, right: &RatedRecipe) -> Ordering {
    right
        .rating
        .average()
        .total_cmp(&left.rating.average())
        .then_with(|| right.rating.count().cmp(&left.rating.count()))
        .then_with(|| right.created_at.cmp(&left.created_at))
}

/// Select, order, and window the featured subset of `recipes`.
///
/// A page past the end is an empty window, never an error.
///
/// # Examples
/// ```
/// use chrono::{Duration, Utc};
/// use pagination::PageRequest;
/// use recipes_backend::domain::{AggregatedRating, RatedRecipe, rank_featured};
/// use uuid::Uuid;
///
/// let now = Utc::now();
/// let recipe = RatedRecipe {
///     id: Uuid::new_v4(),
///     title: "Pumpkin soup".to_owned(),
///     description: String::new(),
///     category: "soups".to_owned(),
///     created_at: now - Duration::days(90),
///     rating: AggregatedRating::from_ratings(&[5, 4]),
/// };
/// let page = rank_featured(vec![recipe], now, PageRequest::first());
/// assert_eq!(page.items().len(), 1);
/// assert!(!page.has_next());
/// ```
pub fn rank_featured(
    recipes: Vec<RatedRecipe>,
    now: DateTime<Utc>,
    request: PageRequest,
) -> Page<RatedRecipe> {
    let mut featured: Vec<RatedRecipe> = recipes
        .into_iter()
        .filter(|recipe| is_featured(recipe, now))
        .collect();
    featured.sort_by(featured_order);
    Page::from_ordered(featured, request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AggregatedRating;
    use chrono::TimeZone;
    use rstest::{fixture, rstest};
    use uuid::Uuid;

    #[fixture]
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0)
            .single()
            .expect("valid timestamp")
    }

    fn recipe(title: &str, rating: AggregatedRating, created_at: DateTime<Utc>) -> RatedRecipe {
        RatedRecipe {
            id: Uuid::new_v4(),
            title: title.to_owned(),
            description: String::new(),
            category: "soups".to_owned(),
            created_at,
            rating,
        }
    }

    fn titles(page: &Page<RatedRecipe>) -> Vec<&str> {
        page.items().iter().map(|r| r.title.as_str()).collect()
    }

    #[rstest]
    #[case::high_average(AggregatedRating::from_ratings(&[4]), 90, true)]
    #[case::enough_feedback(AggregatedRating::from_ratings(&[1, 2]), 90, true)]
    #[case::recent(AggregatedRating::UNRATED, 10, true)]
    #[case::old_and_sparse(AggregatedRating::from_ratings(&[3]), 90, false)]
    #[case::old_and_unrated(AggregatedRating::UNRATED, 45, false)]
    fn applies_selection_rule(
        now: DateTime<Utc>,
        #[case] rating: AggregatedRating,
        #[case] age_days: i64,
        #[case] expected: bool,
    ) {
        let candidate = recipe("candidate", rating, now - Duration::days(age_days));
        assert_eq!(is_featured(&candidate, now), expected);
    }

    #[rstest]
    fn raising_average_past_threshold_features_recipe(now: DateTime<Utc>) {
        let created_at = now - Duration::days(120);
        let before = recipe("stew", AggregatedRating::from_ratings(&[3]), created_at);
        let after = recipe("stew", AggregatedRating::from_ratings(&[5]), created_at);

        assert!(rank_featured(vec![before], now, PageRequest::first()).items().is_empty());
        assert_eq!(
            titles(&rank_featured(vec![after], now, PageRequest::first())),
            vec!["stew"]
        );
    }

    #[rstest]
    fn newer_recipe_wins_full_tie(now: DateTime<Utc>) {
        let rating = AggregatedRating::from_ratings(&[5, 5]);
        let older = recipe("older", rating, now - Duration::days(200));
        let newer = recipe("newer", rating, now - Duration::days(100));

        let page = rank_featured(vec![older, newer], now, PageRequest::first());
        assert_eq!(titles(&page), vec!["newer", "older"]);
    }

    #[rstest]
    fn orders_by_average_then_count(now: DateTime<Utc>) {
        let created_at = now - Duration::days(5);
        let recipes = vec![
            recipe("a", AggregatedRating::new(5.0, 1), created_at),
            recipe("b", AggregatedRating::new(5.0, 3), created_at),
            recipe("c", AggregatedRating::new(3.0, 5), created_at),
            recipe("d", AggregatedRating::new(4.5, 0), created_at),
            recipe("e", AggregatedRating::new(2.0, 2), created_at),
        ];
        let request = PageRequest::new(1, 2).expect("valid request");

        let page = rank_featured(recipes, now, request);

        assert_eq!(titles(&page), vec!["b", "a"]);
        assert_eq!(page.total_items(), 5);
        assert_eq!(page.total_pages(), 3);
        assert!(page.has_next());
        assert!(!page.has_prev());
    }

    #[rstest]
    fn unrated_recipe_sorts_after_rated_ones(now: DateTime<Utc>) {
        let created_at = now - Duration::days(1);
        let recipes = vec![
            recipe("fresh", AggregatedRating::UNRATED, created_at),
            recipe("liked", AggregatedRating::from_ratings(&[4, 5, 3]), created_at),
        ];
        let page = rank_featured(recipes, now, PageRequest::first());
        assert_eq!(titles(&page), vec!["liked", "fresh"]);
    }

    #[rstest]
    fn page_past_end_is_empty(now: DateTime<Utc>) {
        let recipes = vec![recipe(
            "only",
            AggregatedRating::from_ratings(&[5]),
            now - Duration::days(60),
        )];
        let request = PageRequest::new(3, 12).expect("valid request");

        let page = rank_featured(recipes, now, request);

        assert!(page.items().is_empty());
        assert!(!page.has_next());
        assert!(page.has_prev());
        assert_eq!(page.total_pages(), 1);
    }
}
