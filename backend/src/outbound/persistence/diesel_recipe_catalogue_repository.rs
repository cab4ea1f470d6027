//! PostgreSQL-backed recipe catalogue read adapter.
//!
//! Feedback is aggregated in the database with `COUNT(*)` and `SUM(rating)`
//! grouped by recipe, so a ranking pass costs two statements regardless of
//! catalogue size. Category listings restrict both statements to the
//! category's recipes.

use std::collections::HashMap;

use async_trait::async_trait;
use diesel::dsl::{count_star, sum};
use diesel::prelude::*;
use diesel_async::AsyncConnection as _;
use diesel_async::RunQueryDsl;
use diesel_async::scoped_futures::ScopedFutureExt as _;
use uuid::Uuid;

use crate::domain::ports::{RecipeCatalogueRepository, RecipeCatalogueRepositoryError};
use crate::domain::{AggregatedRating, RatedRecipe, RatingTotals, RecipeCategory};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{FeedbackTotalsRow, RecipeRow};
use super::pool::{DbPool, PoolError};
use super::schema::{feedbacks, recipes};

/// Diesel-backed implementation of [`RecipeCatalogueRepository`].
#[derive(Clone)]
pub struct DieselRecipeCatalogueRepository {
    pool: DbPool,
}

impl DieselRecipeCatalogueRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> RecipeCatalogueRepositoryError {
    map_pool_error(error, RecipeCatalogueRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> RecipeCatalogueRepositoryError {
    map_diesel_error(
        error,
        RecipeCatalogueRepositoryError::query,
        RecipeCatalogueRepositoryError::connection,
    )
}

fn to_totals(count: i64, sum: Option<i64>) -> Result<RatingTotals, RecipeCatalogueRepositoryError> {
    let count = u64::try_from(count).map_err(|_| {
        RecipeCatalogueRepositoryError::query(format!("negative feedback count {count}"))
    })?;
    Ok(RatingTotals {
        count,
        sum: sum.unwrap_or(0),
    })
}

fn rate(row: RecipeRow, totals: &HashMap<Uuid, RatingTotals>) -> RatedRecipe {
    let rating = totals
        .get(&row.id)
        .copied()
        .map_or(AggregatedRating::UNRATED, AggregatedRating::from_totals);
    RatedRecipe {
        id: row.id,
        title: row.title,
        description: row.description,
        category: row.category,
        created_at: row.created_at,
        rating,
    }
}

fn rate_all(
    recipe_rows: Vec<RecipeRow>,
    total_rows: Vec<FeedbackTotalsRow>,
) -> Result<Vec<RatedRecipe>, RecipeCatalogueRepositoryError> {
    let totals = total_rows
        .into_iter()
        .map(|(recipe_id, count, sum)| to_totals(count, sum).map(|totals| (recipe_id, totals)))
        .collect::<Result<HashMap<_, _>, _>>()?;

    Ok(recipe_rows
        .into_iter()
        .map(|row| rate(row, &totals))
        .collect())
}

#[async_trait]
impl RecipeCatalogueRepository for DieselRecipeCatalogueRepository {
    async fn list_rated_recipes(&self) -> Result<Vec<RatedRecipe>, RecipeCatalogueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let (recipe_rows, total_rows) = conn
            .transaction(|conn| {
                async move {
                    let recipe_rows: Vec<RecipeRow> = recipes::table
                        .select(RecipeRow::as_select())
                        .load(conn)
                        .await?;
                    let total_rows: Vec<FeedbackTotalsRow> = feedbacks::table
                        .group_by(feedbacks::recipe_id)
                        .select((feedbacks::recipe_id, count_star(), sum(feedbacks::rating)))
                        .load(conn)
                        .await?;
                    Ok::<_, diesel::result::Error>((recipe_rows, total_rows))
                }
                .scope_boxed()
            })
            .await
            .map_err(diesel_error)?;

        rate_all(recipe_rows, total_rows)
    }

    async fn list_rated_recipes_in(
        &self,
        category: RecipeCategory,
    ) -> Result<Vec<RatedRecipe>, RecipeCatalogueRepositoryError> {
        let key = category.as_str();
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let (recipe_rows, total_rows) = conn
            .transaction(|conn| {
                async move {
                    let recipe_rows: Vec<RecipeRow> = recipes::table
                        .filter(recipes::category.eq(key))
                        .select(RecipeRow::as_select())
                        .load(conn)
                        .await?;
                    let ids: Vec<Uuid> = recipe_rows.iter().map(|row| row.id).collect();
                    let total_rows: Vec<FeedbackTotalsRow> = feedbacks::table
                        .filter(feedbacks::recipe_id.eq_any(ids))
                        .group_by(feedbacks::recipe_id)
                        .select((feedbacks::recipe_id, count_star(), sum(feedbacks::rating)))
                        .load(conn)
                        .await?;
                    Ok::<_, diesel::result::Error>((recipe_rows, total_rows))
                }
                .scope_boxed()
            })
            .await
            .map_err(diesel_error)?;

        rate_all(recipe_rows, total_rows)
    }

    async fn rating_totals(
        &self,
        recipe_id: Uuid,
    ) -> Result<Option<RatingTotals>, RecipeCatalogueRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let aggregate = conn
            .transaction(|conn| {
                async move {
                    let exists = recipes::table
                        .find(recipe_id)
                        .select(recipes::id)
                        .first::<Uuid>(conn)
                        .await
                        .optional()?;
                    if exists.is_none() {
                        return Ok(None);
                    }
                    let aggregate: (i64, Option<i64>) = feedbacks::table
                        .filter(feedbacks::recipe_id.eq(recipe_id))
                        .select((count_star(), sum(feedbacks::rating)))
                        .first(conn)
                        .await?;
                    Ok::<_, diesel::result::Error>(Some(aggregate))
                }
                .scope_boxed()
            })
            .await
            .map_err(diesel_error)?;

        aggregate
            .map(|(count, sum)| to_totals(count, sum))
            .transpose()
    }
}
