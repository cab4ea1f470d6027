//! Read-side port over persisted recipes and their feedback.
//!
//! The ranking core never writes. Adapters aggregate feedback in the store
//! (one grouped query per ranking pass) and hand back raw totals so the
//! domain owns the averaging rules.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Error, RatedRecipe, RatingTotals, RecipeCategory};

use super::define_port_error;

define_port_error! {
    /// Errors raised when reading recipes or feedback.
    pub enum RecipeCatalogueRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "recipe catalogue connection failed: {message}",
        /// Query failed during execution or row conversion.
        Query { message: String } =>
            "recipe catalogue query failed: {message}",
    }
}

/// Port for reading recipes annotated with feedback totals.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecipeCatalogueRepository: Send + Sync {
    /// Every stored recipe with its current rating, in no particular order.
    async fn list_rated_recipes(&self) -> Result<Vec<RatedRecipe>, RecipeCatalogueRepositoryError>;

    /// Stored recipes whose category key matches `category`, with ratings.
    async fn list_rated_recipes_in(
        &self,
        category: RecipeCategory,
    ) -> Result<Vec<RatedRecipe>, RecipeCatalogueRepositoryError>;

    /// Feedback totals for one recipe; `None` when the recipe does not exist.
    async fn rating_totals(
        &self,
        recipe_id: Uuid,
    ) -> Result<Option<RatingTotals>, RecipeCatalogueRepositoryError>;
}

/// Fixture implementation backed by an empty catalogue.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRecipeCatalogueRepository;

#[async_trait]
impl RecipeCatalogueRepository for FixtureRecipeCatalogueRepository {
    async fn list_rated_recipes(&self) -> Result<Vec<RatedRecipe>, RecipeCatalogueRepositoryError> {
        Ok(Vec::new())
    }

    async fn list_rated_recipes_in(
        &self,
        _category: RecipeCategory,
    ) -> Result<Vec<RatedRecipe>, RecipeCatalogueRepositoryError> {
        Ok(Vec::new())
    }

    async fn rating_totals(
        &self,
        _recipe_id: Uuid,
    ) -> Result<Option<RatingTotals>, RecipeCatalogueRepositoryError> {
        Ok(None)
    }
}

impl From<RecipeCatalogueRepositoryError> for Error {
    fn from(err: RecipeCatalogueRepositoryError) -> Self {
        match err {
            RecipeCatalogueRepositoryError::Connection { message } => {
                Error::service_unavailable(message)
            }
            RecipeCatalogueRepositoryError::Query { message } => Error::internal(message),
        }
    }
}
