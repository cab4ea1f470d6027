//! PostgreSQL persistence adapters plus an in-memory stand-in.
//!
//! Diesel row structs (`models.rs`) and table definitions (`schema.rs`) stay
//! private to this module; repositories translate rows into domain types and
//! database failures into port errors.
//!
//! ```ignore
//! use recipes_backend::outbound::persistence::{
//!     DbPool, DieselRecipeCatalogueRepository, PoolConfig,
//! };
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/recipes")).await?;
//! let repository = DieselRecipeCatalogueRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_recipe_catalogue_repository;
mod in_memory_recipe_catalogue;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_recipe_catalogue_repository::DieselRecipeCatalogueRepository;
pub use in_memory_recipe_catalogue::{InMemoryRecipeCatalogue, StoredRecipe};
pub use migrations::{MigrationError, apply_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
