//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed and in-memory recipe catalogues
//! - **spoonacular**: HTTP client for the third-party recipe search provider
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod persistence;
pub mod spoonacular;
