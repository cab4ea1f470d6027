//! Recipe discovery and featured ranking service.
//!
//! The crate follows a hexagonal layout: [`domain`] holds category rules,
//! rating arithmetic, discovery degradation, and featured ranking behind the
//! traits in [`domain::ports`]; [`inbound`] adapts HTTP requests onto those
//! ports; [`outbound`] implements them against PostgreSQL and the recipe
//! search provider.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
