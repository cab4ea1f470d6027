//! HTTP inbound adapter exposing REST endpoints.

pub mod categories;
pub mod discovery;
pub mod error;
pub mod featured;
pub mod health;
pub mod ratings;
pub mod schemas;
pub mod state;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod validation;

pub use error::ApiResult;
