//! Shared validation helpers for inbound HTTP adapters.
//!
//! Query parameters arrive as raw strings so malformed values produce the
//! same JSON error envelope as every other validation failure.

use pagination::{DEFAULT_PAGE_SIZE, PageRequest};
use serde_json::json;
use uuid::Uuid;

use crate::domain::discovery::DiscoveryLimit;
use crate::domain::{CategoryRegistry, Error, RecipeCategory};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidInteger,
    OutOfRange,
    InvalidUuid,
    UnknownCategory,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidInteger => "invalid_integer",
            ErrorCode::OutOfRange => "out_of_range",
            ErrorCode::InvalidUuid => "invalid_uuid",
            ErrorCode::UnknownCategory => "unknown_category",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const CATEGORY: FieldName = FieldName::new("category");
pub(crate) const LIMIT: FieldName = FieldName::new("limit");
pub(crate) const PAGE: FieldName = FieldName::new("page");
pub(crate) const RECIPE_ID: FieldName = FieldName::new("recipeId");

fn field_error(field: FieldName, code: ErrorCode, message: String, value: &str) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

/// Parse the optional `limit` query parameter.
///
/// Absent means the default; integers outside `1..=50` are clamped.
pub(crate) fn parse_limit(raw: Option<&str>) -> Result<DiscoveryLimit, Error> {
    let Some(raw) = raw else {
        return Ok(DiscoveryLimit::default());
    };
    let requested = raw.trim().parse::<i64>().map_err(|_| {
        field_error(
            LIMIT,
            ErrorCode::InvalidInteger,
            format!("{} must be an integer", LIMIT.as_str()),
            raw,
        )
    })?;
    Ok(DiscoveryLimit::clamped(requested))
}

/// Parse the optional 1-based `page` query parameter into a featured page
/// request of [`DEFAULT_PAGE_SIZE`] items.
///
/// Pages beyond `u32::MAX` saturate and resolve to an empty page.
pub(crate) fn parse_page(raw: Option<&str>) -> Result<PageRequest, Error> {
    let Some(raw) = raw else {
        return Ok(PageRequest::first());
    };
    let page = raw.trim().parse::<i64>().map_err(|_| {
        field_error(
            PAGE,
            ErrorCode::InvalidInteger,
            format!("{} must be an integer", PAGE.as_str()),
            raw,
        )
    })?;
    let out_of_range = || {
        field_error(
            PAGE,
            ErrorCode::OutOfRange,
            format!("{} must be at least 1", PAGE.as_str()),
            raw,
        )
    };
    if page < 1 {
        return Err(out_of_range());
    }
    let page = u32::try_from(page).unwrap_or(u32::MAX);
    PageRequest::new(page, DEFAULT_PAGE_SIZE).map_err(|_| out_of_range())
}

/// Resolve a category path segment against the registry.
pub(crate) fn parse_category(raw: &str) -> Result<RecipeCategory, Error> {
    CategoryRegistry::lookup(raw)
        .map(|definition| definition.category)
        .map_err(|err| field_error(CATEGORY, ErrorCode::UnknownCategory, err.to_string(), raw))
}

pub(crate) fn parse_uuid(value: &str, field: FieldName) -> Result<Uuid, Error> {
    Uuid::parse_str(value).map_err(|_| {
        field_error(
            field,
            ErrorCode::InvalidUuid,
            format!("{} must be a valid UUID", field.as_str()),
            value,
        )
    })
}
