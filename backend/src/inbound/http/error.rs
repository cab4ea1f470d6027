//! JSON error responses for the HTTP adapter.
//!
//! Handlers return [`ApiResult`]; Actix renders the domain [`Error`] through
//! [`ResponseError`]. Validation failures keep their `details` so clients can
//! point at the offending field; internal failures reach clients only as a
//! generic message carrying the trace identifier.

use std::borrow::Cow;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

const REDACTED_MESSAGE: &str = "Internal server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Payload as clients see it.
fn client_view(error: &Error) -> Cow<'_, Error> {
    if error.code() != ErrorCode::InternalError {
        return Cow::Borrowed(error);
    }
    let redacted = Error::internal(REDACTED_MESSAGE);
    Cow::Owned(match error.trace_id() {
        Some(id) => redacted.with_trace_id(id),
        None => redacted,
    })
}

fn log_server_side(error: &Error) {
    let trace_id = error.trace_id().unwrap_or_default();
    match error.code() {
        ErrorCode::InternalError => {
            error!(message = error.message(), trace_id, "request failed");
        }
        ErrorCode::ServiceUnavailable => {
            warn!(message = error.message(), trace_id, "dependency unavailable");
        }
        ErrorCode::InvalidRequest | ErrorCode::NotFound => {}
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        log_server_side(self);

        let mut response = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            response.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        response.json(client_view(self).as_ref())
    }
}
