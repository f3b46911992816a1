//! HTTP adapter mapping for domain errors.
//!
//! The domain error stays HTTP agnostic; this module decides status codes,
//! the trace header and which payloads are safe to show clients. Extractor
//! failures (malformed JSON, bad paths) are routed through the same envelope.

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use tracing::{debug, error};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn redact_if_internal(error: &Error) -> Error {
    if matches!(error.code(), ErrorCode::InternalError) {
        error!(
            trace_id = error.trace_id().unwrap_or("-"),
            message = error.message(),
            "internal error redacted from response"
        );
        let mut redacted = Error::internal("Internal server error");
        if let Some(id) = error.trace_id() {
            redacted = redacted.with_trace_id(id.to_owned());
        }
        redacted
    } else {
        error.clone()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }

        builder.json(redact_if_internal(self))
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        // Do not leak implementation details to clients.
        error!(error = %err, "actix error promoted to domain error");
        Error::internal("Internal server error")
    }
}

/// Map JSON body extraction failures onto the domain error envelope.
///
/// Registered through `web::JsonConfig::error_handler`.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected request body");
    let error = match &err {
        JsonPayloadError::ContentType => {
            Error::invalid_request("request body must be JSON").with_details(json!({
                "code": "unsupported_content_type",
            }))
        }
        JsonPayloadError::Overflow { limit }
        | JsonPayloadError::OverflowKnownLength { limit, .. } => {
            Error::invalid_request("request body is too large").with_details(json!({
                "code": "payload_too_large",
                "limit": limit,
            }))
        }
        other => Error::invalid_request("request body is not valid JSON").with_details(json!({
            "code": "invalid_json",
            "reason": other.to_string(),
        })),
    };
    actix_web::error::InternalError::from_response(err, error.error_response()).into()
}

/// Map path extraction failures onto the domain error envelope.
///
/// Registered through `web::PathConfig::error_handler`.
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected request path");
    let error = Error::invalid_request("request path is malformed").with_details(json!({
        "code": "invalid_path",
    }));
    actix_web::error::InternalError::from_response(err, error.error_response()).into()
}

#[cfg(test)]
mod tests;
