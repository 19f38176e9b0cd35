//! HTTP error payloads and mapping from domain errors.
//!
//! Keep the domain free of transport concerns by translating
//! [`crate::domain::Error`] into Actix responses here. Validation failures
//! surface every violated field; operational failures stay opaque by design.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::validation::FieldViolation;

/// Message returned for every operational failure, whatever the cause.
const INTERNAL_MESSAGE: &str = "Internal server error";

/// Error envelope returned by HTTP handlers.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError(Error);

impl ApiError {
    /// Wrap an aggregated validation failure as a 400 response.
    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        Self(
            Error::invalid_request("request validation failed")
                .with_details(json!({ "errors": violations })),
        )
    }

    /// The wrapped domain error.
    pub fn inner(&self) -> &Error {
        &self.0
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        Self(error)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0.code() {
            ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if matches!(self.0.code(), ErrorCode::InternalError) {
            // No internal detail leaks to the client; the adapter already
            // logged the underlying failure.
            return builder.json(Error::internal(INTERNAL_MESSAGE));
        }
        builder.json(&self.0)
    }
}

/// Convenience alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;
