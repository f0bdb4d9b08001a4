//! HTTP error response mapping.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use huebridge_domain::error::HueBridgeError;

/// Content type of every diagnostic body.
pub const TEXT_CONTENT_TYPE: &str = "application/text";

/// Maps handler failures to an HTTP response with appropriate status code.
#[derive(Debug)]
pub enum ApiError {
    /// A path segment failed the coarse route filter. Answered like an
    /// unmatched route.
    NotFound,
    /// The service rejected the request or the bridge failed.
    Domain(HueBridgeError),
}

impl From<HueBridgeError> for ApiError {
    fn from(err: HueBridgeError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound => return StatusCode::NOT_FOUND.into_response(),
            Self::Domain(HueBridgeError::Validation(err)) => {
                tracing::debug!(error = %err, "rejected request");
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(HueBridgeError::Bridge(err)) => {
                tracing::error!(
                    operation = %err.operation,
                    error = %err.source,
                    "bridge error"
                );
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)], message).into_response()
    }
}
