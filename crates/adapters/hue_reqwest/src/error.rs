//! Hue adapter error types.

use huebridge_domain::error::{BridgeFailure, BridgeOperation, HueBridgeError};

/// Errors specific to the Hue adapter.
#[derive(Debug, thiserror::Error)]
pub enum HueError {
    /// The reqwest client could not be built.
    #[error("failed to build HTTP client")]
    Client(#[source] reqwest::Error),

    /// The request never got an answer (connection refused, DNS, reset, …).
    #[error("bridge request failed")]
    Transport(#[source] reqwest::Error),

    /// The bridge answered with a non-success HTTP status.
    #[error("bridge answered with HTTP status {0}")]
    Status(reqwest::StatusCode),

    /// The response body is not the JSON shape the bridge API documents.
    #[error("failed to decode bridge response")]
    Decode(#[source] serde_json::Error),

    /// The bridge accepted the request but reported an API error
    /// (unauthorized user, unknown resource, light unreachable, …).
    #[error("bridge rejected request: {description} (type {kind}, address {address})")]
    Api {
        kind: u16,
        address: String,
        description: String,
    },

    /// The response decoded but carried neither data nor an error.
    #[error("bridge returned an unexpected response")]
    UnexpectedResponse,
}

impl HueError {
    /// Convert into a [`HueBridgeError::Bridge`] for propagation across the
    /// port boundary.
    pub fn into_domain(self, operation: BridgeOperation) -> HueBridgeError {
        BridgeFailure::new(operation, self).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_api_error_details() {
        let err = HueError::Api {
            kind: 1,
            address: "/lights".to_string(),
            description: "unauthorized user".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "bridge rejected request: unauthorized user (type 1, address /lights)"
        );
    }

    #[test]
    fn should_convert_into_bridge_failure_for_operation() {
        let err = HueError::UnexpectedResponse.into_domain(BridgeOperation::SetColor);
        match err {
            HueBridgeError::Bridge(failure) => {
                assert_eq!(failure.operation, BridgeOperation::SetColor);
                assert_eq!(failure.to_string(), "Could not change the color on light.");
            }
            HueBridgeError::Validation(_) => panic!("expected bridge failure"),
        }
    }

    #[test]
    fn should_display_status_error() {
        let err = HueError::Status(reqwest::StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            err.to_string(),
            "bridge answered with HTTP status 503 Service Unavailable"
        );
    }
}
