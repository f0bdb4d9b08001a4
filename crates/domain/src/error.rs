//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`HueBridgeError`] via `#[from]`. The `Display` text of the leaf errors is
//! the exact diagnostic returned to HTTP callers.

use std::fmt;

/// Top-level error for every light operation.
#[derive(Debug, thiserror::Error)]
pub enum HueBridgeError {
    /// A path parameter failed validation. Maps to `400 Bad Request`.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The bridge could not be reached or rejected the call. Maps to
    /// `500 Internal Server Error`.
    #[error("bridge error")]
    Bridge(#[from] BridgeFailure),
}

/// Rejections of untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The light index segment is not a non-negative integer.
    #[error("Index provided is not a valid light index.")]
    InvalidIndex,

    /// The light index does not address a light currently on the bridge.
    #[error("Index provided is greater than the amount of lights on the network.")]
    IndexOutOfRange { index: usize, len: usize },

    /// The brightness segment is not an integer at all.
    #[error("Brightness level is not a valid integer.")]
    InvalidBrightness,

    /// The brightness is an integer outside `[0, 254]`.
    #[error("Brightness level is not between [0-254].")]
    BrightnessOutOfRange,

    /// The color segment does not split into exactly three components.
    #[error("RGB value must have exactly three components separated by '-'.")]
    RgbComponentCount(usize),

    /// A color component is not an integer in `[0, 255]`.
    #[error("An RGB value provided is not between [0-255].")]
    RgbOutOfRange,
}

/// The bridge call that failed.
///
/// Selects the diagnostic message surfaced to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeOperation {
    ListLights,
    SetBrightness,
    SetColor,
}

impl BridgeOperation {
    /// Caller-facing message for a failure of this operation.
    #[must_use]
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::ListLights => "Could not connect to bridge to get the lights on the network.",
            Self::SetBrightness => "Could not change the brightness on light.",
            Self::SetColor => "Could not change the color on light.",
        }
    }
}

impl fmt::Display for BridgeOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ListLights => f.write_str("list_lights"),
            Self::SetBrightness => f.write_str("set_brightness"),
            Self::SetColor => f.write_str("set_color"),
        }
    }
}

/// A failed call into the bridge adapter.
///
/// The underlying adapter error is kept as the `source` so it can be logged,
/// but only [`BridgeOperation::failure_message`] is shown to callers.
#[derive(Debug, thiserror::Error)]
#[error("{}", .operation.failure_message())]
pub struct BridgeFailure {
    pub operation: BridgeOperation,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl BridgeFailure {
    /// Wrap an adapter error raised during `operation`.
    pub fn new(
        operation: BridgeOperation,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            operation,
            source: source.into(),
        }
    }
}
