//! Brightness on the Hue scale.

use std::fmt;
use std::num::IntErrorKind;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValidationError;

/// Brightness level in `[0, 254]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct BrightnessLevel(u8);

impl BrightnessLevel {
    /// Highest brightness the bridge accepts.
    pub const MAX: u8 = 254;

    /// Validate a raw level.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::BrightnessOutOfRange`] when `level > 254`.
    pub fn new(level: i64) -> Result<Self, ValidationError> {
        u8::try_from(level)
            .ok()
            .filter(|level| *level <= Self::MAX)
            .map(Self)
            .ok_or(ValidationError::BrightnessOutOfRange)
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for BrightnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for BrightnessLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<i64>() {
            Ok(level) => Self::new(level),
            Err(err)
                if matches!(
                    err.kind(),
                    IntErrorKind::PosOverflow | IntErrorKind::NegOverflow
                ) =>
            {
                Err(ValidationError::BrightnessOutOfRange)
            }
            Err(_) => Err(ValidationError::InvalidBrightness),
        }
    }
}
