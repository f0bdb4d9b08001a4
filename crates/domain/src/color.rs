//! RGB colors decoded from `R-G-B` path segments.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValidationError;

/// Separator between the components of a color segment.
pub const COMPONENT_SEPARATOR: char = '-';

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorRgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// An 8-bit RGBA color as handed to the bridge adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ColorRgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ColorRgb {
    #[must_use]
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The same color, fully opaque.
    #[must_use]
    pub fn opaque(self) -> ColorRgba {
        ColorRgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a: u8::MAX,
        }
    }
}

impl fmt::Display for ColorRgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.r, self.g, self.b)
    }
}

fn parse_component(value: &str) -> Result<u8, ValidationError> {
    value
        .parse::<u8>()
        .map_err(|_| ValidationError::RgbOutOfRange)
}

impl FromStr for ColorRgb {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(COMPONENT_SEPARATOR).collect();
        let [r, g, b] = parts.as_slice() else {
            return Err(ValidationError::RgbComponentCount(parts.len()));
        };
        Ok(Self {
            r: parse_component(r)?,
            g: parse_component(g)?,
            b: parse_component(b)?,
        })
    }
}
