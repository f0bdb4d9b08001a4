//! Positional light index.
//!
//! A light is addressed by its position in the bridge's current light list,
//! not by a persistent identifier. The same index can point at a different
//! light after the bridge's light set changes.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValidationError;

/// Non-negative position of a light in the bridge's light list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct LightIndex(usize);

impl LightIndex {
    /// Wrap a raw position.
    #[must_use]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Access the raw position.
    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }

    /// Pick the light at this position.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::IndexOutOfRange`] when `index >= items.len()`.
    pub fn select<T>(self, items: &[T]) -> Result<&T, ValidationError> {
        items.get(self.0).ok_or(ValidationError::IndexOutOfRange {
            index: self.0,
            len: items.len(),
        })
    }
}

impl fmt::Display for LightIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for LightIndex {
    type Err = ValidationError;

    /// Accepts ASCII digits only. A digit string too large for `usize` can
    /// never address a light, so it saturates and fails the bound check later.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidIndex);
        }
        Ok(Self(s.parse().unwrap_or(usize::MAX)))
    }
}
