//! Light: the bridge's own description of a lamp.
//!
//! huebridge does not interpret a light's attributes. Whatever the bridge
//! reports is carried through untouched and serialized back to the caller.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A light as reported by the bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Light {
    /// Bridge-assigned identifier, used to address state changes.
    pub id: String,
    /// Raw attributes (`name`, `state`, `type`, …) exactly as the bridge sent them.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl Light {
    #[must_use]
    pub fn new(id: impl Into<String>, attributes: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            attributes,
        }
    }

    /// The human-readable name, if the bridge reported one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.attributes.get("name").and_then(Value::as_str)
    }
}
