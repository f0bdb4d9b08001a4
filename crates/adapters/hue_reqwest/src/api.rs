//! Wire types for the bridge's local HTTP API (v1).
//!
//! Error reporting is in-band: the bridge answers `200 OK` with a JSON array
//! of `{"error": {...}}` items when a request is rejected.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use huebridge_domain::light::Light;

use crate::error::HueError;

/// An API error entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    #[serde(rename = "type")]
    pub kind: u16,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
}

impl From<ApiErrorDetail> for HueError {
    fn from(detail: ApiErrorDetail) -> Self {
        Self::Api {
            kind: detail.kind,
            address: detail.address,
            description: detail.description,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ResponseItem {
    Success(#[allow(dead_code)] Value),
    Error(ApiErrorDetail),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LightsResponse {
    Lights(HashMap<String, Map<String, Value>>),
    Items(Vec<ResponseItem>),
}

/// Body of `PUT /lights/{id}/state`.
///
/// The bridge refuses `bri` and `xy` for a light that is off, so every
/// update sent by this adapter also switches the light on.
#[derive(Debug, Default, Serialize)]
pub struct StateUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bri: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xy: Option<[f32; 2]>,
}

fn first_error(items: Vec<ResponseItem>) -> Option<HueError> {
    items.into_iter().find_map(|item| match item {
        ResponseItem::Error(detail) => Some(detail.into()),
        ResponseItem::Success(_) => None,
    })
}

/// Decode the answer to `GET /lights`.
///
/// Lights are ordered by numeric bridge id so positional indices stay stable
/// between calls. Ids that are not numbers sort last, by string.
///
/// # Errors
///
/// Returns [`HueError::Api`] if the bridge reported an error, or
/// [`HueError::Decode`] if the body is not valid.
pub fn decode_lights(body: &[u8]) -> Result<Vec<Light>, HueError> {
    match serde_json::from_slice(body).map_err(HueError::Decode)? {
        LightsResponse::Lights(lights) => {
            let mut lights: Vec<Light> = lights
                .into_iter()
                .map(|(id, attributes)| Light::new(id, attributes))
                .collect();
            lights.sort_by(|a, b| sort_key(&a.id).cmp(&sort_key(&b.id)));
            Ok(lights)
        }
        LightsResponse::Items(items) => {
            Err(first_error(items).unwrap_or(HueError::UnexpectedResponse))
        }
    }
}

fn sort_key(id: &str) -> (u64, &str) {
    (id.parse().unwrap_or(u64::MAX), id)
}

/// Decode the answer to `PUT /lights/{id}/state`.
///
/// # Errors
///
/// Returns [`HueError::Api`] for the first error item, or
/// [`HueError::UnexpectedResponse`] when nothing was acknowledged.
pub fn decode_state_update(body: &[u8]) -> Result<(), HueError> {
    let items: Vec<ResponseItem> = serde_json::from_slice(body).map_err(HueError::Decode)?;
    if items.is_empty() {
        return Err(HueError::UnexpectedResponse);
    }
    match first_error(items) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
