//! # huebridge-adapter-hue
//!
//! Hue bridge adapter: implements [`LightBridge`] over the bridge's local
//! HTTP API using [reqwest](https://docs.rs/reqwest).
//!
//! ## Responsibilities
//! - `GET /api/{bridge-id}/lights` to enumerate lights
//! - `PUT /api/{bridge-id}/lights/{id}/state` to change brightness or color
//! - Translate the bridge's in-band errors into [`HueError`], then into the
//!   domain's [`BridgeFailure`](huebridge_domain::error::BridgeFailure)
//!
//! Bridge discovery and user creation are out of scope; the bridge host and
//! an already-authorized bridge id come from configuration.
//!
//! ## Dependency rule
//! Depends on `huebridge-app` (for the port trait) and `huebridge-domain`.

pub mod api;
pub mod color;
pub mod error;

use std::future::Future;

use huebridge_app::ports::LightBridge;
use huebridge_domain::brightness::BrightnessLevel;
use huebridge_domain::color::ColorRgba;
use huebridge_domain::error::{BridgeOperation, HueBridgeError};
use huebridge_domain::light::Light;

use crate::api::StateUpdate;
pub use crate::error::HueError;

/// Connection settings for one bridge.
#[derive(Debug, Clone)]
pub struct HueConfig {
    /// Bridge hostname or IP address, optionally with an `http://` scheme
    /// and a port.
    pub host: String,
    /// Authorized bridge username ("bridge id").
    pub username: String,
}

impl HueConfig {
    fn base_url(&self) -> String {
        let host = self.host.trim_end_matches('/');
        if host.starts_with("http://") {
            format!("{host}/api/{}", self.username)
        } else {
            format!("http://{host}/api/{}", self.username)
        }
    }
}

/// [`LightBridge`] backed by a shared `reqwest` connection pool.
///
/// No request timeout is set here; the HTTP layer bounds total request time.
#[derive(Debug, Clone)]
pub struct HueBridgeClient {
    http: reqwest::Client,
    base_url: String,
}

impl HueBridgeClient {
    /// Build a client for the bridge described by `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HueError::Client`] if the underlying client cannot be
    /// initialised.
    pub fn new(config: &HueConfig) -> Result<Self, HueError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(HueError::Client)?;
        Ok(Self {
            http,
            base_url: config.base_url(),
        })
    }

    async fn fetch_lights(&self) -> Result<Vec<Light>, HueError> {
        let url = format!("{}/lights", self.base_url);
        tracing::debug!(%url, "fetching lights");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(HueError::Transport)?;
        let body = read_body(response).await?;
        api::decode_lights(&body)
    }

    async fn put_state(&self, light_id: &str, update: &StateUpdate) -> Result<(), HueError> {
        let url = format!("{}/lights/{light_id}/state", self.base_url);
        tracing::debug!(%url, ?update, "updating light state");
        let response = self
            .http
            .put(&url)
            .json(update)
            .send()
            .await
            .map_err(HueError::Transport)?;
        let body = read_body(response).await?;
        api::decode_state_update(&body)
    }
}

async fn read_body(response: reqwest::Response) -> Result<Vec<u8>, HueError> {
    let status = response.status();
    if !status.is_success() {
        return Err(HueError::Status(status));
    }
    let bytes = response.bytes().await.map_err(HueError::Transport)?;
    Ok(bytes.to_vec())
}

impl LightBridge for HueBridgeClient {
    fn lights(&self) -> impl Future<Output = Result<Vec<Light>, HueBridgeError>> + Send {
        async move {
            self.fetch_lights()
                .await
                .map_err(|err| err.into_domain(BridgeOperation::ListLights))
        }
    }

    fn set_brightness(
        &self,
        light_id: &str,
        level: BrightnessLevel,
    ) -> impl Future<Output = Result<(), HueBridgeError>> + Send {
        let update = StateUpdate {
            on: Some(true),
            bri: Some(level.get()),
            ..StateUpdate::default()
        };
        async move {
            self.put_state(light_id, &update)
                .await
                .map_err(|err| err.into_domain(BridgeOperation::SetBrightness))
        }
    }

    fn set_color(
        &self,
        light_id: &str,
        color: ColorRgba,
    ) -> impl Future<Output = Result<(), HueBridgeError>> + Send {
        let update = StateUpdate {
            on: Some(true),
            xy: Some(crate::color::rgb_to_xy(color)),
            ..StateUpdate::default()
        };
        async move {
            self.put_state(light_id, &update)
                .await
                .map_err(|err| err.into_domain(BridgeOperation::SetColor))
        }
    }
}
