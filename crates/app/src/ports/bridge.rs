//! Bridge port: the calls huebridge makes against a Hue bridge.

use std::future::Future;

use huebridge_domain::brightness::BrightnessLevel;
use huebridge_domain::color::ColorRgba;
use huebridge_domain::error::HueBridgeError;
use huebridge_domain::light::Light;

/// Client for a single Hue bridge.
///
/// Implementations report failures as [`HueBridgeError::Bridge`] tagged with
/// the operation that failed. They must not retry.
pub trait LightBridge {
    /// Every light the bridge currently knows, ordered so that positional
    /// indices are stable between calls.
    fn lights(&self) -> impl Future<Output = Result<Vec<Light>, HueBridgeError>> + Send;

    /// Set the brightness of the light with bridge id `light_id`.
    fn set_brightness(
        &self,
        light_id: &str,
        level: BrightnessLevel,
    ) -> impl Future<Output = Result<(), HueBridgeError>> + Send;

    /// Set the color of the light with bridge id `light_id`.
    fn set_color(
        &self,
        light_id: &str,
        color: ColorRgba,
    ) -> impl Future<Output = Result<(), HueBridgeError>> + Send;
}

impl<T: LightBridge + Send + Sync> LightBridge for std::sync::Arc<T> {
    fn lights(&self) -> impl Future<Output = Result<Vec<Light>, HueBridgeError>> + Send {
        (**self).lights()
    }

    fn set_brightness(
        &self,
        light_id: &str,
        level: BrightnessLevel,
    ) -> impl Future<Output = Result<(), HueBridgeError>> + Send {
        (**self).set_brightness(light_id, level)
    }

    fn set_color(
        &self,
        light_id: &str,
        color: ColorRgba,
    ) -> impl Future<Output = Result<(), HueBridgeError>> + Send {
        (**self).set_color(light_id, color)
    }
}
