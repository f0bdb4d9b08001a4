//! Light service: validates light requests and forwards them to the bridge.
//!
//! Every operation parses and range-checks all of its parameters before the
//! first bridge call, so a rejected request never reaches the bridge. The
//! index bound can only be checked once the light list is known; it is
//! checked before the single mutation is issued.

use huebridge_domain::brightness::BrightnessLevel;
use huebridge_domain::color::ColorRgb;
use huebridge_domain::error::HueBridgeError;
use huebridge_domain::index::LightIndex;
use huebridge_domain::light::Light;

use crate::ports::LightBridge;

/// Application service for reading and changing lights.
pub struct LightService<B> {
    bridge: B,
}

impl<B: LightBridge> LightService<B> {
    /// Create a new service backed by the given bridge client.
    pub fn new(bridge: B) -> Self {
        Self { bridge }
    }

    /// List every light on the bridge.
    ///
    /// # Errors
    ///
    /// Returns [`HueBridgeError::Bridge`] when the bridge cannot be reached.
    #[tracing::instrument(skip(self))]
    pub async fn list_lights(&self) -> Result<Vec<Light>, HueBridgeError> {
        self.bridge.lights().await
    }

    /// Fetch the light at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HueBridgeError::Validation`] if `index` is malformed or out
    /// of range, or [`HueBridgeError::Bridge`] if the light list cannot be
    /// fetched.
    #[tracing::instrument(skip(self))]
    pub async fn get_light(&self, index: &str) -> Result<Light, HueBridgeError> {
        let index: LightIndex = index.parse()?;
        self.resolve(index).await
    }

    /// Set the brightness of the light at position `index`.
    ///
    /// # Errors
    ///
    /// Returns [`HueBridgeError::Validation`] if `index` or `level` is
    /// malformed or out of range, or [`HueBridgeError::Bridge`] if the bridge
    /// rejects either call.
    #[tracing::instrument(skip(self))]
    pub async fn set_brightness(&self, index: &str, level: &str) -> Result<(), HueBridgeError> {
        let index: LightIndex = index.parse()?;
        let level: BrightnessLevel = level.parse()?;
        let light = self.resolve(index).await?;
        self.bridge.set_brightness(&light.id, level).await?;
        tracing::info!(light_id = %light.id, name = ?light.name(), %level, "brightness changed");
        Ok(())
    }

    /// Set the color of the light at position `index` from an `R-G-B` string.
    ///
    /// The color is always sent fully opaque.
    ///
    /// # Errors
    ///
    /// Returns [`HueBridgeError::Validation`] if `index` or `rgb` is
    /// malformed or out of range, or [`HueBridgeError::Bridge`] if the bridge
    /// rejects either call.
    #[tracing::instrument(skip(self))]
    pub async fn set_color(&self, index: &str, rgb: &str) -> Result<(), HueBridgeError> {
        let index: LightIndex = index.parse()?;
        let color: ColorRgb = rgb.parse()?;
        let light = self.resolve(index).await?;
        self.bridge.set_color(&light.id, color.opaque()).await?;
        tracing::info!(light_id = %light.id, name = ?light.name(), %color, "color changed");
        Ok(())
    }

    async fn resolve(&self, index: LightIndex) -> Result<Light, HueBridgeError> {
        let lights = self.bridge.lights().await?;
        Ok(index.select(&lights)?.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use huebridge_domain::color::ColorRgba;
    use huebridge_domain::error::{BridgeFailure, BridgeOperation, ValidationError};
    use std::future::Future;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Lights,
        Brightness(String, u8),
        Color(String, ColorRgba),
    }

    #[derive(Default)]
    struct StubBridge {
        lights: Vec<Light>,
        unreachable: bool,
        reject_mutations: bool,
        calls: Mutex<Vec<Call>>,
    }

    impl StubBridge {
        fn with_lights(count: usize) -> Self {
            let lights = (1..=count)
                .map(|id| Light::new(id.to_string(), serde_json::Map::new()))
                .collect();
            Self {
                lights,
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: Call) {
            self.calls.lock().unwrap().push(call);
        }
    }

    impl LightBridge for StubBridge {
        fn lights(&self) -> impl Future<Output = Result<Vec<Light>, HueBridgeError>> + Send {
            self.record(Call::Lights);
            let result = if self.unreachable {
                Err(BridgeFailure::new(BridgeOperation::ListLights, "connection refused").into())
            } else {
                Ok(self.lights.clone())
            };
            async { result }
        }

        fn set_brightness(
            &self,
            light_id: &str,
            level: BrightnessLevel,
        ) -> impl Future<Output = Result<(), HueBridgeError>> + Send {
            self.record(Call::Brightness(light_id.to_string(), level.get()));
            let result = if self.reject_mutations {
                Err(BridgeFailure::new(BridgeOperation::SetBrightness, "unauthorized").into())
            } else {
                Ok(())
            };
            async { result }
        }

        fn set_color(
            &self,
            light_id: &str,
            color: ColorRgba,
        ) -> impl Future<Output = Result<(), HueBridgeError>> + Send {
            self.record(Call::Color(light_id.to_string(), color));
            let result = if self.reject_mutations {
                Err(BridgeFailure::new(BridgeOperation::SetColor, "unauthorized").into())
            } else {
                Ok(())
            };
            async { result }
        }
    }

    fn validation(err: HueBridgeError) -> ValidationError {
        match err {
            HueBridgeError::Validation(err) => err,
            HueBridgeError::Bridge(err) => panic!("expected validation error, got {err}"),
        }
    }

    fn bridge_operation(err: HueBridgeError) -> BridgeOperation {
        match err {
            HueBridgeError::Bridge(err) => err.operation,
            HueBridgeError::Validation(err) => panic!("expected bridge error, got {err}"),
        }
    }

    #[tokio::test]
    async fn should_list_all_lights() {
        let svc = LightService::new(StubBridge::with_lights(3));
        let lights = svc.list_lights().await.unwrap();
        let ids: Vec<&str> = lights.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[tokio::test]
    async fn should_fail_list_once_when_bridge_unreachable() {
        let svc = LightService::new(StubBridge {
            unreachable: true,
            ..StubBridge::default()
        });
        let err = svc.list_lights().await.unwrap_err();
        assert_eq!(bridge_operation(err), BridgeOperation::ListLights);
        assert_eq!(svc.bridge.calls(), [Call::Lights]);
    }

    #[tokio::test]
    async fn should_get_light_at_every_valid_index() {
        let svc = LightService::new(StubBridge::with_lights(3));
        for index in 0..3 {
            let light = svc.get_light(&index.to_string()).await.unwrap();
            assert_eq!(light.id, (index + 1).to_string());
        }
    }

    #[tokio::test]
    async fn should_reject_index_equal_to_light_count() {
        let svc = LightService::new(StubBridge::with_lights(3));
        let err = svc.get_light("3").await.unwrap_err();
        assert_eq!(
            validation(err),
            ValidationError::IndexOutOfRange { index: 3, len: 3 }
        );
    }

    #[tokio::test]
    async fn should_reject_malformed_index_without_calling_bridge() {
        let svc = LightService::new(StubBridge::with_lights(3));
        let err = svc.get_light("one").await.unwrap_err();
        assert_eq!(validation(err), ValidationError::InvalidIndex);
        assert!(svc.bridge.calls().is_empty());
    }

    #[tokio::test]
    async fn should_report_connectivity_failure_on_get_light() {
        let svc = LightService::new(StubBridge {
            unreachable: true,
            ..StubBridge::default()
        });
        let err = svc.get_light("0").await.unwrap_err();
        assert_eq!(bridge_operation(err), BridgeOperation::ListLights);
    }

    #[tokio::test]
    async fn should_set_brightness_on_resolved_light() {
        let svc = LightService::new(StubBridge::with_lights(3));
        svc.set_brightness("1", "254").await.unwrap();
        assert_eq!(
            svc.bridge.calls(),
            [Call::Lights, Call::Brightness("2".to_string(), 254)]
        );
    }

    #[tokio::test]
    async fn should_accept_zero_brightness() {
        let svc = LightService::new(StubBridge::with_lights(1));
        svc.set_brightness("0", "0").await.unwrap();
        assert_eq!(
            svc.bridge.calls(),
            [Call::Lights, Call::Brightness("1".to_string(), 0)]
        );
    }

    #[tokio::test]
    async fn should_reject_brightness_out_of_range_without_calling_bridge() {
        let svc = LightService::new(StubBridge::with_lights(3));
        for level in ["255", "300", "-1"] {
            let err = svc.set_brightness("0", level).await.unwrap_err();
            assert_eq!(validation(err), ValidationError::BrightnessOutOfRange);
        }
        assert!(svc.bridge.calls().is_empty());
    }

    #[tokio::test]
    async fn should_reject_non_numeric_brightness() {
        let svc = LightService::new(StubBridge::with_lights(3));
        let err = svc.set_brightness("0", "max").await.unwrap_err();
        assert_eq!(validation(err), ValidationError::InvalidBrightness);
        assert!(svc.bridge.calls().is_empty());
    }

    #[tokio::test]
    async fn should_reject_brightness_for_missing_light_without_mutating() {
        let svc = LightService::new(StubBridge::with_lights(2));
        let err = svc.set_brightness("2", "100").await.unwrap_err();
        assert!(matches!(
            validation(err),
            ValidationError::IndexOutOfRange { .. }
        ));
        assert_eq!(svc.bridge.calls(), [Call::Lights]);
    }

    #[tokio::test]
    async fn should_report_connectivity_failure_on_set_brightness_without_mutating() {
        let svc = LightService::new(StubBridge {
            unreachable: true,
            ..StubBridge::default()
        });
        let err = svc.set_brightness("0", "10").await.unwrap_err();
        assert_eq!(bridge_operation(err), BridgeOperation::ListLights);
        assert_eq!(svc.bridge.calls(), [Call::Lights]);
    }

    #[tokio::test]
    async fn should_report_brightness_failure_once() {
        let svc = LightService::new(StubBridge {
            reject_mutations: true,
            ..StubBridge::with_lights(1)
        });
        let err = svc.set_brightness("0", "10").await.unwrap_err();
        assert_eq!(bridge_operation(err), BridgeOperation::SetBrightness);
        assert_eq!(
            svc.bridge.calls(),
            [Call::Lights, Call::Brightness("1".to_string(), 10)]
        );
    }

    #[tokio::test]
    async fn should_set_opaque_color_on_resolved_light() {
        let svc = LightService::new(StubBridge::with_lights(3));
        svc.set_color("2", "255-0-128").await.unwrap();
        assert_eq!(
            svc.bridge.calls(),
            [
                Call::Lights,
                Call::Color(
                    "3".to_string(),
                    ColorRgba {
                        r: 255,
                        g: 0,
                        b: 128,
                        a: 255
                    }
                )
            ]
        );
    }

    #[tokio::test]
    async fn should_reject_color_component_out_of_range_without_calling_bridge() {
        let svc = LightService::new(StubBridge::with_lights(3));
        let err = svc.set_color("0", "10-20-300").await.unwrap_err();
        assert_eq!(validation(err), ValidationError::RgbOutOfRange);
        assert!(svc.bridge.calls().is_empty());
    }

    #[tokio::test]
    async fn should_reject_wrong_component_count_without_calling_bridge() {
        let svc = LightService::new(StubBridge::with_lights(3));
        let err = svc.set_color("0", "10-20").await.unwrap_err();
        assert_eq!(validation(err), ValidationError::RgbComponentCount(2));
        assert!(svc.bridge.calls().is_empty());
    }

    #[tokio::test]
    async fn should_report_rgb_error_before_index_bound() {
        let svc = LightService::new(StubBridge::with_lights(3));
        let err = svc.set_color("5", "10-20-300").await.unwrap_err();
        assert_eq!(validation(err), ValidationError::RgbOutOfRange);
    }

    #[tokio::test]
    async fn should_reject_color_for_missing_light() {
        let svc = LightService::new(StubBridge::with_lights(3));
        let err = svc.set_color("5", "10-20-30").await.unwrap_err();
        assert!(matches!(
            validation(err),
            ValidationError::IndexOutOfRange { index: 5, len: 3 }
        ));
        assert_eq!(svc.bridge.calls(), [Call::Lights]);
    }

    #[tokio::test]
    async fn should_report_connectivity_failure_on_set_color_without_mutating() {
        let svc = LightService::new(StubBridge {
            unreachable: true,
            ..StubBridge::default()
        });
        let err = svc.set_color("0", "1-2-3").await.unwrap_err();
        assert_eq!(bridge_operation(err), BridgeOperation::ListLights);
        assert_eq!(svc.bridge.calls(), [Call::Lights]);
    }

    #[tokio::test]
    async fn should_report_color_failure_once() {
        let svc = LightService::new(StubBridge {
            reject_mutations: true,
            ..StubBridge::with_lights(1)
        });
        let err = svc.set_color("0", "1-2-3").await.unwrap_err();
        assert_eq!(bridge_operation(err), BridgeOperation::SetColor);
        assert_eq!(svc.bridge.calls().len(), 2);
    }
}
