//! Shared application state for axum handlers.

use std::sync::Arc;

use huebridge_app::ports::LightBridge;
use huebridge_app::services::light_service::LightService;

/// Application state shared across all axum handlers.
///
/// Generic over the bridge client to avoid dynamic dispatch.
/// `Clone` is implemented manually so the bridge type itself does not need to
/// be `Clone`; only the `Arc` wrapper is cloned.
pub struct AppState<B> {
    /// Light use-cases.
    pub light_service: Arc<LightService<B>>,
}

impl<B> Clone for AppState<B> {
    fn clone(&self) -> Self {
        Self {
            light_service: Arc::clone(&self.light_service),
        }
    }
}

impl<B> AppState<B>
where
    B: LightBridge + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(light_service: LightService<B>) -> Self {
        Self {
            light_service: Arc::new(light_service),
        }
    }
}
