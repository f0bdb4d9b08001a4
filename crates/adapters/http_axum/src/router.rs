//! Axum router assembly.

use std::time::Duration;

use axum::Router;
use axum::routing::get;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use huebridge_app::ports::LightBridge;

use crate::state::AppState;

/// Default bound on the total time spent handling one request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api`. Includes a [`TraceLayer`] that logs each
/// HTTP request/response at the `DEBUG` level using the `tracing` ecosystem,
/// and a [`TimeoutLayer`] answering `408` once `request_timeout` elapses.
#[allow(deprecated)]
pub fn build<B>(state: AppState<B>, request_timeout: Duration) -> Router
where
    B: LightBridge + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
