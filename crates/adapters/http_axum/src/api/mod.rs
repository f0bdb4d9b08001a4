//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod lights;
pub mod segment;

use axum::Router;
use axum::routing::get;

use huebridge_app::ports::LightBridge;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<B>() -> Router<AppState<B>>
where
    B: LightBridge + Send + Sync + 'static,
{
    Router::new()
        .route("/lights/", get(lights::list::<B>))
        .route("/lights/{id}", get(lights::get::<B>))
        .route(
            "/lights/{id}/brightness/{level}",
            get(lights::set_brightness::<B>),
        )
        .route("/lights/{id}/color/{rgb}", get(lights::set_color::<B>))
}
