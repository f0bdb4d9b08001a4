//! JSON REST handlers for lights.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use huebridge_app::ports::LightBridge;
use huebridge_domain::light::Light;

use crate::api::segment;
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Light>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Light>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the brightness and color endpoints.
pub enum UpdateResponse {
    /// 200 OK with an empty body.
    Ok,
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok => StatusCode::OK.into_response(),
        }
    }
}

/// `GET /api/lights/`
pub async fn list<B>(State(state): State<AppState<B>>) -> Result<ListResponse, ApiError>
where
    B: LightBridge + Send + Sync + 'static,
{
    let lights = state.light_service.list_lights().await?;
    Ok(ListResponse::Ok(Json(lights)))
}

/// `GET /api/lights/{id}`
pub async fn get<B>(
    State(state): State<AppState<B>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    B: LightBridge + Send + Sync + 'static,
{
    if !segment::is_numeric(&id) {
        return Err(ApiError::NotFound);
    }
    let light = state.light_service.get_light(&id).await?;
    Ok(GetResponse::Ok(Json(light)))
}

/// `GET /api/lights/{id}/brightness/{level}`
pub async fn set_brightness<B>(
    State(state): State<AppState<B>>,
    Path((id, level)): Path<(String, String)>,
) -> Result<UpdateResponse, ApiError>
where
    B: LightBridge + Send + Sync + 'static,
{
    if !segment::is_numeric(&id) || !segment::is_numeric(&level) {
        return Err(ApiError::NotFound);
    }
    state.light_service.set_brightness(&id, &level).await?;
    Ok(UpdateResponse::Ok)
}

/// `GET /api/lights/{id}/color/{rgb}`
pub async fn set_color<B>(
    State(state): State<AppState<B>>,
    Path((id, rgb)): Path<(String, String)>,
) -> Result<UpdateResponse, ApiError>
where
    B: LightBridge + Send + Sync + 'static,
{
    if !segment::is_numeric(&id) || !segment::is_rgb(&rgb) {
        return Err(ApiError::NotFound);
    }
    state.light_service.set_color(&id, &rgb).await?;
    Ok(UpdateResponse::Ok)
}
