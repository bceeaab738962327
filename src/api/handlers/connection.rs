//! Connection endpoint handler.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{ConnectRequest, ConnectResponse};
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /api/connect` — Open (or replace) the robot connection.
///
/// Any existing connection is closed first; at most one outbound
/// connection exists at a time.
///
/// # Errors
///
/// Returns [`GatewayError`] when the host is empty, the port is zero, or
/// the dial fails.
#[utoipa::path(
    post,
    path = "/api/connect",
    tag = "Connection",
    summary = "Connect to the robot controller",
    description = "Opens a TCP connection to the robot controller, replacing any existing one.",
    request_body = ConnectRequest,
    responses(
        (status = 200, description = "Connected", body = ConnectResponse),
        (status = 400, description = "Invalid host or port", body = ErrorResponse),
        (status = 500, description = "Connection failed", body = ErrorResponse),
    )
)]
pub async fn connect_robot(
    State(state): State<AppState>,
    Json(req): Json<ConnectRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    if req.host.trim().is_empty() {
        return Err(GatewayError::InvalidRequest(
            "host must not be empty".to_string(),
        ));
    }
    if req.port == 0 {
        return Err(GatewayError::InvalidRequest(
            "port must be non-zero".to_string(),
        ));
    }

    state.robot.connect(&req.host, req.port).await?;

    Ok(Json(ConnectResponse {
        success: true,
        message: "Connected to robot".to_string(),
    }))
}

/// Connection routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/connect", post(connect_robot))
}
