//! Program lifecycle and emergency stop handlers.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::ProgramStartRequest;
use crate::api::handlers::dispatch;
use crate::app_state::AppState;
use crate::domain::RobotCommand;
use crate::error::{ErrorResponse, GatewayError};

/// `POST /api/program/start` — Define a named program stub.
///
/// The generated body is an empty placeholder; assembling real program
/// bodies is a known gap inherited from the original backend.
///
/// # Errors
///
/// Returns [`GatewayError`] when the name is not a valid identifier or no
/// robot connection is active.
#[utoipa::path(
    post,
    path = "/api/program/start",
    tag = "Program",
    summary = "Start a named program",
    request_body = ProgramStartRequest,
    responses(
        (status = 200, description = "Command relayed", body = crate::api::dto::CommandResponse),
        (status = 400, description = "Invalid program name", body = ErrorResponse),
        (status = 500, description = "Not connected to robot", body = ErrorResponse),
    )
)]
pub async fn program_start(
    State(state): State<AppState>,
    Json(req): Json<ProgramStartRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let command = RobotCommand::program_start(&req.program_name)?;
    dispatch(&state, &command).await.map(Json)
}

/// `POST /api/program/stop` — Stop the running program.
///
/// # Errors
///
/// Returns [`GatewayError`] when no robot connection is active.
#[utoipa::path(
    post,
    path = "/api/program/stop",
    tag = "Program",
    summary = "Stop the running program",
    responses(
        (status = 200, description = "Command relayed", body = crate::api::dto::CommandResponse),
        (status = 500, description = "Not connected to robot", body = ErrorResponse),
    )
)]
pub async fn program_stop(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    dispatch(&state, &RobotCommand::ProgramStop).await.map(Json)
}

/// `POST /api/emergency-stop` — Immediate joint stop with deceleration.
///
/// # Errors
///
/// Returns [`GatewayError`] when no robot connection is active.
#[utoipa::path(
    post,
    path = "/api/emergency-stop",
    tag = "Program",
    summary = "Emergency stop",
    description = "Relays `stopj(10)`, decelerating all joints immediately.",
    responses(
        (status = 200, description = "Command relayed", body = crate::api::dto::CommandResponse),
        (status = 500, description = "Not connected to robot", body = ErrorResponse),
    )
)]
pub async fn emergency_stop(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    dispatch(&state, &RobotCommand::EmergencyStop).await.map(Json)
}

/// Program and emergency-stop routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/program/start", post(program_start))
        .route("/program/stop", post(program_stop))
        .route("/emergency-stop", post(emergency_stop))
}
