//! Motion endpoint handlers: TCP translation, TCP rotation, joint moves.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};

use crate::api::dto::{JointMoveRequest, RotateRequest, TranslateRequest};
use crate::api::handlers::dispatch;
use crate::app_state::AppState;
use crate::domain::{JointNumber, RobotCommand};
use crate::error::{ErrorResponse, GatewayError};

/// `POST /api/tcp/translate` — Relative TCP translation.
///
/// # Errors
///
/// Returns [`GatewayError`] when the value is not finite or no robot
/// connection is active.
#[utoipa::path(
    post,
    path = "/api/tcp/translate",
    tag = "Motion",
    summary = "Translate the tool-center-point",
    description = "Renders and relays a linear move that offsets one Cartesian pose coordinate.",
    request_body = TranslateRequest,
    responses(
        (status = 200, description = "Command relayed", body = crate::api::dto::CommandResponse),
        (status = 400, description = "Invalid parameters", body = ErrorResponse),
        (status = 500, description = "Not connected to robot", body = ErrorResponse),
    )
)]
pub async fn translate(
    State(state): State<AppState>,
    Json(req): Json<TranslateRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    validate_value(req.value)?;
    let command = RobotCommand::Translate {
        axis: req.axis,
        value: req.value,
        direction: req.direction,
    };
    dispatch(&state, &command).await.map(Json)
}

/// `POST /api/tcp/rotate` — Relative TCP rotation.
///
/// # Errors
///
/// Returns [`GatewayError`] when the value is not finite or no robot
/// connection is active.
#[utoipa::path(
    post,
    path = "/api/tcp/rotate",
    tag = "Motion",
    summary = "Rotate the tool-center-point",
    description = "Renders and relays a linear move that offsets one orientation pose coordinate.",
    request_body = RotateRequest,
    responses(
        (status = 200, description = "Command relayed", body = crate::api::dto::CommandResponse),
        (status = 400, description = "Invalid parameters", body = ErrorResponse),
        (status = 500, description = "Not connected to robot", body = ErrorResponse),
    )
)]
pub async fn rotate(
    State(state): State<AppState>,
    Json(req): Json<RotateRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    validate_value(req.value)?;
    let command = RobotCommand::Rotate {
        axis: req.axis,
        value: req.value,
        direction: req.direction,
    };
    dispatch(&state, &command).await.map(Json)
}

/// `POST /api/joint/move` — Relative single-joint move.
///
/// # Errors
///
/// Returns [`GatewayError`] when the joint number is outside `1..=6`, the
/// value is not finite, or no robot connection is active.
#[utoipa::path(
    post,
    path = "/api/joint/move",
    tag = "Motion",
    summary = "Move a single joint",
    description = "Renders and relays a joint-space move that offsets one joint angle.",
    request_body = JointMoveRequest,
    responses(
        (status = 200, description = "Command relayed", body = crate::api::dto::CommandResponse),
        (status = 400, description = "Invalid parameters", body = ErrorResponse),
        (status = 500, description = "Not connected to robot", body = ErrorResponse),
    )
)]
pub async fn joint_move(
    State(state): State<AppState>,
    Json(req): Json<JointMoveRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    validate_value(req.value)?;
    let command = RobotCommand::JointMove {
        joint: JointNumber::new(req.joint)?,
        value: req.value,
        direction: req.direction,
    };
    dispatch(&state, &command).await.map(Json)
}

/// Motion routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/tcp/translate", post(translate))
        .route("/tcp/rotate", post(rotate))
        .route("/joint/move", post(joint_move))
}

/// Rejects non-finite offsets; serde_json already refuses NaN/Inf literals
/// but the check keeps the generator's input domain explicit.
fn validate_value(value: f64) -> Result<(), GatewayError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GatewayError::InvalidRequest(
            "value must be a finite number".to_string(),
        ))
    }
}
