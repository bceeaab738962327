//! REST endpoint handlers organized by resource.

pub mod connection;
pub mod motion;
pub mod program;
pub mod system;

use axum::Router;

use crate::api::dto::CommandResponse;
use crate::app_state::AppState;
use crate::domain::RobotCommand;
use crate::error::GatewayError;

/// Composes all command routes mounted under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(connection::routes())
        .merge(motion::routes())
        .merge(program::routes())
}

/// Renders a command and writes it to the robot link.
///
/// Every dispatch endpoint funnels through here: render, send, log,
/// respond with the rendered text and a timestamp.
pub(crate) async fn dispatch(
    state: &AppState,
    command: &RobotCommand,
) -> Result<CommandResponse, GatewayError> {
    let script = command.render();
    state.robot.send(&script).await?;
    tracing::info!(kind = command.kind(), "command relayed to robot");
    Ok(CommandResponse::sent(script))
}
