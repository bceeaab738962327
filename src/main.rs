//! urscript-gateway server entry point.
//!
//! Starts the Axum HTTP server that relays motion commands to the robot.

use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use urscript_gateway::api;
use urscript_gateway::app_state::AppState;
use urscript_gateway::config::GatewayConfig;
use urscript_gateway::robot::RobotLink;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = GatewayConfig::from_env()?;
    tracing::info!(addr = %config.listen_addr, "starting urscript-gateway");

    // Build application state: one link, shared by every handler
    let app_state = AppState {
        robot: Arc::new(RobotLink::new(config.robot_connect_timeout)),
    };

    // Build router; CORS stays permissive for the browser frontend
    let app = api::build_router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
