//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::robot::RobotLink;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The single robot connection, shared by every handler.
    pub robot: Arc<RobotLink>,
}
