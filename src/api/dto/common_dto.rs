//! Shared DTO types used across multiple endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Success body returned by every command-dispatch endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct CommandResponse {
    /// Always `true` for success responses.
    pub success: bool,
    /// The URScript text that was relayed to the robot.
    pub command: String,
    /// Dispatch timestamp (RFC 3339 UTC).
    pub timestamp: DateTime<Utc>,
}

impl CommandResponse {
    /// Builds the success response for a script that was just written.
    #[must_use]
    pub fn sent(command: String) -> Self {
        Self {
            success: true,
            command,
            timestamp: Utc::now(),
        }
    }
}
