//! Connection endpoint DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /api/connect`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ConnectRequest {
    /// Robot controller hostname or IP address.
    pub host: String,
    /// Robot controller TCP port (the UR primary interface listens on
    /// 30001/30002).
    pub port: u16,
}

/// Response body for `POST /api/connect`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ConnectResponse {
    /// Always `true` for success responses.
    pub success: bool,
    /// Human-readable status message.
    pub message: String,
}
