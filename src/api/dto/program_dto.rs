//! Program endpoint DTOs.

use serde::Deserialize;
use utoipa::ToSchema;

/// Request body for `POST /api/program/start`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ProgramStartRequest {
    /// URScript identifier naming the program to define.
    #[serde(rename = "programName")]
    pub program_name: String,
}
