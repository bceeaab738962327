//! Motion endpoint DTOs.
//!
//! Axis and direction fields deserialize straight into the domain enums,
//! so an unknown token is rejected by the extractor before a handler runs.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{CartesianAxis, Direction, RotationAxis};

/// Request body for `POST /api/tcp/translate`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TranslateRequest {
    /// Cartesian axis to translate along (`x`, `y`, or `z`).
    pub axis: CartesianAxis,
    /// Offset magnitude.
    pub value: f64,
    /// Offset sign (`+` or `-`).
    pub direction: Direction,
}

/// Request body for `POST /api/tcp/rotate`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RotateRequest {
    /// Rotation axis (`rx`, `ry`, or `rz`).
    pub axis: RotationAxis,
    /// Offset magnitude in radians.
    pub value: f64,
    /// Offset sign (`+` or `-`).
    pub direction: Direction,
}

/// Request body for `POST /api/joint/move`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct JointMoveRequest {
    /// One-based joint number (validated to `1..=6` in the handler).
    pub joint: u8,
    /// Offset magnitude in radians.
    pub value: f64,
    /// Offset sign (`+` or `-`).
    pub direction: Direction,
}
