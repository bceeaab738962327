//! Robot command descriptor.
//!
//! [`RobotCommand`] is the typed form of one inbound request: constructed
//! from validated DTO fields, rendered once into URScript, then discarded.

use crate::domain::{CartesianAxis, Direction, JointNumber, RotationAxis};
use crate::error::GatewayError;
use crate::urscript;

/// One fully-validated robot operation.
#[derive(Debug, Clone, PartialEq)]
pub enum RobotCommand {
    /// Relative TCP translation along a Cartesian axis.
    Translate {
        /// Axis to translate along.
        axis: CartesianAxis,
        /// Offset magnitude.
        value: f64,
        /// Offset sign.
        direction: Direction,
    },
    /// Relative TCP rotation about a Cartesian axis.
    Rotate {
        /// Axis to rotate about.
        axis: RotationAxis,
        /// Offset magnitude in radians.
        value: f64,
        /// Offset sign.
        direction: Direction,
    },
    /// Relative move of a single joint.
    JointMove {
        /// Joint to move (1-based, validated).
        joint: JointNumber,
        /// Offset magnitude in radians.
        value: f64,
        /// Offset sign.
        direction: Direction,
    },
    /// Start of a named program (empty stub body).
    ProgramStart {
        /// URScript identifier naming the program.
        name: String,
    },
    /// Stop the running program.
    ProgramStop,
    /// Emergency joint stop with fixed deceleration.
    EmergencyStop,
}

impl RobotCommand {
    /// Builds a [`RobotCommand::ProgramStart`], validating the name.
    ///
    /// The name is embedded verbatim into `def <name>():`, so it must be
    /// a valid URScript identifier. Anything else would produce a script
    /// the controller rejects, or worse, let the caller splice arbitrary
    /// script through the name field.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] if the name is empty or
    /// contains characters outside `[A-Za-z0-9_]` (or starts with a digit).
    pub fn program_start(name: &str) -> Result<Self, GatewayError> {
        if !is_valid_identifier(name) {
            return Err(GatewayError::InvalidRequest(format!(
                "programName must be a valid identifier, got {name:?}"
            )));
        }
        Ok(Self::ProgramStart {
            name: name.to_string(),
        })
    }

    /// Renders this command into URScript source text.
    #[must_use]
    pub fn render(&self) -> String {
        match self {
            Self::Translate {
                axis,
                value,
                direction,
            } => urscript::translation(*axis, *value, *direction),
            Self::Rotate {
                axis,
                value,
                direction,
            } => urscript::rotation(*axis, *value, *direction),
            Self::JointMove {
                joint,
                value,
                direction,
            } => urscript::joint_move(*joint, *value, *direction),
            Self::ProgramStart { name } => urscript::program_start(name),
            Self::ProgramStop => urscript::program_stop(),
            Self::EmergencyStop => urscript::emergency_stop(),
        }
    }

    /// Short operation label for log lines.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Translate { .. } => "translate",
            Self::Rotate { .. } => "rotate",
            Self::JointMove { .. } => "joint_move",
            Self::ProgramStart { .. } => "program_start",
            Self::ProgramStop => "program_stop",
            Self::EmergencyStop => "emergency_stop",
        }
    }
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
