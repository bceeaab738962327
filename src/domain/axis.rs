//! Validated motion primitives: axes, joints, and direction signs.
//!
//! These types are the boundary between untyped JSON and the script
//! generator. Deserialization rejects anything outside the controller's
//! addressable domain, so every generator call is total over its inputs.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::GatewayError;

/// Cartesian translation axis of the tool-center-point pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CartesianAxis {
    /// Base-frame X.
    X,
    /// Base-frame Y.
    Y,
    /// Base-frame Z.
    Z,
}

impl CartesianAxis {
    /// Index of this axis within a six-element TCP pose vector.
    #[must_use]
    pub const fn pose_index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
            Self::Z => 2,
        }
    }

    /// Lowercase axis label, as used in generated procedure names.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }
}

/// Rotation axis of the tool-center-point pose orientation component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RotationAxis {
    /// Rotation about X.
    Rx,
    /// Rotation about Y.
    Ry,
    /// Rotation about Z.
    Rz,
}

impl RotationAxis {
    /// Index of this axis within a six-element TCP pose vector.
    ///
    /// Orientation components occupy indices 3..=5.
    #[must_use]
    pub const fn pose_index(self) -> usize {
        match self {
            Self::Rx => 3,
            Self::Ry => 4,
            Self::Rz => 5,
        }
    }

    /// Lowercase axis label, as used in generated procedure names.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Rx => "rx",
            Self::Ry => "ry",
            Self::Rz => "rz",
        }
    }
}

/// One-based joint number of a six-axis arm.
///
/// Construction is validated; a `JointNumber` always holds a value in
/// `1..=6`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(transparent)]
pub struct JointNumber(u8);

impl JointNumber {
    /// Creates a `JointNumber` from a one-based joint index.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::InvalidRequest`] if `joint` is outside
    /// `1..=6`.
    pub fn new(joint: u8) -> Result<Self, GatewayError> {
        if (1..=6).contains(&joint) {
            Ok(Self(joint))
        } else {
            Err(GatewayError::InvalidRequest(format!(
                "joint must be between 1 and 6, got {joint}"
            )))
        }
    }

    /// One-based joint number as supplied by the client.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Zero-based index into the controller's joint position vector.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for JointNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sign of a relative motion.
///
/// Serialized as the literal `"+"` or `"-"`; any other token is a
/// deserialization error rather than a silent default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Direction {
    /// Increase the targeted coordinate.
    #[serde(rename = "+")]
    Positive,
    /// Decrease the targeted coordinate.
    #[serde(rename = "-")]
    Negative,
}

impl Direction {
    /// Sign character emitted into the generated script.
    #[must_use]
    pub const fn sign(self) -> char {
        match self {
            Self::Positive => '+',
            Self::Negative => '-',
        }
    }

    /// Suffix used in generated procedure names (`pos` / `neg`).
    #[must_use]
    pub const fn name_suffix(self) -> &'static str {
        match self {
            Self::Positive => "pos",
            Self::Negative => "neg",
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn cartesian_pose_indices() {
        assert_eq!(CartesianAxis::X.pose_index(), 0);
        assert_eq!(CartesianAxis::Y.pose_index(), 1);
        assert_eq!(CartesianAxis::Z.pose_index(), 2);
    }

    #[test]
    fn rotation_pose_indices() {
        assert_eq!(RotationAxis::Rx.pose_index(), 3);
        assert_eq!(RotationAxis::Ry.pose_index(), 4);
        assert_eq!(RotationAxis::Rz.pose_index(), 5);
    }

    #[test]
    fn cartesian_axis_deserializes_lowercase() {
        let axis: Result<CartesianAxis, _> = serde_json::from_str("\"y\"");
        assert_eq!(axis.ok(), Some(CartesianAxis::Y));
    }

    #[test]
    fn unknown_axis_is_rejected() {
        let axis: Result<CartesianAxis, _> = serde_json::from_str("\"w\"");
        assert!(axis.is_err());
    }

    #[test]
    fn rotation_axis_rejects_cartesian_token() {
        let axis: Result<RotationAxis, _> = serde_json::from_str("\"x\"");
        assert!(axis.is_err());
    }

    #[test]
    fn joint_number_accepts_full_range() {
        for n in 1..=6u8 {
            let Ok(joint) = JointNumber::new(n) else {
                panic!("joint {n} should be valid");
            };
            assert_eq!(joint.number(), n);
            assert_eq!(joint.index(), (n - 1) as usize);
        }
    }

    #[test]
    fn joint_number_rejects_out_of_range() {
        assert!(JointNumber::new(0).is_err());
        assert!(JointNumber::new(7).is_err());
    }

    #[test]
    fn direction_parses_sign_literals() {
        let plus: Result<Direction, _> = serde_json::from_str("\"+\"");
        let minus: Result<Direction, _> = serde_json::from_str("\"-\"");
        assert_eq!(plus.ok(), Some(Direction::Positive));
        assert_eq!(minus.ok(), Some(Direction::Negative));
    }

    #[test]
    fn direction_rejects_other_tokens() {
        // The original backend defaulted anything but "+" to negative;
        // unknown tokens are now a client error instead.
        let bogus: Result<Direction, _> = serde_json::from_str("\"up\"");
        assert!(bogus.is_err());
    }

    #[test]
    fn direction_signs() {
        assert_eq!(Direction::Positive.sign(), '+');
        assert_eq!(Direction::Negative.sign(), '-');
        assert_eq!(Direction::Positive.name_suffix(), "pos");
        assert_eq!(Direction::Negative.name_suffix(), "neg");
    }
}
