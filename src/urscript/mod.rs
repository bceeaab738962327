//! URScript generation.
//!
//! Pure functions mapping a validated motion primitive to URScript source
//! text. Every function is total over its typed inputs and deterministic:
//! identical inputs always yield identical text, and procedure names embed
//! the axis (or joint) and direction so repeated commands never collide
//! within the controller's program namespace.
//!
//! Motion parameters are fixed at `a=1,v=1,t=0,r=0` (unit acceleration and
//! velocity, no time constraint, zero blend radius). The rendered text is
//! not newline-terminated; the transport appends the terminator on write.

use crate::domain::{CartesianAxis, Direction, JointNumber, RotationAxis};

/// Renders a relative TCP translation along a Cartesian axis.
///
/// The procedure reads the current tool-center-point pose, offsets the
/// coordinate at the axis's pose index by the signed value, and issues a
/// linear move to the adjusted pose.
#[must_use]
pub fn translation(axis: CartesianAxis, value: f64, direction: Direction) -> String {
    pose_move(axis.label(), axis.pose_index(), value, direction)
}

/// Renders a relative TCP rotation about a Cartesian axis.
///
/// Identical in shape to [`translation`] but targets the orientation
/// components (pose indices 3..=5).
#[must_use]
pub fn rotation(axis: RotationAxis, value: f64, direction: Direction) -> String {
    pose_move(axis.label(), axis.pose_index(), value, direction)
}

/// Renders a relative move of a single joint.
///
/// Reads the current joint position vector, offsets the joint at
/// `joint - 1`, and issues a joint-space move.
#[must_use]
pub fn joint_move(joint: JointNumber, value: f64, direction: Direction) -> String {
    let name = format!("program_j{}_{}", joint.number(), direction.name_suffix());
    let idx = joint.index();
    let sign = direction.sign();
    format!(
        "def {name}():\n  \
         poz_zgl=get_actual_joint_positions()\n  \
         poz_zgl2=poz_zgl\n  \
         poz_zgl2[{idx}]=poz_zgl2[{idx}]{sign}{value}\n  \
         movej(poz_zgl2,a=1,v=1,t=0,r=0)\nend"
    )
}

/// Renders a named, empty program stub.
///
/// The body is a placeholder comment; program assembly (sequencing real
/// motions into the body) is a known gap carried over from the original
/// backend.
#[must_use]
pub fn program_start(name: &str) -> String {
    format!("def {name}():\n  # Program code goes here\nend")
}

/// Renders the program stop command.
#[must_use]
pub fn program_stop() -> String {
    "stop".to_string()
}

/// Renders the emergency joint-stop command (deceleration 10 rad/s²).
#[must_use]
pub fn emergency_stop() -> String {
    "stopj(10)".to_string()
}

/// Shared shape of translation and rotation scripts: read the TCP pose,
/// offset one component, linear-move to the result.
fn pose_move(label: &str, idx: usize, value: f64, direction: Direction) -> String {
    let name = format!("program_{label}_{}", direction.name_suffix());
    let sign = direction.sign();
    format!(
        "def {name}():\n  \
         poz_tcp=get_actual_tcp_pose()\n  \
         poz_tcp2=poz_tcp\n  \
         poz_tcp2[{idx}]=poz_tcp2[{idx}]{sign}{value}\n  \
         movel(poz_tcp2,a=1,v=1,t=0,r=0)\nend"
    )
}
