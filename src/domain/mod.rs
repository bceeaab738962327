//! Domain layer: validated motion primitives and the command descriptor.
//!
//! Everything the script generator consumes lives here. The types are
//! deliberately narrow: once a value has crossed into this module it is
//! inside the controller's addressable domain and rendering cannot fail.

pub mod axis;
pub mod command;

pub use axis::{CartesianAxis, Direction, JointNumber, RotationAxis};
pub use command::RobotCommand;
