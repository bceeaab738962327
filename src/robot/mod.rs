//! Robot-facing transport layer.

pub mod link;

pub use link::{LinkError, RobotLink};
