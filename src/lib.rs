//! # urscript-gateway
//!
//! REST gateway that relays simple motion commands to a Universal Robots
//! style controller as URScript text over a persistent TCP connection.
//!
//! Each request is validated into a typed [`domain::RobotCommand`],
//! rendered by the pure generators in [`urscript`], and written to the
//! single tracked connection owned by [`robot::RobotLink`]. There is no
//! protocol state machine beyond connected-or-not: no retries, no command
//! queue, no readback.
//!
//! ## Architecture
//!
//! ```text
//! HTTP clients (JSON)
//!     │
//!     ├── REST handlers (api/)
//!     │
//!     ├── RobotCommand (domain/)
//!     ├── URScript generators (urscript/)
//!     │
//!     └── RobotLink ──TCP──> robot controller
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod robot;
pub mod urscript;
