//! Mansion Game
//!
//! Two-glass anomaly game driven entirely by the server's state machine.

mod controller;
mod view;

pub use controller::*;
pub use view::*;
