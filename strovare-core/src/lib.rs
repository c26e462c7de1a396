//! # strovare-core
//!
//! Foundation layer for the rover simulation: integer grid bounds, cardinal
//! headings with quarter-turn arithmetic, and the mission controller that
//! owns rover state and enforces the rules of motion.

pub mod controller;
pub mod grid;
pub mod heading;
pub mod rover;

pub mod prelude {
    pub use crate::controller::*;
    pub use crate::grid::*;
    pub use crate::heading::*;
    pub use crate::rover::*;
}

pub use controller::{ControlError, MissionControl};
