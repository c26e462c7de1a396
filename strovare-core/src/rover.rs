//! ## strovare-core::rover
//! **Rover identity and state snapshots**

use crate::grid::Position;
use crate::heading::Heading;

/// Explicit rover key, assigned by the caller at registration.
///
/// Identity is deliberately independent of a rover's state: two rovers with
/// identical positions and headings stay distinct, and a rover keeps its id
/// however far it drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoverId(pub u32);

impl std::fmt::Display for RoverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rover #{}", self.0)
    }
}

/// A rover's current position and heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rover {
    pub position: Position,
    pub heading: Heading,
}

impl Rover {
    #[inline]
    pub const fn new(position: Position, heading: Heading) -> Self {
        Self { position, heading }
    }
}
