//! ## strovare-core::controller
//! **Fleet registry and the rules of motion**
//!
//! `MissionControl` owns every registered rover and is the only place rover
//! state changes. All mutations go through an explicit id, and a move whose
//! target leaves the grid is rejected whole: the rover stays put and the
//! caller gets the offending coordinate back.
//!
//! ### Expectations:
//! - Bounds are checked on registration and on every move.
//! - Rotation never fails for a known rover.
//! - Several rovers may share a cell; collision handling is not modeled.

use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::grid::{Grid, Position};
use crate::heading::{Heading, Rotation};
use crate::rover::{Rover, RoverId};

/// Controller error conditions.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ControlError {
    #[error("{0} is already registered")]
    DuplicateRover(RoverId),

    #[error("{0} is not registered")]
    UnknownRover(RoverId),

    #[error("{id}: target ({target_x}, {target_y}) is outside the grid (upper-right vertex {limit})")]
    OutOfBounds {
        id: RoverId,
        target_x: i128,
        target_y: i128,
        limit: Position,
    },
}

/// Registry of rovers on one grid.
#[derive(Debug)]
pub struct MissionControl {
    grid: Grid,
    fleet: HashMap<RoverId, Rover>,
}

impl MissionControl {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            fleet: HashMap::new(),
        }
    }

    /// Registers a rover at a starting position and heading.
    pub fn add_rover(
        &mut self,
        id: RoverId,
        position: Position,
        heading: Heading,
    ) -> Result<(), ControlError> {
        if self.fleet.contains_key(&id) {
            return Err(ControlError::DuplicateRover(id));
        }
        if !self.grid.contains(position) {
            return Err(ControlError::OutOfBounds {
                id,
                target_x: i128::from(position.x),
                target_y: i128::from(position.y),
                limit: self.grid.upper_right(),
            });
        }
        debug!("registered {id} at {position} facing {heading}");
        self.fleet.insert(id, Rover::new(position, heading));
        Ok(())
    }

    /// Rotates the named rover a quarter turn in place.
    pub fn turn(&mut self, id: RoverId, rotation: Rotation) -> Result<(), ControlError> {
        let rover = self
            .fleet
            .get_mut(&id)
            .ok_or(ControlError::UnknownRover(id))?;
        rover.heading = rover.heading.rotated(rotation);
        Ok(())
    }

    /// Moves the named rover `distance` cells along its current heading.
    ///
    /// A target outside the grid rejects the whole move: the error carries
    /// the exact offending coordinate, even past the numeric edge of the
    /// coordinate range, and the rover does not change state.
    pub fn advance(&mut self, id: RoverId, distance: u32) -> Result<(), ControlError> {
        let grid = self.grid;
        let rover = self
            .fleet
            .get_mut(&id)
            .ok_or(ControlError::UnknownRover(id))?;
        let (target_x, target_y) = rover
            .position
            .translated(rover.heading.unit_vector(), i64::from(distance));
        if !grid.contains_target(target_x, target_y) {
            debug!("{id}: move to ({target_x}, {target_y}) rejected, outside grid");
            return Err(ControlError::OutOfBounds {
                id,
                target_x,
                target_y,
                limit: grid.upper_right(),
            });
        }
        // in-bounds targets sit between 0 and the vertex, so they fit i64
        rover.position = Position::new(target_x as i64, target_y as i64);
        Ok(())
    }

    /// Snapshot of the named rover's current state.
    pub fn rover(&self, id: RoverId) -> Result<Rover, ControlError> {
        self.fleet
            .get(&id)
            .copied()
            .ok_or(ControlError::UnknownRover(id))
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::prelude::*;

    fn control(max_x: i64, max_y: i64) -> MissionControl {
        MissionControl::new(Grid::new(max_x, max_y).unwrap())
    }

    #[test]
    fn registers_and_snapshots_a_rover() {
        let mut control = control(5, 5);
        let id = RoverId(0);
        control
            .add_rover(id, Position::new(1, 2), Heading::North)
            .unwrap();
        assert_eq!(
            control.rover(id),
            Ok(Rover::new(Position::new(1, 2), Heading::North))
        );
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut control = control(5, 5);
        let id = RoverId(7);
        control
            .add_rover(id, Position::new(0, 0), Heading::East)
            .unwrap();
        assert_eq!(
            control.add_rover(id, Position::new(3, 3), Heading::West),
            Err(ControlError::DuplicateRover(id))
        );
    }

    #[test]
    fn rejects_registration_outside_the_grid() {
        let mut control = control(2, 2);
        let result = control.add_rover(RoverId(0), Position::new(3, 1), Heading::North);
        assert!(matches!(result, Err(ControlError::OutOfBounds { .. })));
    }

    #[test]
    fn unknown_ids_are_reported_on_every_operation() {
        let mut control = control(5, 5);
        let ghost = RoverId(9);
        assert_eq!(
            control.turn(ghost, Rotation::Left),
            Err(ControlError::UnknownRover(ghost))
        );
        assert_eq!(
            control.advance(ghost, 1),
            Err(ControlError::UnknownRover(ghost))
        );
        assert_eq!(control.rover(ghost), Err(ControlError::UnknownRover(ghost)));
    }

    #[test]
    fn rejected_move_leaves_the_rover_in_place() {
        let mut control = control(0, 0);
        let id = RoverId(0);
        control
            .add_rover(id, Position::new(0, 0), Heading::North)
            .unwrap();
        assert_eq!(
            control.advance(id, 1),
            Err(ControlError::OutOfBounds {
                id,
                target_x: 0,
                target_y: 1,
                limit: Position::new(0, 0),
            })
        );
        assert_eq!(
            control.rover(id),
            Ok(Rover::new(Position::new(0, 0), Heading::North))
        );
    }

    #[test]
    fn rejected_move_at_the_numeric_edge_reports_the_exact_target() {
        let mut control = control(i64::MAX, i64::MAX);
        let id = RoverId(0);
        control
            .add_rover(id, Position::new(i64::MAX, 4), Heading::East)
            .unwrap();
        assert_eq!(
            control.advance(id, 1),
            Err(ControlError::OutOfBounds {
                id,
                target_x: i128::from(i64::MAX) + 1,
                target_y: 4,
                limit: Position::new(i64::MAX, i64::MAX),
            })
        );
        assert_eq!(
            control.rover(id),
            Ok(Rover::new(Position::new(i64::MAX, 4), Heading::East))
        );
    }

    #[test]
    fn long_moves_near_the_numeric_edge_do_not_wrap() {
        let mut control = control(i64::MAX, i64::MAX);
        let id = RoverId(1);
        control
            .add_rover(id, Position::new(0, i64::MAX - 10), Heading::North)
            .unwrap();
        assert_eq!(
            control.advance(id, u32::MAX),
            Err(ControlError::OutOfBounds {
                id,
                target_x: 0,
                target_y: i128::from(i64::MAX) - 10 + i128::from(u32::MAX),
                limit: Position::new(i64::MAX, i64::MAX),
            })
        );
        control.advance(id, 10).unwrap();
        assert_eq!(
            control.rover(id),
            Ok(Rover::new(Position::new(0, i64::MAX), Heading::North))
        );
    }

    #[test]
    fn rovers_may_share_a_cell() {
        let mut control = control(5, 5);
        control
            .add_rover(RoverId(0), Position::new(2, 2), Heading::North)
            .unwrap();
        control
            .add_rover(RoverId(1), Position::new(2, 1), Heading::North)
            .unwrap();
        control.advance(RoverId(1), 1).unwrap();
        assert_eq!(
            control.rover(RoverId(1)).unwrap().position,
            control.rover(RoverId(0)).unwrap().position
        );
    }

    #[test]
    fn four_turns_restore_heading_and_position() {
        for rotation in [Rotation::Left, Rotation::Right] {
            for quadrant in 0..4 {
                let heading = Heading::from_quadrant(quadrant);
                let mut control = control(5, 5);
                let id = RoverId(0);
                control.add_rover(id, Position::new(2, 2), heading).unwrap();
                for _ in 0..4 {
                    control.turn(id, rotation).unwrap();
                }
                assert_eq!(control.rover(id), Ok(Rover::new(Position::new(2, 2), heading)));
            }
        }
    }

    proptest! {
        #[test]
        fn forward_moves_track_the_heading_axis(quadrant in 0i64..4, steps in 0u32..100) {
            let heading = Heading::from_quadrant(quadrant);
            let mut control = control(1_000, 1_000);
            let id = RoverId(0);
            control.add_rover(id, Position::new(500, 500), heading).unwrap();
            for _ in 0..steps {
                control.advance(id, 1).unwrap();
            }
            let rover = control.rover(id).unwrap();
            let (dx, dy) = heading.unit_vector();
            prop_assert_eq!(rover.position.x, 500 + dx * i64::from(steps));
            prop_assert_eq!(rover.position.y, 500 + dy * i64::from(steps));
            prop_assert_eq!(rover.heading, heading);
        }

        #[test]
        fn multi_cell_advance_matches_repeated_single_steps(distance in 0u32..50) {
            let mut single = control(1_000, 1_000);
            let mut batch = control(1_000, 1_000);
            let id = RoverId(0);
            single.add_rover(id, Position::new(0, 0), Heading::North).unwrap();
            batch.add_rover(id, Position::new(0, 0), Heading::North).unwrap();
            for _ in 0..distance {
                single.advance(id, 1).unwrap();
            }
            batch.advance(id, distance).unwrap();
            prop_assert_eq!(single.rover(id).unwrap(), batch.rover(id).unwrap());
        }
    }
}
