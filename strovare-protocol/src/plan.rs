//! ## strovare-protocol::plan
//! **Mission plan parser**
//!
//! The input format is line oriented:
//!
//! ```text
//! 5 5          <- grid upper-right vertex
//! 1 2 N        <- rover start: x y heading
//! LMLMLMLMM    <- that rover's instructions, no separators
//! 3 3 E
//! MMRMMRMRRM
//! ```
//!
//! Rover and instruction lines come in strict pairs; a rover line with no
//! instruction line after it is a hard error, never a silent drop.
//!
//! ### Expectations:
//! - Whitespace between tokens on grid and rover lines is flexible.
//! - Instruction lines are consumed character by character.
//! - Parsing is complete before any rover moves: a bad character anywhere
//!   rejects the whole plan.

use thiserror::Error;

use strovare_core::grid::{Grid, InvalidBounds, Position};
use strovare_core::heading::{Heading, UnknownHeading};

use crate::instruction::{Instruction, UnknownInstruction};

/// Plan parsing error conditions.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum PlanParseError {
    #[error("grid line must be two integers, got {0:?}")]
    MalformedGridLine(String),

    #[error(transparent)]
    InvalidBounds(#[from] InvalidBounds),

    #[error("rover line must be `x y heading`, got {0:?}")]
    MalformedRoverLine(String),

    #[error("rover line {0:?} has no instruction line")]
    MissingInstructionLine(String),

    #[error(transparent)]
    UnknownHeading(#[from] UnknownHeading),

    #[error(transparent)]
    UnknownInstruction(#[from] UnknownInstruction),
}

/// A rover's starting state plus the instructions addressed to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Deployment {
    pub position: Position,
    pub heading: Heading,
    pub instructions: Vec<Instruction>,
}

/// A fully parsed mission: grid bounds and deployments in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct MissionPlan {
    pub grid: Grid,
    pub deployments: Vec<Deployment>,
}

/// Parser for the mission plan text format.
#[derive(Default, Debug, Copy, Clone)]
pub struct PlanParser;

impl PlanParser {
    pub fn new() -> Self {
        Self
    }

    /// Parses a complete plan from UTF-8 text.
    pub fn parse(&self, input: &str) -> Result<MissionPlan, PlanParseError> {
        let mut lines = input.lines();
        let grid_line = lines
            .next()
            .ok_or_else(|| PlanParseError::MalformedGridLine(String::new()))?;
        let grid = Self::parse_grid_line(grid_line)?;

        let mut deployments = Vec::new();
        while let Some(rover_line) = lines.next() {
            let (position, heading) = Self::parse_rover_line(rover_line)?;
            let instruction_line = lines
                .next()
                .ok_or_else(|| PlanParseError::MissingInstructionLine(rover_line.to_string()))?;
            let instructions = Self::parse_instruction_line(instruction_line)?;
            deployments.push(Deployment {
                position,
                heading,
                instructions,
            });
        }

        Ok(MissionPlan { grid, deployments })
    }

    fn parse_grid_line(line: &str) -> Result<Grid, PlanParseError> {
        let malformed = || PlanParseError::MalformedGridLine(line.to_string());
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(malformed());
        }
        let max_x: i64 = tokens[0].parse().map_err(|_| malformed())?;
        let max_y: i64 = tokens[1].parse().map_err(|_| malformed())?;
        Ok(Grid::new(max_x, max_y)?)
    }

    fn parse_rover_line(line: &str) -> Result<(Position, Heading), PlanParseError> {
        let malformed = || PlanParseError::MalformedRoverLine(line.to_string());
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 3 {
            return Err(malformed());
        }
        let x: i64 = tokens[0].parse().map_err(|_| malformed())?;
        let y: i64 = tokens[1].parse().map_err(|_| malformed())?;
        let heading: Heading = tokens[2].parse()?;
        Ok((Position::new(x, y), heading))
    }

    fn parse_instruction_line(line: &str) -> Result<Vec<Instruction>, PlanParseError> {
        line.chars()
            .map(|symbol| Instruction::try_from(symbol).map_err(PlanParseError::from))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_ROVER_PLAN: &str = "5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM\n";

    #[test]
    fn parses_a_two_rover_plan() {
        let plan = PlanParser::new().parse(TWO_ROVER_PLAN).unwrap();
        assert_eq!(plan.grid, Grid::new(5, 5).unwrap());
        assert_eq!(plan.deployments.len(), 2);

        let first = &plan.deployments[0];
        assert_eq!(first.position, Position::new(1, 2));
        assert_eq!(first.heading, Heading::North);
        assert_eq!(first.instructions.len(), 9);
        assert_eq!(first.instructions[0], Instruction::Left);
        assert_eq!(first.instructions[8], Instruction::Move);

        let second = &plan.deployments[1];
        assert_eq!(second.position, Position::new(3, 3));
        assert_eq!(second.heading, Heading::East);
        assert_eq!(second.instructions.len(), 10);
    }

    #[test]
    fn accepts_a_plan_with_no_deployments() {
        let plan = PlanParser::new().parse("5 5\n").unwrap();
        assert!(plan.deployments.is_empty());
    }

    #[test]
    fn accepts_a_zero_vertex_grid() {
        let plan = PlanParser::new().parse("0 0\n0 0 N\nM\n").unwrap();
        assert_eq!(plan.grid, Grid::new(0, 0).unwrap());
    }

    #[test]
    fn accepts_flexible_token_spacing() {
        let plan = PlanParser::new().parse("5 5\n  1\t2   N\nLM\n").unwrap();
        assert_eq!(plan.deployments[0].position, Position::new(1, 2));
    }

    #[test]
    fn empty_instruction_line_means_an_idle_rover() {
        let plan = PlanParser::new().parse("5 5\n1 1 E\n\n").unwrap();
        assert!(plan.deployments[0].instructions.is_empty());
    }

    #[test]
    fn rejects_empty_input() {
        let result = PlanParser::new().parse("");
        assert_eq!(result, Err(PlanParseError::MalformedGridLine(String::new())));
    }

    #[test]
    fn rejects_malformed_grid_lines() {
        let parser = PlanParser::new();
        for line in ["5", "5 5 5", "a b", "5.5 5"] {
            let result = parser.parse(line);
            assert_eq!(
                result,
                Err(PlanParseError::MalformedGridLine(line.to_string())),
                "line {line:?}"
            );
        }
    }

    #[test]
    fn rejects_negative_grid_vertex() {
        let result = PlanParser::new().parse("-1 5\n");
        assert!(matches!(result, Err(PlanParseError::InvalidBounds(_))));
    }

    #[test]
    fn rejects_malformed_rover_lines() {
        let parser = PlanParser::new();
        for line in ["1 2", "1 2 N E", "x 2 N"] {
            let result = parser.parse(&format!("5 5\n{line}\nM\n"));
            assert_eq!(
                result,
                Err(PlanParseError::MalformedRoverLine(line.to_string())),
                "line {line:?}"
            );
        }
    }

    #[test]
    fn rejects_unknown_headings() {
        let result = PlanParser::new().parse("5 5\n1 2 Q\nM\n");
        assert!(matches!(result, Err(PlanParseError::UnknownHeading(_))));
        let result = PlanParser::new().parse("5 5\n1 2 NE\nM\n");
        assert!(matches!(result, Err(PlanParseError::UnknownHeading(_))));
    }

    #[test]
    fn rejects_unknown_instruction_characters() {
        let result = PlanParser::new().parse("5 5\n1 2 N\nLMXM\n");
        assert_eq!(
            result,
            Err(PlanParseError::UnknownInstruction(UnknownInstruction('X')))
        );
    }

    #[test]
    fn rejects_a_trailing_rover_without_instructions() {
        let result = PlanParser::new().parse("5 5\n1 2 N\nLM\n3 3 E\n");
        assert_eq!(
            result,
            Err(PlanParseError::MissingInstructionLine("3 3 E".to_string()))
        );
    }
}
