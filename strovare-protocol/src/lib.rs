//! # Strovare Mission-Plan Format
//!
//! Crate for parsing the line-oriented mission plan text into typed plans:
//! one grid line, then a rover line and an instruction line per deployment.

pub mod instruction;
pub mod plan;

pub use instruction::{Instruction, UnknownInstruction};
pub use plan::{Deployment, MissionPlan, PlanParseError, PlanParser};
