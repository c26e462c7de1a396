//! Simulation limits.
//!
//! Guard rails against runaway plans, not physics: a plan that exceeds these
//! is rejected before any rover moves.

use serde::{Deserialize, Serialize};
use validator::{self, Validate};

#[derive(Debug, Serialize, Deserialize, Validate, Clone)]
pub struct SimulatorSettings {
    /// Maximum number of rovers a single plan may deploy.
    #[serde(default = "default_max_rovers")]
    #[validate(range(min = 1, max = 4096))]
    pub max_rovers: usize,

    /// Maximum instruction-sequence length per rover.
    #[serde(default = "default_max_instructions")]
    #[validate(range(min = 1, max = 1_000_000))]
    pub max_instructions: usize,
}

fn default_max_rovers() -> usize {
    64
}

fn default_max_instructions() -> usize {
    10_000
}

impl Default for SimulatorSettings {
    fn default() -> Self {
        Self {
            max_rovers: default_max_rovers(),
            max_instructions: default_max_instructions(),
        }
    }
}
