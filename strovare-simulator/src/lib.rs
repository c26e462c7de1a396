//! # Strovare Simulator
//!
//! Deterministic replay of parsed mission plans. Rovers run strictly
//! sequentially in deployment order, each consuming its instruction sequence
//! in input order, so a given plan always produces the same report.

use std::time::Instant;

use thiserror::Error;
use tracing::{debug, instrument, trace};

use strovare_config::SimulatorSettings;
use strovare_core::controller::{ControlError, MissionControl};
use strovare_core::heading::Rotation;
use strovare_core::rover::RoverId;
use strovare_protocol::{Instruction, MissionPlan};
use strovare_telemetry::MetricsRecorder;

pub mod report;

pub use report::{MissionReport, ReportEntry};

/// Simulation error conditions.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Control(#[from] ControlError),

    #[error("plan deploys {got} rovers, limit is {limit}")]
    FleetLimitExceeded { got: usize, limit: usize },

    #[error("{id} carries {got} instructions, limit is {limit}")]
    InstructionLimitExceeded {
        id: RoverId,
        got: usize,
        limit: usize,
    },

    #[error("state hash mismatch: expected {expected}, got {actual}")]
    StateHashMismatch { expected: String, actual: String },
}

/// Compares a report's state hash against a previously recorded value.
pub fn validate_state_hash(
    report: &MissionReport,
    expected: &str,
) -> Result<(), SimulationError> {
    let actual = report.state_hash();
    if actual != expected {
        return Err(SimulationError::StateHashMismatch {
            expected: expected.to_string(),
            actual,
        });
    }
    Ok(())
}

/// Replays mission plans against a fresh mission controller per run.
pub struct Simulator {
    settings: SimulatorSettings,
    metrics: MetricsRecorder,
}

impl Simulator {
    pub fn new(settings: SimulatorSettings, metrics: MetricsRecorder) -> Self {
        Self { settings, metrics }
    }

    /// Checks a plan against the configured limits without running it.
    pub fn check_limits(&self, plan: &MissionPlan) -> Result<(), SimulationError> {
        if plan.deployments.len() > self.settings.max_rovers {
            return Err(SimulationError::FleetLimitExceeded {
                got: plan.deployments.len(),
                limit: self.settings.max_rovers,
            });
        }
        for (index, deployment) in plan.deployments.iter().enumerate() {
            if deployment.instructions.len() > self.settings.max_instructions {
                return Err(SimulationError::InstructionLimitExceeded {
                    id: RoverId(index as u32),
                    got: deployment.instructions.len(),
                    limit: self.settings.max_instructions,
                });
            }
        }
        Ok(())
    }

    /// Runs one plan to completion and reports the final fleet state.
    ///
    /// Rovers are assigned ids in deployment order. The first rejected
    /// operation aborts the run; rovers already driven keep no visible
    /// state, only the error surfaces.
    #[instrument(skip_all, fields(rovers = plan.deployments.len()))]
    pub fn run(&self, plan: &MissionPlan) -> Result<MissionReport, SimulationError> {
        self.check_limits(plan)?;

        let mut control = MissionControl::new(plan.grid);
        let mut report = MissionReport::default();

        for (index, deployment) in plan.deployments.iter().enumerate() {
            let id = RoverId(index as u32);
            let started = Instant::now();

            control.add_rover(id, deployment.position, deployment.heading)?;
            self.metrics.rovers_deployed.inc();

            debug!(
                "dispatching {} instructions to {id}",
                deployment.instructions.len()
            );
            for instruction in &deployment.instructions {
                trace!("{id}: {instruction:?}");
                match instruction {
                    Instruction::Left => control.turn(id, Rotation::Left)?,
                    Instruction::Right => control.turn(id, Rotation::Right)?,
                    Instruction::Move => control.advance(id, 1)?,
                }
                self.metrics.instructions_applied.inc();
            }

            let rover = control.rover(id)?;
            report.push(ReportEntry {
                id,
                position: rover.position,
                heading: rover.heading,
            });
            self.metrics
                .dispatch_latency
                .observe(started.elapsed().as_nanos() as f64);
        }

        Ok(report)
    }
}
