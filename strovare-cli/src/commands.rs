use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use opentelemetry::KeyValue;
use tracing::info;

use strovare_config::StrovareConfig;
use strovare_protocol::PlanParser;
use strovare_simulator::{validate_state_hash, Simulator};
use strovare_telemetry::logging::EventLogger;
use strovare_telemetry::metrics::MetricsRecorder;

use crate::input;

type CliError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a mission plan and print the final fleet report
    Simulate(SimulateArgs),
    /// Parse a mission plan and report problems without moving any rover
    Check(CheckArgs),
}

#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Plan file to replay; stdin when omitted (interactive on a terminal)
    #[arg(short, long)]
    pub plan: Option<PathBuf>,
    /// Settings file merged over built-in defaults
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Expected report state hash; a mismatch fails the run
    #[arg(long)]
    pub validate_hash: Option<String>,
    /// Dump prometheus text-format metrics to stderr after the run
    #[arg(long, default_value_t = false)]
    pub metrics: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CheckArgs {
    /// Plan file to check; stdin when omitted (interactive on a terminal)
    #[arg(short, long)]
    pub plan: Option<PathBuf>,
    /// Settings file merged over built-in defaults
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run_command(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Simulate(args) => run_simulate(args),
        Commands::Check(args) => run_check(args),
    }
}

fn setup(config_path: Option<&PathBuf>) -> Result<StrovareConfig, CliError> {
    let config = match config_path {
        Some(path) => StrovareConfig::load_from_path(path)?,
        None => StrovareConfig::load()?,
    };
    EventLogger::init(&config.telemetry.log_level, config.telemetry.log_spans);
    Ok(config)
}

fn run_simulate(args: SimulateArgs) -> Result<(), CliError> {
    let config = setup(args.config.as_ref())?;

    let text = input::read_plan_text(args.plan.as_deref())?;
    let plan = PlanParser::new().parse(&text)?;

    let metrics = MetricsRecorder::new();
    let simulator = Simulator::new(config.simulator.clone(), metrics.clone());
    let report = simulator.run(&plan)?;

    if let Some(expected) = args.validate_hash.as_deref() {
        validate_state_hash(&report, expected)?;
    }

    print!("{report}");

    EventLogger::log_event(
        "simulation_complete",
        vec![
            KeyValue::new("rovers", plan.deployments.len().to_string()),
            KeyValue::new("state_hash", report.state_hash()),
        ],
    );

    if args.metrics {
        eprint!("{}", metrics.gather_metrics()?);
    }

    Ok(())
}

fn run_check(args: CheckArgs) -> Result<(), CliError> {
    let config = setup(args.config.as_ref())?;

    let text = input::read_plan_text(args.plan.as_deref())?;
    let plan = PlanParser::new().parse(&text)?;

    let simulator = Simulator::new(config.simulator.clone(), MetricsRecorder::new());
    simulator.check_limits(&plan)?;

    info!(
        "plan OK: {} rover(s), grid vertex {}",
        plan.deployments.len(),
        plan.grid.upper_right()
    );
    Ok(())
}
