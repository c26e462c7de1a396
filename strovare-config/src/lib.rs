//! # Strovare Configuration System
//!
//! Hierarchical configuration for the rover simulator: built-in defaults,
//! an optional YAML file, and `STROVARE_*` environment overrides, validated
//! after merging.

#![warn(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

mod error;
mod simulator;
mod telemetry;
mod validation;

pub use error::ConfigError;
pub use simulator::SimulatorSettings;
pub use telemetry::TelemetrySettings;

/// Top-level configuration container.
#[derive(Debug, Serialize, Deserialize, Validate, Default)]
pub struct StrovareConfig {
    /// Simulation limits.
    #[validate(nested)]
    pub simulator: SimulatorSettings,

    /// Telemetry and observability configuration.
    #[validate(nested)]
    pub telemetry: TelemetrySettings,
}

impl StrovareConfig {
    /// Load configuration from default locations and the environment.
    ///
    /// Hierarchy:
    /// 1. Default values
    /// 2. `config/strovare.yaml`, when present
    /// 3. `STROVARE_*` environment variables (`__` separates nesting)
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(StrovareConfig::default()));

        if Path::new("config/strovare.yaml").exists() {
            figment = figment.merge(Yaml::file("config/strovare.yaml"));
        }

        figment
            .merge(Env::prefixed("STROVARE_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }

    /// Load configuration from a specific path.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::FileNotFound(PathBuf::from(
                path.to_string_lossy().to_string(),
            )));
        }

        Figment::from(Serialized::defaults(StrovareConfig::default()))
            .merge(Yaml::file(path))
            .merge(Env::prefixed("STROVARE_").split("__"))
            .extract()
            .map_err(ConfigError::from)
            .and_then(|config: Self| {
                config.validate()?;
                Ok(config)
            })
    }
}
