use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::domain::Group;
use crate::optimizer::Strategy;
use crate::report::OutputFormat;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const ENV_PREFIX: &str = "WORKOUT__";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub output: OutputFormat,
    pub strategies: Vec<Strategy>,
    pub logging: LoggingConfig,
    pub trials: Vec<TrialConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// EnvFilter directive, overridden by RUST_LOG
    pub filter: String,
    pub json: bool,
}

/// One exercise group solved under one time budget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialConfig {
    pub name: String,
    pub group: Group,
    pub minutes: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            strategies: vec![Strategy::Greedy, Strategy::Dp],
            logging: LoggingConfig::default(),
            trials: vec![
                TrialConfig::new("Test Trial 1", Group::Upper, 30),
                TrialConfig::new("Test Trial 2", Group::Upper, 15),
                TrialConfig::new("Test Trial 3", Group::Core, 40),
            ],
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn,workout_planner=info".into(),
            json: false,
        }
    }
}

impl TrialConfig {
    pub fn new(name: impl Into<String>, group: Group, minutes: u32) -> Self {
        Self {
            name: name.into(),
            group,
            minutes,
        }
    }
}

impl Config {
    /// Compiled-in defaults, then `config/default.toml`, then `WORKOUT__*` env vars
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    pub fn load_from(path: &str) -> Result<Self> {
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));
        let config: Config = figment
            .extract()
            .with_context(|| format!("invalid configuration (file: {path})"))?;
        if config.strategies.is_empty() {
            anyhow::bail!("at least one strategy must be configured");
        }
        Ok(config)
    }
}
