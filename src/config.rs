use std::{io::ErrorKind, path::PathBuf};

use clap::Parser;
use serde::Deserialize;

use crate::{app::Screen, common::error::AppError};

#[derive(Parser, Debug)]
#[command(
    name = "finance_tracker",
    about = "Track income, expenses and savings goals"
)]
pub struct CliArgs {
    /// Path to config file
    #[arg(short, long, default_value = "finance_tracker.toml")]
    pub config: PathBuf,

    /// Directory holding the stored collections (overrides config file)
    #[arg(short, long)]
    pub data_dir: Option<PathBuf>,

    /// Log level (overrides config file)
    #[arg(short, long)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub screen: Screen,
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".finance_tracker")
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    pub fn from_toml(raw: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(raw)?)
    }

    /// Reads the config file named on the command line (a missing file
    /// means defaults) and applies the command-line overrides on top.
    pub fn load(args: &CliArgs) -> Result<Self, AppError> {
        let mut config = match std::fs::read_to_string(&args.config) {
            Ok(raw) => Self::from_toml(&raw)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Self::default(),
            Err(e) => return Err(AppError::ConfigIo(e)),
        };
        config.apply_overrides(args);
        Ok(config)
    }

    pub fn apply_overrides(&mut self, args: &CliArgs) {
        if let Some(dir) = &args.data_dir {
            self.storage.data_dir = dir.clone();
        }
        if let Some(level) = &args.log_level {
            self.logging.level = level.clone();
        }
    }
}
