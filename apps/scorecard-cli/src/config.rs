//! # Scorecard Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority, applied in main)             │
//! │     --data sales.json --format table                                   │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     SCORECARD_DATA=./sales.json                                        │
//! │     SCORECARD_FORMAT=table                                             │
//! │     SCORECARD_BONUS_FIRST=20                                           │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config PATH, or the platform config dir:                         │
//! │     ~/.config/seller-scorecard/scorecard.toml (Linux)                  │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     JSON output, 15/10/0/5 bonus tiers                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [input]
//! data_path = "demos/sample_data.json"
//!
//! [output]
//! format = "table"   # json | table
//! pretty = true
//!
//! [bonus]            # percent of profit per rank tier
//! first = 15
//! podium = 10
//! last = 0
//! standard = 5
//! ```

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use scorecard_core::BonusTiers;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{CliError, CliResult};

const CONFIG_FILE_NAME: &str = "scorecard.toml";

// =============================================================================
// Output Format
// =============================================================================

/// How the report is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON envelope with a generation timestamp.
    #[default]
    Json,
    /// Fixed-width text table for terminals.
    Table,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" | "text" => Ok(OutputFormat::Table),
            other => Err(CliError::InvalidConfig(format!(
                "Unknown output format: '{}'. Valid options: json, table",
                other
            ))),
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

/// Where the dataset comes from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputSettings {
    /// Path to the JSON dataset file.
    #[serde(default)]
    pub data_path: Option<PathBuf>,
}

/// How and where the report goes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,

    /// Indent JSON output.
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Write to this file instead of stdout.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputSettings {
    fn default() -> Self {
        OutputSettings {
            format: OutputFormat::default(),
            pretty: default_pretty(),
            path: None,
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScorecardConfig {
    #[serde(default)]
    pub input: InputSettings,

    #[serde(default)]
    pub output: OutputSettings,

    /// Bonus percentages handed to the profit-rank bonus policy.
    #[serde(default)]
    pub bonus: BonusTiers,
}

impl ScorecardConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`scorecard.toml`)
    /// 3. Environment variables
    ///
    /// An explicitly given path must exist; the platform default may not.
    pub fn load(config_path: Option<&Path>) -> CliResult<Self> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Reads and parses a TOML config file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        info!(?path, "Loading scorecard config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CliResult<()> {
        let tiers = [
            ("bonus.first", self.bonus.first),
            ("bonus.podium", self.bonus.podium),
            ("bonus.last", self.bonus.last),
            ("bonus.standard", self.bonus.standard),
        ];

        for (name, pct) in tiers {
            if !pct.is_finite() || !(0.0..=100.0).contains(&pct) {
                return Err(CliError::InvalidConfig(format!(
                    "{} must be a percentage between 0 and 100, got {}",
                    name, pct
                )));
            }
        }

        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies `SCORECARD_*` overrides read through `lookup`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup("SCORECARD_DATA") {
            debug!(path = %path, "Overriding data path from environment");
            self.input.data_path = Some(PathBuf::from(path));
        }

        if let Some(path) = lookup("SCORECARD_OUTPUT") {
            self.output.path = Some(PathBuf::from(path));
        }

        if let Some(format) = lookup("SCORECARD_FORMAT") {
            match format.parse() {
                Ok(parsed) => self.output.format = parsed,
                Err(_) => warn!(format = %format, "Unknown output format in environment"),
            }
        }

        let tiers = [
            ("SCORECARD_BONUS_FIRST", &mut self.bonus.first),
            ("SCORECARD_BONUS_PODIUM", &mut self.bonus.podium),
            ("SCORECARD_BONUS_LAST", &mut self.bonus.last),
            ("SCORECARD_BONUS_STANDARD", &mut self.bonus.standard),
        ];
        for (key, slot) in tiers {
            if let Some(raw) = lookup(key) {
                match raw.parse::<f64>() {
                    Ok(pct) => *slot = pct,
                    Err(_) => warn!(key, value = %raw, "Ignoring non-numeric bonus override"),
                }
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "scorecard", "seller-scorecard")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
