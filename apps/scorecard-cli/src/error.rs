//! Error types for the scorecard CLI.

use std::path::PathBuf;

use scorecard_core::CoreError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Everything that can stop a scorecard run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading or writing a file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the rendered report failed.
    #[error("Failed to write report: {0}")]
    Write(#[from] std::io::Error),

    /// The config file is not valid TOML for [`crate::config::ScorecardConfig`].
    #[error("Failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// No dataset path was given on the command line, in the config file,
    /// or in the environment.
    #[error("No dataset given. Pass --data <PATH> or set SCORECARD_DATA")]
    MissingDataPath,

    /// The report could not be serialized.
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The analysis pipeline refused or aborted the run.
    #[error(transparent)]
    Analysis(#[from] CoreError),
}
