// src/errors.rs

//! Crate-wide error type and helpers.

use std::time::Duration;

use thiserror::Error;

use crate::matcher::OutstandingCounts;

#[derive(Error, Debug)]
pub enum JobwatchError {
    /// The expectation table was not satisfied before the wait deadline.
    /// Carries the unmet per-type counts so the failure is diagnosable
    /// without rerunning.
    #[error("expectation not satisfied after {waited:?}; outstanding: {outstanding}")]
    ExpectationTimeout {
        waited: Duration,
        outstanding: OutstandingCounts,
    },

    /// The job event stream closed or errored mid-wait. Distinct from a
    /// timeout: more time would not help.
    #[error("job event stream closed mid-wait; outstanding: {outstanding}")]
    StreamClosed { outstanding: OutstandingCounts },

    /// The child process could not be started at all. Fatal to that
    /// invocation; there is no partial result and no exit code.
    #[error("failed to spawn '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, JobwatchError>;
