//! Error types for configuring a flocking run.
//!
//! Nothing can fail once a simulation is running; every error here is raised
//! while loading or validating the configuration at start-up.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building a [`crate::SimulationConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A numeric setting outside its allowed range
    #[error("invalid {name} = {value}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: f64,
        reason: String,
    },

    /// A run needs at least one boid
    #[error("population must contain at least one boid")]
    EmptyPopulation,

    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid TOML for this schema
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be written out as TOML
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    /// Creates a new out-of-range error.
    #[must_use]
    pub fn invalid<S: Into<String>>(name: &'static str, value: f32, reason: S) -> Self {
        Self::InvalidValue {
            name,
            value: f64::from(value),
            reason: reason.into(),
        }
    }
}
