/*
 * Configuration Module
 *
 * Everything needed to start a run: field size, population, RNG seed, update
 * mode, the initial tunables and the fixed kinematic constants. Loaded from a
 * TOML file; any missing key falls back to its default.
 */

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::flock::Field;
use crate::params::{FlockParams, Kinematics, UpdateMode};
use crate::HISTORY_LEN;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub population: usize,
    // None seeds from OS entropy
    pub seed: Option<u64>,
    pub mode: UpdateMode,
    pub history_len: usize,
    pub draw_trails: bool,
    pub field: Field,
    pub params: FlockParams,
    pub kinematics: Kinematics,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            population: 100,
            seed: None,
            mode: UpdateMode::default(),
            history_len: HISTORY_LEN,
            draw_trails: true,
            field: Field::default(),
            params: FlockParams::default(),
            kinematics: Kinematics::default(),
        }
    }
}

impl SimulationConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    // Load the file if it exists, otherwise use defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.field.validate()?;
        if self.population == 0 {
            return Err(ConfigError::EmptyPopulation);
        }
        if self.history_len == 0 {
            return Err(ConfigError::invalid("history_len", 0.0, "must be > 0"));
        }
        self.params.validate()?;
        self.kinematics.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.population, 100);
        assert_eq!(config.field, Field::new(1400.0, 850.0));
        assert_eq!(config.history_len, 50);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config = SimulationConfig::from_toml_str(
            r#"
            population = 12
            seed = 99
            mode = "double-buffered"

            [params]
            visual_range = 40.0
            "#,
        )
        .expect("valid config");

        assert_eq!(config.population, 12);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.mode, UpdateMode::DoubleBuffered);
        assert_eq!(config.params.visual_range, 40.0);
        assert_eq!(config.params.coherence_factor, 0.005);
        assert_eq!(config.kinematics, Kinematics::default());
    }

    #[test]
    fn defaults_survive_toml_round_trip() {
        let config = SimulationConfig { seed: Some(5), ..SimulationConfig::default() };
        let text = config.to_toml_string().expect("serializable");
        let back = SimulationConfig::from_toml_str(&text).expect("parsable");
        assert_eq!(back, config);
    }

    #[test]
    fn rejects_empty_population() {
        let err = SimulationConfig::from_toml_str("population = 0").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyPopulation));
    }

    #[test]
    fn rejects_negative_visual_range() {
        let err = SimulationConfig::from_toml_str("[params]\nvisual_range = -5.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "visual_range", .. }));
    }

    #[test]
    fn rejects_degenerate_field() {
        let err = SimulationConfig::from_toml_str("[field]\nwidth = 0.0\nheight = 10.0").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "field.width", .. }));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = SimulationConfig::load_or_default("definitely/not/here.toml").expect("defaults");
        assert_eq!(config, SimulationConfig::default());
    }
}
