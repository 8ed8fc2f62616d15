use std::path::Path;

use serde::Deserialize;
use tracing::{info, warn};

use crate::constants::*;
use crate::errors::SimulationError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // Physics
    pub gravity: f64,
    pub max_thrust_accel: f64,
    pub drag_coefficient: f64,

    // Light-speed mode
    pub light_speed_mode: bool,
    pub light_speed_ramp_time_scale: f64,
    pub light_speed_ramp_power: f64,

    // Presentation only
    pub star_parallax_factor: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            max_thrust_accel: MAX_THRUST_ACCELERATION,
            drag_coefficient: DRAG_COEFFICIENT,
            light_speed_mode: false,
            light_speed_ramp_time_scale: LIGHT_SPEED_RAMP_TIME_SCALE,
            light_speed_ramp_power: LIGHT_SPEED_RAMP_POWER,
            star_parallax_factor: STAR_PARALLAX_FACTOR,
        }
    }
}

impl SimConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, SimulationError> {
        let config: SimConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimulationError> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|source| SimulationError::ConfigIo {
                path: path.to_path_buf(),
                source,
            })?;
        let config = Self::from_toml_str(&contents)?;
        info!(path = %path.display(), "Loaded simulation config");
        Ok(config)
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "No config file found; using defaults");
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!(%err, "Failed to load config; using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        let finite = [
            ("gravity", self.gravity),
            ("max_thrust_accel", self.max_thrust_accel),
            ("drag_coefficient", self.drag_coefficient),
            ("light_speed_ramp_power", self.light_speed_ramp_power),
            ("star_parallax_factor", self.star_parallax_factor),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(SimulationError::InvalidConfig { name, value });
            }
        }

        // The ramp divides by the time scale.
        if !(self.light_speed_ramp_time_scale.is_finite() && self.light_speed_ramp_time_scale > 0.0)
        {
            return Err(SimulationError::InvalidConfig {
                name: "light_speed_ramp_time_scale",
                value: self.light_speed_ramp_time_scale,
            });
        }

        // Star offsets divide by the parallax factor.
        if self.star_parallax_factor == 0.0 {
            return Err(SimulationError::InvalidConfig {
                name: "star_parallax_factor",
                value: self.star_parallax_factor,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults() {
        let config = SimConfig::default();
        assert_relative_eq!(config.gravity, 9.81);
        assert_relative_eq!(config.max_thrust_accel, 45.0);
        assert_relative_eq!(config.drag_coefficient, 0.0005);
        assert_relative_eq!(config.star_parallax_factor, 3.0);
        assert!(!config.light_speed_mode);
        assert_relative_eq!(config.light_speed_ramp_time_scale, 2.0);
        assert_relative_eq!(config.light_speed_ramp_power, 11.0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SimConfig::from_toml_str("gravity = 3.71\nlight_speed_mode = true\n")
            .expect("valid config");
        assert_relative_eq!(config.gravity, 3.71);
        assert!(config.light_speed_mode);
        assert_relative_eq!(config.max_thrust_accel, 45.0);
        assert_relative_eq!(config.drag_coefficient, 0.0005);
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = SimConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let err = SimConfig::from_toml_str("gravity = \"heavy\"").unwrap_err();
        assert!(matches!(err, SimulationError::ConfigParse(_)));
    }

    #[test]
    fn test_invalid_ramp_time_scale_rejected() {
        let err = SimConfig::from_toml_str("light_speed_ramp_time_scale = 0.0").unwrap_err();
        assert!(matches!(
            err,
            SimulationError::InvalidConfig {
                name: "light_speed_ramp_time_scale",
                ..
            }
        ));
    }

    #[test]
    fn test_infinite_value_rejected() {
        let config = SimConfig {
            gravity: f64::INFINITY,
            ..SimConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = SimConfig::load("definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, SimulationError::ConfigIo { .. }));

        let config = SimConfig::load_or_default("definitely/not/here.toml");
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join("cosmic_ascent_config_test.toml");
        std::fs::write(&path, "max_thrust_accel = 60.0\ndrag_coefficient = 0.001\n")
            .expect("write temp config");

        let config = SimConfig::load(&path).expect("load temp config");
        assert_relative_eq!(config.max_thrust_accel, 60.0);
        assert_relative_eq!(config.drag_coefficient, 0.001);

        let _ = std::fs::remove_file(&path);
    }
}
