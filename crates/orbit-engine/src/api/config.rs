use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::components::sprite::{MOON_RADIUS, ORBIT_OFFSET, ORBIT_SPEED};

/// Errors raised while loading a [`SandboxConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("surface size must be positive, got {width}x{height}")]
    InvalidSize { width: f32, height: f32 },
}

/// Sandbox configuration. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    /// Surface width in pixels. Spawn x is drawn from [0, width).
    pub width: f32,
    /// Surface height in pixels. Spawn y is drawn from [0, height).
    pub height: f32,
    /// Smallest spawned radius.
    pub min_radius: f32,
    /// Spawned radius is drawn from [min_radius, min_radius + radius_range).
    pub radius_range: f32,
    /// Moon disc radius.
    pub moon_radius: f32,
    /// Gap between planet rim and moon orbit.
    pub orbit_offset: f32,
    /// Moon advance per drawn frame, in radians.
    pub orbit_speed: f32,
    /// Seconds between a destroy request and the removal.
    pub destroy_delay: f32,
    /// Saturation (percent) of spawned colors.
    pub saturation: f32,
    /// Lightness (percent) of spawned colors.
    pub lightness: f32,
    /// RNG seed.
    pub seed: u64,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            min_radius: 10.0,
            radius_range: 20.0,
            moon_radius: MOON_RADIUS,
            orbit_offset: ORBIT_OFFSET,
            orbit_speed: ORBIT_SPEED,
            destroy_delay: 7.0,
            saturation: 70.0,
            lightness: 50.0,
            seed: 42,
        }
    }
}

impl SandboxConfig {
    /// Parse a config from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject surfaces that cannot host a spawn.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_is_default() {
        let config = SandboxConfig::from_json("{}").unwrap();
        assert_eq!(config, SandboxConfig::default());
        assert_eq!(config.destroy_delay, 7.0);
        assert_eq!(config.orbit_speed, 0.02);
    }

    #[test]
    fn partial_json_overrides_fields() {
        let json = r#"{ "width": 1024, "height": 768, "destroy_delay": 2.5 }"#;
        let config = SandboxConfig::from_json(json).unwrap();
        assert_eq!(config.width, 1024.0);
        assert_eq!(config.height, 768.0);
        assert_eq!(config.destroy_delay, 2.5);
        assert_eq!(config.min_radius, 10.0);
    }

    #[test]
    fn rejects_bad_json() {
        let err = SandboxConfig::from_json("{ width: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn rejects_zero_size() {
        let err = SandboxConfig::from_json(r#"{ "width": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSize { .. }));
    }
}
