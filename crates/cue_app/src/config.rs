//! Cue configuration file handling (cue.toml)

use anyhow::{Context, Result};
use cue_animation::Easing;
use cue_core::{ControlParameters, DEFAULT_BOUNCE_DURATION_MS, DEFAULT_ROTATION_RATE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Top-level configuration. Every section and field is optional.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CueConfig {
    #[serde(default)]
    pub controls: ControlsConfig,
    #[serde(default)]
    pub bounce: BounceConfig,
    #[serde(default)]
    pub stick: StickConfig,
    #[serde(default)]
    pub run: RunConfig,
}

/// Initial panel values
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ControlsConfig {
    #[serde(default = "default_bounce_duration_ms")]
    pub bounce_duration_ms: u32,
    #[serde(default = "default_rotation_rate")]
    pub rotation_rate: f64,
}

fn default_bounce_duration_ms() -> u32 {
    DEFAULT_BOUNCE_DURATION_MS
}

fn default_rotation_rate() -> f64 {
    DEFAULT_ROTATION_RATE
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            bounce_duration_ms: default_bounce_duration_ms(),
            rotation_rate: default_rotation_rate(),
        }
    }
}

impl ControlsConfig {
    pub fn parameters(&self) -> ControlParameters {
        ControlParameters {
            bounce_duration_ms: self.bounce_duration_ms,
            rotation_rate: self.rotation_rate,
        }
    }
}

/// Ball tween settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BounceConfig {
    #[serde(default = "default_start_x")]
    pub start_x: f32,
    #[serde(default = "default_end_x")]
    pub end_x: f32,
    /// Easing name, e.g. "cubic-in"
    #[serde(default = "default_easing")]
    pub easing: String,
    /// Stop any in-flight ball tween before starting a new one
    #[serde(default)]
    pub cancel_in_flight: bool,
}

fn default_start_x() -> f32 {
    1.0
}

fn default_end_x() -> f32 {
    -8.0
}

fn default_easing() -> String {
    Easing::CubicIn.name().to_string()
}

impl Default for BounceConfig {
    fn default() -> Self {
        Self {
            start_x: default_start_x(),
            end_x: default_end_x(),
            easing: default_easing(),
            cancel_in_flight: false,
        }
    }
}

impl BounceConfig {
    pub fn easing(&self) -> Result<Easing> {
        self.easing
            .parse()
            .with_context(|| format!("Invalid bounce easing {:?}", self.easing))
    }
}

/// Stick oscillation settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StickConfig {
    #[serde(default = "default_amplitude")]
    pub amplitude: f64,
}

fn default_amplitude() -> f64 {
    2.0
}

impl Default for StickConfig {
    fn default() -> Self {
        Self {
            amplitude: default_amplitude(),
        }
    }
}

/// Frame loop settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RunConfig {
    #[serde(default = "default_frames")]
    pub frames: u32,
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Frames between statistics reports (0 disables them)
    #[serde(default = "default_stats_every_frames")]
    pub stats_every_frames: u32,
}

fn default_frames() -> u32 {
    600
}

fn default_tick_ms() -> u64 {
    16
}

fn default_stats_every_frames() -> u32 {
    120
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: default_frames(),
            tick_ms: default_tick_ms(),
            stats_every_frames: default_stats_every_frames(),
        }
    }
}

impl CueConfig {
    /// Load configuration from a file, or from `cue.toml` inside a directory
    pub fn load(path: &Path) -> Result<Self> {
        let config_path = if path.is_dir() {
            path.join("cue.toml")
        } else {
            path.to_path_buf()
        };

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: CueConfig = toml::from_str(content).context("Invalid cue configuration")?;
        config.bounce.easing()?;
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CueConfig::from_toml("").unwrap();
        assert_eq!(config, CueConfig::default());
        assert_eq!(config.controls.bounce_duration_ms, 1500);
        assert_eq!(config.controls.rotation_rate, 0.01);
        assert_eq!(config.bounce.start_x, 1.0);
        assert_eq!(config.bounce.end_x, -8.0);
        assert_eq!(config.bounce.easing().unwrap(), Easing::CubicIn);
        assert!(!config.bounce.cancel_in_flight);
        assert_eq!(config.stick.amplitude, 2.0);
        assert_eq!(config.run.frames, 600);
        assert_eq!(config.run.tick_ms, 16);
    }

    #[test]
    fn test_partial_sections() {
        let config = CueConfig::from_toml(
            r#"
            [controls]
            bounce_duration_ms = 3000

            [bounce]
            easing = "quadratic-out"
            cancel_in_flight = true

            [run]
            frames = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.controls.bounce_duration_ms, 3000);
        assert_eq!(config.controls.rotation_rate, 0.01);
        assert_eq!(config.bounce.easing().unwrap(), Easing::QuadraticOut);
        assert!(config.bounce.cancel_in_flight);
        assert_eq!(config.bounce.end_x, -8.0);
        assert_eq!(config.run.frames, 10);
        assert_eq!(config.run.tick_ms, 16);
    }

    #[test]
    fn test_rejects_unknown_easing() {
        assert!(CueConfig::from_toml("[bounce]\neasing = \"wobbly\"").is_err());
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(CueConfig::from_toml("[run]\nframes = \"many\"").is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = CueConfig::default();
        config.stick.amplitude = 3.5;
        let text = config.to_toml().unwrap();
        assert_eq!(CueConfig::from_toml(&text).unwrap(), config);
    }
}
