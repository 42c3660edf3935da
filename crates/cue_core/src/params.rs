//! Live-editable control parameters
//!
//! The store holds the two knobs the control panel exposes. It performs no
//! validation of its own: bounds and step snapping belong to the panel widget
//! that writes here.

use crate::error::{CoreError, Result};
use std::fmt;
use std::str::FromStr;

/// Default bounce duration in milliseconds
pub const DEFAULT_BOUNCE_DURATION_MS: u32 = 1500;

/// Default stick rotation rate (accumulator units per frame)
pub const DEFAULT_ROTATION_RATE: f64 = 0.01;

/// Snapshot of the panel-controlled parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlParameters {
    /// Duration of the ball tween, in milliseconds
    pub bounce_duration_ms: u32,
    /// Amount added to the stick accumulator each frame
    pub rotation_rate: f64,
}

impl Default for ControlParameters {
    fn default() -> Self {
        Self {
            bounce_duration_ms: DEFAULT_BOUNCE_DURATION_MS,
            rotation_rate: DEFAULT_ROTATION_RATE,
        }
    }
}

/// A parameter bound to a panel control
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Param {
    BounceDuration,
    RotationRate,
}

impl Param {
    /// Label shown next to the panel control
    pub fn label(&self) -> &'static str {
        match self {
            Param::BounceDuration => "Bounce Duration",
            Param::RotationRate => "Rotation Speed",
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Param {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bounce" | "bounce_duration" | "bounce_duration_ms" | "bounceduration" => {
                Ok(Param::BounceDuration)
            }
            "rate" | "rotation" | "rotation_rate" | "rotation_speed" | "rotationspeed" => {
                Ok(Param::RotationRate)
            }
            other => Err(CoreError::UnknownParameter(other.to_string())),
        }
    }
}

/// Holds the current control parameters
#[derive(Clone, Debug, Default)]
pub struct ParamStore {
    current: ControlParameters,
}

impl ParamStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the given values
    pub fn with_values(values: ControlParameters) -> Self {
        Self { current: values }
    }

    /// Current parameter values
    pub fn get(&self) -> ControlParameters {
        self.current
    }

    pub fn set_bounce_duration(&mut self, duration_ms: u32) {
        self.current.bounce_duration_ms = duration_ms;
    }

    pub fn set_rotation_rate(&mut self, rate: f64) {
        self.current.rotation_rate = rate;
    }

    /// Read a parameter as a float
    pub fn value(&self, param: Param) -> f64 {
        match param {
            Param::BounceDuration => self.current.bounce_duration_ms as f64,
            Param::RotationRate => self.current.rotation_rate,
        }
    }

    /// Write a parameter from a float
    pub fn set(&mut self, param: Param, value: f64) {
        match param {
            Param::BounceDuration => self.set_bounce_duration(value.round().max(0.0) as u32),
            Param::RotationRate => self.set_rotation_rate(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let store = ParamStore::new();
        assert_eq!(store.get().bounce_duration_ms, 1500);
        assert_eq!(store.get().rotation_rate, 0.01);
    }

    #[test]
    fn test_store_does_not_validate() {
        let mut store = ParamStore::new();
        store.set_bounce_duration(10);
        store.set_rotation_rate(5.0);
        assert_eq!(store.get().bounce_duration_ms, 10);
        assert_eq!(store.get().rotation_rate, 5.0);
    }

    #[test]
    fn test_set_by_param() {
        let mut store = ParamStore::new();
        store.set(Param::BounceDuration, 2999.6);
        store.set(Param::RotationRate, 0.05);
        assert_eq!(store.get().bounce_duration_ms, 3000);
        assert!((store.value(Param::RotationRate) - 0.05).abs() < 1e-6);
    }

    #[test]
    fn test_param_from_str() {
        assert_eq!("bounce".parse::<Param>(), Ok(Param::BounceDuration));
        assert_eq!("Rotation_Rate".parse::<Param>(), Ok(Param::RotationRate));
        assert_eq!(
            "speed".parse::<Param>(),
            Err(CoreError::UnknownParameter("speed".to_string()))
        );
    }
}
