//! Easing functions for tweens
//!
//! Each curve maps normalized elapsed time in `[0, 1]` to normalized progress
//! in `[0, 1]`. Endpoints are exact: `apply(0.0) == 0.0` and `apply(1.0) == 1.0`.

use crate::error::AnimationError;
use std::f32::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Easing function type
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    #[default]
    Linear,
    QuadraticIn,
    QuadraticOut,
    QuadraticInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuarticIn,
    QuarticOut,
    QuarticInOut,
    SineIn,
    SineOut,
    SineInOut,
}

impl Easing {
    /// Every curve, in declaration order
    pub const ALL: [Easing; 13] = [
        Easing::Linear,
        Easing::QuadraticIn,
        Easing::QuadraticOut,
        Easing::QuadraticInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::QuarticIn,
        Easing::QuarticOut,
        Easing::QuarticInOut,
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineInOut,
    ];

    /// Apply the easing function to a progress value (0.0 to 1.0)
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadraticIn => t * t,
            Easing::QuadraticOut => t * (2.0 - t),
            Easing::QuadraticInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicIn => t * t * t,
            Easing::CubicOut => 1.0 - (1.0 - t).powi(3),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::QuarticIn => t * t * t * t,
            Easing::QuarticOut => 1.0 - (1.0 - t).powi(4),
            Easing::QuarticInOut => {
                if t < 0.5 {
                    8.0 * t * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }
            // Sine curves snap at the ends so endpoints stay exact in f32
            Easing::SineIn => exact_ends(t, 1.0 - (t * PI / 2.0).cos()),
            Easing::SineOut => exact_ends(t, (t * PI / 2.0).sin()),
            Easing::SineInOut => exact_ends(t, 0.5 * (1.0 - (PI * t).cos())),
        }
    }

    /// Canonical kebab-case name, as used in configuration files
    pub fn name(&self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::QuadraticIn => "quadratic-in",
            Easing::QuadraticOut => "quadratic-out",
            Easing::QuadraticInOut => "quadratic-in-out",
            Easing::CubicIn => "cubic-in",
            Easing::CubicOut => "cubic-out",
            Easing::CubicInOut => "cubic-in-out",
            Easing::QuarticIn => "quartic-in",
            Easing::QuarticOut => "quartic-out",
            Easing::QuarticInOut => "quartic-in-out",
            Easing::SineIn => "sine-in",
            Easing::SineOut => "sine-out",
            Easing::SineInOut => "sine-in-out",
        }
    }
}

#[inline]
fn exact_ends(t: f32, value: f32) -> f32 {
    if t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        1.0
    } else {
        value
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Easing {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', '.', ' '], "-");
        Easing::ALL
            .iter()
            .copied()
            .find(|easing| easing.name() == normalized)
            .ok_or_else(|| AnimationError::UnknownEasing(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        for easing in Easing::ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{easing} at 0");
            assert_eq!(easing.apply(1.0), 1.0, "{easing} at 1");
        }
    }

    #[test]
    fn test_curves_are_monotonic() {
        for easing in Easing::ALL {
            let mut prev = 0.0;
            for i in 1..=100 {
                let v = easing.apply(i as f32 / 100.0);
                assert!(v + 1e-6 >= prev, "{easing} decreased at step {i}");
                prev = v;
            }
        }
    }

    #[test]
    fn test_cubic_in_is_slow_start() {
        assert!((Easing::CubicIn.apply(0.5) - 0.125).abs() < 1e-6);
        assert!(Easing::CubicIn.apply(0.25) < 0.25);
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        assert_eq!(Easing::CubicIn.apply(-1.0), 0.0);
        assert_eq!(Easing::CubicIn.apply(2.0), 1.0);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("cubic-in".parse::<Easing>().unwrap(), Easing::CubicIn);
        assert_eq!("Cubic.In".parse::<Easing>().unwrap(), Easing::CubicIn);
        assert_eq!("sine_in_out".parse::<Easing>().unwrap(), Easing::SineInOut);
        assert!("bounce".parse::<Easing>().is_err());
    }
}
