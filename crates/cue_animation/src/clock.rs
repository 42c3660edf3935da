//! Time sources for the tween engine.
//!
//! The engine never reads the wall clock itself; the host hands it a
//! timestamp each frame. Live runs use [`SystemClock`], headless runs and
//! tests use [`VirtualClock`] so every frame lands on a known millisecond.

use std::time::Instant;

/// Something that can report the current time in milliseconds
pub trait TimeSource {
    /// Milliseconds since the source's origin
    fn now_ms(&self) -> f64;
}

/// Wall clock measured from construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeSource for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// A manually stepped clock for deterministic timing.
///
/// Starts at zero, can be seeked to any non-negative position and only
/// moves forward when the host advances it.
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    /// Current virtual time in milliseconds.
    position_ms: f64,
}

impl VirtualClock {
    /// Create a clock at time zero.
    pub fn new() -> Self {
        Self { position_ms: 0.0 }
    }

    /// Jump to an absolute position (negative positions clamp to zero).
    pub fn seek(&mut self, position_ms: f64) {
        self.position_ms = position_ms.max(0.0);
    }

    /// Advance by `dt_ms` of host time. Returns the new position.
    pub fn advance(&mut self, dt_ms: f64) -> f64 {
        if dt_ms > 0.0 {
            self.position_ms += dt_ms;
        }
        self.position_ms
    }
}

impl TimeSource for VirtualClock {
    fn now_ms(&self) -> f64 {
        self.position_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_virtual_clock_advances() {
        let mut clock = VirtualClock::new();
        assert_eq!(clock.now_ms(), 0.0);
        clock.advance(16.0);
        clock.advance(16.0);
        assert_eq!(clock.now_ms(), 32.0);
    }

    #[test]
    fn test_advance_never_goes_backwards() {
        let mut clock = VirtualClock::new();
        clock.seek(100.0);
        assert_eq!(clock.advance(-16.0), 100.0);
        assert_eq!(clock.advance(16.0), 116.0);
    }

    #[test]
    fn test_seek_clamps_to_zero() {
        let mut clock = VirtualClock::new();
        clock.seek(-5.0);
        assert_eq!(clock.now_ms(), 0.0);
        clock.seek(1500.0);
        assert_eq!(clock.now_ms(), 1500.0);
    }

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
