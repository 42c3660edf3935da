//! Headless runtime primitives for the frame loop.

use anyhow::{bail, Result};
use cue_animation::{SystemClock, TimeSource, VirtualClock};
use std::time::Duration;

/// How frame time advances
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Pacing {
    /// Logical time advances by `tick_ms` per frame with no waiting
    #[default]
    Virtual,
    /// Wall-clock time; the loop sleeps until each frame's deadline
    Realtime,
}

/// Configuration for headless frame execution.
#[derive(Debug, Clone, Copy)]
pub struct HeadlessRunConfig {
    /// Number of frames to execute.
    pub max_frames: u32,
    /// Milliseconds between frames.
    pub tick_ms: u64,
    /// Time of the first frame, in milliseconds
    pub start_ms: f64,
    pub pacing: Pacing,
}

impl Default for HeadlessRunConfig {
    fn default() -> Self {
        Self {
            max_frames: 1,
            tick_ms: 16,
            start_ms: 0.0,
            pacing: Pacing::Virtual,
        }
    }
}

/// Frame context passed to frame callbacks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlessContext {
    pub frame_index: u32,
    /// Frame time in milliseconds, from `start_ms` onwards
    pub elapsed_ms: f64,
}

/// Headless runtime loop.
pub struct HeadlessRuntime;

impl HeadlessRuntime {
    /// Run a fixed frame budget. Stops at the first callback error.
    pub fn run<F>(cfg: HeadlessRunConfig, mut on_frame: F) -> Result<()>
    where
        F: FnMut(&HeadlessContext) -> Result<()>,
    {
        if cfg.max_frames == 0 {
            bail!("headless max_frames must be > 0");
        }
        if cfg.tick_ms == 0 {
            bail!("headless tick_ms must be > 0");
        }
        if !(cfg.start_ms.is_finite() && cfg.start_ms >= 0.0) {
            bail!("headless start_ms must be finite and >= 0");
        }

        let tick_ms = cfg.tick_ms as f64;
        match cfg.pacing {
            Pacing::Virtual => {
                let mut clock = VirtualClock::new();
                clock.seek(cfg.start_ms);
                for frame in 0..cfg.max_frames {
                    on_frame(&HeadlessContext {
                        frame_index: frame,
                        elapsed_ms: clock.now_ms(),
                    })?;
                    clock.advance(tick_ms);
                }
            }
            Pacing::Realtime => {
                let clock = SystemClock::new();
                for frame in 0..cfg.max_frames {
                    on_frame(&HeadlessContext {
                        frame_index: frame,
                        elapsed_ms: cfg.start_ms + clock.now_ms(),
                    })?;

                    let deadline = (frame as f64 + 1.0) * tick_ms;
                    let remaining = deadline - clock.now_ms();
                    if remaining > 0.0 {
                        std::thread::sleep(Duration::from_secs_f64(remaining / 1000.0));
                    }
                }
            }
        }

        Ok(())
    }
}
