//! Cue Application
//!
//! The billiards scene's per-frame animation scheduling, wired to a headless
//! host loop.
//!
//! # Features
//!
//! - **Frame scheduler**: camera controls, stick oscillation and tween
//!   advance, once per host frame
//! - **Ball tween trigger**: restarts the ball run on every duration change
//! - **Control panel**: bounded, step-snapped sliders feeding the parameter
//!   store through the event queue
//! - **Headless runtime**: deterministic virtual-time or wall-clock paced loop
//! - **Configuration**: `cue.toml` with per-field defaults
//!
//! # Example
//!
//! ```rust
//! use cue_app::{App, CueConfig, HeadlessRenderer, HeadlessRunConfig};
//!
//! let mut app = App::new(&CueConfig::default(), HeadlessRenderer::new()).unwrap();
//! let summary = app
//!     .run(
//!         HeadlessRunConfig {
//!             max_frames: 10,
//!             ..HeadlessRunConfig::default()
//!         },
//!         &[],
//!     )
//!     .unwrap();
//! assert_eq!(summary.frames, 10);
//! ```

pub mod app;
pub mod bounce;
pub mod config;
pub mod context;
pub mod panel;
pub mod render;
pub mod runtime;
pub mod scheduler;
pub mod stats;

pub use app::{App, RunSummary};
pub use bounce::BallTweenTrigger;
pub use config::CueConfig;
pub use context::{AnimationState, SceneContext};
pub use panel::{ControlPanel, Slider};
pub use render::{FrameSnapshot, HeadlessRenderer, Renderer};
pub use runtime::{HeadlessContext, HeadlessRunConfig, HeadlessRuntime, Pacing};
pub use scheduler::{FrameReport, FrameScheduler, FrameTick};
pub use stats::{FrameStats, StatsReport};
