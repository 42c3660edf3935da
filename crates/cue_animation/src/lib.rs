//! Cue Animation System
//!
//! Easing curves, tweens, and the tween engine advanced once per frame.
//!
//! # Features
//!
//! - **Easing**: the classic in/out families, exact at both endpoints
//! - **Tweens**: absolute or relative channel destinations, delay, repeat
//! - **Engine**: advances every active tween against a caller-supplied clock
//!   and writes values straight into the target store
//! - **Clocks**: a wall clock for live runs and a virtual clock for
//!   deterministic headless runs

pub mod clock;
pub mod easing;
pub mod engine;
pub mod error;
pub mod tween;

pub use clock::{SystemClock, TimeSource, VirtualClock};
pub use easing::Easing;
pub use engine::{TickReport, TweenEngine, TweenId};
pub use error::{AnimationError, Result};
pub use tween::{Channel, Destination, Repeat, Tween, TweenTarget};
