//! Cue Core Runtime
//!
//! This crate provides the foundational primitives shared by the Cue scene:
//!
//! - **Geometry**: small `Vec3` value type used by transforms and the camera
//! - **Parameters**: the live-editable knobs the control panel writes
//! - **Events**: the single-threaded queue that carries panel changes to the
//!   frame loop between frames
//!
//! # Example
//!
//! ```rust
//! use cue_core::{Event, EventQueue, ParamStore};
//!
//! let mut params = ParamStore::new();
//! let mut queue = EventQueue::new();
//!
//! params.set_bounce_duration(3000);
//! queue.push(Event::BounceDurationChanged { duration_ms: 3000 });
//!
//! assert_eq!(params.get().bounce_duration_ms, 3000);
//! assert_eq!(queue.drain().count(), 1);
//! ```

pub mod error;
pub mod events;
pub mod geometry;
pub mod params;

pub use error::{CoreError, Result};
pub use events::{Event, EventQueue, ScriptedInput};
pub use geometry::Vec3;
pub use params::{
    ControlParameters, Param, ParamStore, DEFAULT_BOUNCE_DURATION_MS, DEFAULT_ROTATION_RATE,
};
