//! Tween definitions
//!
//! A [`Tween`] describes an interpolation of one or more transform channels
//! on a target. It does nothing on its own; hand it to
//! [`TweenEngine::start`](crate::engine::TweenEngine::start) to capture the
//! start values and schedule it.

use crate::easing::Easing;
use smallvec::SmallVec;

/// A single animatable scalar on a scene object
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    PositionX,
    PositionY,
    PositionZ,
    RotationX,
    RotationY,
    RotationZ,
    ScaleX,
    ScaleY,
    ScaleZ,
}

/// Store of animatable values addressed by key and channel.
///
/// The engine reads start values through this trait when a tween starts and
/// writes interpolated values through it every update.
pub trait TweenTarget<K> {
    /// Current value of a channel, or `None` if the key is unknown
    fn read(&self, key: K, channel: Channel) -> Option<f32>;

    /// Write a channel. Returns `false` if the key is unknown.
    fn write(&mut self, key: K, channel: Channel, value: f32) -> bool;
}

/// Where a channel ends up
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Destination {
    /// Interpolate to this exact value
    Absolute(f32),
    /// Interpolate by this offset from the value captured at start
    Relative(f32),
}

impl Destination {
    /// End value given the start value
    pub fn resolve(&self, start: f32) -> f32 {
        match *self {
            Destination::Absolute(end) => end,
            Destination::Relative(delta) => start + delta,
        }
    }
}

/// How many extra times a tween plays after the first run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Repeat {
    #[default]
    Never,
    Times(u32),
    Infinite,
}

/// Callback fired on repeat or completion, with write access to the target
pub type TweenCallback<K> = Box<dyn FnMut(&mut dyn TweenTarget<K>, K) + Send>;

/// A tween waiting to be started
pub struct Tween<K> {
    pub(crate) target: K,
    pub(crate) channels: SmallVec<[(Channel, Destination); 3]>,
    pub(crate) duration_ms: f64,
    pub(crate) easing: Easing,
    pub(crate) delay_ms: f64,
    pub(crate) repeat: Repeat,
    pub(crate) on_complete: Option<TweenCallback<K>>,
    pub(crate) on_repeat: Option<TweenCallback<K>>,
}

impl<K: Copy> Tween<K> {
    /// Create a tween on `target` lasting `duration_ms` (linear easing)
    pub fn new(target: K, duration_ms: f64) -> Self {
        Self {
            target,
            channels: SmallVec::new(),
            duration_ms: duration_ms.max(0.0),
            easing: Easing::Linear,
            delay_ms: 0.0,
            repeat: Repeat::Never,
            on_complete: None,
            on_repeat: None,
        }
    }

    /// Animate a channel to an absolute value
    pub fn to(mut self, channel: Channel, value: f32) -> Self {
        self.set_channel(channel, Destination::Absolute(value));
        self
    }

    /// Animate a channel by an offset from its start value
    pub fn by(mut self, channel: Channel, delta: f32) -> Self {
        self.set_channel(channel, Destination::Relative(delta));
        self
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Wait this long after start (and after each repeat) before moving
    pub fn delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms.max(0.0);
        self
    }

    pub fn repeat(mut self, repeat: Repeat) -> Self {
        self.repeat = repeat;
        self
    }

    /// Called once when the tween finishes its last run
    pub fn on_complete<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut dyn TweenTarget<K>, K) + Send + 'static,
    {
        self.on_complete = Some(Box::new(callback));
        self
    }

    /// Called each time a repeating tween wraps around
    pub fn on_repeat<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut dyn TweenTarget<K>, K) + Send + 'static,
    {
        self.on_repeat = Some(Box::new(callback));
        self
    }

    pub fn target(&self) -> K {
        self.target
    }

    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    /// Channels this tween writes
    pub fn channels(&self) -> impl Iterator<Item = Channel> + '_ {
        self.channels.iter().map(|(channel, _)| *channel)
    }

    // A later destination for the same channel replaces the earlier one
    fn set_channel(&mut self, channel: Channel, destination: Destination) {
        if let Some(slot) = self.channels.iter_mut().find(|(c, _)| *c == channel) {
            slot.1 = destination;
        } else {
            self.channels.push((channel, destination));
        }
    }
}

impl<K: std::fmt::Debug> std::fmt::Debug for Tween<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tween")
            .field("target", &self.target)
            .field("channels", &self.channels)
            .field("duration_ms", &self.duration_ms)
            .field("easing", &self.easing)
            .field("delay_ms", &self.delay_ms)
            .field("repeat", &self.repeat)
            .finish_non_exhaustive()
    }
}
