//! Tween engine
//!
//! Owns every active tween and advances them once per frame. Tweens are
//! updated in the order they were started, so when two tweens write the same
//! channel the one started later wins the frame.

use crate::easing::Easing;
use crate::error::{AnimationError, Result};
use crate::tween::{Channel, Destination, Repeat, Tween, TweenCallback, TweenTarget};
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    pub struct TweenId;
}

/// Per-channel interpolation state
#[derive(Clone, Copy, Debug)]
struct ChannelState {
    channel: Channel,
    destination: Destination,
    /// Value captured when the tween started
    origin: f32,
    start: f32,
    end: f32,
    /// Last value written
    current: f32,
}

/// A started tween
struct ActiveTween<K> {
    target: K,
    channels: SmallVec<[ChannelState; 3]>,
    duration_ms: f64,
    easing: Easing,
    delay_ms: f64,
    start_time_ms: f64,
    repeat: Repeat,
    on_complete: Option<TweenCallback<K>>,
    on_repeat: Option<TweenCallback<K>>,
}

/// Outcome of advancing one tween
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Progress {
    Waiting,
    Running,
    Repeated,
    Completed,
}

impl<K: Copy> ActiveTween<K> {
    fn advance<T: TweenTarget<K>>(&mut self, now_ms: f64, target: &mut T) -> Progress {
        if now_ms < self.start_time_ms {
            return Progress::Waiting;
        }

        let elapsed = if self.duration_ms <= 0.0 {
            1.0
        } else {
            ((now_ms - self.start_time_ms) / self.duration_ms).min(1.0)
        };
        let finished = elapsed >= 1.0;
        let eased = self.easing.apply(elapsed as f32);

        for state in self.channels.iter_mut() {
            // The final frame writes the destination exactly
            let value = if finished {
                state.end
            } else {
                state.start + (state.end - state.start) * eased
            };
            state.current = value;
            if !target.write(self.target, state.channel, value) {
                tracing::trace!(channel = ?state.channel, "tween target no longer writable");
            }
        }

        if !finished {
            return Progress::Running;
        }

        if take_repeat(&mut self.repeat) {
            if let Some(callback) = self.on_repeat.as_mut() {
                callback(&mut *target as &mut dyn TweenTarget<K>, self.target);
            }
            // Relative runs continue from whatever the callback left behind
            for state in self.channels.iter_mut() {
                state.start = match state.destination {
                    Destination::Relative(_) => {
                        target.read(self.target, state.channel).unwrap_or(state.end)
                    }
                    Destination::Absolute(_) => state.origin,
                };
                state.end = state.destination.resolve(state.start);
            }
            self.start_time_ms = now_ms + self.delay_ms;
            Progress::Repeated
        } else {
            if let Some(callback) = self.on_complete.as_mut() {
                callback(&mut *target as &mut dyn TweenTarget<K>, self.target);
            }
            Progress::Completed
        }
    }

    fn writes(&self, channel: Channel) -> bool {
        self.channels.iter().any(|state| state.channel == channel)
    }
}

/// Consume one repetition, returning whether the tween should run again
fn take_repeat(repeat: &mut Repeat) -> bool {
    match *repeat {
        Repeat::Never | Repeat::Times(0) => false,
        Repeat::Times(n) => {
            *repeat = Repeat::Times(n - 1);
            true
        }
        Repeat::Infinite => true,
    }
}

/// Summary of one engine update
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Tweens that wrote values this tick
    pub advanced: usize,
    /// Tweens that wrapped around to another run
    pub repeated: usize,
    /// Tweens that finished and were removed
    pub completed: SmallVec<[TweenId; 4]>,
}

/// The tween engine that ticks all active tweens
pub struct TweenEngine<K> {
    tweens: SlotMap<TweenId, ActiveTween<K>>,
    /// Start order; update order follows it
    order: Vec<TweenId>,
    last_update_ms: Option<f64>,
}

impl<K: Copy + PartialEq> TweenEngine<K> {
    pub fn new() -> Self {
        Self {
            tweens: SlotMap::with_key(),
            order: Vec::new(),
            last_update_ms: None,
        }
    }

    /// Capture start values from `target` and schedule the tween at `now_ms`.
    pub fn start<T: TweenTarget<K>>(
        &mut self,
        tween: Tween<K>,
        now_ms: f64,
        target: &T,
    ) -> Result<TweenId> {
        if tween.channels.is_empty() {
            return Err(AnimationError::EmptyTween);
        }

        let mut channels = SmallVec::new();
        for (channel, destination) in tween.channels.iter().copied() {
            let origin = target
                .read(tween.target, channel)
                .ok_or(AnimationError::MissingTarget(channel))?;
            channels.push(ChannelState {
                channel,
                destination,
                origin,
                start: origin,
                end: destination.resolve(origin),
                current: origin,
            });
        }

        let id = self.tweens.insert(ActiveTween {
            target: tween.target,
            channels,
            duration_ms: tween.duration_ms,
            easing: tween.easing,
            delay_ms: tween.delay_ms,
            start_time_ms: now_ms + tween.delay_ms,
            repeat: tween.repeat,
            on_complete: tween.on_complete,
            on_repeat: tween.on_repeat,
        });
        self.order.push(id);

        tracing::debug!(
            ?id,
            duration_ms = tween.duration_ms,
            easing = %tween.easing,
            active = self.order.len(),
            "tween started"
        );
        Ok(id)
    }

    /// Advance every active tween to `now_ms`, writing values into `target`.
    pub fn update<T: TweenTarget<K>>(&mut self, now_ms: f64, target: &mut T) -> TickReport {
        self.last_update_ms = Some(now_ms);
        let mut report = TickReport::default();

        for &id in &self.order {
            let Some(tween) = self.tweens.get_mut(id) else {
                continue;
            };
            match tween.advance(now_ms, target) {
                Progress::Waiting => {}
                Progress::Running => report.advanced += 1,
                Progress::Repeated => {
                    report.advanced += 1;
                    report.repeated += 1;
                }
                Progress::Completed => {
                    report.advanced += 1;
                    report.completed.push(id);
                }
            }
        }

        if !report.completed.is_empty() {
            for id in &report.completed {
                self.tweens.remove(*id);
                tracing::debug!(?id, "tween completed");
            }
            let tweens = &self.tweens;
            self.order.retain(|id| tweens.contains_key(*id));
        }

        report
    }

    /// Remove a tween without firing its completion callback
    pub fn stop(&mut self, id: TweenId) -> bool {
        if self.tweens.remove(id).is_some() {
            self.order.retain(|other| *other != id);
            tracing::debug!(?id, "tween stopped");
            true
        } else {
            false
        }
    }

    /// Stop every tween writing `channel` on `key`. Returns how many stopped.
    pub fn stop_on(&mut self, key: K, channel: Channel) -> usize {
        let doomed: SmallVec<[TweenId; 4]> = self
            .order
            .iter()
            .copied()
            .filter(|id| {
                self.tweens
                    .get(*id)
                    .is_some_and(|t| t.target == key && t.writes(channel))
            })
            .collect();
        for id in &doomed {
            self.stop(*id);
        }
        doomed.len()
    }

    /// Number of active tweens writing `channel` on `key`
    pub fn active_on(&self, key: K, channel: Channel) -> usize {
        self.tweens
            .values()
            .filter(|t| t.target == key && t.writes(channel))
            .count()
    }

    pub fn is_active(&self, id: TweenId) -> bool {
        self.tweens.contains_key(id)
    }

    /// Last value a tween wrote (or its start value before the first write)
    pub fn value(&self, id: TweenId, channel: Channel) -> Option<f32> {
        self.tweens
            .get(id)?
            .channels
            .iter()
            .find(|state| state.channel == channel)
            .map(|state| state.current)
    }

    /// Timestamp of the most recent update
    pub fn last_update_ms(&self) -> Option<f64> {
        self.last_update_ms
    }

    /// Number of active tweens
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }
}

impl<K: Copy + PartialEq> Default for TweenEngine<K> {
    fn default() -> Self {
        Self::new()
    }
}
