//! Frame event queue
//!
//! Panel callbacks never touch the scene directly. They push events here and
//! the frame loop drains the queue between frames, so a change callback can
//! never run concurrently with a frame step.

use crate::error::{CoreError, Result};
use crate::params::Param;
use std::collections::VecDeque;
use std::str::FromStr;

/// An event produced between frames
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// The bounce duration control changed (fires once per change, even if
    /// the value is unchanged)
    BounceDurationChanged { duration_ms: u32 },
    /// The rotation speed control changed
    RotationRateChanged { rate: f64 },
}

/// FIFO queue of pending events
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<Event>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event) {
        tracing::trace!(?event, "queued");
        self.pending.push_back(event);
    }

    /// Take every pending event in arrival order
    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.pending.drain(..)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// A control input scheduled for a given frame, written as
/// `<frame>:<param>=<value>` (for example `120:bounce=3000`)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScriptedInput {
    pub frame: u32,
    pub param: Param,
    pub value: f64,
}

impl FromStr for ScriptedInput {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let malformed = |reason: &str| CoreError::MalformedInput {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (frame, rest) = s
            .split_once(':')
            .ok_or_else(|| malformed("expected <frame>:<param>=<value>"))?;
        let (param, value) = rest
            .split_once('=')
            .ok_or_else(|| malformed("expected <param>=<value> after the frame"))?;

        let frame = frame
            .trim()
            .parse::<u32>()
            .map_err(|_| malformed("frame is not a non-negative integer"))?;
        let param = param.parse::<Param>()?;
        let value = value
            .trim()
            .parse::<f64>()
            .map_err(|_| malformed("value is not a number"))?;

        if !value.is_finite() {
            return Err(malformed("value must be finite"));
        }

        Ok(Self {
            frame,
            param,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_preserves_order_without_coalescing() {
        let mut queue = EventQueue::new();
        queue.push(Event::BounceDurationChanged { duration_ms: 1500 });
        queue.push(Event::BounceDurationChanged { duration_ms: 1500 });
        queue.push(Event::RotationRateChanged { rate: 0.02 });

        let events: Vec<_> = queue.drain().collect();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0], events[1]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_parse_scripted_input() {
        let input: ScriptedInput = "120:bounce=3000".parse().unwrap();
        assert_eq!(input.frame, 120);
        assert_eq!(input.param, Param::BounceDuration);
        assert_eq!(input.value, 3000.0);

        let input: ScriptedInput = " 5 : rate = 0.05".parse().unwrap();
        assert_eq!(input.param, Param::RotationRate);
    }

    #[test]
    fn test_parse_scripted_input_errors() {
        assert!(matches!(
            "bounce=3000".parse::<ScriptedInput>(),
            Err(CoreError::MalformedInput { .. })
        ));
        assert!(matches!(
            "1:bounce".parse::<ScriptedInput>(),
            Err(CoreError::MalformedInput { .. })
        ));
        assert!(matches!(
            "1:speed=3".parse::<ScriptedInput>(),
            Err(CoreError::UnknownParameter(_))
        ));
        assert!(matches!(
            "1:rate=NaN".parse::<ScriptedInput>(),
            Err(CoreError::MalformedInput { .. })
        ));
    }
}
