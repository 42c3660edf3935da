//! Ball-tween trigger
//!
//! Snaps the ball group to its start position and tweens it across the table
//! over the current bounce duration. Runs once when the scene is built and
//! again for every duration change.

use crate::context::SceneContext;
use cue_animation::{Channel, Easing, Tween, TweenId, TweenTarget};
use cue_scene::{NodeId, SceneError};

/// Ball tween settings
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BallTweenTrigger {
    pub start_x: f32,
    pub end_x: f32,
    pub easing: Easing,
    /// Stop in-flight ball tweens before starting a new one. Off by default,
    /// which lets overlapping tweens race on the same channel.
    pub cancel_in_flight: bool,
}

impl Default for BallTweenTrigger {
    fn default() -> Self {
        Self {
            start_x: 1.0,
            end_x: -8.0,
            easing: Easing::CubicIn,
            cancel_in_flight: false,
        }
    }
}

impl BallTweenTrigger {
    /// Start a ball tween at `now_ms` using the current bounce duration.
    pub fn trigger(&self, ctx: &mut SceneContext, now_ms: f64) -> Result<TweenId, SceneError> {
        let balls = ctx.balls().ok_or(SceneError::MissingNode("balls"))?;
        let duration_ms = ctx.params.get().bounce_duration_ms;

        if self.cancel_in_flight {
            let stopped = ctx.tweens.stop_on(balls, Channel::PositionX);
            if stopped > 0 {
                tracing::debug!(stopped, "cancelled in-flight ball tweens");
            }
        } else {
            let in_flight = ctx.tweens.active_on(balls, Channel::PositionX);
            if in_flight > 0 {
                tracing::debug!(
                    in_flight,
                    "ball tween overlaps an in-flight tween; the newest one wins each frame"
                );
            }
        }

        ctx.graph.write(balls, Channel::PositionX, self.start_x);

        let tween = Tween::new(balls, duration_ms as f64)
            .to(Channel::PositionX, self.end_x)
            .easing(self.easing)
            .on_complete(on_ball_tween_complete);
        let id = ctx.tweens.start(tween, now_ms, &ctx.graph)?;

        tracing::info!(duration_ms, now_ms, "ball tween triggered");
        Ok(id)
    }
}

/// Return-trip hook. The balls stay where the tween left them.
fn on_ball_tween_complete(_target: &mut dyn TweenTarget<NodeId>, balls: NodeId) {
    tracing::debug!(?balls, "ball tween complete");
}
