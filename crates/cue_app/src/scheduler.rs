//! Frame scheduler
//!
//! Runs once per host frame: camera controls, stick oscillation, then the
//! tween engine. There is no fixed timestep, so the stick's motion depends on
//! the frame count rather than elapsed time.

use crate::context::SceneContext;
use cue_animation::{Channel, TickReport, TweenTarget};

/// Host-supplied frame timing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTick {
    pub frame_index: u32,
    /// Monotonic time, in milliseconds, used to advance tweens
    pub now_ms: f64,
}

/// What one step did
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    /// Stick z written this frame; `None` when the stick is absent
    pub stick_z: Option<f32>,
    pub tweens: TickReport,
}

/// Per-frame driver of the scene's animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameScheduler {
    /// Peak stick displacement along z
    pub stick_amplitude: f64,
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self {
            stick_amplitude: 2.0,
        }
    }
}

impl FrameScheduler {
    pub fn new(stick_amplitude: f64) -> Self {
        Self { stick_amplitude }
    }

    /// Advance the scene by one frame. Never fails: a missing stick only skips
    /// the oscillation, and the tween engine always runs.
    pub fn step(&self, ctx: &mut SceneContext, tick: FrameTick) -> FrameReport {
        ctx.controls.update(1.0);

        let stick_z = ctx.stick().map(|stick| {
            let rate = ctx.params.get().rotation_rate;
            ctx.animation.rotate_accumulator += rate;
            let z = (-self.stick_amplitude * ctx.animation.rotate_accumulator.sin()) as f32;
            ctx.graph.write(stick, Channel::PositionZ, z);
            z
        });

        let tweens = ctx.tweens.update(tick.now_ms, &mut ctx.graph);

        tracing::trace!(
            frame = tick.frame_index,
            now_ms = tick.now_ms,
            accumulator = ctx.animation.rotate_accumulator,
            ?stick_z,
            advanced = tweens.advanced,
            "frame step"
        );

        FrameReport { stick_z, tweens }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cue_animation::{Easing, Tween};
    use cue_core::ControlParameters;
    use cue_scene::{Camera, CameraControls, NodeKind, Transform};
    use std::cell::Cell;
    use std::rc::Rc;

    fn tick(frame_index: u32, now_ms: f64) -> FrameTick {
        FrameTick {
            frame_index,
            now_ms,
        }
    }

    fn built_context() -> SceneContext {
        let mut ctx = SceneContext::new(ControlParameters::default());
        ctx.construct_scene().unwrap();
        ctx
    }

    #[test]
    fn test_accumulator_grows_by_rate_per_frame() {
        let scheduler = FrameScheduler::default();
        let mut ctx = built_context();
        ctx.params.set_rotation_rate(0.03);

        for frame in 0..50 {
            scheduler.step(&mut ctx, tick(frame, frame as f64 * 16.0));
        }
        assert!((ctx.animation.rotate_accumulator - 1.5).abs() < 1e-9);
    }

    #[test]
    fn test_stick_z_follows_accumulator() {
        let scheduler = FrameScheduler::default();
        let mut ctx = built_context();
        let stick = ctx.stick().unwrap();

        let report = scheduler.step(&mut ctx, tick(0, 0.0));
        let expected = (-2.0 * 0.01f64.sin()) as f32;
        assert_eq!(report.stick_z, Some(expected));
        assert_eq!(ctx.graph.transform(stick).unwrap().position.z, expected);
    }

    #[test]
    fn test_stick_z_stays_within_amplitude() {
        let scheduler = FrameScheduler::default();
        let mut ctx = built_context();
        ctx.params.set_rotation_rate(0.1);

        for frame in 0..1000 {
            let z = scheduler.step(&mut ctx, tick(frame, 0.0)).stick_z.unwrap();
            assert!((-2.0..=2.0).contains(&z));
        }
    }

    #[test]
    fn test_custom_amplitude() {
        let scheduler = FrameScheduler::new(0.5);
        let mut ctx = built_context();
        ctx.animation.rotate_accumulator = std::f64::consts::FRAC_PI_2 - 0.01;

        let z = scheduler.step(&mut ctx, tick(0, 0.0)).stick_z.unwrap();
        assert!((z + 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_missing_stick_still_advances_tweens() {
        let scheduler = FrameScheduler::default();
        let mut ctx = SceneContext::new(ControlParameters::default());
        let node = ctx
            .graph
            .add("marker", NodeKind::Group, Transform::default())
            .unwrap();
        ctx.tweens
            .start(
                Tween::new(node, 100.0)
                    .to(Channel::PositionX, 10.0)
                    .easing(Easing::Linear),
                0.0,
                &ctx.graph,
            )
            .unwrap();

        let report = scheduler.step(&mut ctx, tick(0, 50.0));
        assert_eq!(report.stick_z, None);
        assert_eq!(report.tweens.advanced, 1);
        assert_eq!(ctx.animation.rotate_accumulator, 0.0);
        assert_eq!(ctx.graph.transform(node).unwrap().position.x, 5.0);
    }

    struct CountingControls {
        camera: Camera,
        updates: Rc<Cell<u32>>,
    }

    impl CameraControls for CountingControls {
        fn update(&mut self, delta_units: f32) {
            assert_eq!(delta_units, 1.0);
            self.updates.set(self.updates.get() + 1);
        }

        fn camera(&self) -> &Camera {
            &self.camera
        }
    }

    #[test]
    fn test_controls_updated_once_per_frame() {
        let updates = Rc::new(Cell::new(0));
        let mut ctx = SceneContext::with_controls(
            ControlParameters::default(),
            Box::new(CountingControls {
                camera: Camera::default(),
                updates: updates.clone(),
            }),
        );
        let scheduler = FrameScheduler::default();

        for frame in 0..3 {
            scheduler.step(&mut ctx, tick(frame, 0.0));
        }
        assert_eq!(updates.get(), 3);
    }
}
