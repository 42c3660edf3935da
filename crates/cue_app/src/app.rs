//! Application wiring
//!
//! Owns the scene context and drives it: build the table, trigger the ball
//! tween once, then per frame drain panel events, step the scheduler, render
//! and record statistics.

use crate::bounce::BallTweenTrigger;
use crate::config::CueConfig;
use crate::context::SceneContext;
use crate::panel::ControlPanel;
use crate::render::Renderer;
use crate::runtime::{HeadlessContext, HeadlessRunConfig, HeadlessRuntime};
use crate::scheduler::{FrameReport, FrameScheduler, FrameTick};
use crate::stats::FrameStats;
use anyhow::{Context, Result};
use cue_animation::TweenId;
use cue_core::{Event, Param, ScriptedInput};

/// Outcome of a full run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    pub elapsed_ms: f64,
    pub rotate_accumulator: f64,
    pub active_tweens: usize,
    /// Scripted inputs whose frame lies outside the run
    pub skipped_inputs: usize,
}

/// The billiards scene application
pub struct App<R> {
    ctx: SceneContext,
    scheduler: FrameScheduler,
    trigger: BallTweenTrigger,
    panel: ControlPanel,
    renderer: R,
    stats: FrameStats,
    last_now_ms: f64,
}

impl<R: Renderer> App<R> {
    pub fn new(config: &CueConfig, renderer: R) -> Result<Self> {
        let trigger = BallTweenTrigger {
            start_x: config.bounce.start_x,
            end_x: config.bounce.end_x,
            easing: config.bounce.easing()?,
            cancel_in_flight: config.bounce.cancel_in_flight,
        };

        let panel = ControlPanel::new();
        let mut ctx = SceneContext::new(config.controls.parameters());
        panel.sync(&mut ctx.params);

        Ok(Self {
            ctx,
            scheduler: FrameScheduler::new(config.stick.amplitude),
            trigger,
            panel,
            renderer,
            stats: FrameStats::new(config.run.stats_every_frames),
            last_now_ms: 0.0,
        })
    }

    /// Build the table and start the first ball tween at `now_ms`.
    pub fn start(&mut self, now_ms: f64) -> Result<TweenId> {
        self.ctx
            .construct_scene()
            .context("Failed to build the billiards table")?;
        let id = self
            .trigger
            .trigger(&mut self.ctx, now_ms)
            .context("Failed to start the ball tween")?;
        self.last_now_ms = now_ms;
        Ok(id)
    }

    pub fn is_started(&self) -> bool {
        self.ctx.table.is_some()
    }

    /// Simulate a panel edit. Takes effect at the start of the next frame.
    pub fn input(&mut self, param: Param, value: f64) -> Option<f64> {
        self.panel
            .input(param, value, &mut self.ctx.params, &mut self.ctx.events)
    }

    /// Run one frame: queued events, scheduler step, render, statistics.
    pub fn frame(&mut self, tick: FrameTick) -> Result<FrameReport> {
        self.handle_events(tick.now_ms);

        let report = self.scheduler.step(&mut self.ctx, tick);
        self.renderer
            .render(&self.ctx.graph, self.ctx.controls.camera())
            .with_context(|| format!("Failed to render frame {}", tick.frame_index))?;
        self.stats.record(tick.now_ms);
        self.last_now_ms = tick.now_ms;

        Ok(report)
    }

    fn handle_events(&mut self, now_ms: f64) {
        let events: Vec<Event> = self.ctx.events.drain().collect();
        for event in events {
            match event {
                Event::BounceDurationChanged { duration_ms } => {
                    tracing::debug!(duration_ms, "bounce duration changed");
                    if let Err(err) = self.trigger.trigger(&mut self.ctx, now_ms) {
                        tracing::warn!(%err, "ball tween not restarted");
                    }
                }
                Event::RotationRateChanged { rate } => {
                    tracing::debug!(rate, "rotation rate changed");
                }
            }
        }
    }

    /// Start if needed, then drive `cfg.max_frames` frames, applying each
    /// scripted input just before its frame. Input frames count from the
    /// start of this run.
    ///
    /// Time carries on from earlier frames: a later run begins one tick after
    /// the last frame, so in-flight tweens keep advancing.
    pub fn run(&mut self, cfg: HeadlessRunConfig, inputs: &[ScriptedInput]) -> Result<RunSummary> {
        let frames_before = self.stats.frames();
        let resume_ms = if frames_before > 0 {
            self.last_now_ms + cfg.tick_ms as f64
        } else {
            self.last_now_ms
        };
        let cfg = HeadlessRunConfig {
            start_ms: cfg.start_ms.max(resume_ms),
            ..cfg
        };

        let mut skipped_inputs = 0;
        for input in inputs.iter().filter(|i| i.frame >= cfg.max_frames) {
            tracing::warn!(
                frame = input.frame,
                max_frames = cfg.max_frames,
                param = %input.param,
                "scripted input is past the last frame and will not be applied"
            );
            skipped_inputs += 1;
        }

        HeadlessRuntime::run(cfg, |frame: &HeadlessContext| {
            if !self.is_started() {
                self.start(frame.elapsed_ms)?;
            }
            for input in inputs.iter().filter(|i| i.frame == frame.frame_index) {
                if let Some(value) = self.input(input.param, input.value) {
                    tracing::info!(
                        frame = frame.frame_index,
                        param = %input.param,
                        value,
                        "scripted panel input"
                    );
                }
            }
            self.frame(FrameTick {
                frame_index: frame.frame_index,
                now_ms: frame.elapsed_ms,
            })?;
            Ok(())
        })?;

        Ok(RunSummary {
            frames: self.stats.frames() - frames_before,
            elapsed_ms: self.last_now_ms,
            rotate_accumulator: self.ctx.animation.rotate_accumulator,
            active_tweens: self.ctx.tweens.len(),
            skipped_inputs,
        })
    }

    pub fn context(&self) -> &SceneContext {
        &self.ctx
    }

    pub fn context_mut(&mut self) -> &mut SceneContext {
        &mut self.ctx
    }

    pub fn panel(&self) -> &ControlPanel {
        &self.panel
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }
}
