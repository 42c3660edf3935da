//! Control panel
//!
//! Two bounded sliders bound to the parameter store. Raw input is snapped to
//! the slider's step grid and clamped before the store sees it, and every
//! write queues a change event for the frame loop.

use cue_core::{Event, EventQueue, Param, ParamStore};

/// A bounded numeric control
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slider {
    pub param: Param,
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Slider {
    pub fn new(param: Param) -> Self {
        Self {
            param,
            min: 0.0,
            max: 1.0,
            step: 0.0,
        }
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    /// Step grid; zero means continuous
    pub fn step(mut self, step: f64) -> Self {
        self.step = step.max(0.0);
        self
    }

    /// Snap to the step grid, then clamp into `[min, max]`
    pub fn snap(&self, value: f64) -> f64 {
        let snapped = if self.step > 0.0 {
            (value / self.step).round() * self.step
        } else {
            value
        };
        snapped.clamp(self.min, self.max)
    }

    pub fn label(&self) -> &'static str {
        self.param.label()
    }
}

/// The scene's control panel
#[derive(Clone, Debug)]
pub struct ControlPanel {
    sliders: [Slider; 2],
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self {
            sliders: [
                Slider::new(Param::BounceDuration)
                    .min(500.0)
                    .max(3000.0)
                    .step(500.0),
                Slider::new(Param::RotationRate)
                    .min(0.01)
                    .max(0.10)
                    .step(0.01),
            ],
        }
    }

    pub fn sliders(&self) -> &[Slider] {
        &self.sliders
    }

    pub fn slider(&self, param: Param) -> &Slider {
        match param {
            Param::BounceDuration => &self.sliders[0],
            Param::RotationRate => &self.sliders[1],
        }
    }

    /// Apply a user edit: write the snapped value and queue its change event.
    ///
    /// Returns the value the store now holds, or `None` for non-finite input,
    /// which a slider cannot produce and is ignored.
    pub fn input(
        &self,
        param: Param,
        raw: f64,
        params: &mut ParamStore,
        events: &mut EventQueue,
    ) -> Option<f64> {
        if !raw.is_finite() {
            tracing::warn!(%param, raw, "ignoring non-finite panel input");
            return None;
        }

        let value = self.slider(param).snap(raw);
        params.set(param, value);

        let event = match param {
            Param::BounceDuration => Event::BounceDurationChanged {
                duration_ms: params.get().bounce_duration_ms,
            },
            Param::RotationRate => Event::RotationRateChanged {
                rate: params.get().rotation_rate,
            },
        };
        events.push(event);

        tracing::debug!(%param, raw, value, "panel input");
        Some(params.value(param))
    }

    /// Bring every stored value onto its slider's grid without queuing events.
    /// Used once at startup, the way a panel widget adopts its initial value.
    pub fn sync(&self, params: &mut ParamStore) {
        for slider in &self.sliders {
            let current = params.value(slider.param);
            let value = slider.snap(current);
            if value != current {
                tracing::warn!(
                    param = %slider.param,
                    configured = current,
                    value,
                    "initial value outside the panel range"
                );
                params.set(slider.param, value);
            }
        }
    }
}
