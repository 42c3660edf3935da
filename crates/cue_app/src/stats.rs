//! Frame statistics
//!
//! Frames-per-second over a rolling window of frames, reported through
//! `tracing` every `report_every` frames.

/// One statistics window
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatsReport {
    /// Index of the frame that closed the window
    pub frame: u64,
    pub fps: f64,
    /// Mean frame interval over the window, in milliseconds
    pub avg_frame_ms: f64,
    /// Longest frame interval over the window, in milliseconds
    pub max_frame_ms: f64,
}

/// Tracks frame timing
#[derive(Clone, Debug, Default)]
pub struct FrameStats {
    report_every: u32,
    frames: u64,
    last_frame_ms: Option<f64>,
    window_start_ms: f64,
    window_frames: u32,
    window_max_ms: f64,
    last_report: Option<StatsReport>,
}

impl FrameStats {
    /// `report_every = 0` counts frames without ever reporting
    pub fn new(report_every: u32) -> Self {
        Self {
            report_every,
            ..Self::default()
        }
    }

    /// Record a frame presented at `now_ms`. Returns a report when the frame
    /// closes a window.
    pub fn record(&mut self, now_ms: f64) -> Option<StatsReport> {
        self.frames += 1;

        let Some(last) = self.last_frame_ms.replace(now_ms) else {
            self.window_start_ms = now_ms;
            return None;
        };

        self.window_frames += 1;
        self.window_max_ms = self.window_max_ms.max(now_ms - last);

        if self.report_every == 0 || self.window_frames < self.report_every {
            return None;
        }

        let elapsed = now_ms - self.window_start_ms;
        let frames = self.window_frames as f64;
        let report = StatsReport {
            frame: self.frames - 1,
            fps: if elapsed > 0.0 {
                frames * 1000.0 / elapsed
            } else {
                0.0
            },
            avg_frame_ms: elapsed / frames,
            max_frame_ms: self.window_max_ms,
        };

        tracing::info!(
            frame = report.frame,
            fps = format_args!("{:.1}", report.fps),
            avg_ms = format_args!("{:.2}", report.avg_frame_ms),
            max_ms = format_args!("{:.2}", report.max_frame_ms),
            "frame stats"
        );

        self.window_start_ms = now_ms;
        self.window_frames = 0;
        self.window_max_ms = 0.0;
        self.last_report = Some(report);
        Some(report)
    }

    /// Frames recorded so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn last_report(&self) -> Option<StatsReport> {
        self.last_report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_every_window() {
        let mut stats = FrameStats::new(120);
        let mut reports = Vec::new();
        for frame in 0..=240u32 {
            if let Some(report) = stats.record(frame as f64 * 16.0) {
                reports.push(report);
            }
        }

        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].frame, 120);
        assert!((reports[0].fps - 62.5).abs() < 1e-9);
        assert!((reports[0].avg_frame_ms - 16.0).abs() < 1e-9);
        assert_eq!(stats.frames(), 241);
        assert_eq!(stats.last_report(), Some(reports[1]));
    }

    #[test]
    fn test_tracks_slowest_frame() {
        let mut stats = FrameStats::new(3);
        stats.record(0.0);
        stats.record(16.0);
        stats.record(66.0);
        let report = stats.record(82.0).unwrap();
        assert_eq!(report.max_frame_ms, 50.0);
    }

    #[test]
    fn test_zero_disables_reports() {
        let mut stats = FrameStats::new(0);
        for frame in 0..500 {
            assert_eq!(stats.record(frame as f64), None);
        }
        assert_eq!(stats.frames(), 500);
    }
}
