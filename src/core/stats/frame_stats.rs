use std::collections::VecDeque;
use std::time::Duration;

pub const FPS_WINDOW: usize = 100;

/// Frame timing shown in the overlay: the last frame time and a rolling
/// average FPS over the most recent [`FPS_WINDOW`] frames.
#[derive(Debug, Clone)]
pub struct FrameStats {
    samples: VecDeque<f64>,
    last_frame_time: Option<Duration>,
    frames: u64,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStats {
    #[must_use]
    pub fn new() -> Self {
        Self {
            samples: VecDeque::with_capacity(FPS_WINDOW + 1),
            last_frame_time: None,
            frames: 0,
        }
    }

    /// Records the time since the previous frame. A zero duration updates the
    /// frame time but adds no FPS sample.
    pub fn record(&mut self, elapsed: Duration) {
        self.last_frame_time = Some(elapsed);
        self.frames += 1;

        let secs = elapsed.as_secs_f64();
        if secs <= 0.0 {
            return;
        }

        let fps = 1.0 / secs;
        self.samples.push_back(fps);
        if self.samples.len() > FPS_WINDOW {
            self.samples.pop_front();
        }
    }

    #[must_use]
    pub fn last_frame_time(&self) -> Option<Duration> {
        self.last_frame_time
    }

    #[must_use]
    pub fn average_fps(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        let sum: f64 = self.samples.iter().sum();
        Some(sum / self.samples.len() as f64)
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stats_report_nothing() {
        let stats = FrameStats::new();

        assert_eq!(stats.last_frame_time(), None);
        assert_eq!(stats.average_fps(), None);
        assert_eq!(stats.frames(), 0);
    }

    #[test]
    fn single_sample_gives_its_fps() {
        let mut stats = FrameStats::new();

        stats.record(Duration::from_millis(20));

        assert_eq!(stats.last_frame_time(), Some(Duration::from_millis(20)));
        assert!((stats.average_fps().unwrap() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn average_is_over_recorded_samples() {
        let mut stats = FrameStats::new();

        stats.record(Duration::from_millis(10));
        stats.record(Duration::from_millis(20));

        assert!((stats.average_fps().unwrap() - 75.0).abs() < 1e-9);
        assert_eq!(stats.last_frame_time(), Some(Duration::from_millis(20)));
    }

    #[test]
    fn window_keeps_only_latest_hundred() {
        let mut stats = FrameStats::new();

        for _ in 0..FPS_WINDOW {
            stats.record(Duration::from_millis(100));
        }
        for _ in 0..FPS_WINDOW {
            stats.record(Duration::from_millis(10));
        }

        assert_eq!(stats.sample_count(), FPS_WINDOW);
        assert_eq!(stats.frames(), 200);
        assert!((stats.average_fps().unwrap() - 100.0).abs() < 1e-6);
    }

    #[test]
    fn long_sessions_do_not_accumulate_error() {
        let mut stats = FrameStats::new();

        for i in 0..100_000 {
            if i % 2 == 0 {
                stats.record(Duration::from_nanos(1));
            } else {
                stats.record(Duration::from_millis(1000));
            }
        }
        for _ in 0..FPS_WINDOW {
            stats.record(Duration::from_millis(16));
        }

        let expected = 1.0 / Duration::from_millis(16).as_secs_f64();
        assert!((stats.average_fps().unwrap() - expected).abs() < 1e-9);
    }

    #[test]
    fn zero_duration_does_not_poison_average() {
        let mut stats = FrameStats::new();

        stats.record(Duration::from_millis(25));
        stats.record(Duration::ZERO);

        assert_eq!(stats.last_frame_time(), Some(Duration::ZERO));
        assert_eq!(stats.sample_count(), 1);
        assert!(stats.average_fps().unwrap().is_finite());
    }
}
