//! Frame time statistics

use super::rolling::RollingWindow;
use std::time::{Duration, Instant};

pub struct FrameStats {
    frame_start: Instant,
    frame_times: RollingWindow<Duration>,
}

impl FrameStats {
    pub fn new(capacity: usize) -> Self {
        Self {
            frame_start: Instant::now(),
            frame_times: RollingWindow::new(capacity),
        }
    }

    pub fn begin(&mut self) {
        self.frame_start = Instant::now();
    }

    pub fn end(&mut self) {
        self.record(self.frame_start.elapsed());
    }

    pub fn record(&mut self, frame_time: Duration) {
        self.frame_times.push(frame_time);
    }

    /// Frames per second if every frame took the average work time.
    pub fn fps(&self) -> f64 {
        let avg = self.frame_times.average().as_secs_f64();
        if avg > 0.0 {
            1.0 / avg
        } else {
            0.0
        }
    }

    pub fn frame_time_ms(&self) -> f64 {
        self.frame_times.average().as_secs_f64() * 1000.0
    }

    pub fn frame_time_range_ms(&self) -> (f64, f64) {
        let (min, max) = self.frame_times.min_max();
        (min.as_secs_f64() * 1000.0, max.as_secs_f64() * 1000.0)
    }
}
