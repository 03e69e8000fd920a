//! Frame pacing
//!
//! Fixed target rate; the driver asks whether a frame is due and when the
//! next one should start.

use std::time::{Duration, Instant};

/// Default target frame rate.
pub const TARGET_FPS: u32 = 60;

/// Frame deadline tracker
pub struct FrameClock {
    frame_duration: Duration,
    next_frame: Instant,
    frame_count: u64,
}

impl FrameClock {
    pub fn new(target_fps: u32, now: Instant) -> Self {
        Self {
            frame_duration: frame_duration(target_fps),
            next_frame: now,
            frame_count: 0,
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// When the next frame should begin.
    pub fn next_deadline(&self) -> Instant {
        self.next_frame
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_frame
    }

    /// Record that a frame started at `now`. A frame that started late does
    /// not make the following ones run back-to-back.
    pub fn mark(&mut self, now: Instant) {
        self.frame_count += 1;
        self.next_frame += self.frame_duration;
        if self.next_frame < now {
            self.next_frame = now + self.frame_duration;
        }
    }
}

/// Duration of one frame at `fps`; zero is treated as one frame per second.
pub fn frame_duration(fps: u32) -> Duration {
    Duration::from_secs(1) / fps.max(1)
}
