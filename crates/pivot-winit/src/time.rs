use std::time::{Duration, Instant};

use pivot_core::profiling::profile_function;

/// Frame timing information handed to [`App::update`](crate::app::App::update).
///
/// Frame-independent movement should use [`delta_seconds`](Self::delta_seconds)
/// so behavior stays consistent across refresh rates.
#[derive(Debug, Clone)]
pub struct FrameTime {
    /// Time elapsed since the last frame
    pub delta: Duration,
    /// Total time elapsed since app start
    pub elapsed: Duration,
    /// Total number of frames rendered
    pub frame_count: u64,
}

impl FrameTime {
    pub fn new() -> Self {
        Self {
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Returns delta time in seconds (f32)
    #[inline]
    pub fn delta_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }

    /// Returns elapsed time in seconds (f32)
    #[inline]
    pub fn elapsed_seconds(&self) -> f32 {
        self.elapsed.as_secs_f32()
    }
}

impl Default for FrameTime {
    fn default() -> Self {
        Self::new()
    }
}

/// Tracks time for the app loop
pub(crate) struct TimeTracker {
    start_time: Instant,
    last_frame_time: Instant,
    frame_count: u64,
}

impl TimeTracker {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_frame_time: now,
            frame_count: 0,
        }
    }

    pub fn tick(&mut self) -> FrameTime {
        profile_function!();
        let now = Instant::now();
        let delta = now.duration_since(self.last_frame_time);
        let elapsed = now.duration_since(self.start_time);

        self.last_frame_time = now;
        self.frame_count += 1;

        FrameTime {
            delta,
            elapsed,
            frame_count: self.frame_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_advances_frame_count_and_elapsed() {
        let mut tracker = TimeTracker::new();
        let first = tracker.tick();
        let second = tracker.tick();

        assert_eq!(first.frame_count, 1);
        assert_eq!(second.frame_count, 2);
        assert!(second.elapsed >= first.elapsed);
    }
}
