use std::time::{Duration, Instant};

const WINDOW: Duration = Duration::from_secs(1);

/// Counts frames presented over one second windows
pub struct FpsCounter {
    window_start: Instant,
    frames: u32,
    rate: u32,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        FpsCounter {
            window_start: now,
            frames: 0,
            rate: 0,
        }
    }

    /// Frames counted in the last complete window
    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// Records a frame presented at `now`. Returns the new rate when a window closes.
    pub fn tick(&mut self, now: Instant) -> Option<u32> {
        self.frames += 1;
        let elapsed = now.duration_since(self.window_start);
        if elapsed < WINDOW {
            return None;
        }
        self.rate = (f64::from(self.frames) / elapsed.as_secs_f64()).round() as u32;
        self.frames = 0;
        self.window_start = now;
        Some(self.rate)
    }
}
