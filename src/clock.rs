use std::thread;
use std::time::{Duration, Instant};

/// Fixed-rate frame pacing: sleeps away whatever is left of the frame budget.
/// A slow frame is not made up for later.
pub struct FrameClock {
    budget: Duration,
    started: Instant,
}

impl FrameClock {
    pub fn new(frames_per_second: u32) -> Self {
        Self {
            budget: Duration::from_secs(1) / frames_per_second.max(1),
            started: Instant::now(),
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn remaining(&self) -> Duration {
        self.budget.saturating_sub(self.started.elapsed())
    }

    pub fn tick(&mut self) {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
        self.started = Instant::now();
    }
}
