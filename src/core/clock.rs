use std::time::Instant;

/// Minimal frame clock: tracks per-frame delta and total elapsed time.
/// The elapsed value drives the spin angle; the delta feeds the FPS counter.
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
        }
    }

    /// Get delta time since last tick and advance clock
    /// Returns delta in seconds
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }

    /// Seconds since the clock was created or last reset
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Reset clock to current time
    pub fn reset(&mut self) {
        let now = Instant::now();
        self.start = now;
        self.last_tick = now;
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn clock_measures_delta() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();

        // Should be roughly 10ms = 0.01s
        assert!(delta >= 0.009 && delta <= 0.020);
    }

    #[test]
    fn elapsed_keeps_growing_across_ticks() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        clock.tick();
        let first = clock.elapsed();

        thread::sleep(Duration::from_millis(10));
        clock.tick();
        let second = clock.elapsed();

        assert!(first >= 0.009);
        assert!(second > first);
    }

    #[test]
    fn clock_resets() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        clock.reset();

        let delta = clock.tick();
        // Should be very small since we just reset
        assert!(delta < 0.005);
        assert!(clock.elapsed() < 0.005);
    }
}
