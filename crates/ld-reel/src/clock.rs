//! Injected tick sources
//!
//! The coordinator never reads the wall clock itself; it is fed timestamps
//! from a [`Clock`]. Production uses [`SystemClock`]; tests drive a
//! [`ManualClock`] deterministically.

use std::time::{Duration, Instant};

/// A source of animation timestamps
pub trait Clock {
    /// Current time in milliseconds on this clock's timeline
    fn now_ms(&self) -> f64;

    /// Yield until the next frame should run
    fn tick(&mut self);
}

/// Wall-clock frames at a fixed cadence
#[derive(Debug)]
pub struct SystemClock {
    start: Instant,
    frame: Duration,
}

impl SystemClock {
    /// ~60 fps
    pub fn new() -> Self {
        Self::with_frame_ms(16)
    }

    /// Custom frame interval
    pub fn with_frame_ms(frame_ms: u64) -> Self {
        Self {
            start: Instant::now(),
            frame: Duration::from_millis(frame_ms),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    fn tick(&mut self) {
        std::thread::sleep(self.frame);
    }
}

/// Test clock advanced by hand
#[derive(Debug, Clone)]
pub struct ManualClock {
    now_ms: f64,
    step_ms: f64,
}

impl ManualClock {
    /// Start at zero with the given step per tick
    pub fn new(step_ms: f64) -> Self {
        Self {
            now_ms: 0.0,
            step_ms,
        }
    }

    /// Jump to an absolute time
    pub fn set(&mut self, now_ms: f64) {
        self.now_ms = now_ms;
    }

    /// Advance by an arbitrary amount
    pub fn advance(&mut self, delta_ms: f64) {
        self.now_ms += delta_ms;
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now_ms
    }

    fn tick(&mut self) {
        self.now_ms += self.step_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_steps() {
        let mut clock = ManualClock::new(16.0);
        assert_eq!(clock.now_ms(), 0.0);
        clock.tick();
        clock.tick();
        assert_eq!(clock.now_ms(), 32.0);
        clock.advance(100.0);
        assert_eq!(clock.now_ms(), 132.0);
    }

    #[test]
    fn test_system_clock_advances() {
        let mut clock = SystemClock::with_frame_ms(1);
        let t0 = clock.now_ms();
        clock.tick();
        assert!(clock.now_ms() > t0);
    }
}
