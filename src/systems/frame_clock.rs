//! Frame timing for held-key rotation
//!
//! The clock measures the time between redraws. While idle it restarts on
//! the key press that starts a rotation, so the first step does not
//! include the idle gap. Once rotating, further key events (auto-repeat
//! or extra keys) must leave it alone or the held keys lose time.

use std::time::Instant;

/// Time since the last redraw, capped per frame
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    last: Instant,
    /// Longest step one frame may advance, in seconds
    max_dt: f32,
}

impl FrameClock {
    pub fn new(now: Instant, max_dt: f32) -> Self {
        Self { last: now, max_dt }
    }

    /// Note a key event
    ///
    /// `was_rotating` is the controller state before the event was applied.
    pub fn key_event(&mut self, now: Instant, was_rotating: bool, repeat: bool) {
        if !was_rotating && !repeat {
            self.last = now;
        }
    }

    /// Seconds since the previous tick (or restart), capped at `max_dt`
    pub fn tick(&mut self, now: Instant) -> f32 {
        let dt = now.saturating_duration_since(self.last).as_secs_f32();
        self.last = now;
        dt.min(self.max_dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    const MAX_DT: f32 = 1.0 / 30.0;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_tick_measures_time_between_redraws() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(t0, MAX_DT);
        let dt = clock.tick(t0 + ms(16));
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_tick_is_capped() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(t0, MAX_DT);
        assert_eq!(clock.tick(t0 + Duration::from_secs(5)), MAX_DT);
    }

    #[test]
    fn test_key_repeat_while_rotating_keeps_elapsed_time() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(t0, MAX_DT);
        clock.tick(t0);
        // Auto-repeat lands between two redraws
        clock.key_event(t0 + ms(10), true, true);
        let dt = clock.tick(t0 + ms(16));
        assert!((dt - 0.016).abs() < 1e-6, "lost time: {}", dt);
    }

    #[test]
    fn test_second_key_while_rotating_keeps_elapsed_time() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(t0, MAX_DT);
        clock.tick(t0);
        clock.key_event(t0 + ms(10), true, false);
        let dt = clock.tick(t0 + ms(16));
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_first_press_restarts_after_idle() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(t0, MAX_DT);
        clock.tick(t0);
        // Idle for a second, then a rotation key goes down
        clock.key_event(t0 + ms(1000), false, false);
        let dt = clock.tick(t0 + ms(1005));
        assert!((dt - 0.005).abs() < 1e-6);
    }

    #[test]
    fn test_repeat_while_idle_does_not_restart() {
        let t0 = Instant::now();
        let mut clock = FrameClock::new(t0, MAX_DT);
        clock.tick(t0);
        clock.key_event(t0 + ms(10), false, true);
        let dt = clock.tick(t0 + ms(16));
        assert!((dt - 0.016).abs() < 1e-6);
    }
}
