//! Wall-clock → game-tick conversion using an accumulator.
//!
//! `draw_web()` fires at ~60fps with a variable delta. `GameTime` folds those
//! frames into whole one-second ticks so the auto-clicker yield is applied on
//! a fixed schedule regardless of frame rate.

pub struct GameTime {
    /// Milliseconds per tick (1000ms = one auto-yield per second).
    ms_per_tick: f64,
    /// Milliseconds accumulated but not yet consumed as ticks.
    accumulator: f64,
    /// Timestamp of the previous frame (ms), None before the first frame.
    last_timestamp: Option<f64>,
}

impl GameTime {
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            ms_per_tick: 1000.0 / ticks_per_sec as f64,
            accumulator: 0.0,
            last_timestamp: None,
        }
    }

    /// Feed a wall-clock timestamp (from `performance.now()`); returns the
    /// number of whole ticks to process for this frame.
    ///
    /// The delta is clamped to a single tick period, so a tab that was
    /// backgrounded for minutes resumes with at most one tick — idle time away
    /// from the page earns nothing, matching the live-timer behaviour.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, self.ms_per_tick),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let ticks = (self.accumulator / self.ms_per_tick) as u32;
        self.accumulator -= ticks as f64 * self.ms_per_tick;
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_returns_zero_ticks() {
        let mut gt = GameTime::new(1);
        assert_eq!(gt.update(0.0), 0);
    }

    #[test]
    fn one_tick_per_second() {
        let mut gt = GameTime::new(1);
        gt.update(0.0);
        assert_eq!(gt.update(1000.0), 1);
        assert_eq!(gt.update(2000.0), 1);
    }

    #[test]
    fn sub_second_frames_accumulate() {
        let mut gt = GameTime::new(1);
        gt.update(0.0);
        // 60fps frames: none of them individually reaches a tick
        let mut total = 0;
        for i in 1..=63 {
            total += gt.update(i as f64 * 16.667);
        }
        // 63 * 16.667ms ≈ 1050ms → exactly 1 tick
        assert_eq!(total, 1);
    }

    #[test]
    fn remainder_carried_over() {
        let mut gt = GameTime::new(1);
        gt.update(0.0);
        assert_eq!(gt.update(600.0), 0);
        assert_eq!(gt.update(1100.0), 1); // 600 + 500 = 1100ms → 1 tick, 100ms left
        assert_eq!(gt.update(2000.0), 1); // 100 + 900 = 1000ms
        assert_eq!(gt.update(2100.0), 0);
    }

    #[test]
    fn backgrounded_tab_yields_at_most_one_tick() {
        let mut gt = GameTime::new(1);
        gt.update(0.0);
        // 10 minutes away → delta clamped to one tick period
        assert_eq!(gt.update(600_000.0), 1);
        // And the accumulator holds no leftover catch-up
        assert_eq!(gt.update(600_100.0), 0);
    }

    #[test]
    fn non_monotonic_timestamp_ignored() {
        let mut gt = GameTime::new(1);
        gt.update(1000.0);
        assert_eq!(gt.update(500.0), 0);
        assert_eq!(gt.update(1500.0), 1);
    }
}
