//! Reveal clock for timed text, using an accumulator.
//!
//! `draw_web()` calls at ~60fps with a variable delta. `RevealClock` turns
//! that into a slow, fixed cadence of reveal ticks. Unlike a simulation
//! clock it never catches up: a frame yields at most one tick and any
//! surplus time is dropped, so a backgrounded tab does not dump a burst of
//! lines when it comes back.

/// Frames further apart than this count as this long.
const MAX_FRAME_DELTA_MS: f64 = 500.0;

pub struct RevealClock {
    /// Milliseconds between reveals.
    interval_ms: f64,
    /// Milliseconds accumulated towards the next reveal.
    accumulator: f64,
    /// Timestamp of the last update (ms), None on the first running frame.
    last_timestamp: Option<f64>,
    running: bool,
    /// Reveals emitted since creation.
    pub total_ticks: u64,
}

impl RevealClock {
    pub fn new(interval_ms: f64) -> Self {
        Self {
            interval_ms: interval_ms.max(1.0),
            accumulator: 0.0,
            last_timestamp: None,
            running: false,
            total_ticks: 0,
        }
    }

    #[cfg(test)]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start or stop the clock. Any transition drops pending time.
    pub fn set_running(&mut self, running: bool) {
        if self.running == running {
            return;
        }
        self.running = running;
        self.accumulator = 0.0;
        self.last_timestamp = None;
    }

    /// Feed a wall-clock timestamp (from `Date.now()` or similar) once per
    /// frame. Returns 0 or 1.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        if !self.running {
            return 0;
        }
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, MAX_FRAME_DELTA_MS),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        if self.accumulator < self.interval_ms {
            return 0;
        }
        self.accumulator = 0.0;
        self.total_ticks += 1;
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(interval_ms: f64) -> RevealClock {
        let mut clock = RevealClock::new(interval_ms);
        clock.set_running(true);
        clock
    }

    #[test]
    fn stopped_clock_never_ticks() {
        let mut clock = RevealClock::new(100.0);
        clock.update(0.0);
        assert_eq!(clock.update(1_000.0), 0);
        assert_eq!(clock.total_ticks, 0);
    }

    #[test]
    fn first_frame_returns_zero_ticks() {
        let mut clock = running(100.0);
        assert_eq!(clock.update(5_000.0), 0);
    }

    #[test]
    fn ticks_once_per_interval() {
        let mut clock = running(300.0);
        clock.update(0.0);
        assert_eq!(clock.update(200.0), 0);
        assert_eq!(clock.update(300.0), 1);
        assert_eq!(clock.update(400.0), 0);
        assert_eq!(clock.update(600.0), 1);
        assert_eq!(clock.total_ticks, 2);
    }

    #[test]
    fn at_most_one_tick_per_frame() {
        let mut clock = running(100.0);
        clock.update(0.0);
        // 10 second gap is clamped to 500ms and still yields only one tick.
        assert_eq!(clock.update(10_000.0), 1);
        assert_eq!(clock.update(10_001.0), 0);
    }

    #[test]
    fn surplus_time_is_dropped() {
        let mut clock = running(100.0);
        clock.update(0.0);
        assert_eq!(clock.update(190.0), 1);
        // The 90ms surplus does not carry over.
        assert_eq!(clock.update(200.0), 0);
    }

    #[test]
    fn stopping_clears_pending_time() {
        let mut clock = running(100.0);
        clock.update(0.0);
        clock.update(90.0);
        clock.set_running(false);
        clock.set_running(true);
        clock.update(100.0);
        assert_eq!(clock.update(110.0), 0);
        assert!(clock.is_running());
    }

    #[test]
    fn steady_60fps() {
        let mut clock = running(1_000.0);
        clock.update(0.0);
        let mut total = 0u32;
        for i in 1..=180 {
            total += clock.update(i as f64 * 16.667);
        }
        assert!((2..=3).contains(&total), "expected ~3 ticks, got {}", total);
    }
}
