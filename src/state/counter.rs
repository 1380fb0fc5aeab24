// Count-up animation for headline figures.
// Cubic ease-out from zero to the target value over a fixed duration.

use std::time::{Duration, Instant};

/// Default count-up duration.
pub const COUNT_UP_DURATION: Duration = Duration::from_millis(1800);

#[derive(Debug, Clone, Copy)]
pub struct CountUp {
    end: f64,
    duration: Duration,
    started: Instant,
}

impl CountUp {
    pub fn new(end: f64, started: Instant) -> Self {
        Self::with_duration(end, COUNT_UP_DURATION, started)
    }

    pub fn with_duration(end: f64, duration: Duration, started: Instant) -> Self {
        Self {
            end,
            duration,
            started,
        }
    }

    /// Linear progress in [0, 1].
    fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Displayed value at `now`.
    pub fn value_at(&self, now: Instant) -> f64 {
        let p = self.progress(now);
        let eased = 1.0 - (1.0 - p).powi(3);
        eased * self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero_and_ends_at_target() {
        let t0 = Instant::now();
        let counter = CountUp::new(69.0, t0);

        assert_eq!(counter.value_at(t0), 0.0);

        let end = t0 + COUNT_UP_DURATION;
        assert_eq!(counter.value_at(end), 69.0);
        assert_eq!(counter.value_at(end + Duration::from_secs(5)), 69.0);
    }

    #[test]
    fn test_monotone_and_front_loaded() {
        let t0 = Instant::now();
        let counter = CountUp::new(100.0, t0);

        let mut last = 0.0;
        for step in 1..=18 {
            let value = counter.value_at(t0 + Duration::from_millis(step * 100));
            assert!(value >= last);
            last = value;
        }

        // Ease-out: past the linear midpoint at half time
        let half = counter.value_at(t0 + COUNT_UP_DURATION / 2);
        assert!((half - 87.5).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_is_immediate() {
        let t0 = Instant::now();
        let counter = CountUp::with_duration(99.97, Duration::ZERO, t0);
        assert_eq!(counter.value_at(t0), 99.97);
    }
}
