//! Blinking text cursor
//!
//! A periodic visibility toggle that runs independently of whatever text it
//! is attached to. The typewriter merges it into the rendered string only.

use std::time::Duration;

/// Default toggle interval (the cursor flips twice per second)
pub const DEFAULT_BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// A cursor that flips visibility every `interval`
#[derive(Clone, Debug)]
pub struct CursorBlink {
    interval: Duration,
    /// Time left until the next flip
    remaining: Duration,
    visible: bool,
}

impl CursorBlink {
    /// Create a cursor that starts visible
    pub fn new(interval: Duration) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        Self {
            interval,
            remaining: interval,
            visible: true,
        }
    }

    /// Advance by `dt`, flipping once for every elapsed interval
    pub fn advance(&mut self, dt: Duration) {
        let mut budget = dt;
        while budget >= self.remaining {
            budget -= self.remaining;
            self.visible = !self.visible;
            self.remaining = self.interval;
        }
        self.remaining -= budget;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Full on/off cycle length
    pub fn period(&self) -> Duration {
        self.interval * 2
    }
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self::new(DEFAULT_BLINK_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_visible() {
        let cursor = CursorBlink::default();
        assert!(cursor.is_visible());
        assert_eq!(cursor.period(), Duration::from_millis(1000));
    }

    #[test]
    fn test_toggles_on_interval() {
        let mut cursor = CursorBlink::default();

        cursor.advance(Duration::from_millis(499));
        assert!(cursor.is_visible());

        cursor.advance(Duration::from_millis(1));
        assert!(!cursor.is_visible());

        cursor.advance(Duration::from_millis(500));
        assert!(cursor.is_visible());
    }

    #[test]
    fn test_half_period_samples_differ() {
        let mut cursor = CursorBlink::default();
        cursor.advance(Duration::from_millis(137));

        for _ in 0..10 {
            let before = cursor.is_visible();
            cursor.advance(cursor.period() / 2);
            assert_ne!(before, cursor.is_visible());
        }
    }

    #[test]
    fn test_large_step_flips_per_interval() {
        let mut cursor = CursorBlink::default();
        // Three flips: visible -> hidden -> visible -> hidden
        cursor.advance(Duration::from_millis(1500));
        assert!(!cursor.is_visible());
    }
}
