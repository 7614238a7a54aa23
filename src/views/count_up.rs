use std::time::Duration;

const COUNT_UP_DURATION: Duration = Duration::from_millis(2000);
const COUNT_UP_TICK: Duration = Duration::from_millis(16);

/// Counts from zero to `total` in fixed ticks over two seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountUp {
    total: u64,
}

impl CountUp {
    pub fn new(total: u64) -> Self {
        Self { total }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    fn tick_count() -> u128 {
        COUNT_UP_DURATION.as_millis() / COUNT_UP_TICK.as_millis()
    }

    /// Value to display `elapsed` after the animation started
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        let ticks = elapsed.as_millis() / COUNT_UP_TICK.as_millis();
        let steps = Self::tick_count();
        if ticks >= steps {
            return self.total;
        }
        (self.total as u128 * ticks / steps) as u64
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.value_at(elapsed) == self.total
    }

    /// Interval at which the displayed value changes
    pub fn tick() -> Duration {
        COUNT_UP_TICK
    }
}
