use std::time::Duration;

/// Default tick interval in milliseconds. The checklist has no timers;
/// the tick only refreshes the clock and picks up the midnight rollover.
pub const DEFAULT_TICK_MS: u64 = 1000;

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        let duration = tick_duration();
        assert_eq!(duration, Duration::from_millis(1000));
    }
}
