use core::time::Duration;

#[cfg(not(all(target_arch = "wasm32", target_os = "unknown")))]
use std::time::{SystemTime, UNIX_EPOCH};
#[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
use web_time::{SystemTime, UNIX_EPOCH};

/// Discord epoch: Thursday, January 1, 2015 00:00:00 UTC
pub const DISCORD_EPOCH: Duration = Duration::from_millis(DISCORD_EPOCH_MILLIS);

/// [`DISCORD_EPOCH`] as raw milliseconds since the UNIX epoch.
pub const DISCORD_EPOCH_MILLIS: u64 = 1_420_070_400_000;

/// Length of the year used for age computations: 365 days, no leap days.
pub const MILLIS_PER_YEAR: u64 = 365 * 24 * 60 * 60 * 1000;

/// A trait for time sources that return a wall-clock timestamp.
///
/// This abstraction lets age computations run against the real system clock
/// or against a fixed instant in tests.
///
/// The unit is **milliseconds since the UNIX epoch**.
///
/// # Example
///
/// ```
/// use cordkit::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource<u64> for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis(), 1234);
/// ```
pub trait TimeSource<T> {
    /// Returns the current time in milliseconds since the UNIX epoch.
    fn current_millis(&self) -> T;
}

/// Wall-clock time source backed by `SystemTime`.
///
/// On `wasm32-unknown-unknown` this reads the browser clock through
/// `web-time`. A clock set before 1970 reports zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl TimeSource<u64> for SystemClock {
    fn current_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

/// Whole years elapsed between `created_millis` and `now_millis`.
///
/// Floors to complete years and clamps at zero, so a timestamp in the future
/// (or a skewed clock) yields `0` instead of a negative age.
pub const fn years_between(created_millis: u64, now_millis: u64) -> u64 {
    now_millis.saturating_sub(created_millis) / MILLIS_PER_YEAR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn epoch_constants_agree() {
        assert_eq!(DISCORD_EPOCH.as_millis(), u128::from(DISCORD_EPOCH_MILLIS));
    }

    #[test]
    fn years_between_floors() {
        let start = DISCORD_EPOCH_MILLIS;
        assert_eq!(years_between(start, start), 0);
        assert_eq!(years_between(start, start + MILLIS_PER_YEAR - 1), 0);
        assert_eq!(years_between(start, start + MILLIS_PER_YEAR), 1);
        assert_eq!(years_between(start, start + 10 * MILLIS_PER_YEAR + 5), 10);
    }

    #[test]
    fn years_between_clamps_future_timestamps() {
        assert_eq!(years_between(DISCORD_EPOCH_MILLIS, 0), 0);
        assert_eq!(years_between(u64::MAX, DISCORD_EPOCH_MILLIS), 0);
    }

    #[test]
    fn system_clock_is_past_the_discord_epoch() {
        assert!(SystemClock.current_millis() > DISCORD_EPOCH_MILLIS);
    }
}
