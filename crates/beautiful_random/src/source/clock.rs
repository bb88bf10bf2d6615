//! Time sources for the time-coupled distribution kinds.
use std::time::{SystemTime, UNIX_EPOCH};

/// Supplies the phase, in seconds, read by [`DistributionKind::Wave`] and
/// [`DistributionKind::SmoothNoise`].
///
/// [`DistributionKind::Wave`]: crate::source::DistributionKind::Wave
/// [`DistributionKind::SmoothNoise`]: crate::source::DistributionKind::SmoothNoise
pub trait Clock {
    fn now_seconds(&self) -> f64;
}

/// Wall clock: seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_seconds(&self) -> f64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0)
    }
}

/// Clock frozen at a fixed number of seconds.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedClock(pub f64);

impl Clock for FixedClock {
    fn now_seconds(&self) -> f64 {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_seconds(&self) -> f64 {
        (**self).now_seconds()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_past_2020() {
        assert!(SystemClock.now_seconds() > 1_577_836_800.0);
    }

    #[test]
    fn fixed_clock_and_references_report_the_same_time() {
        let clock = FixedClock(12.5);
        assert_eq!(clock.now_seconds(), 12.5);
        assert_eq!((&clock).now_seconds(), 12.5);
    }
}
