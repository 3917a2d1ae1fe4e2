use std::time::{Duration, Instant};

use lapse_core::Clock;

pub(crate) const NANOS_PER_SECOND: u64 = Duration::from_secs(1).as_nanos() as u64;

pub(crate) fn duration_to_ticks(duration: Duration) -> u64 {
    u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    type Instant = Instant;

    fn now(&self) -> Option<Self::Instant> {
        Some(Instant::now())
    }

    fn ticks_between(&self, earlier: Self::Instant, later: Self::Instant) -> u64 {
        duration_to_ticks(later.saturating_duration_since(earlier))
    }

    fn ticks_per_second(&self) -> u64 {
        NANOS_PER_SECOND
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl Clock for TokioClock {
    type Instant = tokio::time::Instant;

    fn now(&self) -> Option<Self::Instant> {
        Some(tokio::time::Instant::now())
    }

    fn ticks_between(&self, earlier: Self::Instant, later: Self::Instant) -> u64 {
        duration_to_ticks(later.saturating_duration_since(earlier))
    }

    fn ticks_per_second(&self) -> u64 {
        NANOS_PER_SECOND
    }
}
