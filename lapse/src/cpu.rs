use std::{mem::MaybeUninit, time::Duration};

use lapse_core::Clock;

use crate::clock::{NANOS_PER_SECOND, duration_to_ticks};

/// Sleeping or blocking does not advance this clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessorClock;

impl Clock for ProcessorClock {
    type Instant = Duration;

    fn now(&self) -> Option<Self::Instant> {
        let mut ts = MaybeUninit::<libc::timespec>::uninit();
        // SAFETY: `ts` points to writable storage for one timespec.
        let rc = unsafe { libc::clock_gettime(libc::CLOCK_PROCESS_CPUTIME_ID, ts.as_mut_ptr()) };
        if rc == -1 {
            return None;
        }

        // SAFETY: clock_gettime filled `ts` on success.
        let ts = unsafe { ts.assume_init() };
        let secs = u64::try_from(ts.tv_sec).ok()?;
        let nanos = u32::try_from(ts.tv_nsec).ok()?;
        Some(Duration::new(secs, nanos))
    }

    fn ticks_between(&self, earlier: Self::Instant, later: Self::Instant) -> u64 {
        duration_to_ticks(later.saturating_sub(earlier))
    }

    fn ticks_per_second(&self) -> u64 {
        NANOS_PER_SECOND
    }
}
