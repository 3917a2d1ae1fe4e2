use core::time::Duration;

use crate::{Clock, Error, State};

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Keeps the last completed interval; reads never sample the clock and are zero
/// until the first successful `stop()`.
pub struct Stopwatch<Clk: Clock> {
    clock: Clk,
    started_at: Option<Clk::Instant>,
    elapsed_ticks: u64,
    state: State,
}

impl<Clk> Stopwatch<Clk>
where
    Clk: Clock,
{
    pub const fn new(clock: Clk) -> Self {
        Self {
            clock,
            started_at: None,
            elapsed_ticks: 0,
            state: State::Unset,
        }
    }

    pub fn start(&mut self) -> Result<(), Error> {
        let Some(now) = self.clock.now() else {
            log::debug!("clock unavailable on start");
            return Err(Error::ClockUnavailable);
        };

        if self.state == State::Running {
            log::trace!("stopwatch restarted while running");
        }

        self.started_at = Some(now);
        self.state = State::Running;
        log::trace!("stopwatch started");
        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), Error> {
        let Some(started_at) = self.started_at else {
            return Err(Error::NotStarted);
        };

        let Some(now) = self.clock.now() else {
            log::debug!("clock unavailable on stop");
            return Err(Error::ClockUnavailable);
        };

        self.elapsed_ticks = self.clock.ticks_between(started_at, now);
        self.started_at = None;
        self.state = State::Stopped;
        log::trace!("stopwatch stopped after {} ticks", self.elapsed_ticks);
        Ok(())
    }

    pub fn elapsed_time(&self) -> f64 {
        let per_second = self.clock.ticks_per_second();
        if per_second == 0 {
            return 0.0;
        }

        self.elapsed_ticks as f64 / per_second as f64
    }

    pub fn elapsed(&self) -> Duration {
        let per_second = self.clock.ticks_per_second();
        if per_second == 0 {
            return Duration::ZERO;
        }

        let secs = self.elapsed_ticks / per_second;
        let rem = u128::from(self.elapsed_ticks % per_second);
        // rem < per_second, so the quotient is below one second of nanos.
        let nanos = (rem * NANOS_PER_SEC / u128::from(per_second)) as u32;
        Duration::new(secs, nanos)
    }

    pub const fn elapsed_ticks(&self) -> u64 {
        self.elapsed_ticks
    }

    pub const fn state(&self) -> State {
        self.state
    }

    pub const fn is_running(&self) -> bool {
        matches!(self.state, State::Running)
    }

    pub fn reset(&mut self) {
        self.started_at = None;
        self.elapsed_ticks = 0;
        self.state = State::Unset;
    }

    pub const fn clock(&self) -> &Clk {
        &self.clock
    }

    pub fn into_clock(self) -> Clk {
        self.clock
    }
}

impl<Clk> Default for Stopwatch<Clk>
where
    Clk: Clock + Default,
{
    fn default() -> Self {
        Self::new(Clk::default())
    }
}

impl<Clk> core::fmt::Debug for Stopwatch<Clk>
where
    Clk: Clock,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Stopwatch")
            .field("state", &self.state)
            .field("elapsed_ticks", &self.elapsed_ticks)
            .finish_non_exhaustive()
    }
}
