#![allow(dead_code)]

use std::{cell::Cell, rc::Rc, time::Duration};

use lapse_core::Clock;

/// Manually advanced clock counting whole ticks at a configurable rate.
#[derive(Clone, Debug)]
pub struct MockClock {
    now: Rc<Cell<u64>>,
    failing: Rc<Cell<bool>>,
    samples: Rc<Cell<usize>>,
    ticks_per_second: u64,
}

impl MockClock {
    pub fn new() -> Self {
        Self::with_resolution(1_000_000_000)
    }

    pub fn with_resolution(ticks_per_second: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(0)),
            failing: Rc::new(Cell::new(false)),
            samples: Rc::new(Cell::new(0)),
            ticks_per_second,
        }
    }

    pub fn advance_ticks(&self, ticks: u64) {
        self.now.set(self.now.get().saturating_add(ticks));
    }

    /// Advances by `delta`, truncated to whole ticks.
    pub fn advance(&self, delta: Duration) {
        let ticks = delta.as_nanos() * u128::from(self.ticks_per_second) / 1_000_000_000;
        self.advance_ticks(u64::try_from(ticks).unwrap_or(u64::MAX));
    }

    /// Moves the clock backwards, as a misbehaving source might.
    pub fn rewind_ticks(&self, ticks: u64) {
        self.now.set(self.now.get().saturating_sub(ticks));
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn samples(&self) -> usize {
        self.samples.get()
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    type Instant = u64;

    fn now(&self) -> Option<Self::Instant> {
        self.samples.set(self.samples.get() + 1);
        if self.failing.get() {
            None
        } else {
            Some(self.now.get())
        }
    }

    fn ticks_between(&self, earlier: Self::Instant, later: Self::Instant) -> u64 {
        later.saturating_sub(earlier)
    }

    fn ticks_per_second(&self) -> u64 {
        self.ticks_per_second
    }
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
