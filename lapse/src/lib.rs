mod clock;
#[cfg(unix)]
mod cpu;
mod measure;

pub use lapse_core::{Clock, Error, State, Stopwatch};

pub use clock::{MonotonicClock, TokioClock};
#[cfg(unix)]
pub use cpu::ProcessorClock;
pub use measure::{measure, measure_async};
