#![no_std]

mod clock;
mod error;
mod state;
mod stopwatch;

pub use clock::Clock;
pub use error::Error;
pub use state::State;
pub use stopwatch::Stopwatch;
