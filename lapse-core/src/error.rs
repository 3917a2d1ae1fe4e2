#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Error {
    #[error("clock source returned an invalid time")]
    ClockUnavailable,
    #[error("stop() called before the stopwatch was started")]
    NotStarted,
}
