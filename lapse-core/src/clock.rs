pub trait Clock {
    type Instant: Copy;

    /// Samples the source. `None` means the platform reported its invalid-time sentinel.
    fn now(&self) -> Option<Self::Instant>;

    fn ticks_between(&self, earlier: Self::Instant, later: Self::Instant) -> u64;

    fn ticks_per_second(&self) -> u64;
}
