use std::fmt::Debug;

/// The clocks available to a measurement.
///
/// Every method is a single reading; implementations hold no per-measurement state.
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Reads the hardware cycle counter.
    fn cycle_counter(&self) -> u64;

    /// Milliseconds since an arbitrary fixed epoch, from a monotonic system clock.
    fn wall_clock_millis(&self) -> u64;

    /// Milliseconds of processor time consumed by the current process so far.
    fn process_time_millis(&self) -> u64;
}
