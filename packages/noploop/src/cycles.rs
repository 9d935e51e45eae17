use crate::pal::{Platform, PlatformFacade};

/// Reads the processor's time-stamp counter, which advances once per clock cycle.
///
/// The two readings bracketing a measurement are only comparable if both are taken on the same
/// logical processor. Nothing pins the thread; a migration between readings skews the result.
#[derive(Debug)]
pub struct CycleCounter {
    platform: PlatformFacade,
}

impl CycleCounter {
    /// Creates a counter that reads the real hardware.
    #[must_use]
    pub fn new() -> Self {
        Self::with_platform(PlatformFacade::real())
    }

    #[must_use]
    pub(crate) fn with_platform(platform: PlatformFacade) -> Self {
        Self { platform }
    }

    /// Reads the current value of the counter.
    #[must_use]
    #[inline]
    pub fn read(&self) -> u64 {
        self.platform.cycle_counter()
    }
}

impl Default for CycleCounter {
    fn default() -> Self {
        Self::new()
    }
}
