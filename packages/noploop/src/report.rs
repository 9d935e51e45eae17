use std::fmt;

/// Rates derived from one [`Measurement`][crate::Measurement].
///
/// The [`Display`][fmt::Display] output is the single report line printed per run:
///
/// ```
/// use noploop::Measurement;
///
/// let rates = Measurement::new(8000, 24_000_000_000, 40_960_000_000)
///     .rates()
///     .unwrap();
///
/// assert_eq!(
///     rates.to_string(),
///     "noploop: instr: 5120000 KHz (time 8000 ms) freq 3000000 KHz (24000000000 ticks) \
///      Superscalar: 2 instr/cycle"
/// );
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Rates {
    pub(crate) instruction_rate_khz: u64,
    pub(crate) elapsed_millis: u64,
    pub(crate) frequency_khz: u64,
    pub(crate) cycles: u64,
    pub(crate) instructions_per_cycle: u64,
}

impl Rates {
    /// Instructions retired per millisecond.
    #[must_use]
    pub const fn instruction_rate_khz(&self) -> u64 {
        self.instruction_rate_khz
    }

    /// Milliseconds the clock advanced across the workload.
    #[must_use]
    pub const fn elapsed_millis(&self) -> u64 {
        self.elapsed_millis
    }

    /// Cycles per millisecond.
    #[must_use]
    pub const fn frequency_khz(&self) -> u64 {
        self.frequency_khz
    }

    /// Cycles the cycle counter advanced across the workload.
    #[must_use]
    pub const fn cycles(&self) -> u64 {
        self.cycles
    }

    /// The superscalar factor: instructions retired per cycle, rounded half up.
    #[must_use]
    pub const fn instructions_per_cycle(&self) -> u64 {
        self.instructions_per_cycle
    }
}

impl fmt::Display for Rates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "noploop: instr: {} KHz (time {} ms) freq {} KHz ({} ticks) Superscalar: {} instr/cycle",
            self.instruction_rate_khz,
            self.elapsed_millis,
            self.frequency_khz,
            self.cycles,
            self.instructions_per_cycle
        )
    }
}
