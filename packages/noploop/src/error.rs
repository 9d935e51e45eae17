use thiserror::Error;

/// Errors that can occur when deriving rates from a measurement.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The clock did not advance across the workload, so no rate can be derived.
    ///
    /// Happens when the workload finishes within the resolution of the clock, or when a clock
    /// steps backwards during the measurement.
    #[error("elapsed time measured as zero milliseconds ({cycles} cycles elapsed)")]
    ZeroElapsedTime {
        /// Cycles counted across the workload.
        cycles: u64,
    },

    /// Fewer cycles than milliseconds elapsed, so the derived frequency is zero and the
    /// instructions per cycle cannot be derived.
    #[error("derived frequency is zero ({cycles} cycles in {elapsed_millis} ms)")]
    ZeroFrequency {
        /// Cycles counted across the workload.
        cycles: u64,

        /// Milliseconds elapsed across the workload.
        elapsed_millis: u64,
    },
}

/// A specialized `Result` type for noploop operations, returning the crate's
/// [`Error`] type as the error value.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::fmt::Debug;

    use static_assertions::assert_impl_all;

    use super::*;

    assert_impl_all!(Error: Send, Sync, Debug);

    #[test]
    fn messages_include_readings() {
        let error = Error::ZeroElapsedTime { cycles: 17 };
        assert_eq!(
            error.to_string(),
            "elapsed time measured as zero milliseconds (17 cycles elapsed)"
        );

        let error = Error::ZeroFrequency {
            cycles: 5,
            elapsed_millis: 10,
        };
        assert_eq!(
            error.to_string(),
            "derived frequency is zero (5 cycles in 10 ms)"
        );
    }
}
