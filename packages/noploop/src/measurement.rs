//! Raw readings of one run and the rates derived from them.

use std::num::NonZero;

use crate::{Error, Rates, Result};

/// The raw result of bracketing one execution of a workload with a clock and the cycle counter.
///
/// # Examples
///
/// ```
/// use noploop::Measurement;
///
/// let measurement = Measurement::new(1000, 3_000_000_000, 6_000_000_000);
/// let rates = measurement.rates().unwrap();
///
/// assert_eq!(rates.frequency_khz(), 3_000_000);
/// assert_eq!(rates.instruction_rate_khz(), 6_000_000);
/// assert_eq!(rates.instructions_per_cycle(), 2);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Measurement {
    elapsed_millis: u64,
    cycles: u64,
    instructions: u64,
}

impl Measurement {
    /// Creates a measurement from readings taken elsewhere.
    #[must_use]
    pub const fn new(elapsed_millis: u64, cycles: u64, instructions: u64) -> Self {
        Self {
            elapsed_millis,
            cycles,
            instructions,
        }
    }

    /// Milliseconds the clock advanced across the workload.
    #[must_use]
    pub const fn elapsed_millis(&self) -> u64 {
        self.elapsed_millis
    }

    /// Cycles the cycle counter advanced across the workload.
    #[must_use]
    pub const fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Instructions the workload retired.
    #[must_use]
    pub const fn instructions(&self) -> u64 {
        self.instructions
    }

    /// Derives the frequency, instruction rate and instructions per cycle.
    ///
    /// All rates are per millisecond, which makes them kilohertz, and use integer division.
    /// Instructions per cycle is rounded half up.
    ///
    /// The frequency assumes the cycle counter ticks at the processor's current clock rate for
    /// the whole run. Frequency scaling during the run makes the result an average at best.
    ///
    /// # Errors
    ///
    /// [`Error::ZeroElapsedTime`] if the clock did not advance, [`Error::ZeroFrequency`] if fewer
    /// cycles than milliseconds elapsed.
    pub fn rates(&self) -> Result<Rates> {
        let elapsed = NonZero::new(self.elapsed_millis).ok_or(Error::ZeroElapsedTime {
            cycles: self.cycles,
        })?;

        let frequency_khz = self.cycles / elapsed;
        let instruction_rate_khz = self.instructions / elapsed;

        let frequency = NonZero::new(frequency_khz).ok_or(Error::ZeroFrequency {
            cycles: self.cycles,
            elapsed_millis: self.elapsed_millis,
        })?;

        Ok(Rates {
            instruction_rate_khz,
            elapsed_millis: self.elapsed_millis,
            frequency_khz,
            cycles: self.cycles,
            instructions_per_cycle: div_round_half_up(instruction_rate_khz, frequency),
        })
    }
}

#[expect(
    clippy::arithmetic_side_effects,
    reason = "remainder is less than the denominator and we only add 1 when the quotient is not u64::MAX"
)]
fn div_round_half_up(numerator: u64, denominator: NonZero<u64>) -> u64 {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;

    if remainder >= denominator.get() - remainder {
        quotient + 1
    } else {
        quotient
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::INSTRUCTION_COUNT;

    #[test]
    fn frequency_is_cycles_per_millisecond() {
        let rates = Measurement::new(1000, 3_000_000_000, INSTRUCTION_COUNT)
            .rates()
            .unwrap();

        assert_eq!(rates.frequency_khz(), 3_000_000);
        assert_eq!(rates.cycles(), 3_000_000_000);
        assert_eq!(rates.elapsed_millis(), 1000);
    }

    #[test]
    fn frequency_truncates() {
        let rates = Measurement::new(7, 100, 100).rates().unwrap();

        // 100 / 7 = 14.28...
        assert_eq!(rates.frequency_khz(), 14);
        assert_eq!(rates.instruction_rate_khz(), 14);
    }

    #[test]
    fn instruction_rate_of_standard_workload() {
        let rates = Measurement::new(8000, 24_000_000_000, INSTRUCTION_COUNT)
            .rates()
            .unwrap();

        assert_eq!(rates.instruction_rate_khz(), 5_120_000);
        assert_eq!(rates.frequency_khz(), 3_000_000);

        // 5_120_000 / 3_000_000 = 1.706...
        assert_eq!(rates.instructions_per_cycle(), 2);
    }

    #[test]
    fn instructions_per_cycle_rounds_half_up() {
        // Frequency 2, instruction rate 3: exactly 1.5.
        assert_eq!(
            Measurement::new(1, 2, 3).rates().unwrap().instructions_per_cycle(),
            2
        );

        // Frequency 4, instruction rate 5: 1.25.
        assert_eq!(
            Measurement::new(1, 4, 5).rates().unwrap().instructions_per_cycle(),
            1
        );

        // Frequency 4, instruction rate 7: 1.75.
        assert_eq!(
            Measurement::new(1, 4, 7).rates().unwrap().instructions_per_cycle(),
            2
        );

        // Frequency 3, instruction rate 1: 0.33.
        assert_eq!(
            Measurement::new(1, 3, 1).rates().unwrap().instructions_per_cycle(),
            0
        );

        // Frequency 3, instruction rate 2: 0.67.
        assert_eq!(
            Measurement::new(1, 3, 2).rates().unwrap().instructions_per_cycle(),
            1
        );

        // Exact multiple.
        assert_eq!(
            Measurement::new(1, 1_000, 4_000)
                .rates()
                .unwrap()
                .instructions_per_cycle(),
            4
        );
    }

    #[test]
    fn rounding_matches_add_half_then_divide() {
        for denominator in 1..=20_u64 {
            for numerator in 0..=100_u64 {
                let expected = (numerator + denominator / 2) / denominator;

                assert_eq!(
                    div_round_half_up(numerator, NonZero::new(denominator).unwrap()),
                    expected,
                    "{numerator} / {denominator}"
                );
            }
        }
    }

    #[test]
    fn rounding_at_the_top_of_the_range() {
        let max = NonZero::new(u64::MAX).unwrap();

        assert_eq!(div_round_half_up(u64::MAX, NonZero::<u64>::MIN), u64::MAX);
        assert_eq!(
            div_round_half_up(u64::MAX, NonZero::new(2).unwrap()),
            u64::MAX / 2 + 1
        );
        assert_eq!(div_round_half_up(u64::MAX, max), 1);
    }

    #[test]
    fn zero_elapsed_time_is_error() {
        let result = Measurement::new(0, 3_000_000_000, INSTRUCTION_COUNT).rates();

        assert!(matches!(
            result,
            Err(Error::ZeroElapsedTime {
                cycles: 3_000_000_000
            })
        ));
    }

    #[test]
    fn zero_frequency_is_error() {
        let result = Measurement::new(1000, 999, INSTRUCTION_COUNT).rates();

        assert!(matches!(
            result,
            Err(Error::ZeroFrequency {
                cycles: 999,
                elapsed_millis: 1000
            })
        ));
    }

    #[test]
    fn accessors_return_readings() {
        let measurement = Measurement::new(1, 2, 3);

        assert_eq!(measurement.elapsed_millis(), 1);
        assert_eq!(measurement.cycles(), 2);
        assert_eq!(measurement.instructions(), 3);
    }
}
