use std::hint::black_box;
use std::iter::FusedIterator;
use std::num::NonZero;

use tracing::{debug, trace};

use crate::pal::PlatformFacade;
use crate::{Clock, ClockKind, CycleCounter, Measurement, NopLoop, Workload};

/// Number of runs performed by one invocation, to show how stable the measurement is.
pub const RUN_COUNT: usize = 3;

/// Times a workload against one clock and the cycle counter.
///
/// Every run reads the clock, then the cycle counter, executes the workload, then reads the
/// cycle counter and the clock again. The cycle readings are nested inside the clock readings
/// so that the cost of reading the clock stays out of the cycle count.
///
/// # Examples
///
/// ```
/// use noploop::{Benchmark, ClockKind, NopLoop};
///
/// let benchmark = Benchmark::with_workload(ClockKind::WallClock, NopLoop::with_iterations(100));
///
/// let measurement = benchmark.run();
/// assert_eq!(measurement.instructions(), 100 * noploop::NOPS_PER_BLOCK);
/// ```
#[derive(Debug)]
pub struct Benchmark<W = NopLoop> {
    clock: Clock,
    cycles: CycleCounter,
    workload: W,
}

impl Benchmark<NopLoop> {
    /// Creates a benchmark of the standard [`NopLoop`] against the given clock.
    #[must_use]
    pub fn new(clock: ClockKind) -> Self {
        Self::with_workload(clock, NopLoop::new())
    }
}

impl<W: Workload> Benchmark<W> {
    /// Creates a benchmark of a custom workload against the given clock.
    #[must_use]
    pub fn with_workload(clock: ClockKind, workload: W) -> Self {
        Self::with_platform(clock, workload, PlatformFacade::real())
    }

    #[must_use]
    pub(crate) fn with_platform(clock: ClockKind, workload: W, platform: PlatformFacade) -> Self {
        Self {
            clock: Clock::with_platform(clock, platform.clone()),
            cycles: CycleCounter::with_platform(platform),
            workload,
        }
    }

    /// The time source this benchmark brackets the workload with.
    #[must_use]
    pub fn clock_kind(&self) -> ClockKind {
        self.clock.kind()
    }

    /// The workload being timed.
    #[must_use]
    pub fn workload(&self) -> &W {
        &self.workload
    }

    /// Executes the workload once and returns the readings.
    ///
    /// Blocks until the workload completes.
    pub fn run(&self) -> Measurement {
        let start_millis = self.clock.now_millis();
        let start_cycles = self.cycles.read();

        self.workload.execute();

        let end_cycles = self.cycles.read();
        let end_millis = self.clock.now_millis();

        trace!(
            start_millis,
            end_millis,
            start_cycles,
            end_cycles,
            "workload bracketed"
        );

        let measurement = Measurement::new(
            end_millis.saturating_sub(start_millis),
            end_cycles.wrapping_sub(start_cycles),
            self.workload.instruction_count(),
        );

        debug!(
            clock = %self.clock.kind(),
            elapsed_millis = measurement.elapsed_millis(),
            cycles = measurement.cycles(),
            instructions = measurement.instructions(),
            "run completed"
        );

        measurement
    }

    /// Returns an iterator that performs [`RUN_COUNT`] independent runs.
    ///
    /// Each run happens when the iterator is advanced, so results can be reported as they arrive.
    #[must_use]
    pub fn runs(&self) -> Runs<'_, W> {
        Runs {
            benchmark: self,
            remaining: RUN_COUNT,
        }
    }

    /// Mean number of cycles spent in one read of the clock, over `calls` reads.
    ///
    /// Tells how much a clock reading perturbs what it measures. Reading process time is
    /// typically several times as expensive as reading the wall clock.
    #[must_use]
    pub fn clock_call_cost(&self, calls: NonZero<u32>) -> u64 {
        let start_cycles = self.cycles.read();

        for _ in 0..calls.get() {
            black_box(self.clock.now_millis());
        }

        let end_cycles = self.cycles.read();

        end_cycles.wrapping_sub(start_cycles) / NonZero::<u64>::from(calls)
    }
}

/// Iterator over the runs of a [`Benchmark`], created by [`Benchmark::runs()`].
#[derive(Debug)]
pub struct Runs<'a, W> {
    benchmark: &'a Benchmark<W>,
    remaining: usize,
}

impl<W: Workload> Iterator for Runs<'_, W> {
    type Item = Measurement;

    fn next(&mut self) -> Option<Self::Item> {
        self.remaining = self.remaining.checked_sub(1)?;

        Some(self.benchmark.run())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<W: Workload> ExactSizeIterator for Runs<'_, W> {}

impl<W: Workload> FusedIterator for Runs<'_, W> {}
