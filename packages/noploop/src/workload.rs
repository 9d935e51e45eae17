//! The busy-loop whose instruction count is known exactly.

use std::arch::asm;
use std::fmt::Debug;

/// Number of `nop` instructions in one unrolled block.
pub const NOPS_PER_BLOCK: u64 = 4096;

/// Number of times the standard workload executes the block.
pub const LOOP_ITERATIONS: u64 = 10_000_000;

/// Total number of `nop` instructions executed by the standard workload.
pub const INSTRUCTION_COUNT: u64 = NOPS_PER_BLOCK * LOOP_ITERATIONS;

/// Work whose duration a [`Benchmark`][crate::Benchmark] measures.
///
/// The instruction count must be exact and constant: it is the numerator of the instruction
/// rate and the superscalar factor.
#[cfg_attr(test, mockall::automock)]
pub trait Workload: Debug {
    /// Number of instructions one call to [`execute()`][Self::execute] retires.
    fn instruction_count(&self) -> u64;

    /// Runs the workload to completion.
    fn execute(&self);
}

/// A loop over a block of [`NOPS_PER_BLOCK`] unrolled `nop` instructions.
///
/// The block is emitted as inline assembly, so the compiler can neither remove nor reorder it.
/// The loop counter adds a handful of instructions per block, which is negligible next to the
/// block itself and is not counted. The loop touches no memory and its single branch is
/// perfectly predictable, so its cost is dominated by instruction issue throughput.
///
/// # Examples
///
/// ```
/// use noploop::{NOPS_PER_BLOCK, NopLoop, Workload};
///
/// let workload = NopLoop::with_iterations(10);
/// assert_eq!(workload.instruction_count(), 10 * NOPS_PER_BLOCK);
///
/// workload.execute();
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct NopLoop {
    iterations: u64,
}

impl NopLoop {
    /// The standard workload of [`LOOP_ITERATIONS`] blocks, [`INSTRUCTION_COUNT`] instructions
    /// in total. Takes several seconds on current hardware.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_iterations(LOOP_ITERATIONS)
    }

    /// A workload of the same block executed `iterations` times.
    ///
    /// # Panics
    ///
    /// Panics if the total instruction count does not fit in `u64`.
    #[must_use]
    pub const fn with_iterations(iterations: u64) -> Self {
        assert!(
            iterations.checked_mul(NOPS_PER_BLOCK).is_some(),
            "instruction count of the workload must fit in u64"
        );

        Self { iterations }
    }

    /// How many times the block is executed.
    #[must_use]
    pub const fn iterations(&self) -> u64 {
        self.iterations
    }
}

impl Default for NopLoop {
    fn default() -> Self {
        Self::new()
    }
}

impl Workload for NopLoop {
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "overflow is ruled out by the constructor"
    )]
    fn instruction_count(&self) -> u64 {
        self.iterations * NOPS_PER_BLOCK
    }

    #[inline(never)]
    fn execute(&self) {
        for _ in 0..self.iterations {
            nop_block();
        }
    }
}

#[inline(always)]
fn nop_block() {
    // SAFETY: `nop` has no effect on registers, flags, memory or the stack.
    unsafe {
        asm!(
            ".rept {count}",
            "nop",
            ".endr",
            count = const NOPS_PER_BLOCK,
            options(nomem, nostack, preserves_flags),
        );
    }
}

#[cfg(test)]
mod tests {
    use static_assertions::{assert_impl_all, const_assert_eq};

    use super::*;

    const_assert_eq!(INSTRUCTION_COUNT, 40_960_000_000);

    assert_impl_all!(NopLoop: Send, Sync, Copy);

    #[test]
    fn standard_workload_matches_constants() {
        let workload = NopLoop::new();

        assert_eq!(workload.iterations(), LOOP_ITERATIONS);
        assert_eq!(workload.instruction_count(), INSTRUCTION_COUNT);
        assert_eq!(NopLoop::default(), workload);
    }

    #[test]
    fn instruction_count_scales_with_iterations() {
        assert_eq!(NopLoop::with_iterations(0).instruction_count(), 0);
        assert_eq!(NopLoop::with_iterations(1).instruction_count(), 4096);
        assert_eq!(NopLoop::with_iterations(3).instruction_count(), 12_288);
    }

    #[test]
    #[should_panic(expected = "instruction count of the workload must fit in u64")]
    fn rejects_overflowing_iterations() {
        let _workload = NopLoop::with_iterations(u64::MAX);
    }

    #[test]
    #[cfg_attr(miri, ignore)] // Miri does not support inline assembly.
    fn short_loop_executes() {
        NopLoop::with_iterations(100).execute();
        NopLoop::with_iterations(0).execute();
    }
}
