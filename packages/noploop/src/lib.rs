#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Estimates the processor's clock frequency and superscalar throughput by timing a loop of
//! no-op instructions.
//!
//! A [`Benchmark`] executes a [`NopLoop`] of exactly [`INSTRUCTION_COUNT`] `nop` instructions,
//! bracketed by readings of a millisecond [`Clock`] and of the processor's [`CycleCounter`].
//! The resulting [`Measurement`] yields [`Rates`]:
//!
//! * frequency: cycles per millisecond,
//! * instruction rate: instructions per millisecond,
//! * superscalar factor: instructions per cycle.
//!
//! The clock is either the processor time of the process ([`ClockKind::ProcessTime`]), which
//! ignores time the process spent descheduled, or the wall clock ([`ClockKind::WallClock`]).
//!
//! ```no_run
//! use noploop::{Benchmark, ClockKind};
//!
//! let benchmark = Benchmark::new(ClockKind::ProcessTime);
//!
//! for measurement in benchmark.runs() {
//!     match measurement.rates() {
//!         Ok(rates) => println!("{rates}"),
//!         Err(e) => eprintln!("{e}"),
//!     }
//! }
//! ```
//!
//! # Accuracy
//!
//! The cycle counter is read with `rdtsc`, so only `x86` and `x86_64` are supported. On modern
//! processors the time-stamp counter ticks at a constant rate, which means the reported frequency
//! is the counter's rate and not necessarily the current core clock under frequency scaling.
//! The thread is not pinned to a processor; a migration during a run skews the cycle count.

mod benchmark;
mod clock;
mod cycles;
mod error;
mod measurement;
mod pal;
mod report;
mod workload;

pub use benchmark::*;
pub use clock::*;
pub use cycles::*;
pub use error::*;
pub use measurement::*;
pub use report::*;
pub use workload::{INSTRUCTION_COUNT, LOOP_ITERATIONS, NOPS_PER_BLOCK, NopLoop, Workload};

#[cfg(test)]
pub(crate) use workload::MockWorkload;
