#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(coverage_nightly, coverage(off))]

//! Binary entry point for the noploop tool.
//!
//! With no arguments, the no-op loop is timed against the processor time of the process. With
//! any argument, it is timed against the wall clock. One report line per run goes to stdout.
//! Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).
//!
//! This module is excluded from mutation testing because testing process entry/exit behavior
//! is impractical - it requires spawning subprocesses and checking exit codes.

use std::io;
use std::num::NonZero;
use std::process::ExitCode;

use noploop::{Benchmark, ClockKind, RUN_COUNT};
use tracing::level_filters::LevelFilter;
use tracing::{Level, debug, enabled, error};
use tracing_subscriber::EnvFilter;

const CLOCK_COST_PROBE_CALLS: NonZero<u32> = NonZero::new(1_000_000).unwrap();

// Binary entry point - mutations would require subprocess testing which is impractical.
#[cfg_attr(test, mutants::skip)]
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(io::stderr)
        .init();

    let clock = ClockKind::from_args(std::env::args_os().skip(1));

    let benchmark = Benchmark::new(clock);

    debug!(%clock, runs = RUN_COUNT, "starting benchmark");

    if enabled!(Level::DEBUG) {
        let cost = benchmark.clock_call_cost(CLOCK_COST_PROBE_CALLS);
        debug!(%clock, cycles_per_call = cost, "clock read cost");
    }

    for measurement in benchmark.runs() {
        match measurement.rates() {
            Ok(rates) => println!("{rates}"),
            Err(e) => {
                error!(%clock, "{e}");
                return ExitCode::FAILURE;
            }
        }
    }

    ExitCode::SUCCESS
}
