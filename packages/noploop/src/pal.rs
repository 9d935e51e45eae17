//! Platform abstraction layer for the clocks that a measurement reads.
//!
//! Every reading of the hardware cycle counter or an operating system clock goes through the
//! [`Platform`] trait, so the measurement logic can be exercised against a mock platform in
//! unit tests while the binary talks to the real hardware.

mod abstractions;
mod facade;
#[cfg(test)]
mod mock;
mod real;

pub(crate) use abstractions::*;
pub(crate) use facade::*;
#[cfg(test)]
pub(crate) use mock::*;
pub(crate) use real::*;
