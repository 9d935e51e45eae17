use std::{io, mem};

use cpu_time::ProcessTime;
use libc::{CLOCK_MONOTONIC, timespec};

use crate::pal::Platform;

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64")))]
compile_error!("noploop reads the cycle counter with `rdtsc` and only supports x86 and x86_64");

/// Singleton instance of `BuildTargetPlatform`, used by public API types
/// to hook up to the real hardware and operating system.
pub(crate) static BUILD_TARGET_PLATFORM: BuildTargetPlatform = BuildTargetPlatform;

/// The platform that the build is targeting.
///
/// You would only use a different platform in unit tests that need to control the readings.
#[derive(Debug, Default)]
pub(crate) struct BuildTargetPlatform;

impl Platform for BuildTargetPlatform {
    #[inline(always)]
    fn cycle_counter(&self) -> u64 {
        #[cfg(target_arch = "x86")]
        use std::arch::x86::_rdtsc;
        #[cfg(target_arch = "x86_64")]
        use std::arch::x86_64::_rdtsc;

        // SAFETY: `rdtsc` has no preconditions on any x86 processor we can run on.
        unsafe { _rdtsc() }
    }

    #[expect(
        clippy::cast_sign_loss,
        clippy::arithmetic_side_effects,
        reason = "a monotonic clock never reports negative values and never gets near u64::MAX milliseconds"
    )]
    fn wall_clock_millis(&self) -> u64 {
        // SAFETY: All-zero is a valid initial value for this type.
        let mut ts: timespec = unsafe { mem::zeroed() };

        // SAFETY: We are passing valid arguments, no other safety requirements.
        let result = unsafe { libc::clock_gettime(CLOCK_MONOTONIC, &raw mut ts) };

        assert!(result == 0, "{}", io::Error::last_os_error());

        ts.tv_sec as u64 * 1000 + ts.tv_nsec as u64 / 1_000_000
    }

    fn process_time_millis(&self) -> u64 {
        u64::try_from(ProcessTime::now().as_duration().as_millis())
            .expect("process time never exceeds u64::MAX milliseconds")
    }
}

#[cfg(test)]
#[cfg(not(miri))] // Miri cannot talk to the real platform.
mod tests {
    use std::hint::black_box;

    use super::*;

    #[test]
    fn cycle_counter_advances() {
        let a = BUILD_TARGET_PLATFORM.cycle_counter();

        let mut sum = 0_u64;
        for i in 0..10_000_u64 {
            sum = sum.wrapping_add(black_box(i));
        }
        black_box(sum);

        let b = BUILD_TARGET_PLATFORM.cycle_counter();

        assert!(b > a);
    }

    #[test]
    fn wall_clock_is_non_decreasing() {
        let a = BUILD_TARGET_PLATFORM.wall_clock_millis();
        let b = BUILD_TARGET_PLATFORM.wall_clock_millis();

        assert!(b >= a);
    }

    #[test]
    fn process_time_is_non_decreasing() {
        let a = BUILD_TARGET_PLATFORM.process_time_millis();
        let b = BUILD_TARGET_PLATFORM.process_time_millis();

        assert!(b >= a);
    }
}
