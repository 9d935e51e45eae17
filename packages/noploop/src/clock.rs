use std::fmt;

use crate::pal::{Platform, PlatformFacade};

/// Which time source a [`Benchmark`][crate::Benchmark] brackets the workload with.
///
/// The choice is made once at startup and applies to every run in the invocation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ClockKind {
    /// Processor time consumed by the process. Excludes time the process spent waiting or
    /// preempted, so it is insensitive to other load on the system.
    ProcessTime,

    /// Elapsed real-world time from a monotonic system clock. Includes time during which the
    /// process was not scheduled.
    WallClock,
}

impl ClockKind {
    /// Selects the clock from the command line arguments (excluding the program name).
    ///
    /// The presence of any argument selects [`ClockKind::WallClock`]; the values are ignored.
    /// With no arguments, [`ClockKind::ProcessTime`] is selected.
    ///
    /// # Examples
    ///
    /// ```
    /// use noploop::ClockKind;
    ///
    /// assert_eq!(ClockKind::from_args(Vec::<String>::new()), ClockKind::ProcessTime);
    /// assert_eq!(ClockKind::from_args(["anything"]), ClockKind::WallClock);
    /// ```
    #[must_use]
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator,
    {
        if args.into_iter().next().is_some() {
            Self::WallClock
        } else {
            Self::ProcessTime
        }
    }
}

impl fmt::Display for ClockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProcessTime => f.write_str("process time"),
            Self::WallClock => f.write_str("wall clock"),
        }
    }
}

/// A millisecond-resolution time source of the kind chosen at construction.
///
/// # Examples
///
/// ```
/// use noploop::{Clock, ClockKind};
///
/// let clock = Clock::new(ClockKind::WallClock);
///
/// let start = clock.now_millis();
/// let end = clock.now_millis();
///
/// assert!(end >= start);
/// ```
#[derive(Debug)]
pub struct Clock {
    kind: ClockKind,
    platform: PlatformFacade,
}

impl Clock {
    /// Creates a clock that reads the given time source of the real platform.
    #[must_use]
    pub fn new(kind: ClockKind) -> Self {
        Self::with_platform(kind, PlatformFacade::real())
    }

    #[must_use]
    pub(crate) fn with_platform(kind: ClockKind, platform: PlatformFacade) -> Self {
        Self { kind, platform }
    }

    /// The time source this clock reads.
    #[must_use]
    pub fn kind(&self) -> ClockKind {
        self.kind
    }

    /// Reads the current time in milliseconds since an arbitrary epoch.
    ///
    /// Only differences between two readings of the same clock are meaningful.
    #[must_use]
    #[inline]
    pub fn now_millis(&self) -> u64 {
        match self.kind {
            ClockKind::ProcessTime => self.platform.process_time_millis(),
            ClockKind::WallClock => self.platform.wall_clock_millis(),
        }
    }
}
