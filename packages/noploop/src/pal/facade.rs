use std::fmt::Debug;
#[cfg(test)]
use std::sync::Arc;

#[cfg(test)]
use crate::pal::MockPlatform;
use crate::pal::{BUILD_TARGET_PLATFORM, BuildTargetPlatform, Platform};

#[derive(Clone)]
pub(crate) enum PlatformFacade {
    Real(&'static BuildTargetPlatform),

    #[cfg(test)]
    Mock(Arc<MockPlatform>),
}

impl PlatformFacade {
    pub(crate) fn real() -> Self {
        Self::Real(&BUILD_TARGET_PLATFORM)
    }
}

impl Platform for PlatformFacade {
    fn cycle_counter(&self) -> u64 {
        match self {
            Self::Real(p) => p.cycle_counter(),
            #[cfg(test)]
            Self::Mock(p) => p.cycle_counter(),
        }
    }

    fn wall_clock_millis(&self) -> u64 {
        match self {
            Self::Real(p) => p.wall_clock_millis(),
            #[cfg(test)]
            Self::Mock(p) => p.wall_clock_millis(),
        }
    }

    fn process_time_millis(&self) -> u64 {
        match self {
            Self::Real(p) => p.process_time_millis(),
            #[cfg(test)]
            Self::Mock(p) => p.process_time_millis(),
        }
    }
}

impl From<&'static BuildTargetPlatform> for PlatformFacade {
    fn from(p: &'static BuildTargetPlatform) -> Self {
        Self::Real(p)
    }
}

#[cfg(test)]
impl From<MockPlatform> for PlatformFacade {
    fn from(p: MockPlatform) -> Self {
        Self::Mock(Arc::new(p))
    }
}

impl Debug for PlatformFacade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real(p) => p.fmt(f),
            #[cfg(test)]
            Self::Mock(p) => p.fmt(f),
        }
    }
}
