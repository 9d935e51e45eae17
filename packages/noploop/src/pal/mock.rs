#![cfg_attr(coverage_nightly, coverage(off))]

use mockall::mock;

use crate::pal::Platform;

mock! {
    #[derive(Debug)]
    pub Platform {
    }

    impl Platform for Platform {
        fn cycle_counter(&self) -> u64;
        fn wall_clock_millis(&self) -> u64;
        fn process_time_millis(&self) -> u64;
    }
}
