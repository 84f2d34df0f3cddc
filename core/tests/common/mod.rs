use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use socrange_core::api::{FixedClock, ReplayScheduler};

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 7, 6, 9, 30, 0).unwrap()
}

pub fn fixed_scheduler(interval_ms: u64) -> (ReplayScheduler, Arc<FixedClock>) {
    let clock = Arc::new(FixedClock::new(base_time()));
    (ReplayScheduler::new(interval_ms, clock.clone()), clock)
}
