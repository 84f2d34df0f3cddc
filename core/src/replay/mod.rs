//! Timestamp-ordered replay of populated SOAR data into the live feed.

pub mod clock;
pub mod phase;
pub mod plan;
pub mod scheduler;

pub use clock::{Clock, FixedClock, SystemClock};
pub use phase::{ReplayPhase, TransitionError};
pub use plan::{PlanEntry, ReplayItem, ReplayPlan};
pub use scheduler::{Emission, ReplayScheduler};
