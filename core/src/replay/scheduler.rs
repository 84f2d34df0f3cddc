//! Owned, tick-driven replay scheduler.
//!
//! The scheduler is synchronous: the caller (the TUI loop, or a test) owns
//! the timer and calls [`ReplayScheduler::tick`] once per interval. There is
//! no shared state and no timer handle to leak; dropping the owner tears the
//! whole thing down.

use std::sync::Arc;

use tracing::debug;

use super::clock::Clock;
use super::phase::{self, ReplayPhase, TransitionError};
use super::plan::{ReplayItem, ReplayPlan};
use crate::model::{Alert, LogEvent};
use crate::template::resolver::format_timestamp;
use crate::template::SoarData;
use crate::util::ids;

/// One emitted replay item, re-identified and stamped with live time.
#[derive(Debug, Clone)]
pub enum Emission {
    Alert(Alert),
    Event(LogEvent),
}

pub struct ReplayScheduler {
    phase: ReplayPhase,
    plan: Option<ReplayPlan>,
    cursor: usize,
    interval_ms: u64,
    clock: Arc<dyn Clock>,
}

impl ReplayScheduler {
    pub fn new(interval_ms: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            phase: ReplayPhase::Idle,
            plan: None,
            cursor: 0,
            interval_ms,
            clock,
        }
    }

    pub fn phase(&self) -> ReplayPhase {
        self.phase
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    pub fn plan_len(&self) -> usize {
        self.plan.as_ref().map(ReplayPlan::len).unwrap_or(0)
    }

    /// Starts playback. The first start from Idle builds the plan and zeroes
    /// the cursor; a start after Stop resumes at the retained position.
    /// Starting while already Running is a no-op.
    pub fn start(&mut self, data: &SoarData) -> Result<(), TransitionError> {
        if self.phase == ReplayPhase::Running {
            return Ok(());
        }
        phase::validate(self.phase, ReplayPhase::Running)?;

        if self.plan.is_none() {
            let plan = ReplayPlan::build(data);
            debug!(items = plan.len(), "replay plan built");
            self.cursor = 0;
            self.plan = Some(plan);
        }
        self.phase = ReplayPhase::Running;
        Ok(())
    }

    /// Emits the next plan entry, if any. A tick while not Running, or after
    /// the plan drained, is a no-op. Draining transitions back to Idle.
    pub fn tick(&mut self) -> Option<Emission> {
        if self.phase != ReplayPhase::Running {
            return None;
        }
        let plan = self.plan.as_ref()?;

        let Some(entry) = plan.get(self.cursor) else {
            self.phase = ReplayPhase::Idle;
            return None;
        };

        let live_ts = format_timestamp(self.clock.now());
        let emission = match &entry.item {
            ReplayItem::Alert(alert) => {
                let mut alert = alert.clone();
                alert.id = ids::new_alert_id();
                alert.timestamp = live_ts;
                Emission::Alert(alert)
            }
            ReplayItem::Event(event) => {
                let mut event = event.clone();
                event.id = ids::new_log_id();
                event.timestamp = live_ts;
                Emission::Event(event)
            }
        };

        self.cursor += 1;
        if self.cursor >= plan.len() {
            self.phase = ReplayPhase::Idle;
        }
        Some(emission)
    }

    /// Clears the timer side without losing position; a later start resumes.
    pub fn stop(&mut self) {
        if self.phase == ReplayPhase::Running {
            self.phase = ReplayPhase::Stopped;
        }
    }

    /// Back to Idle with cursor and plan cleared. The next start rebuilds.
    pub fn reset(&mut self) {
        self.phase = ReplayPhase::Idle;
        self.plan = None;
        self.cursor = 0;
    }

    /// Applies a new tick interval. When Running, playback pauses and the
    /// driver must restart after its settle delay; cursor and plan are
    /// preserved so no item is duplicated or dropped across the gap.
    /// Returns whether a restart is owed.
    pub fn change_interval(&mut self, interval_ms: u64) -> bool {
        self.interval_ms = interval_ms;
        if self.phase == ReplayPhase::Running {
            self.phase = ReplayPhase::Stopped;
            true
        } else {
            false
        }
    }

    pub fn is_drained(&self) -> bool {
        self.plan
            .as_ref()
            .map(|plan| self.cursor >= plan.len())
            .unwrap_or(false)
    }
}
