//! Dashboard state: the consumer side of scheduler emissions.

pub mod kpi;

pub use kpi::KpiSummary;

use crate::model::{Alert, AlertAction, LogEvent};
use crate::replay::Emission;

/// Accumulated feed state for one simulation session. Alerts are prepended
/// (newest first, as the feed renders them); log events are appended.
#[derive(Debug, Default)]
pub struct DashboardState {
    pub alerts: Vec<Alert>,
    pub logs: Vec<LogEvent>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn absorb(&mut self, emission: Emission) {
        match emission {
            Emission::Alert(alert) => self.alerts.insert(0, alert),
            Emission::Event(event) => self.logs.push(event),
        }
    }

    /// Applies a triage action to the alert with `alert_id`. Returns whether
    /// anything changed; actions on unknown or non-Open alerts are no-ops.
    pub fn apply_action(&mut self, alert_id: &str, action: AlertAction) -> bool {
        self.alerts
            .iter_mut()
            .find(|alert| alert.id == alert_id)
            .map(|alert| alert.apply(action))
            .unwrap_or(false)
    }

    pub fn reset(&mut self) {
        self.alerts.clear();
        self.logs.clear();
    }

    pub fn kpis(&self) -> KpiSummary {
        KpiSummary::derive(&self.alerts)
    }
}
