//! KPI card derivation over the live alert list.

use serde::Serialize;

use crate::model::{Alert, AlertStatus, Severity};

/// Canned response-time figures. The range has no real incident history, so
/// these mirror the demo dashboard's fixed cards.
pub const MTTD: &str = "18m";
pub const MTTR: &str = "56m";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiSummary {
    pub total_alerts: usize,
    pub active_alerts: usize,
    pub critical_alerts: usize,
    pub resolved_alerts: usize,
    /// Highest risk score across the feed, floored to a whole percent.
    pub threat_score: u32,
    pub mttd: &'static str,
    pub mttr: &'static str,
}

impl KpiSummary {
    pub fn derive(alerts: &[Alert]) -> Self {
        let active_alerts = alerts.iter().filter(|a| a.is_open()).count();
        let critical_alerts = alerts
            .iter()
            .filter(|a| a.severity == Severity::Critical && a.is_open())
            .count();
        let resolved_alerts = alerts
            .iter()
            .filter(|a| a.status == AlertStatus::Resolved)
            .count();
        let threat_score = alerts
            .iter()
            .filter_map(|a| a.risk_score)
            .fold(0.0_f64, f64::max)
            .floor() as u32;

        Self {
            total_alerts: alerts.len(),
            active_alerts,
            critical_alerts,
            resolved_alerts,
            threat_score,
            mttd: MTTD,
            mttr: MTTR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AlertAction;
    use serde_json::json;

    fn alert(severity: &str, risk: Option<f64>) -> Alert {
        let mut alert: Alert = serde_json::from_value(json!({
            "id": "a",
            "type": "Test",
            "severity": severity,
            "timestamp": "2025-01-01T00:00:00Z",
            "sourceIP": "10.0.0.1",
            "status": "Open",
            "logExcerpt": "excerpt",
        }))
        .unwrap();
        alert.risk_score = risk;
        alert
    }

    #[test]
    fn derives_counts_and_floored_threat_score() {
        let mut resolved = alert("High", Some(41.2));
        resolved.apply(AlertAction::Resolve);
        let alerts = vec![
            alert("Critical", Some(87.9)),
            alert("Low", None),
            resolved,
        ];

        let kpi = KpiSummary::derive(&alerts);
        assert_eq!(kpi.total_alerts, 3);
        assert_eq!(kpi.active_alerts, 2);
        assert_eq!(kpi.critical_alerts, 1);
        assert_eq!(kpi.resolved_alerts, 1);
        assert_eq!(kpi.threat_score, 87);
        assert_eq!(kpi.mttd, "18m");
        assert_eq!(kpi.mttr, "56m");
    }

    #[test]
    fn empty_feed_is_all_zeroes() {
        let kpi = KpiSummary::derive(&[]);
        assert_eq!(kpi.total_alerts, 0);
        assert_eq!(kpi.threat_score, 0);
    }
}
