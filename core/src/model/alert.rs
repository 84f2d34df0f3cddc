use serde::{Deserialize, Serialize};

/// Four ordered severity levels. `Ord` ranks `Low` lowest and `Critical`
/// highest; `weight()` is the ordinal the risk-scoring collaborator expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    #[serde(alias = "low")]
    Low,
    #[serde(alias = "medium")]
    Medium,
    #[serde(alias = "high")]
    High,
    #[serde(alias = "critical")]
    Critical,
}

impl Severity {
    pub fn weight(self) -> u8 {
        match self {
            Severity::Critical => 9,
            Severity::High => 7,
            Severity::Medium => 5,
            Severity::Low => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alert lifecycle. Transitions are one-way out of `Open`; there is no
/// reopening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AlertStatus {
    Open,
    Resolved,
    #[serde(rename = "False Positive")]
    FalsePositive,
    Escalated,
}

impl AlertStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertStatus::Open => "Open",
            AlertStatus::Resolved => "Resolved",
            AlertStatus::FalsePositive => "False Positive",
            AlertStatus::Escalated => "Escalated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertAction {
    Resolve,
    MarkFalsePositive,
    Escalate,
}

impl AlertAction {
    fn target(self) -> AlertStatus {
        match self {
            AlertAction::Resolve => AlertStatus::Resolved,
            AlertAction::MarkFalsePositive => AlertStatus::FalsePositive,
            AlertAction::Escalate => AlertStatus::Escalated,
        }
    }
}

/// A discrete security-relevant record surfaced to the feed.
///
/// Field casing on the wire is the upstream dashboard data contract: a handful
/// of camelCase keys alongside snake_case context fields. Both are preserved
/// here so bundled templates and collaborator payloads line up byte-for-byte.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    #[serde(rename = "type")]
    pub alert_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    pub severity: Severity,
    pub timestamp: String,
    #[serde(rename = "sourceIP")]
    pub source_ip: String,
    pub status: AlertStatus,
    #[serde(rename = "logExcerpt")]
    pub log_excerpt: String,
    #[serde(rename = "suggestedPlaybook", default)]
    pub suggested_playbook: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        rename = "affectedSystems",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub affected_systems: Option<Vec<String>>,
    #[serde(
        rename = "malwareName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub malware_name: Option<String>,
    #[serde(
        rename = "endpointName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub endpoint_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dest_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_os: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_high_risk: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<f64>,
}

impl Alert {
    /// Applies a triage action. Only `Open` alerts move; anything else is a
    /// no-op. Returns whether the status changed.
    pub fn apply(&mut self, action: AlertAction) -> bool {
        if self.status != AlertStatus::Open {
            return false;
        }
        self.status = action.target();
        true
    }

    pub fn is_open(&self) -> bool {
        self.status == AlertStatus::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_alert() -> Alert {
        serde_json::from_value(serde_json::json!({
            "id": "TRI-TEST01",
            "type": "Ransomware Activity",
            "severity": "Critical",
            "timestamp": "2025-07-06T09:32:00Z",
            "sourceIP": "192.168.1.158",
            "status": "Open",
            "logExcerpt": "Suspicious file encryption pattern detected on endpoint",
            "suggestedPlaybook": ["Isolate Host", "Kill Processes"],
        }))
        .unwrap()
    }

    #[test]
    fn severity_weights() {
        assert_eq!(Severity::Critical.weight(), 9);
        assert_eq!(Severity::High.weight(), 7);
        assert_eq!(Severity::Medium.weight(), 5);
        assert_eq!(Severity::Low.weight(), 3);
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
    }

    #[test]
    fn severity_accepts_both_casings() {
        let upper: Severity = serde_json::from_str("\"Critical\"").unwrap();
        let lower: Severity = serde_json::from_str("\"critical\"").unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn status_wire_names() {
        let s = serde_json::to_string(&AlertStatus::FalsePositive).unwrap();
        assert_eq!(s, "\"False Positive\"");
        let back: AlertStatus = serde_json::from_str(&s).unwrap();
        assert_eq!(back, AlertStatus::FalsePositive);
    }

    #[test]
    fn open_alert_accepts_each_action_once() {
        for (action, expect) in [
            (AlertAction::Resolve, AlertStatus::Resolved),
            (AlertAction::MarkFalsePositive, AlertStatus::FalsePositive),
            (AlertAction::Escalate, AlertStatus::Escalated),
        ] {
            let mut alert = sample_alert();
            assert!(alert.apply(action));
            assert_eq!(alert.status, expect);
        }
    }

    #[test]
    fn non_open_alert_ignores_actions() {
        let mut alert = sample_alert();
        assert!(alert.apply(AlertAction::Resolve));
        // Already resolved: every further action is a no-op.
        assert!(!alert.apply(AlertAction::Escalate));
        assert!(!alert.apply(AlertAction::Resolve));
        assert_eq!(alert.status, AlertStatus::Resolved);
    }

    #[test]
    fn alert_round_trips_wire_casing() {
        let mut alert = sample_alert();
        alert.malware_name = Some("crypto_locker.exe".into());
        alert.dest_ip = Some("192.168.1.30".into());
        let json = serde_json::to_string(&alert).unwrap();
        assert!(json.contains("\"sourceIP\""));
        assert!(json.contains("\"logExcerpt\""));
        assert!(json.contains("\"malwareName\""));
        assert!(json.contains("\"dest_ip\""));
        assert!(!json.contains("\"risk_score\""));
    }
}
