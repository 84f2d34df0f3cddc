//! Risk scoring collaborator: trait seam plus the feature wire format.

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::model::Alert;

/// One feature record per alert, matching the scoring service's input schema.
/// `severity` is the ordinal weight (Critical=9 .. Low=3) and `port` stays a
/// string to match what the model was trained on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFeatures {
    pub alert_type_description: String,
    pub severity: u8,
    pub src_ip: String,
    pub username: String,
    pub dest_ip: String,
    pub process: String,
    pub file_name: String,
    pub port: String,
    pub logon_hour: u32,
    /// Long English weekday name, e.g. "Sunday".
    pub day_of_week: String,
    pub agent_os: String,
}

impl RiskFeatures {
    pub fn from_alert(alert: &Alert) -> Self {
        let (logon_hour, day_of_week) = match DateTime::parse_from_rfc3339(&alert.timestamp) {
            Ok(ts) => {
                let ts = ts.with_timezone(&Utc);
                (ts.hour(), weekday_name(ts.weekday()).to_string())
            }
            Err(_) => (0, "Monday".to_string()),
        };

        let src_ip = if !alert.source_ip.is_empty() {
            alert.source_ip.clone()
        } else {
            alert.ip.clone().unwrap_or_else(|| "N/A".to_string())
        };
        let username = alert
            .username
            .clone()
            .or_else(|| alert.user.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        Self {
            alert_type_description: alert.alert_type.clone(),
            severity: alert.severity.weight(),
            src_ip,
            username,
            dest_ip: alert.dest_ip.clone().unwrap_or_else(|| "N/A".to_string()),
            process: alert.process.clone().unwrap_or_else(|| "N/A".to_string()),
            file_name: alert.file_name.clone().unwrap_or_else(|| "N/A".to_string()),
            port: alert.port.clone().unwrap_or_else(|| "N/A".to_string()),
            logon_hour,
            day_of_week,
            agent_os: alert.agent_os.clone().unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Per-alert verdict, aligned by index with the request array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskVerdict {
    pub is_high_risk: bool,
    pub risk_score: f64,
}

#[async_trait]
pub trait RiskScorer: Send + Sync {
    async fn predict_risk(&self, features: &[RiskFeatures]) -> anyhow::Result<Vec<RiskVerdict>>;
}

/// Annotates alerts with risk scores, once per simulation run. Any scorer
/// failure degrades to returning the alerts unmodified; the dashboard flow
/// never blocks on the collaborator.
pub async fn enrich_alerts(scorer: &dyn RiskScorer, mut alerts: Vec<Alert>) -> Vec<Alert> {
    if alerts.is_empty() {
        return alerts;
    }

    let features: Vec<RiskFeatures> = alerts.iter().map(RiskFeatures::from_alert).collect();
    match scorer.predict_risk(&features).await {
        Ok(verdicts) => {
            for (alert, verdict) in alerts.iter_mut().zip(verdicts) {
                alert.is_high_risk = Some(verdict.is_high_risk);
                alert.risk_score = Some(verdict.risk_score);
            }
            alerts
        }
        Err(err) => {
            warn!(%err, "risk scoring unavailable, continuing without scores");
            alerts
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_alert() -> Alert {
        serde_json::from_value(json!({
            "id": "TRI-RNSM001",
            "type": "Ransomware Activity",
            "severity": "Critical",
            "timestamp": "2025-07-06T09:32:00Z",
            "sourceIP": "192.168.1.158",
            "status": "Open",
            "logExcerpt": "excerpt",
            "username": "jdoe",
            "port": "445",
            "agent_os": "Windows Server 2019",
        }))
        .unwrap()
    }

    struct FixedScorer(Vec<RiskVerdict>);

    #[async_trait]
    impl RiskScorer for FixedScorer {
        async fn predict_risk(&self, _: &[RiskFeatures]) -> anyhow::Result<Vec<RiskVerdict>> {
            Ok(self.0.clone())
        }
    }

    struct FailingScorer;

    #[async_trait]
    impl RiskScorer for FailingScorer {
        async fn predict_risk(&self, _: &[RiskFeatures]) -> anyhow::Result<Vec<RiskVerdict>> {
            anyhow::bail!("connection refused")
        }
    }

    #[test]
    fn features_carry_ordinal_severity_and_time_fields() {
        let features = RiskFeatures::from_alert(&sample_alert());
        assert_eq!(features.severity, 9);
        assert_eq!(features.src_ip, "192.168.1.158");
        assert_eq!(features.username, "jdoe");
        assert_eq!(features.port, "445");
        assert_eq!(features.logon_hour, 9);
        // 2025-07-06 is a Sunday.
        assert_eq!(features.day_of_week, "Sunday");
        assert_eq!(features.dest_ip, "N/A");
    }

    #[tokio::test]
    async fn verdicts_annotate_alerts_by_index() {
        let scorer = FixedScorer(vec![RiskVerdict {
            is_high_risk: true,
            risk_score: 92.5,
        }]);
        let enriched = enrich_alerts(&scorer, vec![sample_alert()]).await;
        assert_eq!(enriched[0].risk_score, Some(92.5));
        assert_eq!(enriched[0].is_high_risk, Some(true));
    }

    #[tokio::test]
    async fn scorer_failure_returns_alerts_unmodified() {
        let original = sample_alert();
        let enriched = enrich_alerts(&FailingScorer, vec![original.clone()]).await;
        assert_eq!(enriched.len(), 1);
        assert_eq!(enriched[0].id, original.id);
        assert!(enriched[0].risk_score.is_none());
        assert!(enriched[0].is_high_risk.is_none());
    }
}
