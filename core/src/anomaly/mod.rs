//! Anomaly detection collaborator: trait seam, wire types, and the bundled
//! demo rows (seven days of training logs plus an eighth day to score).

use async_trait::async_trait;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Label value the detector uses for anomalous rows.
pub const ANOMALY_LABEL: i32 = -1;

/// One flattened log row, matching the detector's input schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogFeatures {
    pub agent_name: String,
    pub agent_ip: String,
    pub data_alert_type: String,
    pub hour: u32,
    pub day_of_week: String,
    pub sca_score: f64,
    pub sca_total_checks: f64,
    #[serde(rename = "win_system_eventID")]
    pub win_system_event_id: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrainSummary {
    #[serde(default)]
    pub training_anomalies: Option<u64>,
}

/// Per-row verdict; `anomaly_label == -1` marks an anomaly.
#[derive(Debug, Clone, Deserialize)]
pub struct AnomalyVerdict {
    pub log_index: usize,
    pub anomaly_score: f64,
    pub anomaly_label: i32,
}

impl AnomalyVerdict {
    pub fn is_anomaly(&self) -> bool {
        self.anomaly_label == ANOMALY_LABEL
    }
}

#[async_trait]
pub trait AnomalyDetector: Send + Sync {
    async fn train(&self, rows: &[LogFeatures]) -> anyhow::Result<TrainSummary>;
    async fn predict(&self, rows: &[LogFeatures]) -> anyhow::Result<Vec<AnomalyVerdict>>;
}

const ANOMALY_LOGS_JSON: &str = include_str!("../../data/anomaly_logs.json");

#[derive(Deserialize)]
struct BundledLogs {
    training: Vec<LogFeatures>,
    prediction: Vec<LogFeatures>,
}

lazy_static! {
    static ref BUNDLED: BundledLogs =
        serde_json::from_str(ANOMALY_LOGS_JSON).expect("bundled anomaly_logs.json is valid");
}

/// Two rows per day across the seven training days.
pub fn bundled_training_rows() -> &'static [LogFeatures] {
    &BUNDLED.training
}

/// The eighth-day rows to score.
pub fn bundled_prediction_rows() -> &'static [LogFeatures] {
    &BUNDLED.prediction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_rows_have_expected_shape() {
        assert_eq!(bundled_training_rows().len(), 14);
        assert_eq!(bundled_prediction_rows().len(), 5);
        let first = &bundled_training_rows()[0];
        assert!(!first.agent_name.is_empty());
        assert!(first.hour < 24);
    }

    #[test]
    fn features_serialize_with_wire_casing() {
        let json = serde_json::to_string(&bundled_training_rows()[0]).unwrap();
        assert!(json.contains("\"win_system_eventID\""));
        assert!(json.contains("\"day_of_week\""));
    }

    #[test]
    fn verdict_label_marks_anomalies() {
        let verdict: AnomalyVerdict = serde_json::from_str(
            r#"{"log_index": 2, "anomaly_score": -0.13, "anomaly_label": -1}"#,
        )
        .unwrap();
        assert!(verdict.is_anomaly());
        assert_eq!(verdict.log_index, 2);
    }
}
