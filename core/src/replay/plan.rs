//! The immutable playback plan: merged alerts and events in timestamp order.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::model::{Alert, LogEvent};
use crate::template::SoarData;

#[derive(Debug, Clone)]
pub enum ReplayItem {
    Alert(Alert),
    Event(LogEvent),
}

#[derive(Debug, Clone)]
pub struct PlanEntry {
    pub item: ReplayItem,
    /// Resolved template timestamp. Used only for sort order; emission stamps
    /// a live wall-clock time instead.
    pub original_ts: DateTime<Utc>,
}

/// Built once per simulation run, then read-only during playback.
#[derive(Debug, Clone, Default)]
pub struct ReplayPlan {
    entries: Vec<PlanEntry>,
}

impl ReplayPlan {
    /// Merges alerts then events, stamps each with its resolved timestamp,
    /// and stable-sorts ascending. Entries whose timestamp does not parse
    /// are malformed playback input: skipped with a warning.
    pub fn build(data: &SoarData) -> Self {
        let mut entries = Vec::with_capacity(data.alerts.len() + data.event_stream.len());

        for alert in &data.alerts {
            match parse_ts(&alert.timestamp) {
                Some(original_ts) => entries.push(PlanEntry {
                    item: ReplayItem::Alert(alert.clone()),
                    original_ts,
                }),
                None => warn!(id = %alert.id, ts = %alert.timestamp, "skipping alert with unparseable timestamp"),
            }
        }
        for event in &data.event_stream {
            match parse_ts(&event.timestamp) {
                Some(original_ts) => entries.push(PlanEntry {
                    item: ReplayItem::Event(event.clone()),
                    original_ts,
                }),
                None => warn!(id = %event.id, ts = %event.timestamp, "skipping event with unparseable timestamp"),
            }
        }

        entries.sort_by_key(|entry| entry.original_ts);
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PlanEntry> {
        self.entries.get(index)
    }
}

fn parse_ts(ts: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(ts)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LogLevel, Severity};
    use serde_json::json;

    fn alert_at(ts: &str) -> Alert {
        serde_json::from_value(json!({
            "id": "TRI-X",
            "type": "Test",
            "severity": "High",
            "timestamp": ts,
            "sourceIP": "10.0.0.1",
            "status": "Open",
            "logExcerpt": "excerpt",
        }))
        .unwrap()
    }

    fn event_at(ts: &str) -> LogEvent {
        serde_json::from_value(json!({
            "id": "log-x",
            "timestamp": ts,
            "level": "WARN",
            "source": "test",
            "message": "msg",
            "category": "test",
        }))
        .unwrap()
    }

    #[test]
    fn earlier_event_precedes_later_alert() {
        let data = SoarData {
            alerts: vec![alert_at("2025-01-01T00:00:10Z")],
            event_stream: vec![event_at("2025-01-01T00:00:05Z")],
        };
        let plan = ReplayPlan::build(&data);
        assert_eq!(plan.len(), 2);
        assert!(matches!(plan.get(0).unwrap().item, ReplayItem::Event(_)));
        assert!(matches!(plan.get(1).unwrap().item, ReplayItem::Alert(_)));
    }

    #[test]
    fn equal_timestamps_keep_alerts_before_events() {
        // Stable sort preserves the merge order (alerts first) on ties.
        let data = SoarData {
            alerts: vec![alert_at("2025-01-01T00:00:05Z")],
            event_stream: vec![event_at("2025-01-01T00:00:05Z")],
        };
        let plan = ReplayPlan::build(&data);
        assert!(matches!(plan.get(0).unwrap().item, ReplayItem::Alert(_)));
    }

    #[test]
    fn unparseable_timestamps_are_skipped() {
        let data = SoarData {
            alerts: vec![alert_at("${timestamp_plus_10s}")],
            event_stream: vec![event_at("2025-01-01T00:00:05Z")],
        };
        let plan = ReplayPlan::build(&data);
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn sample_types_are_reused() {
        // Keep helpers honest about severity/level deserialization.
        assert_eq!(alert_at("2025-01-01T00:00:00Z").severity, Severity::High);
        assert_eq!(event_at("2025-01-01T00:00:00Z").level, LogLevel::Warn);
    }
}
