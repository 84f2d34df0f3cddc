//! Template lookup plus resolution into the typed dashboard model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::{resolver, store, ParamMap};
use crate::model::{Alert, LogEvent};

/// The resolved output of one template: the alert feed seed and the event
/// stream seed, in template order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoarData {
    #[serde(default)]
    pub alerts: Vec<Alert>,
    #[serde(rename = "eventStream", default)]
    pub event_stream: Vec<LogEvent>,
}

/// Resolves `template_id` against `params` with `Utc::now()` as the base
/// time. One base time is captured for the whole call so every relative
/// timestamp in the template stays mutually consistent.
pub fn populate(template_id: &str, params: &ParamMap) -> SoarData {
    populate_at(template_id, params, Utc::now())
}

/// [`populate`] with an injected base time, for deterministic tests.
///
/// An unknown template id is recovered locally: a warning is logged and an
/// empty result returned, never an error, since this drives a flow that must
/// not crash. Entries that do not fit the alert/event model are skipped, also
/// with a warning.
pub fn populate_at(template_id: &str, params: &ParamMap, base_time: DateTime<Utc>) -> SoarData {
    let Some(template) = store::get(template_id) else {
        warn!(template_id, "SOAR data template not found");
        return SoarData::default();
    };

    let resolved = resolver::resolve(template, params, base_time);

    SoarData {
        alerts: typed_entries(&resolved, "alerts", template_id),
        event_stream: typed_entries(&resolved, "eventStream", template_id),
    }
}

fn typed_entries<T: serde::de::DeserializeOwned>(
    resolved: &Value,
    key: &str,
    template_id: &str,
) -> Vec<T> {
    let Some(entries) = resolved.get(key).and_then(Value::as_array) else {
        return Vec::new();
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry.clone()) {
            Ok(typed) => Some(typed),
            Err(err) => {
                warn!(template_id, key, index, %err, "skipping malformed template entry");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 7, 6, 9, 30, 0).unwrap()
    }

    fn ransomware_params() -> ParamMap {
        serde_json::json!({
            "alertIdSuffix": "RNSM001",
            "ipAddress": "192.168.1.158",
            "malwareName": "crypto_locker.exe",
            "endpointName": "WIN-SERVER-01"
        })
        .as_object()
        .unwrap()
        .clone()
    }

    #[test]
    fn unknown_template_yields_empty_result() {
        let data = populate("UNKNOWN_ID", &ParamMap::new());
        assert!(data.alerts.is_empty());
        assert!(data.event_stream.is_empty());
    }

    #[test]
    fn ransomware_template_populates_typed_entries() {
        let data = populate_at("RANSOMWARE_GENERIC", &ransomware_params(), base());
        assert!(!data.alerts.is_empty());
        assert!(!data.event_stream.is_empty());

        let first = &data.alerts[0];
        assert_eq!(first.id, "TRI-RNSM001");
        assert_eq!(first.source_ip, "192.168.1.158");
        assert!(first.is_open());

        // No placeholder survives a fully-parameterized call.
        let json = serde_json::to_string(&data).unwrap();
        assert!(!json.contains("${ipAddress}"));
        assert!(!json.contains("${timestamp"));
    }

    #[test]
    fn relative_timestamps_share_one_base_time() {
        let data = populate_at("RANSOMWARE_GENERIC", &ransomware_params(), base());
        let first = &data.event_stream[0];
        assert_eq!(first.timestamp, "2025-07-06T09:30:00Z");
    }

    #[test]
    fn every_bundled_template_populates_cleanly() {
        // With an empty param map the placeholders stay literal, but every
        // entry must still fit the typed model (ids, levels, status fields
        // are not parameterized).
        for id in store::template_ids() {
            let data = populate_at(id, &ParamMap::new(), base());
            assert!(!data.alerts.is_empty(), "template {id} produced no alerts");
            assert!(
                !data.event_stream.is_empty(),
                "template {id} produced no events"
            );
        }
    }
}
