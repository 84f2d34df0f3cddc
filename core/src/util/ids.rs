use chrono::Local;
use uuid::Uuid;

/// Format: sim-{YYYYMMDDHHmmss}-{random8}
pub fn new_run_id() -> String {
    let ts = Local::now().format("%Y%m%d%H%M%S");
    let uuid = Uuid::new_v4().simple().to_string();
    let suffix = &uuid[..8];
    format!("sim-{}-{}", ts, suffix)
}

/// Full hyphenated UUID, used for alerts re-identified at emission time.
pub fn new_alert_id() -> String {
    Uuid::new_v4().to_string()
}

/// Short random alphanumeric token, one per `${uniqueId}` occurrence.
pub fn short_token() -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    uuid[..8].to_string()
}

pub fn new_log_id() -> String {
    format!("log-{}", short_token())
}
