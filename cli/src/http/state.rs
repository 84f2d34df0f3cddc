//! Shared handler state for the trigger API server.

use chrono::{DateTime, Local};
use socrange_core::api::AppConfig;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;

/// State shared across all handlers. The trigger endpoint never touches the
/// collaborator services; config and stats are all it needs.
#[derive(Clone)]
pub struct AppState {
    pub session_id: String,
    pub config: Arc<AppConfig>,
    pub stats: Arc<RwLock<ServerStats>>,
    pub shutdown_tx: broadcast::Sender<()>,
}

impl AppState {
    pub fn new(session_id: String, config: AppConfig, shutdown_tx: broadcast::Sender<()>) -> Self {
        Self {
            session_id,
            config: Arc::new(config),
            stats: Arc::new(RwLock::new(ServerStats::new())),
            shutdown_tx,
        }
    }
}

pub struct ServerStats {
    pub requests_total: u64,
    pub requests_by_endpoint: HashMap<String, u64>,
    pub errors_total: u64,
    pub start_time: DateTime<Local>,
}

impl ServerStats {
    pub fn new() -> Self {
        Self {
            requests_total: 0,
            requests_by_endpoint: HashMap::new(),
            errors_total: 0,
            start_time: Local::now(),
        }
    }

    pub fn increment_request(&mut self, endpoint: &str) {
        self.requests_total += 1;
        *self
            .requests_by_endpoint
            .entry(endpoint.to_string())
            .or_insert(0) += 1;
    }

    pub fn increment_error(&mut self) {
        self.errors_total += 1;
    }

    pub fn uptime_seconds(&self) -> f64 {
        let now = Local::now();
        (now - self.start_time).num_milliseconds() as f64 / 1000.0
    }
}

impl Default for ServerStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_stats_are_zeroed() {
        let stats = ServerStats::new();
        assert_eq!(stats.requests_total, 0);
        assert_eq!(stats.errors_total, 0);
        assert!(stats.uptime_seconds() < 1.0);
    }

    #[test]
    fn request_counts_accumulate_per_endpoint() {
        let mut stats = ServerStats::new();
        stats.increment_request("/api/simulate");
        stats.increment_request("/api/simulate");
        stats.increment_request("/health");

        assert_eq!(stats.requests_total, 3);
        assert_eq!(*stats.requests_by_endpoint.get("/api/simulate").unwrap(), 2);
        assert_eq!(*stats.requests_by_endpoint.get("/health").unwrap(), 1);
    }

    #[test]
    fn error_counts_accumulate() {
        let mut stats = ServerStats::new();
        stats.increment_error();
        stats.increment_error();
        assert_eq!(stats.errors_total, 2);
    }
}
