use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub trigger: TriggerConfig,

    #[serde(default)]
    pub scoring: ScoringConfig,

    #[serde(default)]
    pub anomaly: AnomalyConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            playback: PlaybackConfig::default(),
            trigger: TriggerConfig::default(),
            scoring: ScoringConfig::default(),
            anomaly: AnomalyConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or OS temp dir if unset).
    #[serde(default = "default_logging_file")]
    pub file: bool,

    /// EnvFilter string, e.g. "info" or "socrange_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Optional directory for log files. If empty or unset, uses OS temp dir.
    #[serde(default)]
    pub directory: Option<String>,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_file() -> bool {
    true
}

fn default_logging_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: default_logging_file(),
            level: default_logging_level(),
            directory: None,
        }
    }
}

/// Timing knobs for the two session timers and their handover.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaybackConfig {
    /// Terminal transcript reveal interval.
    #[serde(default = "default_terminal_tick_ms")]
    pub terminal_tick_ms: u64,

    /// Replay feed emission interval (the "Normal" speed preset).
    #[serde(default = "default_feed_tick_ms")]
    pub feed_tick_ms: u64,

    /// Gap between stopping and restarting the feed on an interval change.
    #[serde(default = "default_settle_ms")]
    pub settle_ms: u64,

    /// Delay before the feed auto-starts once the transcript completes.
    #[serde(default = "default_initial_delay_ms")]
    pub initial_delay_ms: u64,
}

fn default_terminal_tick_ms() -> u64 {
    100
}

fn default_feed_tick_ms() -> u64 {
    1_500
}

fn default_settle_ms() -> u64 {
    50
}

fn default_initial_delay_ms() -> u64 {
    500
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            terminal_tick_ms: default_terminal_tick_ms(),
            feed_tick_ms: default_feed_tick_ms(),
            settle_ms: default_settle_ms(),
            initial_delay_ms: default_initial_delay_ms(),
        }
    }
}

/// Trigger endpoint settings, shared by the `serve` server and the client
/// side used during `run`/`trigger`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerConfig {
    #[serde(default = "default_trigger_host")]
    pub host: String,

    #[serde(default = "default_trigger_port")]
    pub port: u16,

    /// Fixed delay the endpoint waits before answering success.
    #[serde(default = "default_trigger_delay_ms")]
    pub delay_ms: u64,

    #[serde(default = "default_trigger_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_trigger_host() -> String {
    "127.0.0.1".to_string()
}

fn default_trigger_port() -> u16 {
    5002
}

fn default_trigger_delay_ms() -> u64 {
    500
}

fn default_trigger_base_url() -> String {
    "http://127.0.0.1:5002".to_string()
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl Default for TriggerConfig {
    fn default() -> Self {
        Self {
            host: default_trigger_host(),
            port: default_trigger_port(),
            delay_ms: default_trigger_delay_ms(),
            base_url: default_trigger_base_url(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_scoring_enabled")]
    pub enabled: bool,

    #[serde(flatten)]
    pub provider: ScoringProvider,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "provider")]
pub enum ScoringProvider {
    #[serde(rename = "http")]
    Http(HttpScoringConfig),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpScoringConfig {
    #[serde(default = "default_scoring_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_scoring_enabled() -> bool {
    true
}

fn default_scoring_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            enabled: default_scoring_enabled(),
            provider: ScoringProvider::Http(HttpScoringConfig {
                base_url: default_scoring_url(),
                timeout_ms: default_timeout_ms(),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyConfig {
    #[serde(default = "default_anomaly_enabled")]
    pub enabled: bool,

    #[serde(flatten)]
    pub provider: AnomalyProvider,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "provider")]
pub enum AnomalyProvider {
    #[serde(rename = "http")]
    Http(HttpAnomalyConfig),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpAnomalyConfig {
    #[serde(default = "default_anomaly_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_anomaly_enabled() -> bool {
    true
}

fn default_anomaly_url() -> String {
    "http://127.0.0.1:8001".to_string()
}

impl Default for AnomalyConfig {
    fn default() -> Self {
        Self {
            enabled: default_anomaly_enabled(),
            provider: AnomalyProvider::Http(HttpAnomalyConfig {
                base_url: default_anomaly_url(),
                timeout_ms: default_timeout_ms(),
            }),
        }
    }
}
