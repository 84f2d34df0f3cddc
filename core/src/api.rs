//! Stable re-exports for consumers (`cli`, `plugins`, and external crates).
//!
//! Prefer importing from `socrange_core::api` instead of reaching into
//! internal modules.

pub use crate::anomaly::{
    bundled_prediction_rows, bundled_training_rows, AnomalyDetector, AnomalyVerdict, LogFeatures,
    TrainSummary, ANOMALY_LABEL,
};
pub use crate::catalog::{self, UseCase};
pub use crate::config::{
    load_default, load_from_path, AnomalyConfig, AnomalyProvider, AppConfig, HttpAnomalyConfig,
    HttpScoringConfig, LoggingConfig, PlaybackConfig, ScoringConfig, ScoringProvider,
    TriggerConfig,
};
pub use crate::context::{AppContext, Services, ServicesFactory};
pub use crate::dashboard::{DashboardState, KpiSummary};
pub use crate::error::{CliError, EngineError};
pub use crate::model::{Alert, AlertAction, AlertStatus, LogEvent, LogLevel, Severity};
pub use crate::playback::TranscriptPlayer;
pub use crate::replay::{
    Clock, Emission, FixedClock, ReplayPhase, ReplayScheduler, SystemClock, TransitionError,
};
pub use crate::scoring::{enrich_alerts, RiskFeatures, RiskScorer, RiskVerdict};
pub use crate::script::{line_for, transcript_for, EventTag};
pub use crate::template::{populate, populate_at, ParamMap, SoarData};
pub use crate::trigger::{TriggerClient, TriggerReceipt};
