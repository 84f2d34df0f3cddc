pub mod load;
pub mod types;

pub use load::{load_default, load_from_path};
pub use types::{
    AnomalyConfig, AnomalyProvider, AppConfig, HttpAnomalyConfig, HttpScoringConfig,
    LoggingConfig, PlaybackConfig, ScoringConfig, ScoringProvider, TriggerConfig,
};
