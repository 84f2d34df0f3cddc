use std::path::{Path, PathBuf};

use super::types::{AnomalyProvider, AppConfig, ScoringProvider};

/// Get the default socrange data directory: ~/.socrange
pub fn get_socrange_data_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .map_err(|_| anyhow::anyhow!("Cannot determine home directory"))?;
    Ok(PathBuf::from(home).join(".socrange"))
}

pub fn load_from_path(path: &Path) -> anyhow::Result<AppConfig> {
    let s = std::fs::read_to_string(path)?;
    Ok(toml::from_str::<AppConfig>(&s)?)
}

pub fn load_default() -> anyhow::Result<AppConfig> {
    // Priority 1: ~/.socrange/config.toml (highest)
    let socrange_dir = get_socrange_data_dir()?;
    let user_config = socrange_dir.join("config.toml");

    // Priority 2: ./config.toml (current directory)
    let local_config = Path::new("config.toml");

    let mut cfg: AppConfig = if user_config.exists() {
        load_from_path(&user_config)?
    } else if local_config.exists() {
        load_from_path(local_config)?
    } else {
        AppConfig::default()
    };

    // Update logging directory to use socrange data directory if not set
    if cfg.logging.directory.is_none()
        || cfg
            .logging
            .directory
            .as_ref()
            .map(|s| s.trim().is_empty())
            .unwrap_or(false)
    {
        let logs_dir = socrange_dir.join("logs");
        std::fs::create_dir_all(&logs_dir)?;
        cfg.logging.directory = Some(logs_dir.to_string_lossy().to_string());
    }

    // Environment variable overrides (Priority 0: highest)
    if let Ok(v) = std::env::var("SOCRANGE_TRIGGER_URL") {
        if !v.trim().is_empty() {
            cfg.trigger.base_url = v;
        }
    }

    let ScoringProvider::Http(ref mut scoring_cfg) = cfg.scoring.provider;
    if let Ok(v) = std::env::var("SOCRANGE_SCORING_URL") {
        if !v.trim().is_empty() {
            scoring_cfg.base_url = v;
        }
    }

    let AnomalyProvider::Http(ref mut anomaly_cfg) = cfg.anomaly.provider;
    if let Ok(v) = std::env::var("SOCRANGE_ANOMALY_URL") {
        if !v.trim().is_empty() {
            anomaly_cfg.base_url = v;
        }
    }

    Ok(cfg)
}
