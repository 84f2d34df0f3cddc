use std::sync::Arc;

use anyhow::Result;

use socrange_core::api::{
    AnomalyConfig, AnomalyDetector, AnomalyProvider, RiskScorer, ScoringConfig, ScoringProvider,
    TriggerClient, TriggerConfig,
};

use crate::anomaly::HttpAnomalyDetector;
use crate::scoring::HttpRiskScorer;
use crate::trigger::HttpTriggerClient;

pub fn build_scorer(cfg: &ScoringConfig) -> Result<Option<Arc<dyn RiskScorer>>> {
    if !cfg.enabled {
        return Ok(None);
    }

    match &cfg.provider {
        ScoringProvider::Http(http_cfg) => Ok(Some(Arc::new(HttpRiskScorer::new(
            &http_cfg.base_url,
            http_cfg.timeout_ms,
        )?))),
    }
}

pub fn build_detector(cfg: &AnomalyConfig) -> Result<Option<Arc<dyn AnomalyDetector>>> {
    if !cfg.enabled {
        return Ok(None);
    }

    match &cfg.provider {
        AnomalyProvider::Http(http_cfg) => Ok(Some(Arc::new(HttpAnomalyDetector::new(
            &http_cfg.base_url,
            http_cfg.timeout_ms,
        )?))),
    }
}

pub fn build_trigger(cfg: &TriggerConfig) -> Result<Arc<dyn TriggerClient>> {
    Ok(Arc::new(HttpTriggerClient::new(
        &cfg.base_url,
        cfg.timeout_ms,
    )?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use socrange_core::api::AppConfig;

    #[test]
    fn disabled_sections_build_to_none() {
        let mut cfg = AppConfig::default();
        cfg.scoring.enabled = false;
        cfg.anomaly.enabled = false;
        assert!(build_scorer(&cfg.scoring).unwrap().is_none());
        assert!(build_detector(&cfg.anomaly).unwrap().is_none());
    }

    #[test]
    fn default_config_builds_all_clients() {
        let cfg = AppConfig::default();
        assert!(build_scorer(&cfg.scoring).unwrap().is_some());
        assert!(build_detector(&cfg.anomaly).unwrap().is_some());
        build_trigger(&cfg.trigger).unwrap();
    }
}
