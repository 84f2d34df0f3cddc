use std::sync::Arc;

use crate::anomaly::AnomalyDetector;
use crate::config::AppConfig;
use crate::error::EngineError;
use crate::scoring::RiskScorer;
use crate::trigger::TriggerClient;

/// Assembled collaborator clients. The optional ones degrade to "absent"
/// rather than failing the session when disabled in config.
#[derive(Clone)]
pub struct Services {
    pub scorer: Option<Arc<dyn RiskScorer>>,
    pub detector: Option<Arc<dyn AnomalyDetector>>,
    pub trigger: Arc<dyn TriggerClient>,
}

#[async_trait::async_trait]
pub trait ServicesFactory: Send + Sync {
    async fn build_services(&self, cfg: &AppConfig) -> Result<Services, EngineError>;
}

#[derive(Clone)]
pub struct AppContext {
    cfg: AppConfig,
    services_factory: Option<Arc<dyn ServicesFactory>>,
}

impl AppContext {
    pub fn new(cfg: AppConfig, services_factory: Option<Arc<dyn ServicesFactory>>) -> Self {
        Self {
            cfg,
            services_factory,
        }
    }

    pub fn cfg(&self) -> &AppConfig {
        &self.cfg
    }

    pub fn with_config(&self, cfg: AppConfig) -> Self {
        Self {
            cfg,
            services_factory: self.services_factory.clone(),
        }
    }

    pub async fn build_services(&self, cfg: &AppConfig) -> Result<Services, EngineError> {
        let Some(factory) = self.services_factory.as_ref() else {
            return Err(EngineError::Config(
                "services_factory missing (cannot build collaborator clients)".into(),
            ));
        };
        factory.build_services(cfg).await
    }
}
