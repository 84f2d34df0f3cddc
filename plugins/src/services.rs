//! ServicesFactory implementation: builds the collaborator clients from
//! config so the CLI never depends on concrete plugin types.

use async_trait::async_trait;
use socrange_core::api::{AppConfig, EngineError, Services, ServicesFactory};

use crate::factory;

#[derive(Default)]
pub struct PluginServicesFactory;

#[async_trait]
impl ServicesFactory for PluginServicesFactory {
    async fn build_services(&self, cfg: &AppConfig) -> Result<Services, EngineError> {
        let scorer = factory::build_scorer(&cfg.scoring).map_err(EngineError::Plugin)?;
        let detector = factory::build_detector(&cfg.anomaly).map_err(EngineError::Plugin)?;
        let trigger = factory::build_trigger(&cfg.trigger).map_err(EngineError::Plugin)?;
        Ok(Services {
            scorer,
            detector,
            trigger,
        })
    }
}
