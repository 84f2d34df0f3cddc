use serde::{Deserialize, Serialize};

use crate::model::Severity;
use crate::template::ParamMap;

/// A catalog-defined scenario bundling display metadata, the terminal script
/// flow, and the SOAR data template it populates.
///
/// Wire casing is the upstream catalog contract (camelCase).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UseCase {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(rename = "detectionMethod")]
    pub detection_method: String,
    #[serde(rename = "triggerConditions")]
    pub trigger_conditions: String,
    pub description: String,
    #[serde(rename = "mitreAttack", default)]
    pub mitre_attack: Vec<String>,
    #[serde(rename = "logSources", default)]
    pub log_sources: Vec<String>,
    #[serde(default)]
    pub playbooks: Vec<String>,
    pub severity: Severity,
    /// Ordered stage tags, played back in authorial order (never sorted).
    #[serde(rename = "simulationFlow", default)]
    pub simulation_flow: Vec<String>,
    #[serde(rename = "soarDataTemplateId")]
    pub soar_data_template_id: String,
    #[serde(rename = "soarDataParams", default)]
    pub soar_data_params: ParamMap,
}

impl UseCase {
    /// Case-insensitive substring match over title, category, and detection
    /// method, matching the browser dashboard's search box.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.title.to_lowercase().contains(&q)
            || self.category.to_lowercase().contains(&q)
            || self.detection_method.to_lowercase().contains(&q)
    }
}
