//! Trigger endpoint collaborator: the client-side seam for `POST
//! /api/simulate`. The endpoint only delays and echoes; the receipt is the
//! whole contract.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerReceipt {
    pub status: String,
    #[serde(default)]
    pub delay: Option<u64>,
    pub message: String,
    #[serde(rename = "scriptId", default)]
    pub script_id: Option<String>,
}

impl TriggerReceipt {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[async_trait]
pub trait TriggerClient: Send + Sync {
    async fn simulate(&self, script_id: &str) -> anyhow::Result<TriggerReceipt>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn receipt_decodes_the_success_wire_shape() {
        let receipt: TriggerReceipt = serde_json::from_str(
            r#"{"status":"success","delay":500,"message":"Simulation triggered for 1 successfully. (Backend simulation only)","scriptId":"1"}"#,
        )
        .unwrap();
        assert!(receipt.is_success());
        assert_eq!(receipt.delay, Some(500));
        assert_eq!(receipt.script_id.as_deref(), Some("1"));
    }

    #[test]
    fn receipt_decodes_the_error_wire_shape() {
        let receipt: TriggerReceipt =
            serde_json::from_str(r#"{"status":"error","message":"scriptId is required"}"#).unwrap();
        assert!(!receipt.is_success());
        assert!(receipt.delay.is_none());
    }
}
