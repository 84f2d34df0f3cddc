//! Client for the stub trigger endpoint (`POST /api/simulate`).

use async_trait::async_trait;
use serde_json::json;
use socrange_core::api::{TriggerClient, TriggerReceipt};

use crate::http::{build_client, decode_json, ServiceHttpError};

#[derive(Clone)]
pub struct HttpTriggerClient {
    http: reqwest::Client,
    url_simulate: String,
}

impl HttpTriggerClient {
    pub fn new(base_url: &str, timeout_ms: u64) -> anyhow::Result<Self> {
        let normalized = base_url.trim_end_matches('/');
        Ok(Self {
            http: build_client(timeout_ms)?,
            url_simulate: format!("{}/api/simulate", normalized),
        })
    }
}

#[async_trait]
impl TriggerClient for HttpTriggerClient {
    async fn simulate(&self, script_id: &str) -> anyhow::Result<TriggerReceipt> {
        let url = &self.url_simulate;
        tracing::debug!(
            target: "socrange.trigger",
            stage = "trigger.http.simulate.in",
            url = %url,
            script_id
        );
        let resp = self
            .http
            .post(url)
            .json(&json!({ "scriptId": script_id }))
            .send()
            .await
            .map_err(|err| ServiceHttpError::from_reqwest(err, url.clone()))?;
        let status = resp.status();
        let receipt: TriggerReceipt = decode_json(resp).await?;
        tracing::debug!(
            target: "socrange.trigger",
            stage = "trigger.http.simulate.out",
            status = %status,
            receipt_status = %receipt.status
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::ServiceHttpErrorKind;
    use mockito::{Matcher, Server};
    use serde_json::json;

    #[tokio::test]
    async fn simulate_posts_script_id_and_decodes_receipt() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/api/simulate")
            .match_body(Matcher::Json(json!({"scriptId": "1"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"status":"success","delay":500,"message":"Simulation triggered for 1 successfully. (Backend simulation only)","scriptId":"1"}"#,
            )
            .create_async()
            .await;

        let client = HttpTriggerClient::new(&server.url(), 1_000).unwrap();
        let receipt = client.simulate("1").await.unwrap();
        assert!(receipt.is_success());
        assert_eq!(receipt.delay, Some(500));
        assert_eq!(receipt.script_id.as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn missing_script_id_rejection_surfaces_as_status_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/api/simulate")
            .with_status(400)
            .with_body(r#"{"status":"error","message":"scriptId is required"}"#)
            .create_async()
            .await;

        let client = HttpTriggerClient::new(&server.url(), 1_000).unwrap();
        let err = client.simulate("").await.unwrap_err();
        let http_err = err
            .downcast_ref::<ServiceHttpError>()
            .expect("expected ServiceHttpError");
        assert_eq!(http_err.kind(), ServiceHttpErrorKind::Status);
        assert_eq!(http_err.status(), Some(400));
    }
}
