//! Client for the supervised risk-scoring service.

use async_trait::async_trait;
use socrange_core::api::{RiskFeatures, RiskScorer, RiskVerdict};

use crate::http::{build_client, decode_json, ServiceHttpError};

#[derive(Clone)]
pub struct HttpRiskScorer {
    http: reqwest::Client,
    url_predict: String,
}

impl HttpRiskScorer {
    pub fn new(base_url: &str, timeout_ms: u64) -> anyhow::Result<Self> {
        let normalized = base_url.trim_end_matches('/');
        Ok(Self {
            http: build_client(timeout_ms)?,
            url_predict: format!("{}/predict_risk/", normalized),
        })
    }
}

#[async_trait]
impl RiskScorer for HttpRiskScorer {
    async fn predict_risk(&self, features: &[RiskFeatures]) -> anyhow::Result<Vec<RiskVerdict>> {
        let url = &self.url_predict;
        tracing::debug!(
            target: "socrange.scoring",
            stage = "scoring.http.predict.in",
            url = %url,
            alerts = features.len()
        );
        let resp = self
            .http
            .post(url)
            .json(&features)
            .send()
            .await
            .map_err(|err| ServiceHttpError::from_reqwest(err, url.clone()))?;
        let status = resp.status();
        let verdicts: Vec<RiskVerdict> = decode_json(resp).await?;
        tracing::debug!(
            target: "socrange.scoring",
            stage = "scoring.http.predict.out",
            status = %status,
            verdicts = verdicts.len()
        );
        if verdicts.len() != features.len() {
            anyhow::bail!(
                "scoring service returned {} verdicts for {} alerts",
                verdicts.len(),
                features.len()
            );
        }
        Ok(verdicts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::ServiceHttpErrorKind;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn features() -> Vec<RiskFeatures> {
        serde_json::from_value(json!([{
            "alert_type_description": "Ransomware Activity",
            "severity": 9,
            "src_ip": "192.168.1.158",
            "username": "jdoe",
            "dest_ip": "N/A",
            "process": "crypto_locker.exe",
            "file_name": "crypto_locker.exe",
            "port": "445",
            "logon_hour": 9,
            "day_of_week": "Sunday",
            "agent_os": "Windows Server 2019"
        }]))
        .unwrap()
    }

    #[tokio::test]
    async fn predict_posts_feature_array_and_decodes_verdicts() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/predict_risk/")
            .match_body(Matcher::PartialJson(json!([{
                "severity": 9,
                "port": "445",
                "day_of_week": "Sunday"
            }])))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{"alert_type_description":"Ransomware Activity","is_high_risk":true,"risk_score":92.5,"details":"Prediction made by the AI Risk Scoring Engine"}]"#,
            )
            .create_async()
            .await;

        let scorer = HttpRiskScorer::new(&server.url(), 1_000).unwrap();
        let verdicts = scorer.predict_risk(&features()).await.unwrap();
        assert_eq!(verdicts.len(), 1);
        assert!(verdicts[0].is_high_risk);
        assert_eq!(verdicts[0].risk_score, 92.5);
    }

    #[tokio::test]
    async fn mismatched_verdict_count_is_an_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/predict_risk/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let scorer = HttpRiskScorer::new(&server.url(), 1_000).unwrap();
        let err = scorer.predict_risk(&features()).await.unwrap_err();
        assert!(err.to_string().contains("0 verdicts for 1 alerts"));
    }

    #[tokio::test]
    async fn status_failure_is_classified() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/predict_risk/")
            .with_status(500)
            .with_body(r#"{"detail":"Model not loaded. Server startup failed."}"#)
            .create_async()
            .await;

        let scorer = HttpRiskScorer::new(&server.url(), 1_000).unwrap();
        let err = scorer.predict_risk(&features()).await.unwrap_err();
        let http_err = err
            .downcast_ref::<ServiceHttpError>()
            .expect("expected ServiceHttpError");
        assert_eq!(http_err.kind(), ServiceHttpErrorKind::Status);
        assert_eq!(http_err.status(), Some(500));
        assert!(http_err.url().unwrap_or_default().contains("/predict_risk/"));
    }
}
