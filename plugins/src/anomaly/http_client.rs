//! Client for the unsupervised anomaly-detection service.

use async_trait::async_trait;
use socrange_core::api::{AnomalyDetector, AnomalyVerdict, LogFeatures, TrainSummary};

use crate::http::{build_client, decode_json, ServiceHttpError};

#[derive(Clone)]
pub struct HttpAnomalyDetector {
    http: reqwest::Client,
    url_train: String,
    url_predict: String,
}

impl HttpAnomalyDetector {
    pub fn new(base_url: &str, timeout_ms: u64) -> anyhow::Result<Self> {
        let normalized = base_url.trim_end_matches('/');
        Ok(Self {
            http: build_client(timeout_ms)?,
            url_train: format!("{}/train_anomaly/", normalized),
            url_predict: format!("{}/predict_anomaly/", normalized),
        })
    }
}

#[async_trait]
impl AnomalyDetector for HttpAnomalyDetector {
    async fn train(&self, rows: &[LogFeatures]) -> anyhow::Result<TrainSummary> {
        let url = &self.url_train;
        tracing::debug!(
            target: "socrange.anomaly",
            stage = "anomaly.http.train.in",
            url = %url,
            rows = rows.len()
        );
        let resp = self
            .http
            .post(url)
            .json(&rows)
            .send()
            .await
            .map_err(|err| ServiceHttpError::from_reqwest(err, url.clone()))?;
        let status = resp.status();
        let summary: TrainSummary = decode_json(resp).await?;
        tracing::debug!(
            target: "socrange.anomaly",
            stage = "anomaly.http.train.out",
            status = %status,
            training_anomalies = summary.training_anomalies
        );
        Ok(summary)
    }

    async fn predict(&self, rows: &[LogFeatures]) -> anyhow::Result<Vec<AnomalyVerdict>> {
        let url = &self.url_predict;
        tracing::debug!(
            target: "socrange.anomaly",
            stage = "anomaly.http.predict.in",
            url = %url,
            rows = rows.len()
        );
        let resp = self
            .http
            .post(url)
            .json(&rows)
            .send()
            .await
            .map_err(|err| ServiceHttpError::from_reqwest(err, url.clone()))?;
        let status = resp.status();
        let verdicts: Vec<AnomalyVerdict> = decode_json(resp).await?;
        tracing::debug!(
            target: "socrange.anomaly",
            stage = "anomaly.http.predict.out",
            status = %status,
            verdicts = verdicts.len()
        );
        Ok(verdicts)
    }
}
