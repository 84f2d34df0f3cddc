//! Wire types for the trigger API.
//!
//! `/api/simulate` keeps the dashboard's original contract: `{status,
//! message, ...}` envelopes with a bare `scriptId` key, including the exact
//! 400 and 500 error shapes clients already parse.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

// ============= Simulate =============

#[derive(Debug, Deserialize)]
pub struct SimulateRequest {
    #[serde(rename = "scriptId", default)]
    pub script_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SimulateResponse {
    pub status: String,
    pub delay: u64,
    pub message: String,
    #[serde(rename = "scriptId")]
    pub script_id: String,
}

// ============= Health =============

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub session_id: String,
    pub uptime_seconds: f64,
    pub requests_handled: u64,
    pub timestamp: String,
}

// ============= Error Handling =============

#[derive(Debug)]
pub enum HttpServerError {
    InvalidRequest(String),
    Internal(String),
}

impl IntoResponse for HttpServerError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Self::InvalidRequest(msg) => (
                StatusCode::BAD_REQUEST,
                serde_json::json!({
                    "status": "error",
                    "message": msg,
                }),
            ),
            Self::Internal(details) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                serde_json::json!({
                    "status": "error",
                    "message": "Internal server error",
                    "details": details,
                }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulate_request_accepts_a_missing_script_id() {
        let req: SimulateRequest = serde_json::from_str("{}").unwrap();
        assert!(req.script_id.is_none());

        let req: SimulateRequest = serde_json::from_str(r#"{"scriptId":"1"}"#).unwrap();
        assert_eq!(req.script_id.as_deref(), Some("1"));
    }

    #[test]
    fn simulate_response_serializes_the_success_shape() {
        let resp = SimulateResponse {
            status: "success".into(),
            delay: 500,
            message: "Simulation triggered for 1 successfully. (Backend simulation only)".into(),
            script_id: "1".into(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"status\":\"success\""));
        assert!(json.contains("\"delay\":500"));
        assert!(json.contains("\"scriptId\":\"1\""));
    }

    #[test]
    fn invalid_request_renders_the_400_shape() {
        let response =
            HttpServerError::InvalidRequest("scriptId is required".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn internal_error_renders_the_500_shape() {
        let response = HttpServerError::Internal("boom".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
