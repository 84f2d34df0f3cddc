//! Route handlers for the trigger API.

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::Local;
use socrange_core::api::catalog;
use std::time::Duration;

use crate::http::{
    models::{HealthResponse, HttpServerError, SimulateRequest, SimulateResponse},
    state::AppState,
    validation::validate_script_id,
};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/simulate", post(simulate_handler))
        .route("/api/usecases", get(usecases_handler))
        .route("/health", get(health_handler))
        .route("/api/shutdown", post(shutdown_handler))
        .with_state(state)
}

/// POST /api/simulate - acknowledge a simulation trigger after the
/// configured delay. The endpoint is a stub: it validates, waits, and
/// echoes. Nothing is executed.
async fn simulate_handler(
    State(state): State<AppState>,
    Json(req): Json<SimulateRequest>,
) -> Result<Json<SimulateResponse>, HttpServerError> {
    {
        let mut stats = state.stats.write().unwrap();
        stats.increment_request("/api/simulate");
    }

    let script_id = match validate_script_id(req.script_id.as_deref()) {
        Ok(id) => id,
        Err(e) => {
            let mut stats = state.stats.write().unwrap();
            stats.increment_error();
            return Err(e);
        }
    };

    tracing::info!(
        target: "socrange.http",
        script_id = %script_id,
        "simulation trigger received"
    );

    let delay = state.config.trigger.delay_ms;
    tokio::time::sleep(Duration::from_millis(delay)).await;

    Ok(Json(SimulateResponse {
        status: "success".into(),
        delay,
        message: format!(
            "Simulation triggered for {script_id} successfully. (Backend simulation only)"
        ),
        script_id,
    }))
}

/// GET /api/usecases - the full catalog, for UIs that populate their
/// scenario list from the server.
async fn usecases_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    {
        let mut stats = state.stats.write().unwrap();
        stats.increment_request("/api/usecases");
    }

    Json(serde_json::json!({
        "success": true,
        "data": catalog::all(),
    }))
}

/// GET /health
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let stats = state.stats.read().unwrap();

    Json(HealthResponse {
        status: "healthy".into(),
        session_id: state.session_id.clone(),
        uptime_seconds: stats.uptime_seconds(),
        requests_handled: stats.requests_total,
        timestamp: Local::now().to_rfc3339(),
    })
}

/// POST /api/shutdown - trigger a graceful shutdown.
async fn shutdown_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    let _ = state.shutdown_tx.send(());

    Json(serde_json::json!({
        "success": true,
        "message": "Shutdown signal sent"
    }))
}
