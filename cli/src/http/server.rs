//! Trigger API server lifecycle.

use super::{
    middleware::{create_middleware_stack, request_logger},
    routes::create_router,
    AppState,
};
use crate::commands::cli::ServeArgs;
use axum::middleware;
use socrange_core::api::{AppContext, CliError};
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::signal;
use tokio::sync::broadcast;
use tracing::{info, warn};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 5002,
        }
    }
}

fn get_servers_dir() -> Result<PathBuf, CliError> {
    let home = dirs::home_dir()
        .ok_or_else(|| CliError::Command("Cannot find home directory".to_string()))?;
    let servers_dir = home.join(".socrange").join("servers");
    fs::create_dir_all(&servers_dir)
        .map_err(|e| CliError::Command(format!("Failed to create servers directory: {e}")))?;
    Ok(servers_dir)
}

/// Records the running server so other tooling can find it.
fn write_state_file(session_id: &str, port: u16, host: &str) -> Result<(), CliError> {
    let servers_dir = get_servers_dir()?;
    let state_file = servers_dir.join("socrange.state");

    let state = serde_json::json!({
        "session_id": session_id,
        "port": port,
        "pid": std::process::id(),
        "url": format!("http://{}:{}", host, port),
        "started_at": chrono::Local::now().to_rfc3339()
    });

    let body = serde_json::to_string_pretty(&state)
        .map_err(|e| CliError::Command(format!("Failed to encode state file: {e}")))?;
    fs::write(&state_file, body)
        .map_err(|e| CliError::Command(format!("Failed to write state file: {e}")))?;

    info!("State file written to: {}", state_file.display());
    Ok(())
}

/// Handles the `serve` command: merges CLI args with config, writes the
/// state file, and runs the server until a shutdown signal arrives.
pub async fn handle_serve(args: ServeArgs, ctx: &AppContext) -> Result<(), CliError> {
    let session_id = args.session_id.unwrap_or_else(|| Uuid::new_v4().to_string());

    // CLI args win; values left at their defaults fall back to config.
    let trigger_cfg = &ctx.cfg().trigger;
    let port = if args.port == 5002 {
        trigger_cfg.port
    } else {
        args.port
    };
    let host = if args.host == "127.0.0.1" {
        trigger_cfg.host.clone()
    } else {
        args.host.clone()
    };

    let (shutdown_tx, _) = broadcast::channel(1);
    let state = AppState::new(session_id.clone(), ctx.cfg().clone(), shutdown_tx);

    write_state_file(&session_id, port, &host)?;

    start_server(session_id, host, port, state)
        .await
        .map_err(|e: Box<dyn std::error::Error + Send + Sync>| CliError::Command(e.to_string()))?;

    Ok(())
}

pub async fn start_server(
    session_id: String,
    host: String,
    port: u16,
    state: AppState,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = ServerConfig { host, port };

    start_server_with_config(session_id, config, state).await
}

pub async fn start_server_with_config(
    session_id: String,
    config: ServerConfig,
    state: AppState,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    info!(
        "Starting trigger API server on {}:{} (session: {})",
        config.host, config.port, session_id
    );

    let router = create_router(state.clone());

    let app = router
        .layer(middleware::from_fn(request_logger))
        .layer(create_middleware_stack());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;

    info!("Trigger API listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    let mut shutdown_rx = state.shutdown_tx.subscribe();

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            tokio::select! {
                _ = signal::ctrl_c() => {
                    info!("Received Ctrl+C signal");
                }
                _ = shutdown_rx.recv() => {
                    info!("Received shutdown signal from API");
                }
                _ = wait_for_sigterm() => {
                    info!("Received SIGTERM signal");
                }
            }

            info!("Starting graceful shutdown...");
        })
        .await?;

    info!("Server shutdown complete");

    let servers_dir = get_servers_dir()?;
    let state_file_path = servers_dir.join("socrange.state");
    if let Err(e) = fs::remove_file(&state_file_path) {
        warn!("Failed to remove state file: {}", e);
    } else {
        info!("State file removed: {}", state_file_path.display());
    }

    Ok(())
}

#[cfg(unix)]
async fn wait_for_sigterm() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate()).expect("Failed to setup SIGTERM handler");
    sigterm.recv().await;
}

#[cfg(not(unix))]
async fn wait_for_sigterm() {
    // No SIGTERM on Windows; Ctrl+C or the shutdown API interrupts instead.
    std::future::pending::<()>().await
}
