use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use socrange_cli::commands::{anomaly, cli, list, run, show, trigger};
use socrange_cli::http::server;
use socrange_core::api::{load_default, load_from_path, AppContext, CliError, EngineError};
use socrange_core::config::LoggingConfig;
use socrange_plugins::PluginServicesFactory;

static LOG_GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
    std::sync::OnceLock::new();

#[tokio::main]
async fn main() {
    let exit = match real_main().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            exit_code_for_error(&e)
        }
    };

    std::process::exit(exit);
}

async fn real_main() -> Result<i32, CliError> {
    let mut args = cli::Args::parse();

    let cfg = match args.config.as_deref() {
        Some(path) => {
            load_from_path(Path::new(path)).map_err(|e| CliError::Config(e.to_string()))?
        }
        None => load_default().map_err(|e| CliError::Config(e.to_string()))?,
    };
    init_tracing(&cfg.logging).map_err(CliError::Command)?;

    let ctx = AppContext::new(cfg, Some(Arc::new(PluginServicesFactory)));

    match args.command.take() {
        Some(cmd) => dispatch(cmd, ctx).await,
        // Bare `socrange` shows the catalog.
        None => list::handle_list(cli::ListArgs::default()),
    }
}

fn exit_code_for_error(e: &CliError) -> i32 {
    // 0: success
    // 11: config error
    // 20: command / IO error
    // 50: internal/uncategorized
    match e {
        CliError::Config(_) => 11,
        CliError::Engine(ee) => match ee {
            EngineError::Config(_) => 11,
            EngineError::Data(_) => 50,
            EngineError::Plugin(_) => 50,
        },
        CliError::Io(_) => 20,
        CliError::Command(_) => 20,
        CliError::Anyhow(_) => 50,
    }
}

async fn dispatch(cmd: cli::Commands, ctx: AppContext) -> Result<i32, CliError> {
    match cmd {
        cli::Commands::List(list_args) => list::handle_list(list_args),
        cli::Commands::Show(show_args) => show::handle_show(show_args),
        cli::Commands::Run(run_args) => run::handle_run(run_args, &ctx).await,
        cli::Commands::Serve(serve_args) => {
            server::handle_serve(serve_args, &ctx).await?;
            Ok(0)
        }
        cli::Commands::Trigger(trigger_args) => trigger::handle_trigger(trigger_args, &ctx).await,
        cli::Commands::Anomaly(anomaly_args) => anomaly::handle_anomaly(anomaly_args, &ctx).await,
    }
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), String> {
    if !logging.enabled {
        return Ok(());
    }

    let filter = match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => EnvFilter::from_default_env(),
        _ => EnvFilter::try_new(logging.level.clone()).map_err(|e| e.to_string())?,
    };

    let mut maybe_writer = None;

    if logging.file {
        let dir = match logging
            .directory
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            Some(d) => std::path::PathBuf::from(d),
            None => std::env::temp_dir().join("socrange"),
        };

        std::fs::create_dir_all(&dir).map_err(|e| format!("create log dir failed: {e}"))?;
        let file_name = format!("socrange.{}.log", std::process::id());
        let appender = tracing_appender::rolling::never(dir, file_name);
        let (non_blocking, guard) = tracing_appender::non_blocking(appender);
        let _ = LOG_GUARD.set(guard);
        maybe_writer = Some(non_blocking);
    }

    if !logging.console && maybe_writer.is_none() {
        return Err("logging disabled for both console and file".to_string());
    }

    let console_layer = logging.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(atty::is(atty::Stream::Stderr))
    });

    let file_layer = maybe_writer.map(|w| {
        tracing_subscriber::fmt::layer()
            .with_writer(w)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(())
}
