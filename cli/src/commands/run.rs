//! `socrange run <id>` - the full simulation session: fire the trigger
//! endpoint, populate and enrich the SOAR data, then play the terminal
//! transcript and the replay feed (TUI by default, plain stdout with
//! `--headless` or when no terminal is available).

use std::sync::Arc;
use std::time::Duration;

use socrange_core::api::{
    catalog, enrich_alerts, populate, transcript_for, AppContext, CliError, DashboardState,
    Emission, ReplayPhase, ReplayScheduler, SoarData, SystemClock, UseCase,
};
use socrange_core::config::PlaybackConfig;

use super::cli::RunArgs;
use crate::tui::{self, app::SessionApp};

pub async fn handle_run(args: RunArgs, ctx: &AppContext) -> Result<i32, CliError> {
    let Some(uc) = catalog::find(&args.id) else {
        return Err(CliError::Command(format!(
            "unknown use case id: {} (try `socrange list`)",
            args.id
        )));
    };

    let services = ctx.build_services(ctx.cfg()).await?;

    // The trigger endpoint is fire-and-forget: a dead backend must never
    // block the demonstration.
    let mut status_line = None;
    if !args.no_trigger {
        match services.trigger.simulate(&uc.id).await {
            Ok(receipt) => {
                tracing::info!(
                    target: "socrange.run",
                    script_id = %uc.id,
                    status = %receipt.status,
                    "trigger endpoint acknowledged"
                );
                status_line = Some(receipt.message);
            }
            Err(e) => {
                tracing::warn!(target: "socrange.run", %e, "trigger endpoint unavailable, continuing");
                status_line = Some(format!("trigger unavailable: {e}"));
            }
        }
    }

    let mut data = populate(&uc.soar_data_template_id, &uc.soar_data_params);
    if let Some(scorer) = services.scorer.as_ref() {
        data.alerts = enrich_alerts(scorer.as_ref(), data.alerts).await;
    }

    let mut playback = ctx.cfg().playback.clone();
    if let Some(ms) = args.speed {
        playback.feed_tick_ms = ms;
    }

    if args.headless {
        return run_headless(uc, &data, &playback).await;
    }
    if let Err(reason) = tui::terminal::check_tui_support() {
        tracing::warn!(reason, "TUI unavailable, falling back to headless output");
        return run_headless(uc, &data, &playback).await;
    }

    let mut app = SessionApp::new(uc, data, playback);
    app.status_line = status_line;

    let mut terminal = tui::terminal::setup_terminal().map_err(CliError::Command)?;
    let result = tui::loop_run::run_session(&mut terminal, &mut app).await;
    tui::terminal::restore_terminal(&mut terminal);
    result.map_err(CliError::Command)?;

    Ok(0)
}

async fn run_headless(
    uc: &UseCase,
    data: &SoarData,
    playback: &PlaybackConfig,
) -> Result<i32, CliError> {
    for line in transcript_for(uc) {
        println!("{line}");
        tokio::time::sleep(Duration::from_millis(playback.terminal_tick_ms)).await;
    }
    tokio::time::sleep(Duration::from_millis(playback.initial_delay_ms)).await;

    let mut scheduler = ReplayScheduler::new(playback.feed_tick_ms, Arc::new(SystemClock));
    let mut dashboard = DashboardState::new();
    scheduler
        .start(data)
        .map_err(|e| CliError::Command(e.to_string()))?;

    while scheduler.phase() == ReplayPhase::Running {
        if let Some(emission) = scheduler.tick() {
            match &emission {
                Emission::Alert(alert) => println!(
                    "ALERT  [{:<8}] {}  ({})",
                    alert.severity.as_str(),
                    alert.alert_type,
                    alert.source_ip
                ),
                Emission::Event(event) => println!(
                    "LOG    [{:<8}] {}: {}",
                    event.level.as_str(),
                    event.source,
                    event.message
                ),
            }
            dashboard.absorb(emission);
        }
        if scheduler.phase() == ReplayPhase::Running {
            tokio::time::sleep(Duration::from_millis(scheduler.interval_ms())).await;
        }
    }

    let kpis = dashboard.kpis();
    println!(
        "\n{} alerts ({} active, {} critical), {} log events, threat score {}",
        kpis.total_alerts,
        kpis.active_alerts,
        kpis.critical_alerts,
        dashboard.logs.len(),
        kpis.threat_score
    );

    Ok(0)
}
