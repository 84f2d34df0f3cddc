use std::time::{Duration, Instant};

use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::app::SessionApp;
use super::events::{InputEvent, InputReader};
use super::ui;

/// Drives the session: the transcript tick, the feed tick, a housekeeping
/// tick for deferred starts, and key input, redrawing after every event.
/// The feed interval is rebuilt whenever a speed preset changes it.
pub async fn run_session(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut SessionApp,
) -> Result<(), String> {
    tracing::debug!("session TUI loop starting");
    let (input_reader, mut input_rx) = InputReader::start();

    let mut transcript_tick =
        tokio::time::interval(Duration::from_millis(app.playback.terminal_tick_ms.max(16)));
    let mut current_feed_ms = app.scheduler.interval_ms();
    let mut feed_tick = tokio::time::interval(Duration::from_millis(current_feed_ms.max(16)));
    let mut housekeeping = tokio::time::interval(Duration::from_millis(50));

    terminal
        .draw(|f| ui::draw(f, app))
        .map_err(|e| e.to_string())?;

    loop {
        tokio::select! {
            Some(input_event) = input_rx.recv() => {
                match input_event {
                    InputEvent::Key(key) => {
                        if app.handle_key(key) {
                            app.should_quit = true;
                        }
                    }
                }
            }
            _ = transcript_tick.tick() => {
                app.on_transcript_tick();
            }
            _ = feed_tick.tick() => {
                app.on_feed_tick();
            }
            _ = housekeeping.tick() => {
                app.on_housekeeping(Instant::now());
            }
        }

        if app.scheduler.interval_ms() != current_feed_ms {
            current_feed_ms = app.scheduler.interval_ms();
            feed_tick = tokio::time::interval(Duration::from_millis(current_feed_ms.max(16)));
        }

        terminal
            .draw(|f| ui::draw(f, app))
            .map_err(|e| e.to_string())?;

        if app.should_quit {
            tracing::debug!("exiting session TUI loop");
            break;
        }
    }

    input_reader.stop();
    Ok(())
}
