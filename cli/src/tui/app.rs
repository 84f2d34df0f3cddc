//! Session state behind the TUI: the transcript player, the replay
//! scheduler, and the dashboard feed, plus the key bindings that drive them.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use socrange_core::api::{
    transcript_for, AlertAction, DashboardState, ReplayPhase, ReplayScheduler, SoarData,
    SystemClock, TranscriptPlayer, UseCase,
};
use socrange_core::config::PlaybackConfig;

/// Speed presets (keys 1/2/3), in feed-tick milliseconds.
pub const SPEED_FAST_MS: u64 = 500;
pub const SPEED_NORMAL_MS: u64 = 1_500;
pub const SPEED_SLOW_MS: u64 = 3_000;

pub struct SessionApp {
    pub use_case: &'static UseCase,
    pub data: SoarData,
    pub playback: PlaybackConfig,
    pub transcript: TranscriptPlayer,
    pub revealed: Vec<String>,
    pub scheduler: ReplayScheduler,
    pub dashboard: DashboardState,
    pub selected: usize,
    pub status_line: Option<String>,
    pub should_quit: bool,
    pub start: Instant,
    /// When set, the feed (re)starts once this deadline passes. Covers both
    /// the auto-start after the transcript and the settle gap after a speed
    /// change.
    resume_at: Option<Instant>,
}

impl SessionApp {
    pub fn new(use_case: &'static UseCase, data: SoarData, playback: PlaybackConfig) -> Self {
        let transcript = TranscriptPlayer::from_lines(transcript_for(use_case));
        let scheduler = ReplayScheduler::new(playback.feed_tick_ms, Arc::new(SystemClock));

        let mut app = Self {
            use_case,
            data,
            playback,
            transcript,
            revealed: Vec::new(),
            scheduler,
            dashboard: DashboardState::new(),
            selected: 0,
            status_line: None,
            should_quit: false,
            start: Instant::now(),
            resume_at: None,
        };
        // An empty flow never produces a completion tick, so arm here.
        if app.transcript.is_complete() {
            app.arm_feed_start();
        }
        app
    }

    /// Handles one key press. Returns true when the session should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Char(' ') => self.toggle_feed(),
            KeyCode::Char('x') => self.reset_session(),
            KeyCode::Char('1') => self.set_speed(SPEED_FAST_MS),
            KeyCode::Char('2') => self.set_speed(SPEED_NORMAL_MS),
            KeyCode::Char('3') => self.set_speed(SPEED_SLOW_MS),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char('e') => self.apply_action(AlertAction::Escalate),
            KeyCode::Char('f') => self.apply_action(AlertAction::MarkFalsePositive),
            KeyCode::Char('d') => self.apply_action(AlertAction::Resolve),
            _ => {}
        }
        false
    }

    /// Reveals the next transcript line; arms the feed auto-start when the
    /// last line lands.
    pub fn on_transcript_tick(&mut self) {
        if self.transcript.is_complete() {
            return;
        }
        if let Some(line) = self.transcript.tick() {
            self.revealed.push(line);
        }
        if self.transcript.is_complete() {
            self.arm_feed_start();
        }
    }

    /// Emits one feed item while running.
    pub fn on_feed_tick(&mut self) {
        if let Some(emission) = self.scheduler.tick() {
            self.dashboard.absorb(emission);
            self.clamp_selection();
        }
    }

    /// Fires any pending deferred start (auto-start or settle restart).
    pub fn on_housekeeping(&mut self, now: Instant) {
        if self.resume_at.is_some_and(|deadline| now >= deadline) {
            self.resume_at = None;
            if let Err(e) = self.scheduler.start(&self.data) {
                tracing::warn!(%e, "deferred feed start rejected");
            }
        }
    }

    fn toggle_feed(&mut self) {
        match self.scheduler.phase() {
            ReplayPhase::Running => self.scheduler.stop(),
            ReplayPhase::Idle | ReplayPhase::Stopped => {
                self.resume_at = None;
                if let Err(e) = self.scheduler.start(&self.data) {
                    tracing::warn!(%e, "feed start rejected");
                }
            }
        }
    }

    fn reset_session(&mut self) {
        self.resume_at = None;
        self.scheduler.reset();
        self.dashboard.reset();
        self.selected = 0;
    }

    fn set_speed(&mut self, interval_ms: u64) {
        if self.scheduler.change_interval(interval_ms) {
            // Playback was running: restart after the settle gap so no item
            // is duplicated or dropped across the interval change.
            self.resume_at =
                Some(Instant::now() + Duration::from_millis(self.playback.settle_ms));
        }
    }

    fn arm_feed_start(&mut self) {
        self.resume_at =
            Some(Instant::now() + Duration::from_millis(self.playback.initial_delay_ms));
    }

    fn apply_action(&mut self, action: AlertAction) {
        let Some(alert_id) = self
            .dashboard
            .alerts
            .get(self.selected)
            .map(|alert| alert.id.clone())
        else {
            return;
        };
        self.dashboard.apply_action(&alert_id, action);
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.dashboard.alerts.len() {
            self.selected += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.dashboard.alerts.len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn phase_label(&self) -> &'static str {
        match self.scheduler.phase() {
            ReplayPhase::Running => "RUNNING",
            ReplayPhase::Stopped => "PAUSED",
            ReplayPhase::Idle if self.scheduler.is_drained() => "COMPLETE",
            ReplayPhase::Idle if self.resume_at.is_some() => "STARTING",
            ReplayPhase::Idle => "IDLE",
        }
    }

    pub fn speed_label(&self) -> String {
        match self.scheduler.interval_ms() {
            SPEED_FAST_MS => "Fast".to_string(),
            SPEED_NORMAL_MS => "Normal".to_string(),
            SPEED_SLOW_MS => "Slow".to_string(),
            other => format!("{other}ms"),
        }
    }
}
