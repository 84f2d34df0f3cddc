//! Ratatui session dashboard: attack terminal transcript on the left, KPI
//! cards, alert feed, and event log on the right.

pub mod app;
pub mod events;
pub mod loop_run;
pub mod terminal;
pub mod ui;
