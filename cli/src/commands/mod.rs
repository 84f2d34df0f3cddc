pub mod anomaly;
pub mod cli;
pub mod list;
pub mod run;
pub mod show;
pub mod trigger;
