pub mod anomaly;
pub mod api;
pub mod catalog;
pub mod config;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod model;
pub mod playback;
pub mod replay;
pub mod scoring;
pub mod script;
pub mod template;
pub mod trigger;
pub mod util;
