//! socrange-cli library surface, exposed for unit tests.

pub mod commands;
pub mod http;
pub mod tui;
