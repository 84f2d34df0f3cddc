pub mod alert;
pub mod log;

pub use alert::{Alert, AlertAction, AlertStatus, Severity};
pub use log::{LogEvent, LogLevel};
