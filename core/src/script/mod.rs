//! Terminal transcript synthesis: event tags and their rendered log lines.
//!
//! Line prefixes drive UI color-coding downstream: `[*]` action in progress,
//! `[!]` detection/warning, `[✓]` remediation/completion, and a leading `---`
//! marks a section divider.

pub mod lines;
pub mod tags;

pub use lines::{line_for, transcript_for};
pub use tags::EventTag;
