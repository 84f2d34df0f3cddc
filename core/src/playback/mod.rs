//! Terminal transcript playback: one line per tick, strictly in authorial
//! order. Independent of the replay scheduler, which sorts by timestamp.

use serde_json::Value;
use tracing::warn;

/// Reveals transcript lines one at a time. Raw steps are kept as JSON values
/// so malformed (non-string) entries can be skipped without stalling the
/// cursor, matching the playback error policy.
pub struct TranscriptPlayer {
    steps: Vec<Value>,
    cursor: usize,
}

impl TranscriptPlayer {
    pub fn new(steps: Vec<Value>) -> Self {
        Self { steps, cursor: 0 }
    }

    pub fn from_lines(lines: Vec<String>) -> Self {
        Self::new(lines.into_iter().map(Value::String).collect())
    }

    /// Advances one step per call. Non-string entries are skipped with a
    /// warning, but the cursor still moves so playback cannot stall; the
    /// next valid line (if any) is returned in the same tick.
    pub fn tick(&mut self) -> Option<String> {
        while self.cursor < self.steps.len() {
            let index = self.cursor;
            self.cursor += 1;
            match &self.steps[index] {
                Value::String(line) => return Some(line.clone()),
                other => {
                    warn!(index, entry = %other, "skipping malformed transcript entry");
                }
            }
        }
        None
    }

    /// Complete when the cursor passed the last entry, or immediately for an
    /// empty flow.
    pub fn is_complete(&self) -> bool {
        self.cursor >= self.steps.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reveals_lines_in_authorial_order() {
        let mut player =
            TranscriptPlayer::from_lines(vec!["[*] one".into(), "[!] two".into(), "--- done".into()]);
        assert!(!player.is_complete());
        assert_eq!(player.tick().as_deref(), Some("[*] one"));
        assert_eq!(player.tick().as_deref(), Some("[!] two"));
        assert_eq!(player.tick().as_deref(), Some("--- done"));
        assert!(player.is_complete());
        assert!(player.tick().is_none());
    }

    #[test]
    fn malformed_entries_are_skipped_without_stalling() {
        let mut player = TranscriptPlayer::new(vec![
            json!("[*] first"),
            json!(42),
            json!(null),
            json!("[✓] last"),
        ]);
        assert_eq!(player.tick().as_deref(), Some("[*] first"));
        // The two malformed entries are consumed in one tick.
        assert_eq!(player.tick().as_deref(), Some("[✓] last"));
        assert!(player.is_complete());
    }

    #[test]
    fn trailing_malformed_entry_still_completes() {
        let mut player = TranscriptPlayer::new(vec![json!("[*] only"), json!({})]);
        assert_eq!(player.tick().as_deref(), Some("[*] only"));
        assert!(player.tick().is_none());
        assert!(player.is_complete());
    }

    #[test]
    fn empty_flow_is_complete_immediately() {
        let mut player = TranscriptPlayer::new(Vec::new());
        assert!(player.is_complete());
        assert!(player.tick().is_none());
    }
}
