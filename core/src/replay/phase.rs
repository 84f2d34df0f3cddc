//! Replay state machine rules.

use thiserror::Error;

/// Scheduler lifecycle. `Idle` covers both "never started" and "fully
/// drained"; `Stopped` retains the cursor so a later start resumes instead of
/// restarting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayPhase {
    Idle,
    Running,
    Stopped,
}

#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("invalid replay transition from {from:?} to {to:?}")]
    InvalidTransition { from: ReplayPhase, to: ReplayPhase },
}

pub fn validate(from: ReplayPhase, to: ReplayPhase) -> Result<(), TransitionError> {
    let is_valid = match (from, to) {
        // Start, and resume after a stop.
        (ReplayPhase::Idle, ReplayPhase::Running) => true,
        (ReplayPhase::Stopped, ReplayPhase::Running) => true,
        // Stop keeps position; drain and reset return to Idle.
        (ReplayPhase::Running, ReplayPhase::Stopped) => true,
        (ReplayPhase::Running, ReplayPhase::Idle) => true,
        (ReplayPhase::Stopped, ReplayPhase::Idle) => true,
        _ => false,
    };

    if is_valid {
        Ok(())
    } else {
        Err(TransitionError::InvalidTransition { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_transitions_are_legal() {
        assert!(validate(ReplayPhase::Idle, ReplayPhase::Running).is_ok());
        assert!(validate(ReplayPhase::Running, ReplayPhase::Stopped).is_ok());
        assert!(validate(ReplayPhase::Stopped, ReplayPhase::Running).is_ok());
        assert!(validate(ReplayPhase::Running, ReplayPhase::Idle).is_ok());
        assert!(validate(ReplayPhase::Stopped, ReplayPhase::Idle).is_ok());
    }

    #[test]
    fn illegal_transitions_are_rejected() {
        assert!(validate(ReplayPhase::Idle, ReplayPhase::Stopped).is_err());
        assert!(validate(ReplayPhase::Idle, ReplayPhase::Idle).is_err());
        assert!(validate(ReplayPhase::Running, ReplayPhase::Running).is_err());
    }
}
