//! Error types for the replay system.

use std::fmt;
use std::io;

use wrapbot_core::{RobotId, StepError};

/// Errors from reading, writing, or replaying a solution.
#[derive(Debug)]
pub enum ReplayError {
    /// An I/O error occurred during read or write.
    Io(io::Error),
    /// The solution text could not be parsed.
    Malformed {
        /// Byte offset of the offending character.
        offset: usize,
        /// Human-readable description of what went wrong.
        detail: String,
    },
    /// A replayed action was rejected by the state.
    Step {
        /// Zero-based turn of the rejected action.
        turn: usize,
        /// Acting robot.
        robot: RobotId,
        /// Why the state rejected it.
        source: StepError,
    },
    /// The solution lists actions for robots that were never cloned.
    RobotCountMismatch {
        /// Robot sequences in the solution.
        expected: usize,
        /// Robots present after replay.
        spawned: usize,
    },
    /// The replayed state does not match the recorded fingerprint.
    HashMismatch {
        /// Fingerprint supplied by the caller.
        recorded: u64,
        /// Fingerprint of the replayed state.
        replayed: u64,
    },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Malformed { offset, detail } => {
                write!(f, "malformed solution at byte {offset}: {detail}")
            }
            Self::Step {
                turn,
                robot,
                source,
            } => write!(f, "turn {turn}, robot {robot}: {source}"),
            Self::RobotCountMismatch { expected, spawned } => write!(
                f,
                "solution has {expected} robot sequences but only {spawned} robots exist"
            ),
            Self::HashMismatch { recorded, replayed } => write!(
                f,
                "state hash mismatch: recorded={recorded:#018x}, replayed={replayed:#018x}"
            ),
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Step { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for ReplayError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
