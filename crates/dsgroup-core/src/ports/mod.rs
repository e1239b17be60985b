//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core engine expects from
//! infrastructure. They contain no implementation details and use only
//! domain types.
//!
//! # Design Rules
//!
//! - No process spawning or filesystem access in core
//! - The runner executes a finished command line; quoting is the caller's job
//! - Sinks are fire-and-forget and never fail the convergence run

pub mod binary_probe;
pub mod command_runner;
pub mod event_sink;

use std::path::PathBuf;
use thiserror::Error;

pub use binary_probe::{BinaryProbePort, require_binary};
pub use command_runner::CommandRunnerPort;
pub use event_sink::{GroupEventSink, NoopEventSink, TracingEventSink};

#[cfg(test)]
pub use binary_probe::MockBinaryProbePort;
#[cfg(test)]
pub use command_runner::MockCommandRunnerPort;

/// Errors raised while converging a group.
///
/// Every variant except `SearchExhausted` is a group operation failure.
/// `SearchExhausted` signals that the gid space between the floor and the
/// search limit is full.
#[derive(Debug, Error)]
pub enum GroupError {
    /// The tool printed "No such key" on stdout, whatever its exit status.
    #[error("Unexpected error running '{command}': {output}")]
    UnexpectedKey { command: String, output: String },

    /// A non-delete command exited with a non-zero status.
    #[error("Command '{command}' failed with status {status}: {output}")]
    CommandFailed {
        command: String,
        status: i32,
        output: String,
    },

    /// The requested gid is already assigned to another group.
    #[error("gid {0} already in use")]
    GidInUse(u32),

    /// The directory tool binary is not installed.
    #[error("Directory tool binary not found at {}", .0.display())]
    BinaryMissing(PathBuf),

    /// The group does not exist but the action requires it.
    #[error("Group not found: {0}")]
    NotFound(String),

    /// The desired name differs from the observed record name.
    #[error("Renaming group '{from}' to '{to}' is not supported")]
    RenameUnsupported { from: String, to: String },

    /// Invalid desired state.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The process capability could not run the command at all.
    #[error("Failed to run '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// No free gid was found within the search bound.
    #[error("gid not found. Exhausted. Searched {limit} ids starting at {floor}")]
    SearchExhausted { floor: u32, limit: u32 },
}

impl GroupError {
    /// Whether this is the gid exhaustion signal rather than an operation error.
    pub const fn is_exhaustion(&self) -> bool {
        matches!(self, Self::SearchExhausted { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhaustion_is_distinct() {
        assert!(GroupError::SearchExhausted { floor: 200, limit: 1 }.is_exhaustion());
        assert!(!GroupError::GidInUse(50).is_exhaustion());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(GroupError::GidInUse(50).to_string(), "gid 50 already in use");
        let err = GroupError::BinaryMissing(PathBuf::from("/usr/bin/dscl"));
        assert_eq!(
            err.to_string(),
            "Directory tool binary not found at /usr/bin/dscl"
        );
    }
}
