//! CLI-specific error types and mappings.
//!
//! This module provides the error type for the CLI adapter and the mapping
//! from `GroupError` to exit codes and user-facing messages.

use dsgroup_core::{GroupError, SettingsError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Group operation failed.
    #[error("{0}")]
    Core(String),

    /// Invalid desired state or arguments.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The directory tool failed or could not be run.
    #[error("Process error: {0}")]
    Process(String),

    /// The directory tool is not installed.
    #[error("{0}")]
    Unavailable(String),

    /// No free gid left in the configured range.
    #[error("{0}")]
    Exhausted(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Core(_) => 1,
            Self::Arguments(_) => 2,    // EX_USAGE
            Self::Unavailable(_) => 69, // EX_UNAVAILABLE
            Self::Process(_) => 71,     // EX_OSERR
            Self::Exhausted(_) => 73,   // EX_CANTCREAT
            Self::Io(_) => 74,          // EX_IOERR
            Self::Config(_) => 78,      // EX_CONFIG
        }
    }
}

impl From<GroupError> for CliError {
    fn from(err: GroupError) -> Self {
        let message = err.to_string();
        match err {
            GroupError::Validation(msg) => Self::Arguments(msg),
            GroupError::BinaryMissing(_) => Self::Unavailable(message),
            GroupError::SearchExhausted { .. } => Self::Exhausted(message),
            GroupError::UnexpectedKey { .. }
            | GroupError::CommandFailed { .. }
            | GroupError::Spawn { .. } => Self::Process(message),
            GroupError::GidInUse(_)
            | GroupError::NotFound(_)
            | GroupError::RenameUnsupported { .. } => Self::Core(message),
        }
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Arguments(err.to_string())
    }
}
