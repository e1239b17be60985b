//! # dsgroup-core
//!
//! Converges a single directory service group to a declared state by driving
//! the `dscl` command-line tool.
//!
//! - [`domain`] - desired and observed group state, command results
//! - [`ports`] - traits for process execution, binary probing and change events
//! - [`dscl`] - command wrapper, output classification and parsing
//! - [`services`] - gid allocation, reconcilers and the `GroupProvider`
//! - [`settings`] - provider configuration
//!
//! The crate never spawns processes itself. Adapters (see `dsgroup-runtime`)
//! implement the ports and are injected through [`ProviderDeps`].
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod dscl;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{CommandResult, GroupSpec, GroupState, ObservedGroup, ProcessOutput};
pub use ports::{
    BinaryProbePort, CommandRunnerPort, GroupError, GroupEventSink, NoopEventSink,
    TracingEventSink, require_binary,
};
pub use services::{ActionOutcome, GidAllocator, GroupAction, GroupProvider, ProviderDeps};
pub use settings::{
    DEFAULT_BINARY_PATH, DEFAULT_GID_FLOOR, DEFAULT_GID_SEARCH_LIMIT, ProviderSettings,
    SettingsError, validate_settings,
};
