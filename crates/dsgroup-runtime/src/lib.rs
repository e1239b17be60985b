//! # dsgroup-runtime
//!
//! OS-level adapters for the ports defined in `dsgroup-core`:
//!
//! - [`ShellCommandRunner`] runs directory tool command lines through `/bin/sh`
//! - [`FsBinaryProbe`] checks that the tool is an executable file
//!
//! [`system_deps`] wires both into a `ProviderDeps` for the CLI.
#![deny(unsafe_code)]

mod probe;
mod runner;

use std::sync::Arc;

use dsgroup_core::{GroupEventSink, ProviderDeps};

pub use probe::FsBinaryProbe;
pub use runner::{DEFAULT_SHELL, ShellCommandRunner};

/// Dependencies backed by the real system.
pub fn system_deps(events: Arc<dyn GroupEventSink>) -> ProviderDeps {
    ProviderDeps::new(
        Arc::new(ShellCommandRunner::new()),
        Arc::new(FsBinaryProbe::new()),
        events,
    )
}
