//! # dsgroup-cli
//!
//! Command-line adapter for `dsgroup-core`. Parses arguments, resolves
//! provider settings, wires the system adapters in [`bootstrap`] and hands
//! each subcommand to a handler.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary target only
use dotenvy as _;
use tracing as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, bootstrap_with};
pub use commands::{ActionArg, Commands, GroupArgs};
pub use error::CliError;
pub use parser::Cli;
