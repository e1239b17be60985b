//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (process spawning, filesystem, etc.).
//!
//! # Structure
//!
//! - `group` - Desired and observed group state (`GroupSpec`, `ObservedGroup`)
//! - `command` - Captured result of a single directory tool invocation

mod command;
mod group;

pub use command::{CommandResult, ProcessOutput};
pub use group::{GroupSpec, GroupState, ObservedGroup};
