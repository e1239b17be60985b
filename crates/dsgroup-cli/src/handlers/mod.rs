//! Command handlers that delegate to `GroupProvider`.
//!
//! Handlers follow one pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ..., out: &mut impl Write) -> Result<_, CliError>`
//! - Thin wrappers that:
//!   1. Turn CLI input into a desired `GroupSpec`
//!   2. Call the provider or gid allocator
//!   3. Format output for the terminal
//!
//! Handlers should NOT build command lines or parse tool output.

pub mod converge;
pub mod free_gid;
pub mod show;
