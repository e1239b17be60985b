//! Lifecycle action handlers: create, manage, modify, remove and apply.

use std::fs;
use std::io::Write;
use std::path::Path;

use dsgroup_core::{ActionOutcome, GroupAction, GroupSpec};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Run `action` for the desired spec and report whether anything changed.
///
/// # Errors
///
/// Returns an error if the spec is invalid, the directory tool is missing,
/// or any command issued while converging fails.
pub fn execute(
    ctx: &CliContext,
    spec: GroupSpec,
    action: GroupAction,
    out: &mut impl Write,
) -> Result<ActionOutcome, CliError> {
    let mut provider = ctx.provider(spec)?;
    let outcome = provider.run_action(action)?;

    let group = provider.desired();
    if outcome.updated {
        writeln!(out, "{group}: {action} applied")?;
    } else {
        writeln!(out, "{group}: already up to date")?;
    }
    Ok(outcome)
}

/// Remove the named group.
pub fn remove(ctx: &CliContext, name: &str, out: &mut impl Write) -> Result<ActionOutcome, CliError> {
    execute(ctx, GroupSpec::new(name), GroupAction::Remove, out)
}

/// Read a desired spec from a JSON file and run `action` for it.
pub fn apply_file(
    ctx: &CliContext,
    path: &Path,
    action: GroupAction,
    out: &mut impl Write,
) -> Result<ActionOutcome, CliError> {
    let content = fs::read_to_string(path)?;
    let spec: GroupSpec = serde_json::from_str(&content)?;
    execute(ctx, spec, action, out)
}
