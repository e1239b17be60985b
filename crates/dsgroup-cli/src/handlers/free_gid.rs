//! Free gid command handler.

use std::io::Write;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Print the first gid at or above the configured floor that no group uses.
pub fn execute(ctx: &CliContext, out: &mut impl Write) -> Result<u32, CliError> {
    let gid = ctx.gid_allocator()?.free_gid()?;
    writeln!(out, "{gid}")?;
    Ok(gid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::{context, context_with_probe};
    use dsgroup_core::ProcessOutput;

    #[test]
    fn test_prints_first_free_gid() {
        let (ctx, runner) = context(|_| ProcessOutput::ok("staff 200\nadmin 201\nwheel 0\n"));
        let mut out = Vec::new();

        assert_eq!(execute(&ctx, &mut out).unwrap(), 202);
        assert_eq!(String::from_utf8(out).unwrap(), "202\n");
        assert_eq!(*runner.calls.lock().unwrap(), vec!["dscl . -list /Groups gid"]);
    }

    #[test]
    fn test_missing_binary() {
        let (ctx, runner) = context_with_probe(|_| ProcessOutput::ok(""), false);
        let err = execute(&ctx, &mut Vec::new()).unwrap_err();
        assert_eq!(err.exit_code(), 69);
        assert!(runner.calls.lock().unwrap().is_empty());
    }
}
