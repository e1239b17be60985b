//! Show command handler.

use std::io::Write;

use dsgroup_core::{GroupSpec, GroupState};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Print the group as the directory service currently reports it.
pub fn execute(
    ctx: &CliContext,
    name: &str,
    json: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let mut provider = ctx.provider(GroupSpec::new(name))?;
    let state = provider.load_current()?;

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(state)?)?;
        return Ok(());
    }

    match state {
        GroupState::Absent => writeln!(out, "group[{name}]: absent")?,
        GroupState::Present(group) => {
            writeln!(out, "name:    {}", group.name)?;
            match group.gid {
                Some(gid) => writeln!(out, "gid:     {gid}")?,
                None => writeln!(out, "gid:     -")?,
            }
            writeln!(out, "members: {}", group.members.join(", "))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::{aj_record, context, context_with_probe, not_found};
    use dsgroup_core::ProcessOutput;

    fn render(reply: fn(&str) -> ProcessOutput, json: bool) -> String {
        let (ctx, _runner) = context(reply);
        let mut out = Vec::new();
        execute(&ctx, "aj", json, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_show_present_group() {
        let text = render(|_| aj_record(), false);
        assert_eq!(text, "name:    aj\ngid:     50\nmembers: root, aj\n");
    }

    #[test]
    fn test_show_absent_group() {
        assert_eq!(render(|_| not_found(), false), "group[aj]: absent\n");
    }

    #[test]
    fn test_show_json() {
        let text = render(|_| aj_record(), true);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["state"], "present");
        assert_eq!(value["gid"], 50);
        assert_eq!(value["members"][1], "aj");
    }

    #[test]
    fn test_show_without_binary() {
        let (ctx, runner) = context_with_probe(|_| aj_record(), false);
        let err = execute(&ctx, "aj", false, &mut Vec::new()).unwrap_err();
        assert_eq!(err.exit_code(), 69);
        assert!(runner.calls.lock().unwrap().is_empty());
    }
}
