//! Parsers for directory tool text output.
//!
//! Both parsers are tolerant: malformed lines are skipped, never fatal.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::ObservedGroup;

/// Attribute holding the numeric group id.
pub const PRIMARY_GROUP_ID: &str = "PrimaryGroupID";

/// Attribute holding member usernames.
pub const GROUP_MEMBERSHIP: &str = "GroupMembership";

/// Attribute holding member GUIDs.
pub const GROUP_MEMBERS: &str = "GroupMembers";

/// Parse `list /Groups gid` output into the set of gids in use.
///
/// The last whitespace-delimited token of each line is the gid. Blank lines
/// and lines whose last token is not a number are ignored.
///
/// ```
/// use dsgroup_core::dscl::parse::parse_gid_listing;
///
/// let used = parse_gid_listing("\naj      200\njt      201\n");
/// assert!(used.contains(&200) && used.contains(&201));
/// ```
pub fn parse_gid_listing(listing: &str) -> BTreeSet<u32> {
    listing
        .lines()
        .filter_map(|line| line.split_whitespace().last())
        .filter_map(|token| token.parse().ok())
        .collect()
}

/// Parse `read /Groups/<name>` output into attribute values.
///
/// Lines look like `Key: value1 value2`. A value that does not fit on the
/// key line continues on following lines that start with a space.
pub fn parse_record(text: &str) -> BTreeMap<String, Vec<String>> {
    let mut attributes: BTreeMap<String, Vec<String>> = BTreeMap::new();
    let mut current: Option<String> = None;

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }

        if line.starts_with(char::is_whitespace) {
            if let Some(key) = &current {
                attributes
                    .entry(key.clone())
                    .or_default()
                    .extend(line.split_whitespace().map(str::to_owned));
            }
            continue;
        }

        let Some((key, rest)) = line.split_once(':') else {
            current = None;
            continue;
        };
        let key = key.trim().to_string();
        attributes
            .entry(key.clone())
            .or_default()
            .extend(rest.split_whitespace().map(str::to_owned));
        current = Some(key);
    }

    attributes
}

/// Build an observed snapshot from `read` output.
pub fn observed_from_record(name: &str, text: &str) -> ObservedGroup {
    let mut attributes = parse_record(text);

    let gid = attributes
        .get(PRIMARY_GROUP_ID)
        .and_then(|values| values.first())
        .and_then(|value| value.parse().ok());
    let members = attributes.remove(GROUP_MEMBERSHIP).unwrap_or_default();

    ObservedGroup {
        name: name.to_string(),
        gid,
        members,
    }
}
