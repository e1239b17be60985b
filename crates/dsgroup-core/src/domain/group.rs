//! Group domain types.
//!
//! `GroupSpec` is the desired state supplied by the caller, `ObservedGroup`
//! is what the directory service currently reports.

use serde::{Deserialize, Deserializer, Serialize};

use crate::ports::GroupError;

// ─────────────────────────────────────────────────────────────────────────────
// Desired State
// ─────────────────────────────────────────────────────────────────────────────

/// Desired state of a directory service group.
///
/// Constructed by the caller before convergence and never mutated by the
/// engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSpec {
    /// Record name of the group; the lookup key.
    pub name: String,
    /// Numeric group id. `None` (or a blank value in input files) means
    /// "allocate a free one".
    #[serde(default, deserialize_with = "deserialize_gid")]
    pub gid: Option<u32>,
    /// Usernames that should belong to the group, in order.
    #[serde(default)]
    pub members: Vec<String>,
    /// Add members to the existing membership instead of replacing it.
    #[serde(default)]
    pub append: bool,
}

impl GroupSpec {
    /// Create a spec with only a name; gid is allocated and membership is empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gid: None,
            members: Vec::new(),
            append: false,
        }
    }

    /// Set the gid.
    #[must_use]
    pub const fn with_gid(mut self, gid: u32) -> Self {
        self.gid = Some(gid);
        self
    }

    /// Set the member list.
    #[must_use]
    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members = members.into_iter().map(Into::into).collect();
        self
    }

    /// Switch membership reconciliation to append mode.
    #[must_use]
    pub const fn with_append(mut self, append: bool) -> Self {
        self.append = append;
        self
    }

    /// Record path of this group inside the directory node.
    pub fn record_path(&self) -> String {
        format!("/Groups/{}", self.name)
    }

    /// Reject names and members that cannot be placed on a command line as a
    /// single plain token.
    pub fn validate(&self) -> Result<(), GroupError> {
        if self.name.is_empty() {
            return Err(GroupError::Validation("group name must not be empty".into()));
        }
        check_token("group name", &self.name)?;
        for member in &self.members {
            check_token("member name", member)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for GroupSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "group[{}]", self.name)
    }
}

fn check_token(kind: &str, value: &str) -> Result<(), GroupError> {
    if value.is_empty() {
        return Err(GroupError::Validation(format!("{kind} must not be empty")));
    }
    if value.starts_with('-') {
        return Err(GroupError::Validation(format!(
            "{kind} '{value}' must not start with '-'"
        )));
    }
    if let Some(bad) = value
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')))
    {
        return Err(GroupError::Validation(format!(
            "{kind} '{value}' contains unsupported character {bad:?}"
        )));
    }
    Ok(())
}

/// Accept a number, a numeric string, a blank string or null for the gid.
fn deserialize_gid<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawGid {
        Number(u32),
        Text(String),
    }

    match Option::<RawGid>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawGid::Number(gid)) => Ok(Some(gid)),
        Some(RawGid::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                Ok(None)
            } else {
                text.parse()
                    .map(Some)
                    .map_err(|_| serde::de::Error::custom(format!("invalid gid '{text}'")))
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Observed State
// ─────────────────────────────────────────────────────────────────────────────

/// Snapshot of a group as reported by the directory tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservedGroup {
    /// Record name of the group.
    pub name: String,
    /// `PrimaryGroupID`, if the record carries one.
    pub gid: Option<u32>,
    /// `GroupMembership` entries in the order the tool reported them.
    pub members: Vec<String>,
}

impl ObservedGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_gid(mut self, gid: u32) -> Self {
        self.gid = Some(gid);
        self
    }

    #[must_use]
    pub fn with_members<I, S>(mut self, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members = members.into_iter().map(Into::into).collect();
        self
    }
}

/// Result of loading a group: either a snapshot or a confirmed absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum GroupState {
    Present(ObservedGroup),
    Absent,
}

impl GroupState {
    /// The snapshot, if the group exists.
    pub const fn observed(&self) -> Option<&ObservedGroup> {
        match self {
            Self::Present(group) => Some(group),
            Self::Absent => None,
        }
    }

    pub const fn exists(&self) -> bool {
        matches!(self, Self::Present(_))
    }
}
