//! Tracked group fields.
//!
//! Each entry pairs a "does this field differ" predicate with the reconciler
//! that fixes it. Tracking another attribute means adding a row here.

use crate::domain::{GroupSpec, ObservedGroup};
use crate::ports::GroupError;

use super::provider::GroupProvider;

/// One attribute the provider keeps in sync.
pub struct TrackedField {
    /// Field name used in log output.
    pub name: &'static str,
    /// Whether desired and observed disagree. `None` means the group is absent.
    pub differs: fn(&GroupSpec, Option<&ObservedGroup>) -> bool,
    /// Issue the commands that bring this field to the desired value.
    pub reconcile: fn(&GroupProvider) -> Result<(), GroupError>,
}

impl std::fmt::Debug for TrackedField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackedField")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Fields compared by `manage_group`, in the order they are applied.
pub const TRACKED_FIELDS: &[TrackedField] = &[
    TrackedField {
        name: "name",
        differs: name_differs,
        reconcile: reconcile_name,
    },
    TrackedField {
        name: "gid",
        differs: gid_differs,
        reconcile: reconcile_gid,
    },
    TrackedField {
        name: "members",
        differs: members_differ,
        reconcile: reconcile_members,
    },
];

fn name_differs(desired: &GroupSpec, observed: Option<&ObservedGroup>) -> bool {
    observed.is_none_or(|group| group.name != desired.name)
}

fn gid_differs(desired: &GroupSpec, observed: Option<&ObservedGroup>) -> bool {
    match observed {
        None => true,
        Some(group) => desired.gid.is_some() && desired.gid != group.gid,
    }
}

/// Append mode only cares about missing members; replace mode compares the
/// member sets regardless of order.
fn members_differ(desired: &GroupSpec, observed: Option<&ObservedGroup>) -> bool {
    let Some(group) = observed else {
        return true;
    };
    if desired.append {
        return desired
            .members
            .iter()
            .any(|member| !group.members.contains(member));
    }
    let mut wanted = desired.members.clone();
    let mut current = group.members.clone();
    wanted.sort();
    current.sort();
    wanted != current
}

fn reconcile_name(provider: &GroupProvider) -> Result<(), GroupError> {
    match provider.current().observed() {
        Some(group) => Err(GroupError::RenameUnsupported {
            from: group.name.clone(),
            to: provider.desired().name.clone(),
        }),
        None => provider.create_record(),
    }
}

fn reconcile_gid(provider: &GroupProvider) -> Result<(), GroupError> {
    provider.set_gid().map(|_| ())
}

fn reconcile_members(provider: &GroupProvider) -> Result<(), GroupError> {
    provider.set_members()
}
