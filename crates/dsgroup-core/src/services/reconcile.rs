//! Gid and membership reconcilers.
//!
//! Each reconciler derives its commands from the desired spec and the
//! observed snapshot it is handed, so a partially applied run is repaired by
//! the next one.

use std::sync::Arc;

use crate::domain::GroupSpec;
use crate::dscl::Dscl;
use crate::dscl::parse::{GROUP_MEMBERS, GROUP_MEMBERSHIP, PRIMARY_GROUP_ID};
use crate::ports::{GroupError, GroupEventSink};

use super::gid_allocator::GidAllocator;

/// Issues the gid-assignment and membership commands for one group.
#[derive(Clone)]
pub struct Reconciler {
    dscl: Dscl,
    gids: GidAllocator,
    events: Arc<dyn GroupEventSink>,
}

impl Reconciler {
    pub fn new(dscl: Dscl, gids: GidAllocator, events: Arc<dyn GroupEventSink>) -> Self {
        Self { dscl, gids, events }
    }

    /// Assign the desired gid, or a freshly allocated one when none is set.
    ///
    /// An explicit gid that is already taken is an error; it is never
    /// silently replaced. Returns the gid that was written.
    pub fn set_gid(&self, desired: &GroupSpec) -> Result<u32, GroupError> {
        let gid = match desired.gid {
            Some(gid) => {
                if self.gids.gid_used(Some(gid))? {
                    return Err(GroupError::GidInUse(gid));
                }
                gid
            }
            None => {
                let gid = self.gids.free_gid()?;
                self.events
                    .record(&format!("{desired}: allocated gid {gid}"));
                gid
            }
        };

        self.dscl.safe_execute(&format!(
            "create {} {PRIMARY_GROUP_ID} {gid}",
            desired.record_path()
        ))?;
        Ok(gid)
    }

    /// Bring membership in line with the desired member list.
    ///
    /// In replace mode an existing membership is cleared first (both the GUID
    /// and the username lists). Desired members are then appended in order,
    /// without deduplication. An empty desired list against an empty observed
    /// list issues nothing.
    pub fn set_members(&self, desired: &GroupSpec, observed: &[String]) -> Result<(), GroupError> {
        let path = desired.record_path();

        if !desired.append && !observed.is_empty() {
            self.events.record(&format!(
                "{desired}: removing group members {}",
                observed.join(" ")
            ));
            self.dscl
                .safe_execute(&format!("create {path} {GROUP_MEMBERS} ''"))?;
            self.dscl
                .safe_execute(&format!("create {path} {GROUP_MEMBERSHIP} ''"))?;
        }

        if !desired.members.is_empty() {
            self.events.record(&format!(
                "{desired}: setting group members {}",
                desired.members.join(", ")
            ));
            self.dscl.safe_execute(&format!(
                "append {path} {GROUP_MEMBERSHIP} {}",
                desired.members.join(" ")
            ))?;
        }

        Ok(())
    }
}
