//! Group provider - the convergence controller.
//!
//! Loads the observed state of one group, diffs it against the desired
//! spec field by field, and drives the reconcilers. Also exposes the
//! lifecycle actions (create, manage, modify, remove) built on top.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::domain::{GroupSpec, GroupState};
use crate::dscl::parse::observed_from_record;
use crate::dscl::{Dscl, RECORD_NOT_FOUND, classify};
use crate::ports::{
    BinaryProbePort, CommandRunnerPort, GroupError, GroupEventSink, require_binary,
};
use crate::settings::ProviderSettings;

use super::fields::TRACKED_FIELDS;
use super::gid_allocator::GidAllocator;
use super::reconcile::Reconciler;

/// Infrastructure a provider needs, wired by the composition root.
#[derive(Clone)]
pub struct ProviderDeps {
    /// Executes directory tool command lines.
    pub runner: Arc<dyn CommandRunnerPort>,
    /// Checks that the directory tool is installed.
    pub probe: Arc<dyn BinaryProbePort>,
    /// Receives membership and gid change descriptions.
    pub events: Arc<dyn GroupEventSink>,
}

impl ProviderDeps {
    pub fn new(
        runner: Arc<dyn CommandRunnerPort>,
        probe: Arc<dyn BinaryProbePort>,
        events: Arc<dyn GroupEventSink>,
    ) -> Self {
        Self {
            runner,
            probe,
            events,
        }
    }
}

/// Lifecycle actions a caller can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupAction {
    /// Create the group, or converge it if it already exists.
    Create,
    /// Converge the group if it exists; do nothing otherwise.
    Manage,
    /// Converge the group; fail if it does not exist.
    Modify,
    /// Delete the group if it exists.
    Remove,
}

impl std::fmt::Display for GroupAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Create => "create",
            Self::Manage => "manage",
            Self::Modify => "modify",
            Self::Remove => "remove",
        };
        f.write_str(name)
    }
}

/// What a lifecycle action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Whether any command that changes the directory was issued.
    pub updated: bool,
}

/// Converges one group towards its desired spec.
///
/// The desired spec is fixed for the provider's lifetime. The observed state
/// starts as `Absent` and is replaced by `load_current`.
pub struct GroupProvider {
    desired: GroupSpec,
    current: GroupState,
    dscl: Dscl,
    gids: GidAllocator,
    reconciler: Reconciler,
    probe: Arc<dyn BinaryProbePort>,
    settings: ProviderSettings,
}

impl GroupProvider {
    /// Create a provider after validating the desired spec.
    pub fn new(
        deps: ProviderDeps,
        settings: ProviderSettings,
        desired: GroupSpec,
    ) -> Result<Self, GroupError> {
        desired.validate()?;

        let dscl = Dscl::new(deps.runner, &settings);
        let gids = GidAllocator::new(dscl.clone(), &settings);
        let reconciler = Reconciler::new(dscl.clone(), gids.clone(), deps.events);

        Ok(Self {
            desired,
            current: GroupState::Absent,
            dscl,
            gids,
            reconciler,
            probe: deps.probe,
            settings,
        })
    }

    pub const fn desired(&self) -> &GroupSpec {
        &self.desired
    }

    pub const fn current(&self) -> &GroupState {
        &self.current
    }

    /// Replace the observed state without querying the tool.
    pub fn set_current(&mut self, state: GroupState) {
        self.current = state;
    }

    /// The gid allocator bound to this provider's tool settings.
    pub const fn gids(&self) -> &GidAllocator {
        &self.gids
    }

    // ─────────────────────────────────────────────────────────────────────
    // State acquisition
    // ─────────────────────────────────────────────────────────────────────

    /// Fail unless the directory tool binary is installed.
    pub fn ensure_binary(&self) -> Result<(), GroupError> {
        require_binary(self.probe.as_ref(), &self.settings.binary_path)
    }

    /// Read the group's record and store it as the observed state.
    ///
    /// A record the tool reports as not found becomes `GroupState::Absent`;
    /// any other failure is an error.
    pub fn load_current(&mut self) -> Result<&GroupState, GroupError> {
        self.ensure_binary()?;

        let path = self.desired.record_path();
        let result = self.dscl.execute(["read", path.as_str()])?;
        let not_found = !result.succeeded()
            && (result.stderr.contains(RECORD_NOT_FOUND)
                || result.stdout.contains(RECORD_NOT_FOUND));

        self.current = if not_found {
            debug!(group = %self.desired.name, "group does not exist");
            GroupState::Absent
        } else {
            let record = classify(false, result)?;
            GroupState::Present(observed_from_record(&self.desired.name, &record))
        };
        Ok(&self.current)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Convergence
    // ─────────────────────────────────────────────────────────────────────

    /// Whether any tracked field differs between desired and observed state.
    pub fn group_changed(&self) -> bool {
        let observed = self.current.observed();
        TRACKED_FIELDS
            .iter()
            .any(|field| (field.differs)(&self.desired, observed))
    }

    /// Create the group with every supplied attribute.
    pub fn create_group(&self) -> Result<(), GroupError> {
        self.manage_group(false)
    }

    /// Apply the desired state.
    ///
    /// With `manage` set, only fields that differ from the observed state are
    /// reconciled; equal fields issue no command. Without it, the record is
    /// (re)created and gid and membership are applied unconditionally.
    pub fn manage_group(&self, manage: bool) -> Result<(), GroupError> {
        if !manage {
            self.create_record()?;
            self.dscl
                .safe_execute(&format!("create {} Password '*'", self.desired.record_path()))?;
            self.set_gid()?;
            return self.set_members();
        }

        let observed = self.current.observed();
        for field in TRACKED_FIELDS {
            if (field.differs)(&self.desired, observed) {
                debug!(group = %self.desired.name, field = field.name, "field changed");
                (field.reconcile)(self)?;
            }
        }
        Ok(())
    }

    /// Delete the group record. Deleting an absent record succeeds.
    pub fn remove_group(&self) -> Result<(), GroupError> {
        self.dscl
            .safe_execute(&format!("delete {}", self.desired.record_path()))
            .map(|_| ())
    }

    /// Create the bare group record.
    pub fn create_record(&self) -> Result<(), GroupError> {
        self.dscl
            .safe_execute(&format!("create {}", self.desired.record_path()))
            .map(|_| ())
    }

    /// Run the gid reconciler against the desired spec.
    pub fn set_gid(&self) -> Result<u32, GroupError> {
        self.reconciler.set_gid(&self.desired)
    }

    /// Run the membership reconciler against the observed members.
    pub fn set_members(&self) -> Result<(), GroupError> {
        let observed = self
            .current
            .observed()
            .map_or(&[][..], |group| group.members.as_slice());
        self.reconciler.set_members(&self.desired, observed)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────────────────

    /// Load the current state and run a lifecycle action.
    pub fn run_action(&mut self, action: GroupAction) -> Result<ActionOutcome, GroupError> {
        self.load_current()?;
        let outcome = self.apply_action(action)?;
        info!(
            group = %self.desired.name,
            %action,
            updated = outcome.updated,
            "action complete"
        );
        Ok(outcome)
    }

    /// Run a lifecycle action against the already loaded state.
    pub fn apply_action(&self, action: GroupAction) -> Result<ActionOutcome, GroupError> {
        let exists = self.current.exists();
        let updated = match action {
            GroupAction::Create if !exists => {
                self.create_group()?;
                true
            }
            GroupAction::Create | GroupAction::Manage => self.converge_existing(exists)?,
            GroupAction::Modify => {
                if !exists {
                    return Err(GroupError::NotFound(self.desired.name.clone()));
                }
                self.converge_existing(exists)?
            }
            GroupAction::Remove => {
                if exists {
                    self.remove_group()?;
                }
                exists
            }
        };
        Ok(ActionOutcome { updated })
    }

    fn converge_existing(&self, exists: bool) -> Result<bool, GroupError> {
        if !exists || !self.group_changed() {
            return Ok(false);
        }
        self.manage_group(true)?;
        Ok(true)
    }
}
