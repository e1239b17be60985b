//! Convergence services.
//!
//! - `gid_allocator` - free gid search and "is this gid used"
//! - `reconcile` - gid and membership reconcilers
//! - `fields` - table of tracked fields and their reconcilers
//! - `provider` - the convergence controller and lifecycle actions

pub mod fields;
mod gid_allocator;
mod provider;
mod reconcile;

pub use fields::{TRACKED_FIELDS, TrackedField};
pub use gid_allocator::{GidAllocator, LIST_GIDS, first_free_gid};
pub use provider::{ActionOutcome, GroupAction, GroupProvider, ProviderDeps};
pub use reconcile::Reconciler;
