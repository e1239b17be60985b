//! Main commands enum and primary subcommands.
//!
//! This module defines the available commands for the CLI tool.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use dsgroup_core::{GroupAction, GroupSpec};

/// Available commands for the group convergence tool.
#[derive(Subcommand)]
pub enum Commands {
    /// Create the group, or converge it if it already exists
    Create(GroupArgs),

    /// Converge the group if it exists; do nothing otherwise
    Manage(GroupArgs),

    /// Converge the group; fail if it does not exist
    Modify(GroupArgs),

    /// Delete the group
    Remove {
        /// Group record name
        name: String,
    },

    /// Apply a desired state read from a JSON file
    Apply {
        /// JSON file with `name`, `gid`, `members` and `append`
        #[arg(short, long)]
        file: PathBuf,
        /// Lifecycle action to run
        #[arg(short, long, value_enum, default_value_t = ActionArg::Create)]
        action: ActionArg,
    },

    /// Show the group as the directory service reports it
    Show {
        /// Group record name
        name: String,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the first unused gid
    FreeGid,
}

/// Desired state given on the command line.
#[derive(Args, Debug, Clone)]
pub struct GroupArgs {
    /// Group record name
    pub name: String,

    /// Numeric group id (allocated when omitted)
    #[arg(short, long)]
    pub gid: Option<u32>,

    /// Comma-separated usernames
    #[arg(short, long, value_delimiter = ',')]
    pub members: Vec<String>,

    /// Add members instead of replacing the membership
    #[arg(short, long)]
    pub append: bool,
}

impl GroupArgs {
    /// Build the desired spec.
    pub fn to_spec(&self) -> GroupSpec {
        GroupSpec {
            name: self.name.clone(),
            gid: self.gid,
            members: self.members.clone(),
            append: self.append,
        }
    }
}

/// Lifecycle action selectable with `apply --action`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionArg {
    Create,
    Manage,
    Modify,
    Remove,
}

impl From<ActionArg> for GroupAction {
    fn from(action: ActionArg) -> Self {
        match action {
            ActionArg::Create => Self::Create,
            ActionArg::Manage => Self::Manage,
            ActionArg::Modify => Self::Modify,
            ActionArg::Remove => Self::Remove,
        }
    }
}
