//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options. Every
//! provider setting can also come from a `DSGROUP_*` environment variable.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for converging directory service groups.
#[derive(Parser)]
#[command(name = "dsgroup")]
#[command(about = "Converge macOS directory service groups with dscl")]
#[command(version)]
pub struct Cli {
    /// Read provider settings from a JSON file
    #[arg(long, global = true, env = "DSGROUP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Command used to invoke the directory tool
    #[arg(long, global = true, env = "DSGROUP_TOOL")]
    pub tool: Option<String>,

    /// Directory node to operate on
    #[arg(long, global = true, env = "DSGROUP_NODE")]
    pub node: Option<String>,

    /// Path that must exist before any command runs
    #[arg(long = "binary-path", global = true, env = "DSGROUP_BINARY_PATH")]
    pub binary_path: Option<PathBuf>,

    /// First gid considered when allocating
    #[arg(long = "gid-floor", global = true, env = "DSGROUP_GID_FLOOR")]
    pub gid_floor: Option<u32>,

    /// Number of gids tried before giving up
    #[arg(long = "gid-search-limit", global = true, env = "DSGROUP_GID_SEARCH_LIMIT")]
    pub gid_search_limit: Option<u32>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
