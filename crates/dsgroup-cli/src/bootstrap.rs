//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Provider settings (JSON file, then flags and `DSGROUP_*` variables)
//! - Shell command runner and binary probe (via dsgroup-runtime)
//! - Event sink forwarding change descriptions to tracing
//!
//! Command handlers receive the composed `CliContext` and build providers
//! from it.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use dsgroup_core::dscl::Dscl;
use dsgroup_core::{
    GidAllocator, GroupError, GroupProvider, GroupSpec, ProviderDeps, ProviderSettings,
    TracingEventSink, require_binary, validate_settings,
};
use dsgroup_runtime::system_deps;

use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Effective provider settings.
    pub settings: ProviderSettings,
}

impl CliConfig {
    /// Resolve settings: defaults, then the config file, then flags and
    /// environment variables.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut settings = match &cli.config {
            Some(path) => load_settings_file(path)?,
            None => ProviderSettings::default(),
        };

        if let Some(tool) = &cli.tool {
            settings.tool.clone_from(tool);
        }
        if let Some(node) = &cli.node {
            settings.node.clone_from(node);
        }
        if let Some(path) = &cli.binary_path {
            settings.binary_path.clone_from(path);
        }
        if let Some(floor) = cli.gid_floor {
            settings.gid_floor = floor;
        }
        if let Some(limit) = cli.gid_search_limit {
            settings.gid_search_limit = limit;
        }

        validate_settings(&settings).context("Invalid provider settings")?;
        Ok(Self { settings })
    }
}

/// Read provider settings from a JSON file. Missing keys keep their defaults.
pub fn load_settings_file(path: &Path) -> Result<ProviderSettings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Injected infrastructure shared by every provider.
    pub deps: ProviderDeps,
    /// Effective provider settings.
    pub settings: ProviderSettings,
}

impl CliContext {
    /// Build a provider converging `spec`.
    pub fn provider(&self, spec: GroupSpec) -> Result<GroupProvider, GroupError> {
        GroupProvider::new(self.deps.clone(), self.settings.clone(), spec)
    }

    /// Gid allocator over the same tool, after checking the binary exists.
    pub fn gid_allocator(&self) -> Result<GidAllocator, GroupError> {
        require_binary(self.deps.probe.as_ref(), &self.settings.binary_path)?;
        let dscl = Dscl::new(self.deps.runner.clone(), &self.settings);
        Ok(GidAllocator::new(dscl, &self.settings))
    }
}

/// Bootstrap the CLI application against the real system.
pub fn bootstrap(config: CliConfig) -> CliContext {
    bootstrap_with(config, system_deps(Arc::new(TracingEventSink)))
}

/// Bootstrap with custom dependencies (for testing).
pub fn bootstrap_with(config: CliConfig, deps: ProviderDeps) -> CliContext {
    CliContext {
        deps,
        settings: config.settings,
    }
}
