//! Binary existence port.

#[cfg(test)]
use mockall::automock;

use std::path::Path;

use super::GroupError;

/// Answers whether the directory tool is installed.
#[cfg_attr(test, automock)]
pub trait BinaryProbePort: Send + Sync {
    /// Whether an executable exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// Fail with `BinaryMissing` unless `probe` finds an executable at `path`.
pub fn require_binary(probe: &dyn BinaryProbePort, path: &Path) -> Result<(), GroupError> {
    if probe.exists(path) {
        Ok(())
    } else {
        Err(GroupError::BinaryMissing(path.to_path_buf()))
    }
}
