//! Filesystem binary probe.

use std::path::Path;

use dsgroup_core::BinaryProbePort;
use tracing::debug;

/// Reports a binary as present when the path is a regular file and, on Unix,
/// has an execute bit set.
#[derive(Debug, Clone, Default)]
pub struct FsBinaryProbe;

impl FsBinaryProbe {
    pub const fn new() -> Self {
        Self
    }
}

impl BinaryProbePort for FsBinaryProbe {
    fn exists(&self, path: &Path) -> bool {
        if !path.is_file() {
            debug!(path = %path.display(), "binary not found");
            return false;
        }

        let executable = is_executable(path);
        if !executable {
            debug!(path = %path.display(), "binary is not executable");
        }
        executable
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|metadata| metadata.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(_path: &Path) -> bool {
    true
}
