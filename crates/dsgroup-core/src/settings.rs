//! Provider settings and validation.
//!
//! Pure configuration types with no infrastructure dependencies. Adapters
//! fill them from flags, environment variables or a JSON file.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Command used to invoke the directory tool.
pub const DEFAULT_TOOL: &str = "dscl";

/// Directory node the tool operates on (`.` is the local default node).
pub const DEFAULT_NODE: &str = ".";

/// Location checked before any command is issued.
pub const DEFAULT_BINARY_PATH: &str = "/usr/bin/dscl";

/// First gid considered when allocating.
pub const DEFAULT_GID_FLOOR: u32 = 200;

/// Number of consecutive gids tried before giving up.
pub const DEFAULT_GID_SEARCH_LIMIT: u32 = 1000;

/// Settings for the group provider.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProviderSettings {
    /// Command used to invoke the directory tool.
    pub tool: String,
    /// Directory node passed as the first argument.
    pub node: String,
    /// Path whose existence is required before any command runs.
    pub binary_path: PathBuf,
    /// First gid considered when allocating.
    pub gid_floor: u32,
    /// How many gids, starting at the floor, to try.
    pub gid_search_limit: u32,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            tool: DEFAULT_TOOL.to_string(),
            node: DEFAULT_NODE.to_string(),
            binary_path: PathBuf::from(DEFAULT_BINARY_PATH),
            gid_floor: DEFAULT_GID_FLOOR,
            gid_search_limit: DEFAULT_GID_SEARCH_LIMIT,
        }
    }
}

/// Settings validation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("Tool command must not be empty")]
    EmptyTool,

    #[error("Directory node must not be empty")]
    EmptyNode,

    #[error("gid search limit must be at least 1")]
    ZeroSearchLimit,

    #[error("gid range starting at {floor} with limit {limit} overflows")]
    RangeOverflow { floor: u32, limit: u32 },
}

/// Validate settings before they reach the provider.
pub fn validate_settings(settings: &ProviderSettings) -> Result<(), SettingsError> {
    if settings.tool.trim().is_empty() {
        return Err(SettingsError::EmptyTool);
    }
    if settings.node.trim().is_empty() {
        return Err(SettingsError::EmptyNode);
    }
    if settings.gid_search_limit == 0 {
        return Err(SettingsError::ZeroSearchLimit);
    }
    if settings
        .gid_floor
        .checked_add(settings.gid_search_limit - 1)
        .is_none()
    {
        return Err(SettingsError::RangeOverflow {
            floor: settings.gid_floor,
            limit: settings.gid_search_limit,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = ProviderSettings::default();
        assert_eq!(settings.tool, "dscl");
        assert_eq!(settings.node, ".");
        assert_eq!(settings.gid_floor, 200);
        assert_eq!(settings.gid_search_limit, 1000);
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: ProviderSettings =
            serde_json::from_str(r#"{"gid_floor": 500}"#).unwrap();
        assert_eq!(settings.gid_floor, 500);
        assert_eq!(settings.binary_path, PathBuf::from("/usr/bin/dscl"));
    }

    #[test]
    fn test_rejects_zero_limit() {
        let settings = ProviderSettings {
            gid_search_limit: 0,
            ..ProviderSettings::default()
        };
        assert_eq!(
            validate_settings(&settings),
            Err(SettingsError::ZeroSearchLimit)
        );
    }

    #[test]
    fn test_rejects_overflowing_range() {
        let settings = ProviderSettings {
            gid_floor: u32::MAX,
            gid_search_limit: 2,
            ..ProviderSettings::default()
        };
        assert!(matches!(
            validate_settings(&settings),
            Err(SettingsError::RangeOverflow { .. })
        ));

        let settings = ProviderSettings {
            gid_floor: u32::MAX,
            gid_search_limit: 1,
            ..ProviderSettings::default()
        };
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_rejects_empty_tool_and_node() {
        let settings = ProviderSettings {
            tool: " ".into(),
            ..ProviderSettings::default()
        };
        assert_eq!(validate_settings(&settings), Err(SettingsError::EmptyTool));

        let settings = ProviderSettings {
            node: String::new(),
            ..ProviderSettings::default()
        };
        assert_eq!(validate_settings(&settings), Err(SettingsError::EmptyNode));
    }
}
