//! Application configuration.
//!
//! The configuration is loaded from a JSON file, by default
//! `$XDG_CONFIG_HOME/magsnap/config.json`.  The top-level schema is split
//! into sections so the file can be extended without breaking older files.
//!
//! # Example
//!
//! ```json
//! {
//!   "snap": { "snap_distance": 20 },
//!   "desktop": {
//!     "screens": [ { "name": "DP-1", "bounds": "0 0 1920 1080", "working_area": "0 0 1920 1040" } ],
//!     "windows": [ { "id": 2, "frame": "300 100 640 480" } ]
//!   }
//! }
//! ```

use crate::desktop::layout::DesktopConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration.
///
/// Every field is optional: a minimal `{}` file is valid and all sections
/// fall back to their compiled-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Snapping behaviour.
    #[serde(default)]
    pub snap: SnapConfig,

    /// Screen and window layout served to the daemon.
    #[serde(default)]
    pub desktop: DesktopConfig,
}

/// Snapping behaviour.
///
/// Distances are in the same units as window frames.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// How close an edge must come to a screen or window edge before it is
    /// pulled onto it.  `0` only clamps windows that leave the working area.
    pub snap_distance: i32,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self { snap_distance: 20 }
    }
}

impl Config {
    /// Load configuration from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError(format!("failed to read {}: {}", path.display(), e)))?;
        let config: Self = serde_json::from_str(&contents)
            .map_err(|e| ConfigError(format!("failed to parse {}: {}", path.display(), e)))?;
        Ok(config)
    }
}

/// Error from loading or parsing a configuration file.
#[derive(Debug, thiserror::Error)]
#[error("config error: {0}")]
pub struct ConfigError(String);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Frame, WindowId};

    #[test]
    fn deserialize_full_config() {
        let json = r#"{
            "snap": { "snap_distance": 12 },
            "desktop": {
                "screens": [ { "name": "DP-1", "bounds": "0 0 2560 1440" } ],
                "windows": [ { "id": 3, "frame": "10 20 300 200" } ]
            }
        }"#;
        let cfg: Config = serde_json::from_str(json).unwrap();
        assert_eq!(cfg.snap.snap_distance, 12);
        assert_eq!(cfg.desktop.screens[0].bounds, Frame::new(0, 0, 2560, 1440));
        assert_eq!(cfg.desktop.windows[0].id, WindowId(3));
    }

    #[test]
    fn deserialize_empty_uses_defaults() {
        let cfg: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg.snap.snap_distance, SnapConfig::default().snap_distance);
        assert_eq!(cfg.snap.snap_distance, 20);
        assert_eq!(cfg.desktop.screens.len(), 1);
    }

    #[test]
    fn unknown_top_level_keys_ignored() {
        let json = r#"{ "snap": {}, "future_section": { "key": 42 } }"#;
        // Should not fail, unknown keys are silently ignored.
        let _cfg: Config = serde_json::from_str(json).unwrap();
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join(format!("magsnap-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "snap": { "snap_distance": 8 } }"#).unwrap();
        let cfg = Config::load(&path).unwrap();
        assert_eq!(cfg.snap.snap_distance, 8);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn load_missing_file_fails() {
        let path = std::env::temp_dir().join("magsnap-definitely-missing.json");
        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().starts_with("config error: failed to read"));
    }
}
