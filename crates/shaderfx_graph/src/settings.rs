// SPDX-License-Identifier: MIT OR Apache-2.0
//! Tunable constants for discovery, layout and the command port.
//!
//! Stored as RON:
//!
//! ```ron
//! NetworkSettings(
//!     version: 1,
//!     discovery: DiscoverySettings(first_id: 1, id_ceiling: 8000),
//!     layout: LayoutSettings(horizontal_pitch: -150.0, vertical_pitch: 100.0),
//!     command_port: CommandPortSettings(host: "127.0.0.1", port: 7001),
//! )
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Current settings format version
pub const SETTINGS_FORMAT_VERSION: u32 = 1;

/// Bounds of the discovery probe scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscoverySettings {
    /// First identity probed
    pub first_id: u32,
    /// Exclusive upper bound on probed identities
    pub id_ceiling: u32,
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            first_id: 1,
            id_ceiling: 8000,
        }
    }
}

/// Layout spacing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutSettings {
    /// Horizontal step per depth level; negative places inputs to the left
    pub horizontal_pitch: f64,
    /// Vertical step between nodes at the same depth
    pub vertical_pitch: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            horizontal_pitch: -150.0,
            vertical_pitch: 100.0,
        }
    }
}

/// Address of the host's command port
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandPortSettings {
    /// Host name or address
    pub host: String,
    /// TCP port
    pub port: u16,
}

impl Default for CommandPortSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 7001,
        }
    }
}

impl CommandPortSettings {
    /// `host:port`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// All network settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSettings {
    /// Settings format version
    pub version: u32,
    /// Discovery bounds
    #[serde(default)]
    pub discovery: DiscoverySettings,
    /// Layout spacing
    #[serde(default)]
    pub layout: LayoutSettings,
    /// Command port address
    #[serde(default)]
    pub command_port: CommandPortSettings,
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            version: SETTINGS_FORMAT_VERSION,
            discovery: DiscoverySettings::default(),
            layout: LayoutSettings::default(),
            command_port: CommandPortSettings::default(),
        }
    }
}

impl NetworkSettings {
    /// Load settings from a file
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: NetworkSettings = ron::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;

        if settings.version > SETTINGS_FORMAT_VERSION {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!(
                    "Settings version {} is newer than supported version {}",
                    settings.version, SETTINGS_FORMAT_VERSION
                ),
            ));
        }

        Ok(settings)
    }

    /// Save settings to a file
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let config = ron::ser::PrettyConfig::default()
            .struct_names(true)
            .enumerate_arrays(false);

        let content = ron::ser::to_string_pretty(self, config)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;

        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = NetworkSettings::default();
        assert_eq!(settings.version, SETTINGS_FORMAT_VERSION);
        assert_eq!(settings.discovery.id_ceiling, 8000);
        assert_eq!(settings.layout.horizontal_pitch, -150.0);
        assert_eq!(settings.command_port.address(), "127.0.0.1:7001");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shaderfx.ron");
        let mut settings = NetworkSettings::default();
        settings.discovery.id_ceiling = 200;
        settings.save(&path).unwrap();
        assert_eq!(NetworkSettings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let settings: NetworkSettings = ron::from_str("(version: 1)").unwrap();
        assert_eq!(settings.layout, LayoutSettings::default());
    }

    #[test]
    fn test_newer_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shaderfx.ron");
        std::fs::write(&path, "(version: 99)").unwrap();
        let err = NetworkSettings::load(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
