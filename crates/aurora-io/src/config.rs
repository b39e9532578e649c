// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Engine configuration loaded from RON.

use std::path::{Path, PathBuf};

use aurora_core::renderer::DeviceSettings;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Settings of the [`AssetCache`](crate::AssetCache).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    /// Mip levels allocated for loaded textures. `0` requests the full chain.
    pub texture_mip_levels: u32,
    /// Directory relative shader paths are resolved against.
    pub shader_root: PathBuf,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            texture_mip_levels: 0,
            shader_root: PathBuf::from("shaders"),
        }
    }
}

/// The top-level configuration file.
///
/// ```ron
/// (
///     device: (vsync: false, label: "Editor"),
///     assets: (texture_mip_levels: 1),
/// )
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Settings passed to the graphics device.
    pub device: DeviceSettings,
    /// Settings of the asset cache.
    pub assets: AssetSettings,
}

impl EngineConfig {
    /// Parses a configuration from RON text. Missing fields take their defaults.
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(source)?)
    }

    /// Reads and parses a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron_str(&source)?;
        log::info!("EngineConfig: loaded '{}'", path.display());
        Ok(config)
    }

    /// Serializes the configuration as pretty RON.
    pub fn to_ron_string(&self) -> Result<String, ron::Error> {
        let pretty = ron::ser::PrettyConfig::default().indentor("  ".to_string());
        ron::ser::to_string_pretty(self, pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_the_default() {
        let config = EngineConfig::from_ron_str("()").unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn nested_fields_override_defaults() {
        let config = EngineConfig::from_ron_str(
            "(device: (vsync: false, label: \"Editor\"), assets: (texture_mip_levels: 1))",
        )
        .unwrap();
        assert!(!config.device.vsync);
        assert_eq!(config.device.label, "Editor");
        assert!(config.device.validate_framebuffers);
        assert_eq!(config.assets.texture_mip_levels, 1);
        assert_eq!(config.assets.shader_root, PathBuf::from("shaders"));
    }

    #[test]
    fn invalid_ron_is_a_parse_error() {
        let err = EngineConfig::from_ron_str("(device: (vsync: maybe))").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn pretty_output_parses_back() {
        let config = EngineConfig {
            assets: AssetSettings {
                texture_mip_levels: 4,
                shader_root: PathBuf::from("assets/glsl"),
            },
            ..EngineConfig::default()
        };
        let text = config.to_ron_string().unwrap();
        assert_eq!(EngineConfig::from_ron_str(&text).unwrap(), config);
    }
}
