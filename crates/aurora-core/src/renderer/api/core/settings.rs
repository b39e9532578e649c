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

//! Settings for creating a graphics device.

use serde::{Deserialize, Serialize};

/// A collection of device-wide settings.
///
/// Every field has a default, so partial configuration files are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceSettings {
    /// Vertical sync for swapchains whose descriptor leaves `vsync` unset.
    pub vsync: bool,
    /// If `true`, geometry is rasterized as wireframe.
    pub debug_wireframe: bool,
    /// If `true`, transient framebuffers are checked for completeness.
    pub validate_framebuffers: bool,
    /// A label used in log messages.
    pub label: String,
}

impl Default for DeviceSettings {
    fn default() -> Self {
        Self {
            vsync: true,
            debug_wireframe: false,
            validate_framebuffers: true,
            label: "Aurora".to_string(),
        }
    }
}
