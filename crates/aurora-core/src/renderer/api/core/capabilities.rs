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

//! Capabilities reported by a graphics device.

/// Features of the backend that callers may need to adapt their shaders to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeviceCapabilities {
    /// The backend API version as `(major, minor)`.
    pub api_version: (u32, u32),
    /// Whether shaders may declare `layout(binding = N)` on uniform blocks
    /// and samplers. When `false`, bindings must be routed by name.
    pub supports_extended_shader_layout: bool,
}

impl DeviceCapabilities {
    /// Returns `true` if the API version is at least `major.minor`.
    pub fn is_at_least(&self, major: u32, minor: u32) -> bool {
        self.api_version >= (major, minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_comparison_is_lexicographic() {
        let caps = DeviceCapabilities {
            api_version: (4, 1),
            supports_extended_shader_layout: false,
        };
        assert!(caps.is_at_least(3, 3));
        assert!(caps.is_at_least(4, 1));
        assert!(!caps.is_at_least(4, 2));
    }
}
