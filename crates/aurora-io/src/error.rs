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

//! Error types for asset and configuration loading.

use std::path::PathBuf;

use aurora_core::renderer::ResourceError;
use thiserror::Error;

/// An error raised while loading an asset into the cache.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The asset file could not be read.
    #[error("Failed to read asset '{}': {source}", .path.display())]
    Io {
        /// The path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A shader file is not valid UTF-8.
    #[error("Shader '{}' is not valid UTF-8", .path.display())]
    InvalidShaderSource {
        /// The shader path.
        path: PathBuf,
    },
    /// An image file could not be decoded.
    #[error("Failed to decode image '{}': {source}", .path.display())]
    Decode {
        /// The image path.
        path: PathBuf,
        /// The decoder error.
        #[source]
        source: image::ImageError,
    },
    /// The device refused to create the resource.
    #[error("Failed to create GPU resource: {0}")]
    Resource(#[from] ResourceError),
}

/// An error raised while loading an [`EngineConfig`](crate::EngineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config '{}': {source}", .path.display())]
    Io {
        /// The path that was read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration is not valid RON.
    #[error("Invalid config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}
