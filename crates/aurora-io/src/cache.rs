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

//! A memoizing cache of device resources loaded from disk.

use std::borrow::Cow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use aurora_core::renderer::{
    GraphicsDevice, Sampler, SamplerDescriptor, ShaderModule, ShaderModuleDescriptor,
    ShaderStage, Texture, TextureDescriptor, TextureFormat, TextureUsage,
};

use crate::config::AssetSettings;
use crate::error::AssetError;

/// Owns shaders, textures and samplers created on first use.
///
/// Shaders are keyed by stage and resolved path, textures by path and
/// samplers by descriptor. Nothing is cached when loading fails. Every
/// resource stays alive until [`clear`](Self::clear) or the cache is dropped.
#[derive(Debug, Default)]
pub struct AssetCache {
    settings: AssetSettings,
    shaders: HashMap<(ShaderStage, PathBuf), ShaderModule>,
    textures: HashMap<PathBuf, Texture>,
    samplers: HashMap<SamplerDescriptor, Sampler>,
}

impl AssetCache {
    /// Creates an empty cache.
    pub fn new(settings: AssetSettings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    /// The settings the cache was created with.
    pub fn settings(&self) -> &AssetSettings {
        &self.settings
    }

    /// Returns the shader for `stage` at `path`, compiling it on first use.
    ///
    /// Relative paths are resolved against the configured shader root.
    pub fn shader(
        &mut self,
        device: &dyn GraphicsDevice,
        stage: ShaderStage,
        path: impl AsRef<Path>,
    ) -> Result<&ShaderModule, AssetError> {
        let path = self.resolve_shader_path(path.as_ref());
        match self.shaders.entry((stage, path)) {
            Entry::Occupied(entry) => Ok(&*entry.into_mut()),
            Entry::Vacant(entry) => {
                let module = load_shader(device, stage, &entry.key().1)?;
                Ok(&*entry.insert(module))
            }
        }
    }

    /// Returns the texture decoded from `path`, uploading it on first use.
    pub fn texture(
        &mut self,
        device: &dyn GraphicsDevice,
        path: impl AsRef<Path>,
    ) -> Result<&Texture, AssetError> {
        let mip_levels = self.settings.texture_mip_levels;
        match self.textures.entry(path.as_ref().to_path_buf()) {
            Entry::Occupied(entry) => Ok(&*entry.into_mut()),
            Entry::Vacant(entry) => {
                let texture = load_texture(device, entry.key(), mip_levels)?;
                Ok(&*entry.insert(texture))
            }
        }
    }

    /// Returns the sampler for `descriptor`, creating it on first use.
    pub fn sampler(
        &mut self,
        device: &dyn GraphicsDevice,
        descriptor: &SamplerDescriptor,
    ) -> Result<&Sampler, AssetError> {
        match self.samplers.entry(*descriptor) {
            Entry::Occupied(entry) => Ok(&*entry.into_mut()),
            Entry::Vacant(entry) => {
                let sampler = device.create_sampler(descriptor)?;
                Ok(&*entry.insert(sampler))
            }
        }
    }

    /// The number of cached resources.
    pub fn len(&self) -> usize {
        self.shaders.len() + self.textures.len() + self.samplers.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Releases every cached resource.
    pub fn clear(&mut self) {
        let released = self.len();
        self.shaders.clear();
        self.textures.clear();
        self.samplers.clear();
        log::debug!("AssetCache: released {} resources", released);
    }

    fn resolve_shader_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.settings.shader_root.join(path)
        }
    }
}

fn load_shader(
    device: &dyn GraphicsDevice,
    stage: ShaderStage,
    path: &Path,
) -> Result<ShaderModule, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| {
        log::error!("AssetCache: cannot read shader '{}': {}", path.display(), source);
        AssetError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let source = String::from_utf8(bytes).map_err(|_| AssetError::InvalidShaderSource {
        path: path.to_path_buf(),
    })?;
    let label = path.to_string_lossy();
    let module = device.create_shader_module(&ShaderModuleDescriptor {
        label: Some(&*label),
        source: Cow::Owned(source),
        stage,
    })?;
    log::info!("AssetCache: loaded {:?} shader '{}'", stage, path.display());
    Ok(module)
}

fn load_texture(
    device: &dyn GraphicsDevice,
    path: &Path,
    mip_levels: u32,
) -> Result<Texture, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| {
        log::error!("AssetCache: cannot read texture '{}': {}", path.display(), source);
        AssetError::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let image = image::load_from_memory(&bytes).map_err(|source| {
        log::error!("AssetCache: cannot decode '{}': {}", path.display(), source);
        AssetError::Decode {
            path: path.to_path_buf(),
            source,
        }
    })?;

    // Uploaded as RGBA8 whatever the source layout.
    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    let mut descriptor = TextureDescriptor {
        width,
        height,
        format: TextureFormat::Rgba8,
        usage: TextureUsage::Sampled,
        mip_levels,
    };
    // Zero asks for the whole chain.
    descriptor.mip_levels = match mip_levels {
        0 => descriptor.full_mip_chain(),
        _ => descriptor.level_count(),
    };
    let texture = device.create_texture(&descriptor, Some(rgba.as_raw()))?;
    log::info!(
        "AssetCache: loaded texture '{}' ({}x{}, {} mips)",
        path.display(),
        width,
        height,
        descriptor.mip_levels
    );
    Ok(texture)
}
