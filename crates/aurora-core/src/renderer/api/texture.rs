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

//! Defines data structures related to textures and samplers.

use std::rc::Weak;

use super::resource::{BackendResource, RawId, ResourceGuard, ResourceReleaser};
use crate::math::Extent2D;

/// The pixel format of a texture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureFormat {
    /// Four 8-bit unsigned normalized channels.
    Rgba8,
    /// Three 8-bit unsigned normalized channels.
    Rgb8,
    /// One 8-bit unsigned normalized channel.
    R8,
    /// Four 16-bit float channels.
    Rgba16F,
    /// One 16-bit float channel.
    R16F,
    /// 24-bit depth with an 8-bit stencil.
    Depth24Stencil8,
    /// 32-bit float depth.
    Depth32F,
}

impl TextureFormat {
    /// The size of one tightly packed pixel in bytes.
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            TextureFormat::Rgba8 => 4,
            TextureFormat::Rgb8 => 3,
            TextureFormat::R8 => 1,
            TextureFormat::Rgba16F => 8,
            TextureFormat::R16F => 2,
            TextureFormat::Depth24Stencil8 => 4,
            TextureFormat::Depth32F => 4,
        }
    }

    /// Returns `true` for depth and depth-stencil formats.
    pub const fn is_depth(self) -> bool {
        matches!(
            self,
            TextureFormat::Depth24Stencil8 | TextureFormat::Depth32F
        )
    }

    /// Returns `true` if the format carries a stencil component.
    pub const fn has_stencil(self) -> bool {
        matches!(self, TextureFormat::Depth24Stencil8)
    }
}

/// The role a texture is created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureUsage {
    /// Read by shaders through a sampler.
    #[default]
    Sampled,
    /// Used as a colour attachment of a render pass.
    RenderTarget,
    /// Used as the depth attachment of a render pass.
    DepthStencil,
    /// Read and written by shaders.
    Storage,
}

/// A descriptor used to create a [`Texture`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureDescriptor {
    /// Width of mip level 0 in pixels.
    pub width: u32,
    /// Height of mip level 0 in pixels.
    pub height: u32,
    /// The pixel format.
    pub format: TextureFormat,
    /// The intended usage.
    pub usage: TextureUsage,
    /// Number of mip levels to allocate. Values below 1 are treated as 1,
    /// values past the full chain are clamped to it.
    pub mip_levels: u32,
}

impl TextureDescriptor {
    /// The size of mip level 0.
    pub fn extent(&self) -> Extent2D {
        Extent2D::new(self.width, self.height)
    }

    /// The number of bytes a tightly packed level-0 image occupies.
    pub fn level0_byte_size(&self) -> usize {
        self.width as usize * self.height as usize * self.format.bytes_per_pixel()
    }

    /// The number of levels down to and including 1x1.
    pub fn full_mip_chain(&self) -> u32 {
        32 - self.width.max(self.height).max(1).leading_zeros()
    }

    /// The number of levels a backend allocates for this descriptor.
    pub fn level_count(&self) -> u32 {
        self.mip_levels.clamp(1, self.full_mip_chain())
    }
}

impl Default for TextureDescriptor {
    fn default() -> Self {
        Self {
            width: 1,
            height: 1,
            format: TextureFormat::Rgba8,
            usage: TextureUsage::Sampled,
            mip_levels: 1,
        }
    }
}

/// An owned GPU texture.
#[derive(Debug)]
pub struct Texture {
    raw: RawId,
    desc: TextureDescriptor,
    _guard: ResourceGuard,
}

impl Texture {
    /// Wraps a backend texture object that `owner` will release.
    pub fn new(raw: RawId, desc: TextureDescriptor, owner: Weak<dyn ResourceReleaser>) -> Self {
        Self {
            raw,
            desc,
            _guard: ResourceGuard::new(BackendResource::Texture(raw), owner),
        }
    }

    /// Creates a texture handle with no backend object behind it.
    pub fn detached(desc: TextureDescriptor) -> Self {
        Self {
            raw: 0,
            desc,
            _guard: ResourceGuard::detached(BackendResource::Texture(0)),
        }
    }

    /// The backend object name.
    pub fn raw(&self) -> RawId {
        self.raw
    }

    /// The descriptor the texture was created from.
    pub fn descriptor(&self) -> &TextureDescriptor {
        &self.desc
    }

    /// The pixel format.
    pub fn format(&self) -> TextureFormat {
        self.desc.format
    }

    /// The size of mip level 0.
    pub fn extent(&self) -> Extent2D {
        self.desc.extent()
    }

    /// The size of the given mip level.
    pub fn mip_extent(&self, level: u32) -> Extent2D {
        self.desc.extent().mip_level(level)
    }
}

/// Texel filtering for minification and magnification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    /// Nearest texel.
    Nearest,
    /// Bilinear interpolation.
    #[default]
    Linear,
}

/// How texture coordinates outside `[0, 1]` are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressMode {
    /// The texture repeats.
    #[default]
    Repeat,
    /// Coordinates are clamped to the edge texels.
    ClampToEdge,
}

/// How mip levels are selected during minification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MipmapMode {
    /// Mipmapping is disabled; only level 0 is sampled.
    #[default]
    None,
    /// The nearest mip level is sampled.
    Nearest,
    /// Two mip levels are blended.
    Linear,
}

/// A descriptor used to create a [`Sampler`]. Hashable so it can key a cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SamplerDescriptor {
    /// Filter used when the texture is minified.
    pub min_filter: FilterMode,
    /// Filter used when the texture is magnified.
    pub mag_filter: FilterMode,
    /// Address mode along U.
    pub address_u: AddressMode,
    /// Address mode along V.
    pub address_v: AddressMode,
    /// Mip selection mode.
    pub mipmap_mode: MipmapMode,
}

/// An owned sampler object.
#[derive(Debug)]
pub struct Sampler {
    raw: RawId,
    desc: SamplerDescriptor,
    _guard: ResourceGuard,
}

impl Sampler {
    /// Wraps a backend sampler object that `owner` will release.
    pub fn new(raw: RawId, desc: SamplerDescriptor, owner: Weak<dyn ResourceReleaser>) -> Self {
        Self {
            raw,
            desc,
            _guard: ResourceGuard::new(BackendResource::Sampler(raw), owner),
        }
    }

    /// Creates a sampler handle with no backend object behind it.
    pub fn detached(desc: SamplerDescriptor) -> Self {
        Self {
            raw: 0,
            desc,
            _guard: ResourceGuard::detached(BackendResource::Sampler(0)),
        }
    }

    /// The backend object name.
    pub fn raw(&self) -> RawId {
        self.raw
    }

    /// The descriptor the sampler was created from.
    pub fn descriptor(&self) -> &SamplerDescriptor {
        &self.desc
    }
}
