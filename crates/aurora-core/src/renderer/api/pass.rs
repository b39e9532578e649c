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

//! Render pass configuration: clear values and optional off-screen attachments.

use super::texture::Texture;
use crate::math::{Extent2D, LinearRgba};

/// What is cleared when a render pass begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClearConfig {
    /// The color the color attachments are cleared to.
    pub color: LinearRgba,
    /// Whether color attachments are cleared.
    pub color_enabled: bool,
    /// The value the depth attachment is cleared to.
    pub depth: f32,
    /// Whether the depth attachment is cleared.
    pub depth_enabled: bool,
}

impl Default for ClearConfig {
    fn default() -> Self {
        Self {
            color: LinearRgba::new(0.1, 0.1, 0.1, 1.0),
            color_enabled: true,
            depth: 1.0,
            depth_enabled: true,
        }
    }
}

/// A single mip level of a texture used as a render target.
#[derive(Debug, Clone, Copy)]
pub struct Attachment<'a> {
    /// The texture rendered into.
    pub texture: &'a Texture,
    /// The mip level rendered into.
    pub mip_level: u32,
}

impl<'a> Attachment<'a> {
    /// Attaches mip level 0 of `texture`.
    pub fn new(texture: &'a Texture) -> Self {
        Self {
            texture,
            mip_level: 0,
        }
    }

    /// The size of the attached mip level.
    pub fn extent(&self) -> Extent2D {
        self.texture.mip_extent(self.mip_level)
    }
}

/// A descriptor used to create a [`RenderPass`].
#[derive(Debug, Clone, Default)]
pub struct RenderPassDescriptor<'a> {
    /// Clear behavior at the start of the pass.
    pub clear: ClearConfig,
    /// Color attachments, bound to consecutive color attachment points.
    pub color_attachments: Vec<Attachment<'a>>,
    /// The optional depth attachment.
    pub depth_attachment: Option<Attachment<'a>>,
}

/// A reusable render pass.
///
/// A pass without attachments renders to the default framebuffer. A pass
/// with attachments makes the device allocate a framebuffer that lives only
/// between `begin_render_pass` and `end_render_pass`.
#[derive(Debug, Clone)]
pub struct RenderPass<'a> {
    desc: RenderPassDescriptor<'a>,
}

impl<'a> RenderPass<'a> {
    /// Wraps a descriptor.
    pub fn new(desc: RenderPassDescriptor<'a>) -> Self {
        Self { desc }
    }

    /// The clear configuration.
    pub fn clear(&self) -> &ClearConfig {
        &self.desc.clear
    }

    /// The color attachments.
    pub fn color_attachments(&self) -> &[Attachment<'a>] {
        &self.desc.color_attachments
    }

    /// The depth attachment, if any.
    pub fn depth_attachment(&self) -> Option<&Attachment<'a>> {
        self.desc.depth_attachment.as_ref()
    }

    /// Returns `true` if the pass renders off-screen.
    pub fn has_attachments(&self) -> bool {
        !self.desc.color_attachments.is_empty() || self.desc.depth_attachment.is_some()
    }

    /// The size implied by the attachments: the first color attachment's
    /// mip level, else the depth attachment's.
    pub fn attachment_extent(&self) -> Option<Extent2D> {
        self.desc
            .color_attachments
            .first()
            .or(self.desc.depth_attachment.as_ref())
            .map(Attachment::extent)
    }
}
