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

//! Fixed-function state captured by a graphics pipeline.

use super::enums::*;
use crate::aurora_bitflags;

aurora_bitflags! {
    /// A mask of color channels that are written to a color attachment.
    pub struct ColorWrites: u8 {
        /// Write to the red channel.
        const R = 1 << 0;
        /// Write to the green channel.
        const G = 1 << 1;
        /// Write to the blue channel.
        const B = 1 << 2;
        /// Write to the alpha channel.
        const A = 1 << 3;
        /// Write to all channels.
        const ALL = Self::R.bits() | Self::G.bits() | Self::B.bits() | Self::A.bits();
    }
}

/// Describes face culling and winding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RasterState {
    /// The face culling mode.
    pub cull_mode: CullMode,
    /// The vertex winding order that determines the "front" face of a triangle.
    pub front_face: FrontFace,
}

/// Describes a complete blend equation for either the color or the alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlendComponent {
    /// The blend factor for the source color (from the fragment shader).
    pub src_factor: BlendFactor,
    /// The blend factor for the destination color (already in the framebuffer).
    pub dst_factor: BlendFactor,
    /// The operation to combine the source and destination factors.
    pub operation: BlendOperation,
}

/// Describes blending for the color attachments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlendState {
    /// Whether blending is enabled.
    pub enabled: bool,
    /// Blend equation for the RGB channels.
    pub color: BlendComponent,
    /// Blend equation for the alpha channel.
    pub alpha: BlendComponent,
    /// Channels written to the color attachments.
    pub write_mask: ColorWrites,
}

impl Default for BlendState {
    fn default() -> Self {
        Self {
            enabled: false,
            color: BlendComponent {
                src_factor: BlendFactor::SrcAlpha,
                dst_factor: BlendFactor::OneMinusSrcAlpha,
                operation: BlendOperation::Add,
            },
            alpha: BlendComponent {
                src_factor: BlendFactor::One,
                dst_factor: BlendFactor::OneMinusSrcAlpha,
                operation: BlendOperation::Add,
            },
            write_mask: ColorWrites::ALL,
        }
    }
}

/// Describes the depth test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepthStencilState {
    /// Whether the depth test is enabled.
    pub test_enabled: bool,
    /// Whether depth values are written.
    pub write_enabled: bool,
    /// The comparison function used for the depth test.
    pub compare: CompareFunction,
}

impl Default for DepthStencilState {
    fn default() -> Self {
        Self {
            test_enabled: false,
            write_enabled: true,
            compare: CompareFunction::Less,
        }
    }
}

/// The complete fixed-function state of a pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PipelineStateDescriptor {
    /// Rasterizer state.
    pub raster: RasterState,
    /// Blend state.
    pub blend: BlendState,
    /// Depth state.
    pub depth_stencil: DepthStencilState,
}

/// A single 32-bit float vector attribute within a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexAttribute {
    /// The input location in the vertex shader (`layout(location = N)`).
    pub location: u32,
    /// Number of float components, 1 to 4.
    pub components: u32,
    /// The byte offset of this attribute from the start of the vertex.
    pub offset: u32,
}

/// Describes the memory layout of the vertex buffer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct VertexLayoutDescriptor {
    /// The byte distance between consecutive vertices.
    pub stride: u32,
    /// Attributes contained within each vertex.
    pub attributes: Vec<VertexAttribute>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipeline_state_defaults() {
        let state = PipelineStateDescriptor::default();
        assert_eq!(state.raster.cull_mode, CullMode::Back);
        assert_eq!(state.raster.front_face, FrontFace::Ccw);
        assert!(!state.blend.enabled);
        assert_eq!(state.blend.color.src_factor, BlendFactor::SrcAlpha);
        assert_eq!(state.blend.alpha.src_factor, BlendFactor::One);
        assert_eq!(state.blend.write_mask, ColorWrites::ALL);
        assert!(!state.depth_stencil.test_enabled);
        assert!(state.depth_stencil.write_enabled);
        assert_eq!(state.depth_stencil.compare, CompareFunction::Less);
    }

    #[test]
    fn color_writes_all_covers_every_channel() {
        assert_eq!(ColorWrites::ALL.bits(), 0b1111);
        assert!(ColorWrites::ALL.contains(ColorWrites::R | ColorWrites::A));
    }
}
