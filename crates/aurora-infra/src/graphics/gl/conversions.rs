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

//! Conversions from descriptor enums to OpenGL constants.

use aurora_core::renderer::{
    AddressMode, BlendFactor, BlendOperation, BufferUsage, CompareFunction, FilterMode, FrontFace,
    IndexFormat, MipmapMode, PolygonMode, SamplerDescriptor, ShaderStage, TextureFormat,
};

/// A local extension trait to convert engine types into OpenGL enums.
/// This avoids Rust's orphan rules while keeping an idiomatic `.into_gl()` syntax.
pub trait IntoGl<T> {
    /// Consumes self and converts it into an OpenGL-compatible value.
    fn into_gl(self) -> T;
}

/// The three enums `glTexImage2D` needs for one texture format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlTextureFormat {
    /// The sized internal format.
    pub internal: u32,
    /// The pixel transfer format.
    pub format: u32,
    /// The pixel transfer component type.
    pub ty: u32,
}

impl IntoGl<GlTextureFormat> for TextureFormat {
    fn into_gl(self) -> GlTextureFormat {
        let (internal, format, ty) = match self {
            TextureFormat::Rgba8 => (glow::RGBA8, glow::RGBA, glow::UNSIGNED_BYTE),
            TextureFormat::Rgb8 => (glow::RGB8, glow::RGB, glow::UNSIGNED_BYTE),
            TextureFormat::R8 => (glow::R8, glow::RED, glow::UNSIGNED_BYTE),
            TextureFormat::Rgba16F => (glow::RGBA16F, glow::RGBA, glow::HALF_FLOAT),
            TextureFormat::R16F => (glow::R16F, glow::RED, glow::HALF_FLOAT),
            TextureFormat::Depth24Stencil8 => (
                glow::DEPTH24_STENCIL8,
                glow::DEPTH_STENCIL,
                glow::UNSIGNED_INT_24_8,
            ),
            TextureFormat::Depth32F => (glow::DEPTH_COMPONENT32F, glow::DEPTH_COMPONENT, glow::FLOAT),
        };
        GlTextureFormat {
            internal,
            format,
            ty,
        }
    }
}

impl IntoGl<u32> for ShaderStage {
    fn into_gl(self) -> u32 {
        match self {
            ShaderStage::Vertex => glow::VERTEX_SHADER,
            ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        }
    }
}

/// Buffer usages map to a bind target. Uniform buffers are uploaded through
/// `GL_UNIFORM_BUFFER`, index buffers through `GL_ELEMENT_ARRAY_BUFFER`.
impl IntoGl<u32> for BufferUsage {
    fn into_gl(self) -> u32 {
        match self {
            BufferUsage::Vertex => glow::ARRAY_BUFFER,
            BufferUsage::Index => glow::ELEMENT_ARRAY_BUFFER,
            BufferUsage::Uniform => glow::UNIFORM_BUFFER,
        }
    }
}

impl IntoGl<u32> for IndexFormat {
    fn into_gl(self) -> u32 {
        match self {
            IndexFormat::Uint16 => glow::UNSIGNED_SHORT,
            IndexFormat::Uint32 => glow::UNSIGNED_INT,
        }
    }
}

impl IntoGl<u32> for FrontFace {
    fn into_gl(self) -> u32 {
        match self {
            FrontFace::Ccw => glow::CCW,
            FrontFace::Cw => glow::CW,
        }
    }
}

impl IntoGl<u32> for PolygonMode {
    fn into_gl(self) -> u32 {
        match self {
            PolygonMode::Fill => glow::FILL,
            PolygonMode::Line => glow::LINE,
        }
    }
}

impl IntoGl<u32> for CompareFunction {
    fn into_gl(self) -> u32 {
        match self {
            CompareFunction::Never => glow::NEVER,
            CompareFunction::Less => glow::LESS,
            CompareFunction::Equal => glow::EQUAL,
            CompareFunction::LessEqual => glow::LEQUAL,
            CompareFunction::Greater => glow::GREATER,
            CompareFunction::NotEqual => glow::NOTEQUAL,
            CompareFunction::GreaterEqual => glow::GEQUAL,
            CompareFunction::Always => glow::ALWAYS,
        }
    }
}

impl IntoGl<u32> for BlendFactor {
    fn into_gl(self) -> u32 {
        match self {
            BlendFactor::Zero => glow::ZERO,
            BlendFactor::One => glow::ONE,
            BlendFactor::SrcColor => glow::SRC_COLOR,
            BlendFactor::OneMinusSrcColor => glow::ONE_MINUS_SRC_COLOR,
            BlendFactor::DstColor => glow::DST_COLOR,
            BlendFactor::OneMinusDstColor => glow::ONE_MINUS_DST_COLOR,
            BlendFactor::SrcAlpha => glow::SRC_ALPHA,
            BlendFactor::OneMinusSrcAlpha => glow::ONE_MINUS_SRC_ALPHA,
            BlendFactor::DstAlpha => glow::DST_ALPHA,
            BlendFactor::OneMinusDstAlpha => glow::ONE_MINUS_DST_ALPHA,
        }
    }
}

impl IntoGl<u32> for BlendOperation {
    fn into_gl(self) -> u32 {
        match self {
            BlendOperation::Add => glow::FUNC_ADD,
            BlendOperation::Subtract => glow::FUNC_SUBTRACT,
            BlendOperation::ReverseSubtract => glow::FUNC_REVERSE_SUBTRACT,
            BlendOperation::Min => glow::MIN,
            BlendOperation::Max => glow::MAX,
        }
    }
}

impl IntoGl<u32> for AddressMode {
    fn into_gl(self) -> u32 {
        match self {
            AddressMode::Repeat => glow::REPEAT,
            AddressMode::ClampToEdge => glow::CLAMP_TO_EDGE,
        }
    }
}

impl IntoGl<u32> for FilterMode {
    fn into_gl(self) -> u32 {
        match self {
            FilterMode::Nearest => glow::NEAREST,
            FilterMode::Linear => glow::LINEAR,
        }
    }
}

/// The `GL_TEXTURE_MIN_FILTER` value combining the minification filter with
/// the mip selection mode.
pub fn min_filter(desc: &SamplerDescriptor) -> u32 {
    match (desc.min_filter, desc.mipmap_mode) {
        (filter, MipmapMode::None) => filter.into_gl(),
        (FilterMode::Nearest, MipmapMode::Nearest) => glow::NEAREST_MIPMAP_NEAREST,
        (FilterMode::Nearest, MipmapMode::Linear) => glow::NEAREST_MIPMAP_LINEAR,
        (FilterMode::Linear, MipmapMode::Nearest) => glow::LINEAR_MIPMAP_NEAREST,
        (FilterMode::Linear, MipmapMode::Linear) => glow::LINEAR_MIPMAP_LINEAR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_stencil_format_uses_packed_type() {
        let gl: GlTextureFormat = TextureFormat::Depth24Stencil8.into_gl();
        assert_eq!(gl.internal, glow::DEPTH24_STENCIL8);
        assert_eq!(gl.format, glow::DEPTH_STENCIL);
        assert_eq!(gl.ty, glow::UNSIGNED_INT_24_8);
    }

    #[test]
    fn half_float_formats() {
        let gl: GlTextureFormat = TextureFormat::R16F.into_gl();
        assert_eq!((gl.internal, gl.format, gl.ty), (glow::R16F, glow::RED, glow::HALF_FLOAT));
    }

    #[test]
    fn min_filter_combines_mip_mode() {
        let mut desc = SamplerDescriptor::default();
        assert_eq!(min_filter(&desc), glow::LINEAR);
        desc.mipmap_mode = MipmapMode::Linear;
        assert_eq!(min_filter(&desc), glow::LINEAR_MIPMAP_LINEAR);
        desc.min_filter = FilterMode::Nearest;
        desc.mipmap_mode = MipmapMode::Nearest;
        assert_eq!(min_filter(&desc), glow::NEAREST_MIPMAP_NEAREST);
    }
}
