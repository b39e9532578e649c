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

//! Shared fixtures for the OpenGL device tests.

#![allow(dead_code)]

use std::borrow::Cow;

use aurora_core::renderer::{
    CullMode, GraphicsDevice, GraphicsPipeline, GraphicsPipelineDescriptor,
    PipelineStateDescriptor, ShaderModule, ShaderModuleDescriptor, ShaderStage, TextureDescriptor,
    TextureFormat, TextureUsage, VertexAttribute, VertexLayoutDescriptor,
};
use aurora_infra::graphics::gl::RecordingGl;
use aurora_infra::graphics::GlDevice;

pub const VERTEX_SRC: &str = "#version 330 core
layout(location = 0) in vec3 a_position;
layout(location = 1) in vec2 a_uv;
layout(std140) uniform Camera {
    mat4 view_proj;
};
out vec2 v_uv;
void main() {
    v_uv = a_uv;
    gl_Position = view_proj * vec4(a_position, 1.0);
}
";

pub const FRAGMENT_SRC: &str = "#version 330 core
uniform sampler2D u_albedo;
in vec2 v_uv;
out vec4 o_color;
void main() {
    o_color = texture(u_albedo, v_uv);
}
";

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn device() -> GlDevice<RecordingGl> {
    init_logger();
    GlDevice::new(RecordingGl::new()).expect("the recording context reports OpenGL 3.3")
}

pub fn shader(device: &GlDevice<RecordingGl>, stage: ShaderStage) -> ShaderModule {
    let source = match stage {
        ShaderStage::Vertex => VERTEX_SRC,
        ShaderStage::Fragment => FRAGMENT_SRC,
    };
    device
        .create_shader_module(&ShaderModuleDescriptor {
            label: Some("textured"),
            source: Cow::Borrowed(source),
            stage,
        })
        .expect("fixture shader compiles")
}

pub fn layout() -> VertexLayoutDescriptor {
    VertexLayoutDescriptor {
        stride: 20,
        attributes: vec![
            VertexAttribute {
                location: 0,
                components: 3,
                offset: 0,
            },
            VertexAttribute {
                location: 1,
                components: 2,
                offset: 12,
            },
        ],
    }
}

pub fn pipeline_with_state(
    device: &GlDevice<RecordingGl>,
    state: PipelineStateDescriptor,
) -> GraphicsPipeline {
    let vertex = shader(device, ShaderStage::Vertex);
    let fragment = shader(device, ShaderStage::Fragment);
    device
        .create_graphics_pipeline(&GraphicsPipelineDescriptor {
            label: Some("textured"),
            vertex_shader: &vertex,
            fragment_shader: &fragment,
            vertex_layout: layout(),
            state,
        })
        .expect("fixture pipeline links")
}

pub fn pipeline(device: &GlDevice<RecordingGl>) -> GraphicsPipeline {
    pipeline_with_state(device, PipelineStateDescriptor::default())
}

pub fn state_with_cull(cull_mode: CullMode) -> PipelineStateDescriptor {
    let mut state = PipelineStateDescriptor::default();
    state.raster.cull_mode = cull_mode;
    state
}

pub fn target_descriptor(width: u32, height: u32, format: TextureFormat) -> TextureDescriptor {
    TextureDescriptor {
        width,
        height,
        format,
        usage: if format.is_depth() {
            TextureUsage::DepthStencil
        } else {
            TextureUsage::RenderTarget
        },
        mip_levels: 1,
    }
}
