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

// Aurora Sandbox
// Headless frame loop over the recording OpenGL backend.

use std::borrow::Cow;
use std::mem;

use anyhow::{Context, Result};
use aurora_core::math::LinearRgba;
use aurora_core::renderer::{
    Attachment, BindingTarget, BufferUsage, ClearConfig, CullMode, DescriptorSetDescriptor,
    GraphicsDevice, GraphicsPipelineDescriptor, IndexFormat, PipelineStateDescriptor,
    RenderPassDescriptor, SampledTextureBinding, SamplerDescriptor, ShaderModuleDescriptor,
    ShaderStage, SwapchainDescriptor, TextureDescriptor, TextureFormat, TextureUsage,
    UniformBufferBinding, VertexAttribute, VertexLayoutDescriptor,
};
use aurora_infra::graphics::gl::RecordingGl;
use aurora_infra::graphics::GlDevice;
use aurora_io::{AssetCache, EngineConfig};

const FRAME_COUNT: u64 = 3;
const WIDTH: u32 = 1280;
const HEIGHT: u32 = 720;

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct Vertex {
    position: [f32; 3],
    uv: [f32; 2],
}

impl Vertex {
    fn layout() -> VertexLayoutDescriptor {
        VertexLayoutDescriptor {
            stride: mem::size_of::<Vertex>() as u32,
            attributes: vec![
                // location 0: position
                VertexAttribute {
                    location: 0,
                    components: 3,
                    offset: 0,
                },
                // location 1: uv
                VertexAttribute {
                    location: 1,
                    components: 2,
                    offset: mem::size_of::<[f32; 3]>() as u32,
                },
            ],
        }
    }
}

const VERTICES: &[Vertex] = &[
    Vertex {
        position: [0.0, 0.5, 0.0],
        uv: [0.5, 0.0],
    },
    Vertex {
        position: [-0.5, -0.5, 0.0],
        uv: [0.0, 1.0],
    },
    Vertex {
        position: [0.5, -0.5, 0.0],
        uv: [1.0, 1.0],
    },
];

const INDICES: &[u16] = &[0, 1, 2];

const SCENE_VERT: &str = "#version 330 core
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

const SCENE_FRAG: &str = "#version 330 core
in vec2 v_uv;
out vec4 o_color;
void main() {
    o_color = vec4(v_uv, 0.5, 1.0);
}
";

const BLIT_FRAG: &str = "#version 330 core
uniform sampler2D u_scene;
in vec2 v_uv;
out vec4 o_color;
void main() {
    o_color = texture(u_scene, v_uv);
}
";

/// A column-major matrix rotating around Z by `angle` radians.
fn rotation_z(angle: f32) -> [f32; 16] {
    let (s, c) = angle.sin_cos();
    [
        c, s, 0.0, 0.0, //
        -s, c, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ]
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => EngineConfig::load(&path).with_context(|| format!("loading {path}"))?,
        None => EngineConfig::default(),
    };

    let device = GlDevice::with_settings(RecordingGl::new(), config.device.clone())
        .context("creating the graphics device")?;
    let mut assets = AssetCache::new(config.assets.clone());
    let swapchain = device.create_swapchain(SwapchainDescriptor {
        surface: None,
        width: WIDTH,
        height: HEIGHT,
        vsync: None,
    })?;
    log::info!("Sandbox: running on {}", device.name());

    // --- Resources ---
    let compile = |label: &'static str, stage, source: &'static str| {
        device
            .create_shader_module(&ShaderModuleDescriptor {
                label: Some(label),
                source: Cow::Borrowed(source),
                stage,
            })
            .with_context(|| format!("compiling {label}"))
    };
    let scene_vert = compile("scene.vert", ShaderStage::Vertex, SCENE_VERT)?;
    let scene_frag = compile("scene.frag", ShaderStage::Fragment, SCENE_FRAG)?;
    let blit_frag = compile("blit.frag", ShaderStage::Fragment, BLIT_FRAG)?;

    let mut scene_state = PipelineStateDescriptor::default();
    scene_state.depth_stencil.test_enabled = true;
    let scene_pipeline = device.create_graphics_pipeline(&GraphicsPipelineDescriptor {
        label: Some("scene"),
        vertex_shader: &scene_vert,
        fragment_shader: &scene_frag,
        vertex_layout: Vertex::layout(),
        state: scene_state,
    })?;

    let mut blit_state = PipelineStateDescriptor::default();
    blit_state.raster.cull_mode = CullMode::None;
    let blit_pipeline = device.create_graphics_pipeline(&GraphicsPipelineDescriptor {
        label: Some("blit"),
        vertex_shader: &scene_vert,
        fragment_shader: &blit_frag,
        vertex_layout: Vertex::layout(),
        state: blit_state,
    })?;

    let vertex_buffer = device.create_buffer(
        Some(bytemuck::cast_slice(VERTICES)),
        mem::size_of_val(VERTICES),
        BufferUsage::Vertex,
    )?;
    let index_buffer = device.create_buffer(
        Some(bytemuck::cast_slice(INDICES)),
        mem::size_of_val(INDICES),
        BufferUsage::Index,
    )?;
    let camera_buffer =
        device.create_buffer(None, mem::size_of::<[f32; 16]>(), BufferUsage::Uniform)?;

    let scene_color = device.create_texture(
        &TextureDescriptor {
            width: WIDTH / 2,
            height: HEIGHT / 2,
            format: TextureFormat::Rgba8,
            usage: TextureUsage::RenderTarget,
            mip_levels: 1,
        },
        None,
    )?;
    let scene_depth = device.create_texture(
        &TextureDescriptor {
            width: WIDTH / 2,
            height: HEIGHT / 2,
            format: TextureFormat::Depth24Stencil8,
            usage: TextureUsage::DepthStencil,
            mip_levels: 1,
        },
        None,
    )?;
    let sampler = assets.sampler(&device, &SamplerDescriptor::default())?;

    // --- Passes and bindings ---
    let offscreen_pass = device.create_render_pass(RenderPassDescriptor {
        clear: ClearConfig {
            color: LinearRgba::new(0.0, 0.0, 0.0, 1.0),
            ..ClearConfig::default()
        },
        color_attachments: vec![Attachment::new(&scene_color)],
        depth_attachment: Some(Attachment::new(&scene_depth)),
    });
    let present_pass = device.create_render_pass(RenderPassDescriptor {
        clear: ClearConfig {
            depth_enabled: false,
            ..ClearConfig::default()
        },
        ..Default::default()
    });
    let camera_set = device.create_descriptor_set(DescriptorSetDescriptor {
        uniform_buffers: vec![UniformBufferBinding {
            target: BindingTarget::named("Camera", 0),
            buffer: &camera_buffer,
            offset: 0,
            size: 0,
        }],
        ..Default::default()
    });
    let blit_set = device.create_descriptor_set(DescriptorSetDescriptor {
        uniform_buffers: vec![UniformBufferBinding {
            target: BindingTarget::named("Camera", 0),
            buffer: &camera_buffer,
            offset: 0,
            size: 0,
        }],
        sampled_textures: vec![SampledTextureBinding {
            target: BindingTarget::named("u_scene", 0),
            texture: &scene_color,
            sampler: Some(sampler),
        }],
    });

    // --- Recording (once) ---
    let mut frame = device.create_command_list();
    frame.begin()?;
    frame.begin_render_pass(&offscreen_pass, None)?;
    frame.set_graphics_pipeline(&scene_pipeline)?;
    frame.bind_descriptor_set(&camera_set)?;
    frame.set_vertex_buffer(&vertex_buffer)?;
    frame.set_index_buffer(&index_buffer)?;
    frame.draw_indexed(INDICES.len() as u32, 0, IndexFormat::Uint16)?;
    frame.end_render_pass()?;
    frame.begin_render_pass(&present_pass, Some(&swapchain))?;
    frame.set_graphics_pipeline(&blit_pipeline)?;
    frame.bind_descriptor_set(&blit_set)?;
    frame.set_vertex_buffer(&vertex_buffer)?;
    frame.draw(VERTICES.len() as u32, 0)?;
    frame.end_render_pass()?;
    frame.end()?;

    // --- Frame loop ---
    for i in 0..FRAME_COUNT {
        device.begin_frame();
        let view_proj = rotation_z(i as f32 * 0.25);
        device.update_buffer(&camera_buffer, bytemuck::cast_slice(&view_proj), 0);
        device.submit(&frame)?;
        swapchain.present()?;
        let stats = device.end_frame();

        let calls = device.api().take_calls();
        log::info!(
            "Sandbox: frame {} - {} draws, {} pipeline binds, {} passes, {} GL calls",
            stats.frame_number,
            stats.draw_calls,
            stats.pipeline_binds,
            stats.render_passes,
            calls.len()
        );
    }

    drop(frame);
    drop(blit_set);
    assets.clear();
    log::info!(
        "Sandbox: {} GL objects alive before teardown",
        device.api().live_objects()
    );
    Ok(())
}
