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

mod common;

use anyhow::Result;
use aurora_core::renderer::{
    Attachment, BufferUsage, GraphicsDevice, RenderPassDescriptor, SamplerDescriptor,
    ShaderModuleDescriptor, ShaderStage, TextureDescriptor, TextureFormat,
};
use aurora_infra::graphics::gl::{GlCall, GlObjectKind};

#[test]
fn partial_buffer_update_replaces_only_the_tail() -> Result<()> {
    // --- 1. ARRANGE ---
    let device = common::device();
    let buffer = device.create_buffer(None, 48, BufferUsage::Uniform)?;
    assert_eq!(device.api().buffer_contents(buffer.raw()), Some(vec![0; 48]));

    // --- 2. ACT ---
    device.update_buffer(&buffer, &[0xAB; 16], 32);

    // --- 3. ASSERT ---
    let contents = device.api().buffer_contents(buffer.raw()).unwrap_or_default();
    assert_eq!(&contents[..32], &[0; 32][..]);
    assert_eq!(&contents[32..], &[0xAB; 16][..]);
    Ok(())
}

#[test]
fn every_created_object_is_deleted_exactly_once() -> Result<()> {
    // --- 1. ARRANGE ---
    let device = common::device();

    // --- 2. ACT ---
    {
        let pipeline = common::pipeline(&device);
        let _buffer = device.create_buffer(Some(&[1, 2, 3, 4]), 4, BufferUsage::Vertex)?;
        let color = device.create_texture(
            &common::target_descriptor(16, 16, TextureFormat::Rgba8),
            None,
        )?;
        let _sampler = device.create_sampler(&SamplerDescriptor::default())?;
        let pass = device.create_render_pass(RenderPassDescriptor {
            color_attachments: vec![Attachment::new(&color)],
            ..Default::default()
        });
        device.begin_render_pass(&pass, None);
        device.set_graphics_pipeline(&pipeline);
        device.end_render_pass();
        assert!(device.api().live_objects() > 0);
    }

    // --- 3. ASSERT ---
    let api = device.api();
    assert_eq!(api.live_objects(), 0);
    let created = api.count(|c| matches!(c, GlCall::CreateObject { .. }));
    let deleted = api.count(|c| matches!(c, GlCall::DeleteObject { .. }));
    assert_eq!(created, deleted);
    Ok(())
}

#[test]
fn releasing_the_bound_pipeline_clears_the_binding() {
    // --- 1. ARRANGE ---
    let device = common::device();
    let pipeline = common::pipeline(&device);
    device.set_graphics_pipeline(&pipeline);

    // --- 2. ACT ---
    drop(pipeline);
    device.draw(3, 0);

    // --- 3. ASSERT ---
    assert_eq!(device.api().count(|c| matches!(c, GlCall::UseProgram(0))), 1);
    assert_eq!(device.api().count(|c| matches!(c, GlCall::DrawArrays { .. })), 0);
}

#[test]
fn handles_outliving_the_device_release_nothing() -> Result<()> {
    // --- 1. ARRANGE ---
    let device = common::device();
    let buffer = device.create_buffer(None, 16, BufferUsage::Vertex)?;
    let texture = device.create_texture(
        &TextureDescriptor {
            format: TextureFormat::Depth24Stencil8,
            ..TextureDescriptor::default()
        },
        None,
    )?;

    // --- 2. ACT ---
    drop(device);

    // --- 3. ASSERT ---
    drop(buffer);
    drop(texture);
    Ok(())
}

#[test]
fn failed_shader_leaves_no_objects_behind() {
    // --- 1. ARRANGE ---
    let device = common::device();
    let descriptor = ShaderModuleDescriptor {
        label: Some("broken"),
        source: "#version 330 core\n#error unsupported\n".into(),
        stage: ShaderStage::Vertex,
    };

    // --- 2. ACT ---
    let result = device.create_shader_module(&descriptor);

    // --- 3. ASSERT ---
    assert!(result.is_err());
    assert_eq!(device.api().live_objects_of(GlObjectKind::Shader), 0);
}
