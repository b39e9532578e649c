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
    BindingTarget, BufferUsage, DescriptorSetDescriptor, GraphicsDevice, SampledTextureBinding,
    SamplerDescriptor, TextureDescriptor, UniformBufferBinding,
};
use aurora_infra::graphics::gl::GlCall;

#[test]
fn named_bindings_are_resolved_once_per_pipeline() -> Result<()> {
    // --- 1. ARRANGE ---
    let device = common::device();
    let pipeline = common::pipeline(&device);
    let camera = device.create_buffer(None, 64, BufferUsage::Uniform)?;
    let albedo = device.create_texture(&TextureDescriptor::default(), Some(&[255; 4]))?;
    let sampler = device.create_sampler(&SamplerDescriptor::default())?;
    let set = device.create_descriptor_set(DescriptorSetDescriptor {
        uniform_buffers: vec![UniformBufferBinding {
            target: BindingTarget::named("Camera", 2),
            buffer: &camera,
            offset: 0,
            size: 0,
        }],
        sampled_textures: vec![SampledTextureBinding {
            target: BindingTarget::named("u_albedo", 3),
            texture: &albedo,
            sampler: Some(&sampler),
        }],
    });
    device.set_graphics_pipeline(&pipeline);

    // --- 2. ACT ---
    for _ in 0..3 {
        device.bind_descriptor_set(&set);
    }

    // --- 3. ASSERT ---
    let api = device.api();
    assert_eq!(api.count(|c| matches!(c, GlCall::GetUniformBlockIndex { .. })), 1);
    assert_eq!(api.count(|c| matches!(c, GlCall::GetUniformLocation { .. })), 1);
    assert_eq!(
        api.count(|c| matches!(c, GlCall::UniformBlockBinding { index: 0, binding: 2, .. })),
        1
    );
    assert_eq!(api.count(|c| matches!(c, GlCall::Uniform1i { location: 0, value: 3 })), 1);
    assert_eq!(
        api.count(|c| matches!(
            c,
            GlCall::BindBufferBase { target: glow::UNIFORM_BUFFER, index: 2, .. }
        )),
        3
    );
    assert_eq!(
        api.count(|c| *c == GlCall::BindSampler { unit: 3, sampler: sampler.raw() }),
        3
    );
    Ok(())
}

#[test]
fn a_new_pipeline_gets_a_fresh_resolution() -> Result<()> {
    // --- 1. ARRANGE ---
    let device = common::device();
    let first = common::pipeline(&device);
    let second = common::pipeline(&device);
    let camera = device.create_buffer(None, 64, BufferUsage::Uniform)?;
    let set = device.create_descriptor_set(DescriptorSetDescriptor {
        uniform_buffers: vec![UniformBufferBinding {
            target: BindingTarget::named("Camera", 0),
            buffer: &camera,
            offset: 0,
            size: 0,
        }],
        ..Default::default()
    });

    // --- 2. ACT ---
    device.set_graphics_pipeline(&first);
    device.bind_descriptor_set(&set);
    device.set_graphics_pipeline(&second);
    device.bind_descriptor_set(&set);
    device.set_graphics_pipeline(&first);
    device.bind_descriptor_set(&set);

    // --- 3. ASSERT ---
    assert_eq!(
        device.api().count(|c| matches!(c, GlCall::GetUniformBlockIndex { .. })),
        2
    );
    Ok(())
}

#[test]
fn sized_bindings_use_a_buffer_range() -> Result<()> {
    // --- 1. ARRANGE ---
    let device = common::device();
    let pipeline = common::pipeline(&device);
    let lights = device.create_buffer(None, 512, BufferUsage::Uniform)?;
    let set = device.create_descriptor_set(DescriptorSetDescriptor {
        uniform_buffers: vec![UniformBufferBinding {
            target: BindingTarget::Slot(1),
            buffer: &lights,
            offset: 256,
            size: 128,
        }],
        ..Default::default()
    });
    device.set_graphics_pipeline(&pipeline);

    // --- 2. ACT ---
    device.bind_descriptor_set(&set);

    // --- 3. ASSERT ---
    assert_eq!(
        device.api().count(|c| *c
            == GlCall::BindBufferRange {
                target: glow::UNIFORM_BUFFER,
                index: 1,
                buffer: lights.raw(),
                offset: 256,
                size: 128,
            }),
        1
    );
    assert_eq!(
        device.api().count(|c| matches!(c, GlCall::GetUniformBlockIndex { .. })),
        0
    );
    Ok(())
}

#[test]
fn texture_without_sampler_unbinds_the_unit_sampler() -> Result<()> {
    // --- 1. ARRANGE ---
    let device = common::device();
    let pipeline = common::pipeline(&device);
    let albedo = device.create_texture(&TextureDescriptor::default(), None)?;
    let set = device.create_descriptor_set(DescriptorSetDescriptor {
        sampled_textures: vec![SampledTextureBinding {
            target: BindingTarget::Slot(0),
            texture: &albedo,
            sampler: None,
        }],
        ..Default::default()
    });
    device.set_graphics_pipeline(&pipeline);

    // --- 2. ACT ---
    device.bind_descriptor_set(&set);

    // --- 3. ASSERT ---
    assert_eq!(
        device.api().count(|c| *c == GlCall::BindSampler { unit: 0, sampler: 0 }),
        1
    );
    Ok(())
}

#[test]
fn creating_a_texture_keeps_the_bound_set_texture_on_its_unit() -> Result<()> {
    // --- 1. ARRANGE ---
    let device = common::device();
    let pipeline = common::pipeline(&device);
    let albedo = device.create_texture(&TextureDescriptor::default(), Some(&[255; 4]))?;
    let set = device.create_descriptor_set(DescriptorSetDescriptor {
        uniform_buffers: vec![],
        sampled_textures: vec![SampledTextureBinding {
            target: BindingTarget::named("u_albedo", 3),
            texture: &albedo,
            sampler: None,
        }],
    });
    device.set_graphics_pipeline(&pipeline);
    device.bind_descriptor_set(&set);
    let bound_at = device.api().calls().len();

    // --- 2. ACT ---
    let streamed = device.create_texture(&TextureDescriptor::default(), Some(&[0; 4]))?;
    device.draw(3, 0);

    // --- 3. ASSERT ---
    let calls = device.api().calls();
    let after_bind = &calls[bound_at..];
    assert!(!after_bind.iter().any(|c| matches!(c, GlCall::ActiveTexture(_))));
    let last_texture = after_bind
        .iter()
        .rev()
        .find_map(|c| match c {
            GlCall::BindTexture { texture, .. } => Some(*texture),
            _ => None,
        });
    assert_eq!(last_texture, Some(albedo.raw()));
    assert_ne!(streamed.raw(), albedo.raw());
    assert!(matches!(after_bind.last(), Some(GlCall::DrawArrays { .. })));
    Ok(())
}

#[test]
fn deleting_the_bound_texture_leaves_the_unit_empty_for_later_uploads() -> Result<()> {
    // --- 1. ARRANGE ---
    let device = common::device();
    let pipeline = common::pipeline(&device);
    let albedo = device.create_texture(&TextureDescriptor::default(), Some(&[255; 4]))?;
    {
        let set = device.create_descriptor_set(DescriptorSetDescriptor {
            uniform_buffers: vec![],
            sampled_textures: vec![SampledTextureBinding {
                target: BindingTarget::named("u_albedo", 1),
                texture: &albedo,
                sampler: None,
            }],
        });
        device.set_graphics_pipeline(&pipeline);
        device.bind_descriptor_set(&set);
    }
    drop(albedo);
    let released_at = device.api().calls().len();

    // --- 2. ACT ---
    let _late = device.create_texture(&TextureDescriptor::default(), None)?;

    // --- 3. ASSERT ---
    let calls = device.api().calls();
    let last_texture = calls[released_at..].iter().rev().find_map(|c| match c {
        GlCall::BindTexture { texture, .. } => Some(*texture),
        _ => None,
    });
    assert_eq!(last_texture, Some(0));
    Ok(())
}
