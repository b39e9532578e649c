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
    Attachment, ClearConfig, GraphicsDevice, RenderPassDescriptor, SwapchainDescriptor,
    TextureFormat,
};
use aurora_infra::graphics::gl::{GlCall, GlObjectKind};

fn created_framebuffers(calls: &[GlCall]) -> usize {
    calls
        .iter()
        .filter(|c| {
            matches!(
                c,
                GlCall::CreateObject {
                    kind: GlObjectKind::Framebuffer,
                    ..
                }
            )
        })
        .count()
}

fn viewports(calls: &[GlCall]) -> Vec<(u32, u32)> {
    calls
        .iter()
        .filter_map(|c| match c {
            GlCall::Viewport { width, height, .. } => Some((*width, *height)),
            _ => None,
        })
        .collect()
}

#[test]
fn pass_without_attachments_uses_the_default_framebuffer() -> Result<()> {
    // --- 1. ARRANGE ---
    let device = common::device();
    let swapchain = device.create_swapchain(SwapchainDescriptor {
        surface: None,
        width: 1280,
        height: 720,
        vsync: Some(true),
    })?;
    let pass = device.create_render_pass(RenderPassDescriptor::default());

    // --- 2. ACT ---
    device.begin_render_pass(&pass, Some(&swapchain));
    device.end_render_pass();

    // --- 3. ASSERT ---
    let calls = device.api().calls();
    assert_eq!(created_framebuffers(&calls), 0);
    assert_eq!(viewports(&calls), vec![(1280, 720)]);
    assert!(calls.contains(&GlCall::Clear(glow::COLOR_BUFFER_BIT | glow::DEPTH_BUFFER_BIT)));
    Ok(())
}

#[test]
fn pass_with_attachments_owns_one_transient_framebuffer() -> Result<()> {
    // --- 1. ARRANGE ---
    let device = common::device();
    let color = device.create_texture(
        &common::target_descriptor(256, 256, TextureFormat::Rgba16F),
        None,
    )?;
    let depth = device.create_texture(
        &common::target_descriptor(256, 256, TextureFormat::Depth24Stencil8),
        None,
    )?;
    let pass = device.create_render_pass(RenderPassDescriptor {
        color_attachments: vec![Attachment::new(&color)],
        depth_attachment: Some(Attachment::new(&depth)),
        ..Default::default()
    });

    // --- 2. ACT ---
    for _ in 0..3 {
        device.begin_render_pass(&pass, None);
        device.end_render_pass();
    }

    // --- 3. ASSERT ---
    let api = device.api();
    let calls = api.calls();
    assert_eq!(created_framebuffers(&calls), 3);
    assert_eq!(api.live_objects_of(GlObjectKind::Framebuffer), 0);
    assert!(calls.contains(&GlCall::FramebufferTexture2D {
        attachment: glow::DEPTH_STENCIL_ATTACHMENT,
        texture: depth.raw(),
        level: 0,
    }));
    assert!(calls.contains(&GlCall::DrawBuffers(vec![glow::COLOR_ATTACHMENT0])));
    assert_eq!(api.count(|c| matches!(c, GlCall::CheckFramebufferStatus(_))), 3);
    Ok(())
}

#[test]
fn depth_only_pass_disables_color_output() -> Result<()> {
    // --- 1. ARRANGE ---
    let device = common::device();
    let depth = device.create_texture(
        &common::target_descriptor(1024, 1024, TextureFormat::Depth32F),
        None,
    )?;
    let pass = device.create_render_pass(RenderPassDescriptor {
        depth_attachment: Some(Attachment::new(&depth)),
        ..Default::default()
    });

    // --- 2. ACT ---
    device.begin_render_pass(&pass, None);
    device.end_render_pass();

    // --- 3. ASSERT ---
    let calls = device.api().calls();
    assert!(calls.contains(&GlCall::DrawBuffer(glow::NONE)));
    assert!(calls.contains(&GlCall::ReadBuffer(glow::NONE)));
    assert!(calls.contains(&GlCall::Clear(glow::DEPTH_BUFFER_BIT)));
    assert_eq!(viewports(&calls), vec![(1024, 1024)]);
    Ok(())
}

#[test]
fn viewport_prefers_the_first_color_attachment_over_depth() -> Result<()> {
    // --- 1. ARRANGE ---
    let device = common::device();
    let color = device.create_texture(
        &aurora_core::renderer::TextureDescriptor {
            mip_levels: 2,
            ..common::target_descriptor(512, 256, TextureFormat::Rgba8)
        },
        None,
    )?;
    let depth = device.create_texture(
        &common::target_descriptor(1024, 1024, TextureFormat::Depth32F),
        None,
    )?;
    let pass = device.create_render_pass(RenderPassDescriptor {
        color_attachments: vec![Attachment {
            texture: &color,
            mip_level: 1,
        }],
        depth_attachment: Some(Attachment::new(&depth)),
        ..Default::default()
    });
    let headless = device.create_swapchain(SwapchainDescriptor {
        surface: None,
        width: 0,
        height: 0,
        vsync: Some(false),
    })?;

    // --- 2. ACT ---
    device.begin_render_pass(&pass, Some(&headless));
    device.end_render_pass();

    // --- 3. ASSERT ---
    assert_eq!(viewports(&device.api().calls()), vec![(256, 128)]);
    Ok(())
}

#[test]
fn stale_framebuffer_is_destroyed_when_a_new_pass_begins() -> Result<()> {
    // --- 1. ARRANGE ---
    let device = common::device();
    let color = device.create_texture(
        &common::target_descriptor(64, 64, TextureFormat::Rgba8),
        None,
    )?;
    let pass = device.create_render_pass(RenderPassDescriptor {
        color_attachments: vec![Attachment::new(&color)],
        clear: ClearConfig {
            depth_enabled: false,
            ..ClearConfig::default()
        },
        ..Default::default()
    });

    // --- 2. ACT ---
    device.begin_render_pass(&pass, None);
    device.begin_render_pass(&pass, None);

    // --- 3. ASSERT ---
    assert_eq!(device.api().live_objects_of(GlObjectKind::Framebuffer), 1);
    device.end_render_pass();
    assert_eq!(device.api().live_objects_of(GlObjectKind::Framebuffer), 0);
    Ok(())
}
