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

//! Transient framebuffers for render passes with attachments.

use aurora_core::renderer::{RawId, RenderPass};

use super::api::GlApi;

/// Creates and binds a framebuffer holding every attachment of `pass`.
///
/// An incomplete framebuffer is logged and returned anyway; the frame
/// continues with whatever the driver makes of it.
pub(crate) fn create_transient<B: GlApi + ?Sized>(
    gl: &B,
    pass: &RenderPass<'_>,
    validate: bool,
) -> Result<RawId, String> {
    let framebuffer = gl.create_framebuffer()?;
    gl.bind_framebuffer(glow::FRAMEBUFFER, framebuffer);

    let mut draw_buffers = Vec::with_capacity(pass.color_attachments().len());
    for (i, attachment) in pass.color_attachments().iter().enumerate() {
        let point = glow::COLOR_ATTACHMENT0 + i as u32;
        gl.framebuffer_texture_2d(
            glow::FRAMEBUFFER,
            point,
            glow::TEXTURE_2D,
            attachment.texture.raw(),
            attachment.mip_level,
        );
        draw_buffers.push(point);
    }

    if let Some(depth) = pass.depth_attachment() {
        let point = if depth.texture.format().has_stencil() {
            glow::DEPTH_STENCIL_ATTACHMENT
        } else {
            glow::DEPTH_ATTACHMENT
        };
        gl.framebuffer_texture_2d(
            glow::FRAMEBUFFER,
            point,
            glow::TEXTURE_2D,
            depth.texture.raw(),
            depth.mip_level,
        );
    }

    if draw_buffers.is_empty() {
        gl.draw_buffer(glow::NONE);
        gl.read_buffer(glow::NONE);
    } else {
        gl.draw_buffers(&draw_buffers);
    }

    if validate {
        let status = gl.check_framebuffer_status(glow::FRAMEBUFFER);
        if status != glow::FRAMEBUFFER_COMPLETE {
            log::error!(
                "GlDevice: framebuffer {} is incomplete (status {:#x})",
                framebuffer,
                status
            );
        }
    }
    Ok(framebuffer)
}

/// Rebinds the default framebuffer and deletes `framebuffer`.
pub(crate) fn destroy_transient<B: GlApi + ?Sized>(gl: &B, framebuffer: RawId) {
    gl.bind_framebuffer(glow::FRAMEBUFFER, 0);
    gl.delete_framebuffer(framebuffer);
}
