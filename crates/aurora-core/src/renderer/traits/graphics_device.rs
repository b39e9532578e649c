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

//! The device trait every backend implements.

use std::fmt::Debug;

use crate::renderer::api::*;
use crate::renderer::error::{CommandListError, RenderError, ResourceError};

/// The device contract: a resource factory plus an immediate executor.
///
/// All methods take `&self`; implementations keep their binding state behind
/// single-threaded interior mutability. Creation failures are returned as
/// values. Binding misuse (drawing without a pipeline, for example) is a
/// caller contract violation that implementations log and absorb.
pub trait GraphicsDevice: Debug {
    /// A human-readable name for the device and its backend.
    fn name(&self) -> &str;

    /// Returns the capabilities queried from the backend.
    fn capabilities(&self) -> DeviceCapabilities;

    /// Starts a new frame and resets the per-frame statistics.
    fn begin_frame(&self);

    /// Finishes the current frame.
    /// ## Returns
    /// The statistics collected since the matching `begin_frame`.
    fn end_frame(&self) -> FrameStats;

    /// Returns the statistics of the frame in progress.
    fn stats(&self) -> FrameStats;

    /// Wraps a presentable surface.
    /// ## Errors
    /// * `RenderError::SwapchainCreationFailed` - If the surface cannot be configured.
    fn create_swapchain(&self, descriptor: SwapchainDescriptor) -> Result<Swapchain, RenderError>;

    /// Creates a new GPU buffer.
    /// ## Arguments
    /// * `data` - Optional initial contents. When present it must be exactly `size` bytes.
    /// * `size` - The size of the buffer in bytes.
    /// * `usage` - How the buffer will be bound.
    /// ## Errors
    /// * `ResourceError::SizeMismatch` - If `data` is not `size` bytes long.
    fn create_buffer(
        &self,
        data: Option<&[u8]>,
        size: usize,
        usage: BufferUsage,
    ) -> Result<Buffer, ResourceError>;

    /// Overwrites part of a buffer.
    ///
    /// `dst_offset + data.len()` must not exceed the buffer size.
    fn update_buffer(&self, buffer: &Buffer, data: &[u8], dst_offset: usize);

    /// Creates a new texture and allocates all of its mip levels.
    /// ## Arguments
    /// * `descriptor` - Size, format, usage and mip count.
    /// * `pixels` - Optional tightly packed level-0 data. Ignored for depth formats.
    /// ## Errors
    /// * `ResourceError::SizeMismatch` - If `pixels` is shorter than level 0.
    fn create_texture(
        &self,
        descriptor: &TextureDescriptor,
        pixels: Option<&[u8]>,
    ) -> Result<Texture, ResourceError>;

    /// Creates a sampler object.
    fn create_sampler(&self, descriptor: &SamplerDescriptor) -> Result<Sampler, ResourceError>;

    /// Compiles one shader stage.
    /// ## Errors
    /// * `ResourceError::Shader` - If compilation fails. The compiler log is also logged.
    fn create_shader_module(
        &self,
        descriptor: &ShaderModuleDescriptor<'_>,
    ) -> Result<ShaderModule, ResourceError>;

    /// Links a vertex and fragment module into a pipeline.
    ///
    /// Creation does not disturb the currently bound pipeline.
    /// ## Errors
    /// * `ResourceError::Pipeline` - On a stage mismatch or a link failure.
    fn create_graphics_pipeline(
        &self,
        descriptor: &GraphicsPipelineDescriptor<'_>,
    ) -> Result<GraphicsPipeline, ResourceError>;

    /// Wraps a set of bindings. No backend object is created.
    fn create_descriptor_set<'a>(&self, descriptor: DescriptorSetDescriptor<'a>) -> DescriptorSet<'a> {
        DescriptorSet::new(descriptor)
    }

    /// Wraps a render pass configuration. No backend object is created.
    fn create_render_pass<'a>(&self, descriptor: RenderPassDescriptor<'a>) -> RenderPass<'a> {
        RenderPass::new(descriptor)
    }

    /// Creates an empty command list.
    fn create_command_list<'a>(&self) -> CommandList<'a> {
        CommandList::new()
    }

    /// Begins a render pass.
    ///
    /// Without attachments the default framebuffer is used and the viewport is
    /// the size of `target`. With attachments a transient framebuffer is
    /// allocated for the duration of the pass.
    fn begin_render_pass(&self, pass: &RenderPass<'_>, target: Option<&Swapchain>);

    /// Ends the current render pass and releases its transient framebuffer.
    fn end_render_pass(&self);

    /// Binds a pipeline and applies its fixed-function state.
    fn set_graphics_pipeline(&self, pipeline: &GraphicsPipeline);

    /// Binds the vertex buffer using the current pipeline's vertex layout.
    fn set_vertex_buffer(&self, buffer: &Buffer);

    /// Binds the index buffer.
    fn set_index_buffer(&self, buffer: &Buffer);

    /// Binds the uniform buffers and sampled textures of a set.
    fn bind_descriptor_set(&self, set: &DescriptorSet<'_>);

    /// Draws a non-indexed triangle list.
    fn draw(&self, vertex_count: u32, first_vertex: u32);

    /// Draws an indexed triangle list from the bound index buffer.
    fn draw_indexed(&self, index_count: u32, first_index: u32, format: IndexFormat);

    /// Toggles wireframe rasterization.
    fn set_debug_wireframe(&self, enabled: bool);

    /// Replays a closed command list against this device.
    /// ## Errors
    /// * `CommandListError::NotClosed` - If the list is still open.
    fn submit(&self, list: &CommandList<'_>) -> Result<(), CommandListError> {
        list.replay(self)
    }
}
