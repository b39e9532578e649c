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

//! A device that accepts every call and touches no GPU.

use std::cell::Cell;

use aurora_core::renderer::{
    Buffer, BufferUsage, DescriptorSet, DeviceCapabilities, DeviceSettings, FrameStats, GraphicsDevice,
    GraphicsPipeline, GraphicsPipelineDescriptor, IndexFormat, PipelineError, RenderError,
    RenderPass, ResourceError, Sampler, SamplerDescriptor, ShaderModule, ShaderModuleDescriptor,
    ShaderStage, Swapchain, SwapchainDescriptor, Texture, TextureDescriptor,
};

/// An inert [`GraphicsDevice`] for tests and tools that run without a context.
///
/// Resources are detached handles. Argument validation matches the OpenGL
/// device, and statistics are counted, so code driven through it behaves the
/// same up to the point where pixels would be produced.
#[derive(Debug, Default)]
pub struct NullDevice {
    settings: DeviceSettings,
    stats: Cell<FrameStats>,
    frame_counter: Cell<u64>,
    pipeline_bound: Cell<bool>,
}

impl NullDevice {
    /// Creates a null device.
    pub fn new() -> Self {
        Self::with_settings(DeviceSettings::default())
    }

    /// Creates a null device that applies `settings` where they have meaning.
    pub fn with_settings(settings: DeviceSettings) -> Self {
        log::info!("NullDevice: created '{}'", settings.label);
        Self {
            settings,
            ..Self::default()
        }
    }

    fn update_stats(&self, f: impl FnOnce(&mut FrameStats)) {
        let mut stats = self.stats.get();
        f(&mut stats);
        self.stats.set(stats);
    }
}

impl GraphicsDevice for NullDevice {
    fn name(&self) -> &str {
        "Null"
    }

    fn capabilities(&self) -> DeviceCapabilities {
        DeviceCapabilities {
            api_version: (0, 0),
            supports_extended_shader_layout: true,
        }
    }

    fn begin_frame(&self) {
        let frame = self.frame_counter.get() + 1;
        self.frame_counter.set(frame);
        self.stats.set(FrameStats {
            frame_number: frame,
            ..FrameStats::default()
        });
    }

    fn end_frame(&self) -> FrameStats {
        self.stats.get()
    }

    fn stats(&self) -> FrameStats {
        self.stats.get()
    }

    fn create_swapchain(
        &self,
        mut descriptor: SwapchainDescriptor,
    ) -> Result<Swapchain, RenderError> {
        descriptor.vsync.get_or_insert(self.settings.vsync);
        Swapchain::new(descriptor)
    }

    fn create_buffer(
        &self,
        data: Option<&[u8]>,
        size: usize,
        usage: BufferUsage,
    ) -> Result<Buffer, ResourceError> {
        match data {
            Some(data) if data.len() != size => Err(ResourceError::SizeMismatch {
                expected: size,
                actual: data.len(),
            }),
            _ => Ok(Buffer::detached(size, usage)),
        }
    }

    fn update_buffer(&self, buffer: &Buffer, data: &[u8], dst_offset: usize) {
        debug_assert!(
            dst_offset + data.len() <= buffer.size(),
            "buffer update out of bounds"
        );
    }

    fn create_texture(
        &self,
        descriptor: &TextureDescriptor,
        pixels: Option<&[u8]>,
    ) -> Result<Texture, ResourceError> {
        match pixels {
            Some(pixels)
                if !descriptor.format.is_depth() && pixels.len() < descriptor.level0_byte_size() =>
            {
                Err(ResourceError::SizeMismatch {
                    expected: descriptor.level0_byte_size(),
                    actual: pixels.len(),
                })
            }
            _ => Ok(Texture::detached(*descriptor)),
        }
    }

    fn create_sampler(&self, descriptor: &SamplerDescriptor) -> Result<Sampler, ResourceError> {
        Ok(Sampler::detached(*descriptor))
    }

    fn create_shader_module(
        &self,
        descriptor: &ShaderModuleDescriptor<'_>,
    ) -> Result<ShaderModule, ResourceError> {
        Ok(ShaderModule::detached(
            descriptor.stage,
            descriptor.label.map(str::to_string),
        ))
    }

    fn create_graphics_pipeline(
        &self,
        descriptor: &GraphicsPipelineDescriptor<'_>,
    ) -> Result<GraphicsPipeline, ResourceError> {
        for (module, expected) in [
            (descriptor.vertex_shader, ShaderStage::Vertex),
            (descriptor.fragment_shader, ShaderStage::Fragment),
        ] {
            if module.stage() != expected {
                return Err(PipelineError::StageMismatch {
                    expected,
                    found: module.stage(),
                }
                .into());
            }
        }
        Ok(GraphicsPipeline::detached(
            descriptor.vertex_layout.clone(),
            descriptor.state,
            descriptor.label.map(str::to_string),
        ))
    }

    fn begin_render_pass(&self, _pass: &RenderPass<'_>, _target: Option<&Swapchain>) {
        self.update_stats(|s| s.render_passes += 1);
    }

    fn end_render_pass(&self) {}

    fn set_graphics_pipeline(&self, _pipeline: &GraphicsPipeline) {
        self.pipeline_bound.set(true);
        self.update_stats(|s| s.pipeline_binds += 1);
    }

    fn set_vertex_buffer(&self, _buffer: &Buffer) {}

    fn set_index_buffer(&self, _buffer: &Buffer) {}

    fn bind_descriptor_set(&self, _set: &DescriptorSet<'_>) {}

    fn draw(&self, vertex_count: u32, _first_vertex: u32) {
        if !self.pipeline_bound.get() {
            log::warn!("NullDevice: draw without a pipeline ignored");
            return;
        }
        self.update_stats(|s| {
            s.draw_calls += 1;
            s.vertices_submitted += u64::from(vertex_count);
        });
    }

    fn draw_indexed(&self, index_count: u32, _first_index: u32, _format: IndexFormat) {
        self.draw(index_count, 0);
    }

    fn set_debug_wireframe(&self, _enabled: bool) {}
}
