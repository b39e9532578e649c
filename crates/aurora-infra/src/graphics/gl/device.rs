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

//! The OpenGL implementation of [`GraphicsDevice`].
//!
//! [`GlDevice`] is generic over [`GlApi`], so the same state machine drives a
//! live `glow` context or the headless [`RecordingGl`](super::RecordingGl).
//! All backend state lives in one [`GlDeviceState`] behind a `RefCell`; the
//! device and its handles are single-threaded by construction.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use aurora_core::renderer::{
    BackendResource, Buffer, BufferUsage, ColorWrites, CommandList, CommandListError,
    DeviceCapabilities, DeviceSettings, DescriptorSet, FrameStats, GraphicsDevice,
    GraphicsPipeline, GraphicsPipelineDescriptor, IndexFormat, PolygonMode, RawId, RenderError,
    RenderPass, ResourceError, ResourceReleaser, Sampler, SamplerDescriptor, ShaderModule,
    ShaderModuleDescriptor, ShaderStage, Swapchain, SwapchainDescriptor, Texture,
    TextureDescriptor, VertexLayoutDescriptor,
};

use super::api::GlApi;
use super::binding::BindingCache;
use super::conversions::{self, GlTextureFormat, IntoGl};
use super::framebuffer;
use super::pipeline;
use super::state::StateShadow;

/// The extension that allows `layout(binding = N)` before GL 4.2.
const SHADING_LANGUAGE_420PACK: &str = "GL_ARB_shading_language_420pack";

/// Sampler objects, vertex arrays and uniform buffers are all core from 3.3.
const MIN_VERSION: (u32, u32) = (3, 3);

/// The pipeline currently bound to the context.
#[derive(Debug, Clone)]
struct BoundPipeline {
    program: RawId,
    vertex_array: RawId,
    layout: Rc<VertexLayoutDescriptor>,
}

/// Everything the device knows about the context's current state.
#[derive(Debug, Default)]
struct GlDeviceState {
    shadow: StateShadow,
    bindings: BindingCache,
    pipeline: Option<BoundPipeline>,
    vertex_buffer: RawId,
    index_buffer: RawId,
    /// The texture unit selected with `glActiveTexture`.
    active_unit: u32,
    /// The 2D texture bound on each unit the device has touched.
    unit_textures: HashMap<u32, RawId>,
    /// The transient framebuffer of the current pass, zero for the default one.
    framebuffer: RawId,
    capabilities: DeviceCapabilities,
    stats: FrameStats,
    frame_counter: u64,
    wireframe: bool,
}

/// The part of the device handles keep a weak reference to.
struct GlShared<B: GlApi> {
    gl: B,
    name: String,
    settings: DeviceSettings,
    state: RefCell<GlDeviceState>,
}

impl<B: GlApi> GlShared<B> {
    fn query_capabilities(&self) -> DeviceCapabilities {
        let api_version = self.gl.version();
        DeviceCapabilities {
            api_version,
            supports_extended_shader_layout: api_version >= (4, 2)
                || self.gl.has_extension(SHADING_LANGUAGE_420PACK),
        }
    }
}

impl<B: GlApi> ResourceReleaser for GlShared<B> {
    fn release(&self, resource: BackendResource) {
        let gl = &self.gl;
        let mut state = self.state.borrow_mut();
        match resource {
            BackendResource::Buffer(raw) => {
                if state.vertex_buffer == raw {
                    state.vertex_buffer = 0;
                }
                if state.index_buffer == raw {
                    state.index_buffer = 0;
                }
                gl.delete_buffer(raw);
            }
            BackendResource::Texture(raw) => {
                // Deleting a bound texture reverts its units to zero.
                state.unit_textures.retain(|_, texture| *texture != raw);
                gl.delete_texture(raw);
            }
            BackendResource::Sampler(raw) => gl.delete_sampler(raw),
            BackendResource::ShaderModule(raw) => gl.delete_shader(raw),
            BackendResource::Pipeline {
                program,
                vertex_array,
            } => {
                if state.pipeline.as_ref().is_some_and(|p| p.program == program) {
                    gl.use_program(0);
                    gl.bind_vertex_array(0);
                    state.pipeline = None;
                }
                state.bindings.purge_program(program);
                gl.delete_vertex_array(vertex_array);
                gl.delete_program(program);
            }
        }
        log::debug!("GlDevice: released {:?}", resource);
    }
}

impl<B: GlApi> Drop for GlShared<B> {
    fn drop(&mut self) {
        let framebuffer = self.state.get_mut().framebuffer;
        if framebuffer != 0 {
            framebuffer::destroy_transient(&self.gl, framebuffer);
        }
        log::info!("GlDevice: '{}' destroyed", self.name);
    }
}

/// A [`GraphicsDevice`] translating every call into OpenGL through `B`.
pub struct GlDevice<B: GlApi + 'static> {
    shared: Rc<GlShared<B>>,
}

impl<B: GlApi + 'static> GlDevice<B> {
    /// Creates a device with default settings.
    pub fn new(api: B) -> Result<Self, RenderError> {
        Self::with_settings(api, DeviceSettings::default())
    }

    /// Creates a device over `api` configured by `settings`.
    /// ## Errors
    /// * `RenderError::InitializationFailed` - If the context is older than OpenGL 3.3.
    pub fn with_settings(api: B, settings: DeviceSettings) -> Result<Self, RenderError> {
        let (major, minor) = api.version();
        if (major, minor) < MIN_VERSION {
            log::error!(
                "GlDevice: OpenGL {}.{} on '{}' is below the required {}.{}",
                major,
                minor,
                api.renderer_name(),
                MIN_VERSION.0,
                MIN_VERSION.1
            );
            return Err(RenderError::InitializationFailed(format!(
                "OpenGL {}.{} or newer is required, the context reports {}.{}",
                MIN_VERSION.0, MIN_VERSION.1, major, minor
            )));
        }
        let name = format!("{} ({})", settings.label, api.renderer_name());
        log::info!("GlDevice: created '{}' on OpenGL {}.{}", name, major, minor);

        // Pixel rows are tightly packed.
        api.pixel_store_i32(glow::UNPACK_ALIGNMENT, 1);

        let shared = Rc::new(GlShared {
            gl: api,
            name,
            settings,
            state: RefCell::new(GlDeviceState::default()),
        });
        {
            let mut state = shared.state.borrow_mut();
            state.capabilities = shared.query_capabilities();
            if shared.settings.debug_wireframe {
                state.wireframe = true;
                state.shadow.set_polygon_mode(&shared.gl, PolygonMode::Line);
            }
        }
        Ok(Self { shared })
    }

    /// The API the device issues calls against.
    pub fn api(&self) -> &B {
        &self.shared.gl
    }

    /// The settings the device was created with.
    pub fn settings(&self) -> &DeviceSettings {
        &self.shared.settings
    }

    /// Forgets all shadowed state and cached resolutions.
    ///
    /// Call this after the context was used by code outside the device.
    pub fn reset_state_cache(&self) {
        let mut state = self.shared.state.borrow_mut();
        state.shadow.reset();
        state.bindings.clear();
        state.unit_textures.clear();
        log::debug!("GlDevice: state cache reset");
    }

    fn owner(&self) -> Weak<dyn ResourceReleaser> {
        let weak: Weak<GlShared<B>> = Rc::downgrade(&self.shared);
        weak
    }

    /// Rebinds the buffer the device considers current for `usage`.
    fn restore_buffer_binding(&self, state: &GlDeviceState, usage: BufferUsage) {
        match usage {
            BufferUsage::Vertex => self
                .shared
                .gl
                .bind_buffer(glow::ARRAY_BUFFER, state.vertex_buffer),
            BufferUsage::Index if state.pipeline.is_some() => self
                .shared
                .gl
                .bind_buffer(glow::ELEMENT_ARRAY_BUFFER, state.index_buffer),
            BufferUsage::Index | BufferUsage::Uniform => {}
        }
    }
}

impl<B: GlApi + 'static> fmt::Debug for GlDevice<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlDevice")
            .field("name", &self.shared.name)
            .field("state", &self.shared.state)
            .finish_non_exhaustive()
    }
}

impl<B: GlApi + 'static> GraphicsDevice for GlDevice<B> {
    fn name(&self) -> &str {
        &self.shared.name
    }

    fn capabilities(&self) -> DeviceCapabilities {
        self.shared.state.borrow().capabilities
    }

    fn begin_frame(&self) {
        let mut state = self.shared.state.borrow_mut();
        state.frame_counter += 1;
        state.stats = FrameStats {
            frame_number: state.frame_counter,
            ..FrameStats::default()
        };
    }

    fn end_frame(&self) -> FrameStats {
        let state = self.shared.state.borrow();
        if state.framebuffer != 0 {
            log::warn!("GlDevice: frame ended inside a render pass");
        }
        log::trace!("GlDevice: frame stats {:?}", state.stats);
        state.stats
    }

    fn stats(&self) -> FrameStats {
        self.shared.state.borrow().stats
    }

    fn create_swapchain(
        &self,
        mut descriptor: SwapchainDescriptor,
    ) -> Result<Swapchain, RenderError> {
        let capabilities = self.shared.query_capabilities();
        self.shared.state.borrow_mut().capabilities = capabilities;
        descriptor.vsync.get_or_insert(self.shared.settings.vsync);
        let swapchain = Swapchain::new(descriptor)?;
        log::info!(
            "GlDevice: swapchain {}x{} (vsync: {}, extended shader layout: {})",
            swapchain.width(),
            swapchain.height(),
            swapchain.vsync(),
            capabilities.supports_extended_shader_layout
        );
        Ok(swapchain)
    }

    fn create_buffer(
        &self,
        data: Option<&[u8]>,
        size: usize,
        usage: BufferUsage,
    ) -> Result<Buffer, ResourceError> {
        if let Some(data) = data {
            if data.len() != size {
                return Err(ResourceError::SizeMismatch {
                    expected: size,
                    actual: data.len(),
                });
            }
        }

        let gl = &self.shared.gl;
        let state = self.shared.state.borrow();
        let raw = gl.create_buffer().map_err(ResourceError::BackendError)?;
        let target: u32 = usage.into_gl();
        let hint = match usage {
            BufferUsage::Uniform => glow::DYNAMIC_DRAW,
            BufferUsage::Vertex | BufferUsage::Index => glow::STATIC_DRAW,
        };

        gl.bind_buffer(target, raw);
        match data {
            Some(data) => gl.buffer_data(target, data, hint),
            None => gl.buffer_storage(target, size, hint),
        }
        self.restore_buffer_binding(&state, usage);

        log::info!("GlDevice: created {:?} buffer {} ({} bytes)", usage, raw, size);
        Ok(Buffer::new(raw, size, usage, self.owner()))
    }

    fn update_buffer(&self, buffer: &Buffer, data: &[u8], dst_offset: usize) {
        debug_assert!(
            dst_offset + data.len() <= buffer.size(),
            "buffer update out of bounds"
        );
        if buffer.raw() == 0 {
            log::warn!("GlDevice: update of a buffer without a backend object ignored");
            return;
        }
        let gl = &self.shared.gl;
        let state = self.shared.state.borrow();
        let target: u32 = buffer.usage().into_gl();
        gl.bind_buffer(target, buffer.raw());
        gl.buffer_sub_data(target, dst_offset, data);
        self.restore_buffer_binding(&state, buffer.usage());
    }

    fn create_texture(
        &self,
        descriptor: &TextureDescriptor,
        pixels: Option<&[u8]>,
    ) -> Result<Texture, ResourceError> {
        let pixels = match pixels {
            Some(_) if descriptor.format.is_depth() => {
                log::debug!("GlDevice: pixel data ignored for depth texture");
                None
            }
            Some(pixels) if pixels.len() < descriptor.level0_byte_size() => {
                return Err(ResourceError::SizeMismatch {
                    expected: descriptor.level0_byte_size(),
                    actual: pixels.len(),
                });
            }
            other => other,
        };

        let gl = &self.shared.gl;
        let state = self.shared.state.borrow();
        let format: GlTextureFormat = descriptor.format.into_gl();
        let levels = descriptor.level_count();
        let raw = gl.create_texture().map_err(ResourceError::BackendError)?;

        // The upload goes through the active unit, which may hold a bound set's texture.

        gl.bind_texture(glow::TEXTURE_2D, raw);
        for level in 0..levels {
            let extent = descriptor.extent().mip_level(level);
            gl.tex_image_2d(
                glow::TEXTURE_2D,
                level,
                format.internal,
                extent.width,
                extent.height,
                format.format,
                format.ty,
                if level == 0 { pixels } else { None },
            );
        }
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_BASE_LEVEL, 0);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAX_LEVEL, (levels - 1) as i32);
        let min_filter = if levels > 1 {
            glow::LINEAR_MIPMAP_LINEAR
        } else {
            glow::LINEAR
        };
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MIN_FILTER, min_filter as i32);
        gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_MAG_FILTER, glow::LINEAR as i32);
        if pixels.is_some() && levels > 1 {
            gl.generate_mipmap(glow::TEXTURE_2D);
        }
        let previous = state
            .unit_textures
            .get(&state.active_unit)
            .copied()
            .unwrap_or(0);
        gl.bind_texture(glow::TEXTURE_2D, previous);

        log::info!(
            "GlDevice: created {:?} texture {} ({}x{}, {} mips)",
            descriptor.format,
            raw,
            descriptor.width,
            descriptor.height,
            levels
        );
        let descriptor = TextureDescriptor {
            mip_levels: levels,
            ..*descriptor
        };
        Ok(Texture::new(raw, descriptor, self.owner()))
    }

    fn create_sampler(&self, descriptor: &SamplerDescriptor) -> Result<Sampler, ResourceError> {
        let gl = &self.shared.gl;
        let raw = gl.create_sampler().map_err(ResourceError::BackendError)?;
        let parameters = [
            (glow::TEXTURE_MIN_FILTER, conversions::min_filter(descriptor)),
            (glow::TEXTURE_MAG_FILTER, descriptor.mag_filter.into_gl()),
            (glow::TEXTURE_WRAP_S, descriptor.address_u.into_gl()),
            (glow::TEXTURE_WRAP_T, descriptor.address_v.into_gl()),
        ];
        for (parameter, value) in parameters {
            gl.sampler_parameter_i32(raw, parameter, value as i32);
        }
        log::debug!("GlDevice: created sampler {} {:?}", raw, descriptor);
        Ok(Sampler::new(raw, *descriptor, self.owner()))
    }

    fn create_shader_module(
        &self,
        descriptor: &ShaderModuleDescriptor<'_>,
    ) -> Result<ShaderModule, ResourceError> {
        let raw = pipeline::compile_shader(&self.shared.gl, descriptor)?;
        log::info!(
            "GlDevice: compiled {:?} shader '{}'",
            descriptor.stage,
            descriptor.label.unwrap_or("Unknown")
        );
        Ok(ShaderModule::new(
            raw,
            descriptor.stage,
            descriptor.label.map(str::to_string),
            self.owner(),
        ))
    }

    fn create_graphics_pipeline(
        &self,
        descriptor: &GraphicsPipelineDescriptor<'_>,
    ) -> Result<GraphicsPipeline, ResourceError> {
        pipeline::expect_stage(descriptor.vertex_shader, ShaderStage::Vertex)?;
        pipeline::expect_stage(descriptor.fragment_shader, ShaderStage::Fragment)?;

        let gl = &self.shared.gl;
        let program = pipeline::link_program(
            gl,
            descriptor.vertex_shader,
            descriptor.fragment_shader,
            descriptor.label,
        )?;

        let current_vertex_array = self
            .shared
            .state
            .borrow()
            .pipeline
            .as_ref()
            .map_or(0, |p| p.vertex_array);
        let vertex_array = match pipeline::create_vertex_array(
            gl,
            &descriptor.vertex_layout,
            current_vertex_array,
        ) {
            Ok(vertex_array) => vertex_array,
            Err(e) => {
                gl.delete_program(program);
                return Err(e.into());
            }
        };

        log::info!(
            "GlDevice: created pipeline '{}' (program {}, vertex array {})",
            descriptor.label.unwrap_or("Unknown"),
            program,
            vertex_array
        );
        Ok(GraphicsPipeline::new(
            program,
            vertex_array,
            descriptor.vertex_layout.clone(),
            descriptor.state,
            descriptor.label.map(str::to_string),
            self.owner(),
        ))
    }

    fn begin_render_pass(&self, pass: &RenderPass<'_>, target: Option<&Swapchain>) {
        let gl = &self.shared.gl;
        let mut state = self.shared.state.borrow_mut();

        if state.framebuffer != 0 {
            log::warn!(
                "GlDevice: render pass begun while framebuffer {} is still alive, destroying it",
                state.framebuffer
            );
            framebuffer::destroy_transient(gl, state.framebuffer);
            state.framebuffer = 0;
        }

        if pass.has_attachments() {
            match framebuffer::create_transient(gl, pass, self.shared.settings.validate_framebuffers)
            {
                Ok(raw) => state.framebuffer = raw,
                Err(e) => {
                    log::error!("GlDevice: failed to create a framebuffer: {}", e);
                    gl.bind_framebuffer(glow::FRAMEBUFFER, 0);
                }
            }
        } else {
            gl.bind_framebuffer(glow::FRAMEBUFFER, 0);
        }

        // Viewport: target size, then first color attachment, then depth.
        let extent = target
            .map(Swapchain::extent)
            .filter(|e| !e.is_empty())
            .or_else(|| pass.attachment_extent());
        match extent {
            Some(extent) => gl.viewport(0, 0, extent.width, extent.height),
            None => log::debug!("GlDevice: render pass without a size, viewport unchanged"),
        }

        let clear = pass.clear();
        let has_color = !pass.has_attachments() || !pass.color_attachments().is_empty();
        let has_depth = !pass.has_attachments() || pass.depth_attachment().is_some();
        let mut mask = 0;
        if clear.color_enabled && has_color {
            state.shadow.set_color_write_mask(gl, ColorWrites::ALL);
            let [r, g, b, a] = clear.color.to_array();
            gl.clear_color(r, g, b, a);
            mask |= glow::COLOR_BUFFER_BIT;
        }
        if clear.depth_enabled && has_depth {
            state.shadow.set_depth_write(gl, true);
            gl.clear_depth(clear.depth);
            mask |= glow::DEPTH_BUFFER_BIT;
        }
        if mask != 0 {
            gl.clear(mask);
        }

        state.stats.render_passes += 1;
    }

    fn end_render_pass(&self) {
        let mut state = self.shared.state.borrow_mut();
        if state.framebuffer != 0 {
            framebuffer::destroy_transient(&self.shared.gl, state.framebuffer);
            state.framebuffer = 0;
        }
    }

    fn set_graphics_pipeline(&self, pipeline: &GraphicsPipeline) {
        if pipeline.program() == 0 {
            log::warn!(
                "GlDevice: pipeline '{}' has no program, ignored",
                pipeline.label().unwrap_or("Unknown")
            );
            return;
        }
        let gl = &self.shared.gl;
        let mut state = self.shared.state.borrow_mut();

        gl.use_program(pipeline.program());
        gl.bind_vertex_array(pipeline.vertex_array());
        state.shadow.apply(gl, pipeline.state());

        // The vertex array captures attribute pointers and the element
        // buffer, so current buffers are re-attached to the new one.
        if state.vertex_buffer != 0 {
            gl.bind_buffer(glow::ARRAY_BUFFER, state.vertex_buffer);
            pipeline::declare_attributes(gl, pipeline.layout());
        }
        if state.index_buffer != 0 {
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, state.index_buffer);
        }

        state.pipeline = Some(BoundPipeline {
            program: pipeline.program(),
            vertex_array: pipeline.vertex_array(),
            layout: Rc::clone(pipeline.layout()),
        });
        state.stats.pipeline_binds += 1;
    }

    fn set_vertex_buffer(&self, buffer: &Buffer) {
        let gl = &self.shared.gl;
        let mut state = self.shared.state.borrow_mut();
        gl.bind_buffer(glow::ARRAY_BUFFER, buffer.raw());
        state.vertex_buffer = buffer.raw();
        match &state.pipeline {
            Some(bound) => pipeline::declare_attributes(gl, &bound.layout),
            None => log::warn!(
                "GlDevice: vertex buffer {} bound without a pipeline, attributes deferred",
                buffer.raw()
            ),
        }
    }

    fn set_index_buffer(&self, buffer: &Buffer) {
        let mut state = self.shared.state.borrow_mut();
        self.shared
            .gl
            .bind_buffer(glow::ELEMENT_ARRAY_BUFFER, buffer.raw());
        state.index_buffer = buffer.raw();
    }

    fn bind_descriptor_set(&self, set: &DescriptorSet<'_>) {
        let gl = &self.shared.gl;
        let mut state = self.shared.state.borrow_mut();
        let Some(program) = state.pipeline.as_ref().map(|p| p.program) else {
            log::warn!("GlDevice: descriptor set bound without a pipeline, ignored");
            return;
        };

        for binding in set.uniform_buffers() {
            let slot = binding.target.slot();
            if let Some(name) = binding.target.name() {
                if let Some(index) = state.bindings.uniform_block_index(gl, program, name) {
                    state.bindings.apply_block_slot(gl, program, index, slot);
                }
            }
            if binding.size == 0 {
                gl.bind_buffer_base(glow::UNIFORM_BUFFER, slot, binding.buffer.raw());
            } else {
                gl.bind_buffer_range(
                    glow::UNIFORM_BUFFER,
                    slot,
                    binding.buffer.raw(),
                    binding.offset,
                    binding.size,
                );
            }
        }

        for binding in set.sampled_textures() {
            let unit = binding.target.slot();
            if let Some(name) = binding.target.name() {
                if let Some(location) = state.bindings.sampler_location(gl, program, name) {
                    state.bindings.apply_sampler_unit(gl, program, location, unit);
                }
            }
            gl.active_texture(unit);
            gl.bind_texture(glow::TEXTURE_2D, binding.texture.raw());
            gl.bind_sampler(unit, binding.sampler.map_or(0, Sampler::raw));
            state.active_unit = unit;
            state.unit_textures.insert(unit, binding.texture.raw());
        }
    }

    fn draw(&self, vertex_count: u32, first_vertex: u32) {
        let mut state = self.shared.state.borrow_mut();
        if state.pipeline.is_none() {
            log::warn!("GlDevice: draw without a pipeline ignored");
            return;
        }
        self.shared
            .gl
            .draw_arrays(glow::TRIANGLES, first_vertex, vertex_count);
        state.stats.draw_calls += 1;
        state.stats.vertices_submitted += u64::from(vertex_count);
    }

    fn draw_indexed(&self, index_count: u32, first_index: u32, format: IndexFormat) {
        let mut state = self.shared.state.borrow_mut();
        if state.pipeline.is_none() {
            log::warn!("GlDevice: indexed draw without a pipeline ignored");
            return;
        }
        if state.index_buffer == 0 {
            log::warn!("GlDevice: indexed draw without an index buffer ignored");
            return;
        }
        let offset = first_index as usize * format.size();
        self.shared
            .gl
            .draw_elements(glow::TRIANGLES, index_count, format.into_gl(), offset);
        state.stats.draw_calls += 1;
        state.stats.vertices_submitted += u64::from(index_count);
    }

    fn set_debug_wireframe(&self, enabled: bool) {
        let mut state = self.shared.state.borrow_mut();
        let mode = if enabled {
            PolygonMode::Line
        } else {
            PolygonMode::Fill
        };
        state.shadow.set_polygon_mode(&self.shared.gl, mode);
        if state.wireframe != enabled {
            log::debug!("GlDevice: wireframe {}", if enabled { "on" } else { "off" });
            state.wireframe = enabled;
        }
    }

    fn submit(&self, list: &CommandList<'_>) -> Result<(), CommandListError> {
        list.replay(self)?;
        self.shared.state.borrow_mut().stats.command_lists_submitted += 1;
        Ok(())
    }
}
