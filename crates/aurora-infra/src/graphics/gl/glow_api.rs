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

//! [`GlApi`] over a live `glow` context.
//!
//! Every call is `unsafe` in `glow` because it dispatches into the driver.
//! The device only calls into the context from the thread that owns it and
//! only with object names it created itself, which is the contract `glow`
//! requires.

use std::num::NonZeroU32;

use aurora_core::renderer::RawId;
use glow::HasContext;

use super::api::GlApi;

fn raw(name: NonZeroU32) -> RawId {
    name.get()
}

fn native<T>(raw: RawId, wrap: fn(NonZeroU32) -> T) -> Option<T> {
    NonZeroU32::new(raw).map(wrap)
}

impl GlApi for glow::Context {
    fn version(&self) -> (u32, u32) {
        let version = HasContext::version(self);
        (version.major, version.minor)
    }

    fn has_extension(&self, name: &str) -> bool {
        self.supported_extensions().contains(name)
    }

    fn renderer_name(&self) -> String {
        unsafe { self.get_parameter_string(glow::RENDERER) }
    }

    fn create_buffer(&self) -> Result<RawId, String> {
        unsafe { HasContext::create_buffer(self).map(|b| raw(b.0)) }
    }

    fn delete_buffer(&self, buffer: RawId) {
        if let Some(buffer) = native(buffer, glow::NativeBuffer) {
            unsafe { HasContext::delete_buffer(self, buffer) }
        }
    }

    fn bind_buffer(&self, target: u32, buffer: RawId) {
        unsafe { HasContext::bind_buffer(self, target, native(buffer, glow::NativeBuffer)) }
    }

    fn buffer_data(&self, target: u32, data: &[u8], usage: u32) {
        unsafe { self.buffer_data_u8_slice(target, data, usage) }
    }

    fn buffer_storage(&self, target: u32, size: usize, usage: u32) {
        unsafe { self.buffer_data_size(target, size as i32, usage) }
    }

    fn buffer_sub_data(&self, target: u32, offset: usize, data: &[u8]) {
        unsafe { self.buffer_sub_data_u8_slice(target, offset as i32, data) }
    }

    fn bind_buffer_base(&self, target: u32, index: u32, buffer: RawId) {
        unsafe {
            HasContext::bind_buffer_base(self, target, index, native(buffer, glow::NativeBuffer))
        }
    }

    fn bind_buffer_range(&self, target: u32, index: u32, buffer: RawId, offset: usize, size: usize) {
        unsafe {
            HasContext::bind_buffer_range(
                self,
                target,
                index,
                native(buffer, glow::NativeBuffer),
                offset as i32,
                size as i32,
            )
        }
    }

    fn create_texture(&self) -> Result<RawId, String> {
        unsafe { HasContext::create_texture(self).map(|t| raw(t.0)) }
    }

    fn delete_texture(&self, texture: RawId) {
        if let Some(texture) = native(texture, glow::NativeTexture) {
            unsafe { HasContext::delete_texture(self, texture) }
        }
    }

    fn active_texture(&self, unit: u32) {
        unsafe { HasContext::active_texture(self, glow::TEXTURE0 + unit) }
    }

    fn bind_texture(&self, target: u32, texture: RawId) {
        unsafe { HasContext::bind_texture(self, target, native(texture, glow::NativeTexture)) }
    }

    fn tex_image_2d(
        &self,
        target: u32,
        level: u32,
        internal_format: u32,
        width: u32,
        height: u32,
        format: u32,
        ty: u32,
        pixels: Option<&[u8]>,
    ) {
        unsafe {
            HasContext::tex_image_2d(
                self,
                target,
                level as i32,
                internal_format as i32,
                width as i32,
                height as i32,
                0,
                format,
                ty,
                glow::PixelUnpackData::Slice(pixels),
            )
        }
    }

    fn tex_parameter_i32(&self, target: u32, parameter: u32, value: i32) {
        unsafe { HasContext::tex_parameter_i32(self, target, parameter, value) }
    }

    fn pixel_store_i32(&self, parameter: u32, value: i32) {
        unsafe { HasContext::pixel_store_i32(self, parameter, value) }
    }

    fn generate_mipmap(&self, target: u32) {
        unsafe { HasContext::generate_mipmap(self, target) }
    }

    fn create_sampler(&self) -> Result<RawId, String> {
        unsafe { HasContext::create_sampler(self).map(|s| raw(s.0)) }
    }

    fn delete_sampler(&self, sampler: RawId) {
        if let Some(sampler) = native(sampler, glow::NativeSampler) {
            unsafe { HasContext::delete_sampler(self, sampler) }
        }
    }

    fn sampler_parameter_i32(&self, sampler: RawId, parameter: u32, value: i32) {
        if let Some(sampler) = native(sampler, glow::NativeSampler) {
            unsafe { HasContext::sampler_parameter_i32(self, sampler, parameter, value) }
        }
    }

    fn bind_sampler(&self, unit: u32, sampler: RawId) {
        unsafe { HasContext::bind_sampler(self, unit, native(sampler, glow::NativeSampler)) }
    }

    fn create_shader(&self, shader_type: u32) -> Result<RawId, String> {
        unsafe { HasContext::create_shader(self, shader_type).map(|s| raw(s.0)) }
    }

    fn compile_shader(&self, shader: RawId, source: &str) {
        if let Some(shader) = native(shader, glow::NativeShader) {
            unsafe {
                self.shader_source(shader, source);
                HasContext::compile_shader(self, shader);
            }
        }
    }

    fn shader_compile_status(&self, shader: RawId) -> bool {
        native(shader, glow::NativeShader)
            .is_some_and(|shader| unsafe { self.get_shader_compile_status(shader) })
    }

    fn shader_info_log(&self, shader: RawId) -> String {
        native(shader, glow::NativeShader)
            .map(|shader| unsafe { self.get_shader_info_log(shader) })
            .unwrap_or_default()
    }

    fn delete_shader(&self, shader: RawId) {
        if let Some(shader) = native(shader, glow::NativeShader) {
            unsafe { HasContext::delete_shader(self, shader) }
        }
    }

    fn create_program(&self) -> Result<RawId, String> {
        unsafe { HasContext::create_program(self).map(|p| raw(p.0)) }
    }

    fn attach_shader(&self, program: RawId, shader: RawId) {
        if let (Some(program), Some(shader)) = (
            native(program, glow::NativeProgram),
            native(shader, glow::NativeShader),
        ) {
            unsafe { HasContext::attach_shader(self, program, shader) }
        }
    }

    fn detach_shader(&self, program: RawId, shader: RawId) {
        if let (Some(program), Some(shader)) = (
            native(program, glow::NativeProgram),
            native(shader, glow::NativeShader),
        ) {
            unsafe { HasContext::detach_shader(self, program, shader) }
        }
    }

    fn link_program(&self, program: RawId) {
        if let Some(program) = native(program, glow::NativeProgram) {
            unsafe { HasContext::link_program(self, program) }
        }
    }

    fn program_link_status(&self, program: RawId) -> bool {
        native(program, glow::NativeProgram)
            .is_some_and(|program| unsafe { self.get_program_link_status(program) })
    }

    fn program_info_log(&self, program: RawId) -> String {
        native(program, glow::NativeProgram)
            .map(|program| unsafe { self.get_program_info_log(program) })
            .unwrap_or_default()
    }

    fn delete_program(&self, program: RawId) {
        if let Some(program) = native(program, glow::NativeProgram) {
            unsafe { HasContext::delete_program(self, program) }
        }
    }

    fn use_program(&self, program: RawId) {
        unsafe { HasContext::use_program(self, native(program, glow::NativeProgram)) }
    }

    fn uniform_block_index(&self, program: RawId, name: &str) -> Option<u32> {
        let program = native(program, glow::NativeProgram)?;
        unsafe { self.get_uniform_block_index(program, name) }
    }

    fn uniform_block_binding(&self, program: RawId, index: u32, binding: u32) {
        if let Some(program) = native(program, glow::NativeProgram) {
            unsafe { HasContext::uniform_block_binding(self, program, index, binding) }
        }
    }

    fn uniform_location(&self, program: RawId, name: &str) -> Option<u32> {
        let program = native(program, glow::NativeProgram)?;
        unsafe { self.get_uniform_location(program, name) }.map(|location| location.0)
    }

    fn uniform_1_i32(&self, location: u32, value: i32) {
        let location = glow::NativeUniformLocation(location);
        unsafe { HasContext::uniform_1_i32(self, Some(&location), value) }
    }

    fn create_vertex_array(&self) -> Result<RawId, String> {
        unsafe { HasContext::create_vertex_array(self).map(|v| raw(v.0)) }
    }

    fn delete_vertex_array(&self, vertex_array: RawId) {
        if let Some(vertex_array) = native(vertex_array, glow::NativeVertexArray) {
            unsafe { HasContext::delete_vertex_array(self, vertex_array) }
        }
    }

    fn bind_vertex_array(&self, vertex_array: RawId) {
        unsafe {
            HasContext::bind_vertex_array(self, native(vertex_array, glow::NativeVertexArray))
        }
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe { HasContext::enable_vertex_attrib_array(self, index) }
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, components: u32, stride: u32, offset: u32) {
        unsafe {
            HasContext::vertex_attrib_pointer_f32(
                self,
                index,
                components as i32,
                glow::FLOAT,
                false,
                stride as i32,
                offset as i32,
            )
        }
    }

    fn create_framebuffer(&self) -> Result<RawId, String> {
        unsafe { HasContext::create_framebuffer(self).map(|f| raw(f.0)) }
    }

    fn delete_framebuffer(&self, framebuffer: RawId) {
        if let Some(framebuffer) = native(framebuffer, glow::NativeFramebuffer) {
            unsafe { HasContext::delete_framebuffer(self, framebuffer) }
        }
    }

    fn bind_framebuffer(&self, target: u32, framebuffer: RawId) {
        unsafe {
            HasContext::bind_framebuffer(self, target, native(framebuffer, glow::NativeFramebuffer))
        }
    }

    fn framebuffer_texture_2d(
        &self,
        target: u32,
        attachment: u32,
        texture_target: u32,
        texture: RawId,
        level: u32,
    ) {
        unsafe {
            HasContext::framebuffer_texture_2d(
                self,
                target,
                attachment,
                texture_target,
                native(texture, glow::NativeTexture),
                level as i32,
            )
        }
    }

    fn draw_buffers(&self, buffers: &[u32]) {
        unsafe { HasContext::draw_buffers(self, buffers) }
    }

    fn draw_buffer(&self, buffer: u32) {
        unsafe { HasContext::draw_buffer(self, buffer) }
    }

    fn read_buffer(&self, buffer: u32) {
        unsafe { HasContext::read_buffer(self, buffer) }
    }

    fn check_framebuffer_status(&self, target: u32) -> u32 {
        unsafe { HasContext::check_framebuffer_status(self, target) }
    }

    fn enable(&self, capability: u32) {
        unsafe { HasContext::enable(self, capability) }
    }

    fn disable(&self, capability: u32) {
        unsafe { HasContext::disable(self, capability) }
    }

    fn cull_face(&self, mode: u32) {
        unsafe { HasContext::cull_face(self, mode) }
    }

    fn front_face(&self, mode: u32) {
        unsafe { HasContext::front_face(self, mode) }
    }

    fn blend_func_separate(&self, src_rgb: u32, dst_rgb: u32, src_alpha: u32, dst_alpha: u32) {
        unsafe { HasContext::blend_func_separate(self, src_rgb, dst_rgb, src_alpha, dst_alpha) }
    }

    fn blend_equation_separate(&self, mode_rgb: u32, mode_alpha: u32) {
        unsafe { HasContext::blend_equation_separate(self, mode_rgb, mode_alpha) }
    }

    fn color_mask(&self, r: bool, g: bool, b: bool, a: bool) {
        unsafe { HasContext::color_mask(self, r, g, b, a) }
    }

    fn depth_mask(&self, enabled: bool) {
        unsafe { HasContext::depth_mask(self, enabled) }
    }

    fn depth_func(&self, func: u32) {
        unsafe { HasContext::depth_func(self, func) }
    }

    fn polygon_mode(&self, mode: u32) {
        unsafe { HasContext::polygon_mode(self, glow::FRONT_AND_BACK, mode) }
    }

    fn viewport(&self, x: i32, y: i32, width: u32, height: u32) {
        unsafe { HasContext::viewport(self, x, y, width as i32, height as i32) }
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        unsafe { HasContext::clear_color(self, r, g, b, a) }
    }

    fn clear_depth(&self, depth: f32) {
        unsafe { self.clear_depth_f32(depth) }
    }

    fn clear(&self, mask: u32) {
        unsafe { HasContext::clear(self, mask) }
    }

    fn draw_arrays(&self, mode: u32, first: u32, count: u32) {
        unsafe { HasContext::draw_arrays(self, mode, first as i32, count as i32) }
    }

    fn draw_elements(&self, mode: u32, count: u32, element_type: u32, offset: usize) {
        unsafe { HasContext::draw_elements(self, mode, count as i32, element_type, offset as i32) }
    }
}
