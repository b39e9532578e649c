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

//! The slice of the OpenGL API the device drives.
//!
//! Object names are plain `u32` values (`0` meaning "none") and enums are the
//! raw `glow` constants, so an implementation can wrap a real context or
//! record calls for inspection.

use aurora_core::renderer::RawId;

/// An OpenGL 3.3+ core context.
///
/// Every method mirrors one GL entry point. Implementations are expected to
/// be single-threaded and to keep the context current while called.
pub trait GlApi {
    // --- Queries ---

    /// The context version as `(major, minor)`.
    fn version(&self) -> (u32, u32);
    /// Returns `true` if the named extension is supported.
    fn has_extension(&self, name: &str) -> bool;
    /// The `GL_RENDERER` string.
    fn renderer_name(&self) -> String;

    // --- Buffers ---

    /// `glGenBuffers`
    fn create_buffer(&self) -> Result<RawId, String>;
    /// `glDeleteBuffers`
    fn delete_buffer(&self, buffer: RawId);
    /// `glBindBuffer`
    fn bind_buffer(&self, target: u32, buffer: RawId);
    /// `glBufferData` with initial contents.
    fn buffer_data(&self, target: u32, data: &[u8], usage: u32);
    /// `glBufferData` with uninitialized storage.
    fn buffer_storage(&self, target: u32, size: usize, usage: u32);
    /// `glBufferSubData`
    fn buffer_sub_data(&self, target: u32, offset: usize, data: &[u8]);
    /// `glBindBufferBase`
    fn bind_buffer_base(&self, target: u32, index: u32, buffer: RawId);
    /// `glBindBufferRange`
    fn bind_buffer_range(&self, target: u32, index: u32, buffer: RawId, offset: usize, size: usize);

    // --- Textures and samplers ---

    /// `glGenTextures`
    fn create_texture(&self) -> Result<RawId, String>;
    /// `glDeleteTextures`
    fn delete_texture(&self, texture: RawId);
    /// `glActiveTexture` with `GL_TEXTURE0 + unit`.
    fn active_texture(&self, unit: u32);
    /// `glBindTexture`
    fn bind_texture(&self, target: u32, texture: RawId);
    /// `glTexImage2D`
    #[allow(clippy::too_many_arguments)]
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
    );
    /// `glTexParameteri`
    fn tex_parameter_i32(&self, target: u32, parameter: u32, value: i32);
    /// `glGenerateMipmap`
    fn generate_mipmap(&self, target: u32);
    /// `glPixelStorei`
    fn pixel_store_i32(&self, parameter: u32, value: i32);
    /// `glGenSamplers`
    fn create_sampler(&self) -> Result<RawId, String>;
    /// `glDeleteSamplers`
    fn delete_sampler(&self, sampler: RawId);
    /// `glSamplerParameteri`
    fn sampler_parameter_i32(&self, sampler: RawId, parameter: u32, value: i32);
    /// `glBindSampler`
    fn bind_sampler(&self, unit: u32, sampler: RawId);

    // --- Shaders and programs ---

    /// `glCreateShader`
    fn create_shader(&self, shader_type: u32) -> Result<RawId, String>;
    /// `glShaderSource` followed by `glCompileShader`.
    fn compile_shader(&self, shader: RawId, source: &str);
    /// `GL_COMPILE_STATUS`
    fn shader_compile_status(&self, shader: RawId) -> bool;
    /// `glGetShaderInfoLog`
    fn shader_info_log(&self, shader: RawId) -> String;
    /// `glDeleteShader`
    fn delete_shader(&self, shader: RawId);
    /// `glCreateProgram`
    fn create_program(&self) -> Result<RawId, String>;
    /// `glAttachShader`
    fn attach_shader(&self, program: RawId, shader: RawId);
    /// `glDetachShader`
    fn detach_shader(&self, program: RawId, shader: RawId);
    /// `glLinkProgram`
    fn link_program(&self, program: RawId);
    /// `GL_LINK_STATUS`
    fn program_link_status(&self, program: RawId) -> bool;
    /// `glGetProgramInfoLog`
    fn program_info_log(&self, program: RawId) -> String;
    /// `glDeleteProgram`
    fn delete_program(&self, program: RawId);
    /// `glUseProgram`
    fn use_program(&self, program: RawId);
    /// `glGetUniformBlockIndex`. `None` for `GL_INVALID_INDEX`.
    fn uniform_block_index(&self, program: RawId, name: &str) -> Option<u32>;
    /// `glUniformBlockBinding`
    fn uniform_block_binding(&self, program: RawId, index: u32, binding: u32);
    /// `glGetUniformLocation`. `None` for `-1`.
    fn uniform_location(&self, program: RawId, name: &str) -> Option<u32>;
    /// `glUniform1i` on the program in use.
    fn uniform_1_i32(&self, location: u32, value: i32);

    // --- Vertex arrays ---

    /// `glGenVertexArrays`
    fn create_vertex_array(&self) -> Result<RawId, String>;
    /// `glDeleteVertexArrays`
    fn delete_vertex_array(&self, vertex_array: RawId);
    /// `glBindVertexArray`
    fn bind_vertex_array(&self, vertex_array: RawId);
    /// `glEnableVertexAttribArray`
    fn enable_vertex_attrib_array(&self, index: u32);
    /// `glVertexAttribPointer` for non-normalized `GL_FLOAT` data.
    fn vertex_attrib_pointer_f32(&self, index: u32, components: u32, stride: u32, offset: u32);

    // --- Framebuffers ---

    /// `glGenFramebuffers`
    fn create_framebuffer(&self) -> Result<RawId, String>;
    /// `glDeleteFramebuffers`
    fn delete_framebuffer(&self, framebuffer: RawId);
    /// `glBindFramebuffer`
    fn bind_framebuffer(&self, target: u32, framebuffer: RawId);
    /// `glFramebufferTexture2D`
    fn framebuffer_texture_2d(
        &self,
        target: u32,
        attachment: u32,
        texture_target: u32,
        texture: RawId,
        level: u32,
    );
    /// `glDrawBuffers`
    fn draw_buffers(&self, buffers: &[u32]);
    /// `glDrawBuffer`
    fn draw_buffer(&self, buffer: u32);
    /// `glReadBuffer`
    fn read_buffer(&self, buffer: u32);
    /// `glCheckFramebufferStatus`
    fn check_framebuffer_status(&self, target: u32) -> u32;

    // --- Fixed-function state ---

    /// `glEnable`
    fn enable(&self, capability: u32);
    /// `glDisable`
    fn disable(&self, capability: u32);
    /// `glCullFace`
    fn cull_face(&self, mode: u32);
    /// `glFrontFace`
    fn front_face(&self, mode: u32);
    /// `glBlendFuncSeparate`
    fn blend_func_separate(&self, src_rgb: u32, dst_rgb: u32, src_alpha: u32, dst_alpha: u32);
    /// `glBlendEquationSeparate`
    fn blend_equation_separate(&self, mode_rgb: u32, mode_alpha: u32);
    /// `glColorMask`
    fn color_mask(&self, r: bool, g: bool, b: bool, a: bool);
    /// `glDepthMask`
    fn depth_mask(&self, enabled: bool);
    /// `glDepthFunc`
    fn depth_func(&self, func: u32);
    /// `glPolygonMode` for `GL_FRONT_AND_BACK`.
    fn polygon_mode(&self, mode: u32);
    /// `glViewport`
    fn viewport(&self, x: i32, y: i32, width: u32, height: u32);
    /// `glClearColor`
    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);
    /// `glClearDepth`
    fn clear_depth(&self, depth: f32);
    /// `glClear`
    fn clear(&self, mask: u32);

    // --- Draws ---

    /// `glDrawArrays`
    fn draw_arrays(&self, mode: u32, first: u32, count: u32);
    /// `glDrawElements` with a byte offset into the bound element buffer.
    fn draw_elements(&self, mode: u32, count: u32, element_type: u32, offset: usize);
}
