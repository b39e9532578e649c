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

//! A headless [`GlApi`] that records every call.
//!
//! [`RecordingGl`] hands out object names, keeps buffer contents, compiles
//! and links by simple rules and answers uniform queries by scanning shader
//! sources. It lets the device run without a driver and lets tests assert on
//! the exact call stream.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use aurora_core::renderer::RawId;

use super::api::GlApi;

/// The kind of a simulated GL object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlObjectKind {
    /// A buffer object.
    Buffer,
    /// A texture object.
    Texture,
    /// A sampler object.
    Sampler,
    /// A shader object.
    Shader,
    /// A program object.
    Program,
    /// A vertex-array object.
    VertexArray,
    /// A framebuffer object.
    Framebuffer,
}

/// One recorded GL call with its arguments.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub enum GlCall {
    CreateObject { kind: GlObjectKind, name: RawId },
    DeleteObject { kind: GlObjectKind, name: RawId },
    BindBuffer { target: u32, buffer: RawId },
    BufferData { target: u32, size: usize, usage: u32, initialized: bool },
    BufferSubData { target: u32, offset: usize, len: usize },
    BindBufferBase { target: u32, index: u32, buffer: RawId },
    BindBufferRange { target: u32, index: u32, buffer: RawId, offset: usize, size: usize },
    ActiveTexture(u32),
    BindTexture { target: u32, texture: RawId },
    TexImage2D { level: u32, internal_format: u32, width: u32, height: u32, has_pixels: bool },
    TexParameter { parameter: u32, value: i32 },
    GenerateMipmap(u32),
    PixelStore { parameter: u32, value: i32 },
    SamplerParameter { sampler: RawId, parameter: u32, value: i32 },
    BindSampler { unit: u32, sampler: RawId },
    CompileShader(RawId),
    AttachShader { program: RawId, shader: RawId },
    DetachShader { program: RawId, shader: RawId },
    LinkProgram(RawId),
    UseProgram(RawId),
    GetUniformBlockIndex { program: RawId, name: String },
    UniformBlockBinding { program: RawId, index: u32, binding: u32 },
    GetUniformLocation { program: RawId, name: String },
    Uniform1i { location: u32, value: i32 },
    BindVertexArray(RawId),
    EnableVertexAttribArray(u32),
    VertexAttribPointer { index: u32, components: u32, stride: u32, offset: u32 },
    BindFramebuffer { target: u32, framebuffer: RawId },
    FramebufferTexture2D { attachment: u32, texture: RawId, level: u32 },
    DrawBuffers(Vec<u32>),
    DrawBuffer(u32),
    ReadBuffer(u32),
    CheckFramebufferStatus(u32),
    Enable(u32),
    Disable(u32),
    CullFace(u32),
    FrontFace(u32),
    BlendFuncSeparate { src_rgb: u32, dst_rgb: u32, src_alpha: u32, dst_alpha: u32 },
    BlendEquationSeparate { rgb: u32, alpha: u32 },
    ColorMask(bool, bool, bool, bool),
    DepthMask(bool),
    DepthFunc(u32),
    PolygonMode(u32),
    Viewport { x: i32, y: i32, width: u32, height: u32 },
    ClearColor([f32; 4]),
    ClearDepth(f32),
    Clear(u32),
    DrawArrays { mode: u32, first: u32, count: u32 },
    DrawElements { mode: u32, count: u32, element_type: u32, offset: usize },
}

#[derive(Debug)]
struct MockShader {
    source: String,
    compiled: bool,
}

#[derive(Debug, Default)]
struct MockProgram {
    shaders: Vec<RawId>,
    linked: bool,
    log: String,
    blocks: Vec<String>,
    uniforms: Vec<String>,
}

#[derive(Debug, Default)]
struct Recorder {
    calls: Vec<GlCall>,
    next_name: RawId,
    live: HashMap<RawId, GlObjectKind>,
    buffers: HashMap<RawId, Vec<u8>>,
    buffer_bindings: HashMap<u32, RawId>,
    shaders: HashMap<RawId, MockShader>,
    programs: HashMap<RawId, MockProgram>,
    attachments: HashMap<RawId, HashSet<u32>>,
    draw_framebuffer: RawId,
}

impl Recorder {
    fn create(&mut self, kind: GlObjectKind) -> RawId {
        self.next_name += 1;
        let name = self.next_name;
        self.live.insert(name, kind);
        self.calls.push(GlCall::CreateObject { kind, name });
        name
    }

    fn delete(&mut self, kind: GlObjectKind, name: RawId) {
        if name == 0 {
            return;
        }
        if self.live.remove(&name).is_none() {
            log::warn!("RecordingGl: deleting unknown {:?} {}", kind, name);
        }
        self.calls.push(GlCall::DeleteObject { kind, name });
    }
}

/// A recording, headless OpenGL implementation.
#[derive(Debug)]
pub struct RecordingGl {
    version: (u32, u32),
    extensions: HashSet<String>,
    inner: RefCell<Recorder>,
}

impl Default for RecordingGl {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingGl {
    /// Creates a recorder reporting an OpenGL 3.3 core context.
    pub fn new() -> Self {
        Self {
            version: (3, 3),
            extensions: HashSet::new(),
            inner: RefCell::new(Recorder::default()),
        }
    }

    /// Reports the given context version.
    pub fn with_version(mut self, major: u32, minor: u32) -> Self {
        self.version = (major, minor);
        self
    }

    /// Reports the given extension as supported.
    pub fn with_extension(mut self, name: &str) -> Self {
        self.extensions.insert(name.to_string());
        self
    }

    /// A copy of every call recorded so far.
    pub fn calls(&self) -> Vec<GlCall> {
        self.inner.borrow().calls.clone()
    }

    /// Removes and returns the recorded calls.
    pub fn take_calls(&self) -> Vec<GlCall> {
        std::mem::take(&mut self.inner.borrow_mut().calls)
    }

    /// The number of recorded calls matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&GlCall) -> bool) -> usize {
        self.inner.borrow().calls.iter().filter(|c| predicate(c)).count()
    }

    /// The current contents of a buffer object.
    pub fn buffer_contents(&self, buffer: RawId) -> Option<Vec<u8>> {
        self.inner.borrow().buffers.get(&buffer).cloned()
    }

    /// The number of objects created and not yet deleted.
    pub fn live_objects(&self) -> usize {
        self.inner.borrow().live.len()
    }

    /// The number of live objects of one kind.
    pub fn live_objects_of(&self, kind: GlObjectKind) -> usize {
        self.inner.borrow().live.values().filter(|k| **k == kind).count()
    }

    fn push(&self, call: GlCall) {
        self.inner.borrow_mut().calls.push(call);
    }
}

/// Collects uniform block names and plain uniform names declared in GLSL.
fn scan_uniforms(source: &str, blocks: &mut Vec<String>, uniforms: &mut Vec<String>) {
    for line in source.lines() {
        let Some(start) = line.find("uniform") else {
            continue;
        };
        let rest = &line[start + "uniform".len()..];
        if !rest.starts_with(char::is_whitespace) {
            continue;
        }
        let mut words = rest
            .split(|c: char| c.is_whitespace() || c == ';' || c == '{')
            .filter(|w| !w.is_empty());
        let Some(first) = words.next() else {
            continue;
        };
        let (list, name) = match words.next() {
            Some(name) => (&mut *uniforms, name.split('[').next().unwrap_or(name)),
            None => (&mut *blocks, first),
        };
        if !list.iter().any(|n| n == name) {
            list.push(name.to_string());
        }
    }
}

impl GlApi for RecordingGl {
    fn version(&self) -> (u32, u32) {
        self.version
    }

    fn has_extension(&self, name: &str) -> bool {
        self.extensions.contains(name)
    }

    fn renderer_name(&self) -> String {
        "RecordingGl".to_string()
    }

    fn create_buffer(&self) -> Result<RawId, String> {
        let mut inner = self.inner.borrow_mut();
        let name = inner.create(GlObjectKind::Buffer);
        inner.buffers.insert(name, Vec::new());
        Ok(name)
    }

    fn delete_buffer(&self, buffer: RawId) {
        let mut inner = self.inner.borrow_mut();
        inner.buffers.remove(&buffer);
        inner.buffer_bindings.retain(|_, b| *b != buffer);
        inner.delete(GlObjectKind::Buffer, buffer);
    }

    fn bind_buffer(&self, target: u32, buffer: RawId) {
        let mut inner = self.inner.borrow_mut();
        inner.buffer_bindings.insert(target, buffer);
        inner.calls.push(GlCall::BindBuffer { target, buffer });
    }

    fn buffer_data(&self, target: u32, data: &[u8], usage: u32) {
        let mut inner = self.inner.borrow_mut();
        let bound = inner.buffer_bindings.get(&target).copied().unwrap_or(0);
        if let Some(contents) = inner.buffers.get_mut(&bound) {
            *contents = data.to_vec();
        }
        inner.calls.push(GlCall::BufferData {
            target,
            size: data.len(),
            usage,
            initialized: true,
        });
    }

    fn buffer_storage(&self, target: u32, size: usize, usage: u32) {
        let mut inner = self.inner.borrow_mut();
        let bound = inner.buffer_bindings.get(&target).copied().unwrap_or(0);
        if let Some(contents) = inner.buffers.get_mut(&bound) {
            *contents = vec![0; size];
        }
        inner.calls.push(GlCall::BufferData {
            target,
            size,
            usage,
            initialized: false,
        });
    }

    fn buffer_sub_data(&self, target: u32, offset: usize, data: &[u8]) {
        let mut inner = self.inner.borrow_mut();
        let bound = inner.buffer_bindings.get(&target).copied().unwrap_or(0);
        if let Some(contents) = inner.buffers.get_mut(&bound) {
            match contents.get_mut(offset..offset + data.len()) {
                Some(range) => range.copy_from_slice(data),
                None => log::warn!("RecordingGl: sub-data write past the end of buffer {}", bound),
            }
        }
        inner.calls.push(GlCall::BufferSubData {
            target,
            offset,
            len: data.len(),
        });
    }

    fn bind_buffer_base(&self, target: u32, index: u32, buffer: RawId) {
        self.push(GlCall::BindBufferBase {
            target,
            index,
            buffer,
        });
    }

    fn bind_buffer_range(&self, target: u32, index: u32, buffer: RawId, offset: usize, size: usize) {
        self.push(GlCall::BindBufferRange {
            target,
            index,
            buffer,
            offset,
            size,
        });
    }

    fn create_texture(&self) -> Result<RawId, String> {
        Ok(self.inner.borrow_mut().create(GlObjectKind::Texture))
    }

    fn delete_texture(&self, texture: RawId) {
        self.inner.borrow_mut().delete(GlObjectKind::Texture, texture);
    }

    fn active_texture(&self, unit: u32) {
        self.push(GlCall::ActiveTexture(unit));
    }

    fn bind_texture(&self, target: u32, texture: RawId) {
        self.push(GlCall::BindTexture { target, texture });
    }

    fn tex_image_2d(
        &self,
        _target: u32,
        level: u32,
        internal_format: u32,
        width: u32,
        height: u32,
        _format: u32,
        _ty: u32,
        pixels: Option<&[u8]>,
    ) {
        self.push(GlCall::TexImage2D {
            level,
            internal_format,
            width,
            height,
            has_pixels: pixels.is_some(),
        });
    }

    fn tex_parameter_i32(&self, _target: u32, parameter: u32, value: i32) {
        self.push(GlCall::TexParameter { parameter, value });
    }

    fn generate_mipmap(&self, target: u32) {
        self.push(GlCall::GenerateMipmap(target));
    }

    fn pixel_store_i32(&self, parameter: u32, value: i32) {
        self.push(GlCall::PixelStore { parameter, value });
    }

    fn create_sampler(&self) -> Result<RawId, String> {
        Ok(self.inner.borrow_mut().create(GlObjectKind::Sampler))
    }

    fn delete_sampler(&self, sampler: RawId) {
        self.inner.borrow_mut().delete(GlObjectKind::Sampler, sampler);
    }

    fn sampler_parameter_i32(&self, sampler: RawId, parameter: u32, value: i32) {
        self.push(GlCall::SamplerParameter {
            sampler,
            parameter,
            value,
        });
    }

    fn bind_sampler(&self, unit: u32, sampler: RawId) {
        self.push(GlCall::BindSampler { unit, sampler });
    }

    fn create_shader(&self, _shader_type: u32) -> Result<RawId, String> {
        let mut inner = self.inner.borrow_mut();
        let name = inner.create(GlObjectKind::Shader);
        inner.shaders.insert(
            name,
            MockShader {
                source: String::new(),
                compiled: false,
            },
        );
        Ok(name)
    }

    fn compile_shader(&self, shader: RawId, source: &str) {
        let mut inner = self.inner.borrow_mut();
        if let Some(entry) = inner.shaders.get_mut(&shader) {
            entry.source = source.to_string();
            entry.compiled = !source.trim().is_empty() && !source.contains("#error");
        }
        inner.calls.push(GlCall::CompileShader(shader));
    }

    fn shader_compile_status(&self, shader: RawId) -> bool {
        self.inner
            .borrow()
            .shaders
            .get(&shader)
            .is_some_and(|s| s.compiled)
    }

    fn shader_info_log(&self, shader: RawId) -> String {
        match self.inner.borrow().shaders.get(&shader) {
            Some(s) if !s.compiled && s.source.trim().is_empty() => {
                "0:1: error: empty translation unit".to_string()
            }
            Some(s) if !s.compiled => "0:1: error: #error directive".to_string(),
            _ => String::new(),
        }
    }

    fn delete_shader(&self, shader: RawId) {
        let mut inner = self.inner.borrow_mut();
        inner.shaders.remove(&shader);
        inner.delete(GlObjectKind::Shader, shader);
    }

    fn create_program(&self) -> Result<RawId, String> {
        let mut inner = self.inner.borrow_mut();
        let name = inner.create(GlObjectKind::Program);
        inner.programs.insert(name, MockProgram::default());
        Ok(name)
    }

    fn attach_shader(&self, program: RawId, shader: RawId) {
        let mut inner = self.inner.borrow_mut();
        if let Some(entry) = inner.programs.get_mut(&program) {
            entry.shaders.push(shader);
        }
        inner.calls.push(GlCall::AttachShader { program, shader });
    }

    fn detach_shader(&self, program: RawId, shader: RawId) {
        let mut inner = self.inner.borrow_mut();
        if let Some(entry) = inner.programs.get_mut(&program) {
            entry.shaders.retain(|s| *s != shader);
        }
        inner.calls.push(GlCall::DetachShader { program, shader });
    }

    fn link_program(&self, program: RawId) {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(GlCall::LinkProgram(program));
        let Recorder {
            programs, shaders, ..
        } = &mut *inner;
        let Some(entry) = programs.get_mut(&program) else {
            return;
        };
        let attached: Vec<&MockShader> = entry
            .shaders
            .iter()
            .filter_map(|s| shaders.get(s))
            .collect();
        entry.blocks.clear();
        entry.uniforms.clear();
        if attached.len() < 2 || attached.iter().any(|s| !s.compiled) {
            entry.linked = false;
            entry.log = "error: program needs two compiled stages".to_string();
            return;
        }
        for shader in attached {
            scan_uniforms(&shader.source, &mut entry.blocks, &mut entry.uniforms);
        }
        entry.linked = true;
        entry.log.clear();
    }

    fn program_link_status(&self, program: RawId) -> bool {
        self.inner
            .borrow()
            .programs
            .get(&program)
            .is_some_and(|p| p.linked)
    }

    fn program_info_log(&self, program: RawId) -> String {
        self.inner
            .borrow()
            .programs
            .get(&program)
            .map(|p| p.log.clone())
            .unwrap_or_default()
    }

    fn delete_program(&self, program: RawId) {
        let mut inner = self.inner.borrow_mut();
        inner.programs.remove(&program);
        inner.delete(GlObjectKind::Program, program);
    }

    fn use_program(&self, program: RawId) {
        self.push(GlCall::UseProgram(program));
    }

    fn uniform_block_index(&self, program: RawId, name: &str) -> Option<u32> {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(GlCall::GetUniformBlockIndex {
            program,
            name: name.to_string(),
        });
        let entry = inner.programs.get(&program).filter(|p| p.linked)?;
        entry.blocks.iter().position(|b| b == name).map(|i| i as u32)
    }

    fn uniform_block_binding(&self, program: RawId, index: u32, binding: u32) {
        self.push(GlCall::UniformBlockBinding {
            program,
            index,
            binding,
        });
    }

    fn uniform_location(&self, program: RawId, name: &str) -> Option<u32> {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(GlCall::GetUniformLocation {
            program,
            name: name.to_string(),
        });
        let entry = inner.programs.get(&program).filter(|p| p.linked)?;
        entry.uniforms.iter().position(|u| u == name).map(|i| i as u32)
    }

    fn uniform_1_i32(&self, location: u32, value: i32) {
        self.push(GlCall::Uniform1i { location, value });
    }

    fn create_vertex_array(&self) -> Result<RawId, String> {
        Ok(self.inner.borrow_mut().create(GlObjectKind::VertexArray))
    }

    fn delete_vertex_array(&self, vertex_array: RawId) {
        self.inner
            .borrow_mut()
            .delete(GlObjectKind::VertexArray, vertex_array);
    }

    fn bind_vertex_array(&self, vertex_array: RawId) {
        self.push(GlCall::BindVertexArray(vertex_array));
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        self.push(GlCall::EnableVertexAttribArray(index));
    }

    fn vertex_attrib_pointer_f32(&self, index: u32, components: u32, stride: u32, offset: u32) {
        self.push(GlCall::VertexAttribPointer {
            index,
            components,
            stride,
            offset,
        });
    }

    fn create_framebuffer(&self) -> Result<RawId, String> {
        let mut inner = self.inner.borrow_mut();
        let name = inner.create(GlObjectKind::Framebuffer);
        inner.attachments.insert(name, HashSet::new());
        Ok(name)
    }

    fn delete_framebuffer(&self, framebuffer: RawId) {
        let mut inner = self.inner.borrow_mut();
        inner.attachments.remove(&framebuffer);
        if inner.draw_framebuffer == framebuffer {
            inner.draw_framebuffer = 0;
        }
        inner.delete(GlObjectKind::Framebuffer, framebuffer);
    }

    fn bind_framebuffer(&self, target: u32, framebuffer: RawId) {
        let mut inner = self.inner.borrow_mut();
        if target == glow::FRAMEBUFFER || target == glow::DRAW_FRAMEBUFFER {
            inner.draw_framebuffer = framebuffer;
        }
        inner.calls.push(GlCall::BindFramebuffer {
            target,
            framebuffer,
        });
    }

    fn framebuffer_texture_2d(
        &self,
        _target: u32,
        attachment: u32,
        _texture_target: u32,
        texture: RawId,
        level: u32,
    ) {
        let mut inner = self.inner.borrow_mut();
        let bound = inner.draw_framebuffer;
        if let Some(points) = inner.attachments.get_mut(&bound) {
            if texture == 0 {
                points.remove(&attachment);
            } else {
                points.insert(attachment);
            }
        }
        inner.calls.push(GlCall::FramebufferTexture2D {
            attachment,
            texture,
            level,
        });
    }

    fn draw_buffers(&self, buffers: &[u32]) {
        self.push(GlCall::DrawBuffers(buffers.to_vec()));
    }

    fn draw_buffer(&self, buffer: u32) {
        self.push(GlCall::DrawBuffer(buffer));
    }

    fn read_buffer(&self, buffer: u32) {
        self.push(GlCall::ReadBuffer(buffer));
    }

    fn check_framebuffer_status(&self, target: u32) -> u32 {
        let mut inner = self.inner.borrow_mut();
        inner.calls.push(GlCall::CheckFramebufferStatus(target));
        let bound = inner.draw_framebuffer;
        match inner.attachments.get(&bound) {
            _ if bound == 0 => glow::FRAMEBUFFER_COMPLETE,
            Some(points) if !points.is_empty() => glow::FRAMEBUFFER_COMPLETE,
            _ => glow::FRAMEBUFFER_INCOMPLETE_MISSING_ATTACHMENT,
        }
    }

    fn enable(&self, capability: u32) {
        self.push(GlCall::Enable(capability));
    }

    fn disable(&self, capability: u32) {
        self.push(GlCall::Disable(capability));
    }

    fn cull_face(&self, mode: u32) {
        self.push(GlCall::CullFace(mode));
    }

    fn front_face(&self, mode: u32) {
        self.push(GlCall::FrontFace(mode));
    }

    fn blend_func_separate(&self, src_rgb: u32, dst_rgb: u32, src_alpha: u32, dst_alpha: u32) {
        self.push(GlCall::BlendFuncSeparate {
            src_rgb,
            dst_rgb,
            src_alpha,
            dst_alpha,
        });
    }

    fn blend_equation_separate(&self, mode_rgb: u32, mode_alpha: u32) {
        self.push(GlCall::BlendEquationSeparate {
            rgb: mode_rgb,
            alpha: mode_alpha,
        });
    }

    fn color_mask(&self, r: bool, g: bool, b: bool, a: bool) {
        self.push(GlCall::ColorMask(r, g, b, a));
    }

    fn depth_mask(&self, enabled: bool) {
        self.push(GlCall::DepthMask(enabled));
    }

    fn depth_func(&self, func: u32) {
        self.push(GlCall::DepthFunc(func));
    }

    fn polygon_mode(&self, mode: u32) {
        self.push(GlCall::PolygonMode(mode));
    }

    fn viewport(&self, x: i32, y: i32, width: u32, height: u32) {
        self.push(GlCall::Viewport {
            x,
            y,
            width,
            height,
        });
    }

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.push(GlCall::ClearColor([r, g, b, a]));
    }

    fn clear_depth(&self, depth: f32) {
        self.push(GlCall::ClearDepth(depth));
    }

    fn clear(&self, mask: u32) {
        self.push(GlCall::Clear(mask));
    }

    fn draw_arrays(&self, mode: u32, first: u32, count: u32) {
        self.push(GlCall::DrawArrays { mode, first, count });
    }

    fn draw_elements(&self, mode: u32, count: u32, element_type: u32, offset: usize) {
        self.push(GlCall::DrawElements {
            mode,
            count,
            element_type,
            offset,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERTEX: &str = "#version 330 core\n\
        layout(std140) uniform Globals {\n    mat4 view_proj;\n};\n\
        uniform mat4 u_model;\n\
        void main() {}\n";
    const FRAGMENT: &str = "#version 330 core\n\
        uniform sampler2D u_albedo;\n\
        out vec4 color;\n\
        void main() {}\n";

    #[test]
    fn scan_finds_blocks_and_plain_uniforms() {
        let mut blocks = Vec::new();
        let mut uniforms = Vec::new();
        scan_uniforms(VERTEX, &mut blocks, &mut uniforms);
        scan_uniforms(FRAGMENT, &mut blocks, &mut uniforms);
        assert_eq!(blocks, vec!["Globals".to_string()]);
        assert_eq!(uniforms, vec!["u_model".to_string(), "u_albedo".to_string()]);
    }

    #[test]
    fn linked_program_answers_uniform_queries() {
        let gl = RecordingGl::new();
        let vs = gl.create_shader(glow::VERTEX_SHADER).unwrap();
        gl.compile_shader(vs, VERTEX);
        let fs = gl.create_shader(glow::FRAGMENT_SHADER).unwrap();
        gl.compile_shader(fs, FRAGMENT);
        let program = gl.create_program().unwrap();
        gl.attach_shader(program, vs);
        gl.attach_shader(program, fs);
        gl.link_program(program);

        assert!(gl.program_link_status(program));
        assert_eq!(gl.uniform_block_index(program, "Globals"), Some(0));
        assert_eq!(gl.uniform_block_index(program, "Missing"), None);
        assert_eq!(gl.uniform_location(program, "u_albedo"), Some(1));
    }

    #[test]
    fn error_directive_fails_compilation() {
        let gl = RecordingGl::new();
        let shader = gl.create_shader(glow::FRAGMENT_SHADER).unwrap();
        gl.compile_shader(shader, "#version 330 core\n#error unsupported\n");
        assert!(!gl.shader_compile_status(shader));
        assert!(!gl.shader_info_log(shader).is_empty());
    }

    #[test]
    fn buffer_contents_follow_data_and_sub_data() {
        let gl = RecordingGl::new();
        let buffer = gl.create_buffer().unwrap();
        gl.bind_buffer(glow::ARRAY_BUFFER, buffer);
        gl.buffer_storage(glow::ARRAY_BUFFER, 4, glow::STATIC_DRAW);
        gl.buffer_sub_data(glow::ARRAY_BUFFER, 2, &[7, 9]);
        assert_eq!(gl.buffer_contents(buffer), Some(vec![0, 0, 7, 9]));
        gl.delete_buffer(buffer);
        assert_eq!(gl.live_objects(), 0);
    }
}
