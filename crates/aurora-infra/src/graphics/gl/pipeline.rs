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

//! Shader compilation, program linking and vertex-array setup.

use aurora_core::renderer::{
    PipelineError, RawId, ShaderError, ShaderModule, ShaderModuleDescriptor, ShaderStage,
    VertexLayoutDescriptor,
};

use super::api::GlApi;
use super::conversions::IntoGl;

/// Compiles one shader stage, deleting the object again if compilation fails.
pub(crate) fn compile_shader<B: GlApi + ?Sized>(
    gl: &B,
    desc: &ShaderModuleDescriptor<'_>,
) -> Result<RawId, ShaderError> {
    let label = desc.label.unwrap_or("Unknown");
    let shader = gl
        .create_shader(desc.stage.into_gl())
        .map_err(ShaderError::Allocation)?;
    gl.compile_shader(shader, &desc.source);

    if !gl.shader_compile_status(shader) {
        let log = gl.shader_info_log(shader);
        gl.delete_shader(shader);
        log::error!(
            "GlDevice: {:?} shader '{}' failed to compile:\n{}",
            desc.stage,
            label,
            log
        );
        return Err(ShaderError::CompilationFailed {
            stage: desc.stage,
            label: label.to_string(),
            log,
        });
    }
    Ok(shader)
}

/// Checks that `module` was compiled for `expected`.
pub(crate) fn expect_stage(module: &ShaderModule, expected: ShaderStage) -> Result<(), PipelineError> {
    if module.stage() == expected {
        Ok(())
    } else {
        Err(PipelineError::StageMismatch {
            expected,
            found: module.stage(),
        })
    }
}

/// Links a vertex and fragment shader into a program.
///
/// The shaders are detached after linking; they stay owned by their modules.
pub(crate) fn link_program<B: GlApi + ?Sized>(
    gl: &B,
    vertex: &ShaderModule,
    fragment: &ShaderModule,
    label: Option<&str>,
) -> Result<RawId, PipelineError> {
    let program = gl.create_program().map_err(PipelineError::Allocation)?;
    gl.attach_shader(program, vertex.raw());
    gl.attach_shader(program, fragment.raw());
    gl.link_program(program);
    gl.detach_shader(program, vertex.raw());
    gl.detach_shader(program, fragment.raw());

    if !gl.program_link_status(program) {
        let log = gl.program_info_log(program);
        gl.delete_program(program);
        log::error!(
            "GlDevice: pipeline '{}' failed to link:\n{}",
            label.unwrap_or("Unknown"),
            log
        );
        return Err(PipelineError::LinkFailed {
            label: label.map(str::to_string),
            log,
        });
    }
    Ok(program)
}

/// Creates a vertex array with every attribute of `layout` enabled, then
/// rebinds `restore` so the current pipeline's vertex array is untouched.
pub(crate) fn create_vertex_array<B: GlApi + ?Sized>(
    gl: &B,
    layout: &VertexLayoutDescriptor,
    restore: RawId,
) -> Result<RawId, PipelineError> {
    let vertex_array = gl
        .create_vertex_array()
        .map_err(PipelineError::Allocation)?;
    gl.bind_vertex_array(vertex_array);
    for attribute in &layout.attributes {
        gl.enable_vertex_attrib_array(attribute.location);
    }
    gl.bind_vertex_array(restore);
    Ok(vertex_array)
}

/// Declares every attribute pointer of `layout` against the bound vertex buffer.
pub(crate) fn declare_attributes<B: GlApi + ?Sized>(gl: &B, layout: &VertexLayoutDescriptor) {
    for attribute in &layout.attributes {
        gl.vertex_attrib_pointer_f32(
            attribute.location,
            attribute.components,
            layout.stride,
            attribute.offset,
        );
    }
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::*;
    use crate::graphics::gl::recording::{GlCall, GlObjectKind, RecordingGl};
    use aurora_core::renderer::VertexAttribute;

    #[test]
    fn failed_compilation_deletes_the_shader() {
        let gl = RecordingGl::new();
        let desc = ShaderModuleDescriptor {
            label: Some("broken.frag"),
            source: Cow::Borrowed("#error nope"),
            stage: ShaderStage::Fragment,
        };

        let err = compile_shader(&gl, &desc).unwrap_err();

        assert!(matches!(
            err,
            ShaderError::CompilationFailed { stage: ShaderStage::Fragment, ref label, .. }
                if label == "broken.frag"
        ));
        assert_eq!(gl.live_objects_of(GlObjectKind::Shader), 0);
    }

    #[test]
    fn vertex_array_creation_restores_the_previous_binding() {
        let gl = RecordingGl::new();
        let layout = VertexLayoutDescriptor {
            stride: 20,
            attributes: vec![
                VertexAttribute { location: 0, components: 3, offset: 0 },
                VertexAttribute { location: 1, components: 2, offset: 12 },
            ],
        };

        let vertex_array = create_vertex_array(&gl, &layout, 42).unwrap();

        let calls = gl.calls();
        assert_eq!(calls[1], GlCall::BindVertexArray(vertex_array));
        assert_eq!(calls.last(), Some(&GlCall::BindVertexArray(42)));
        assert_eq!(gl.count(|c| matches!(c, GlCall::EnableVertexAttribArray(_))), 2);
    }
}
