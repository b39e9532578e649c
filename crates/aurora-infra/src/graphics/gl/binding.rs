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

//! Per-program cache of name-based binding resolutions.

use std::collections::HashMap;

use aurora_core::renderer::RawId;

use super::api::GlApi;

/// Resolved names and last-applied slots, keyed by program.
///
/// A failed lookup is cached as `None` so a missing name is only queried
/// (and reported) once per program.
#[derive(Debug, Default)]
pub struct BindingCache {
    programs: HashMap<RawId, ProgramBindings>,
}

#[derive(Debug, Default)]
struct ProgramBindings {
    block_indices: HashMap<String, Option<u32>>,
    sampler_locations: HashMap<String, Option<u32>>,
    block_slots: HashMap<u32, u32>,
    sampler_units: HashMap<u32, u32>,
}

impl BindingCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the index of the uniform block `name` in `program`.
    pub fn uniform_block_index<B: GlApi + ?Sized>(
        &mut self,
        gl: &B,
        program: RawId,
        name: &str,
    ) -> Option<u32> {
        let entry = self.programs.entry(program).or_default();
        if let Some(index) = entry.block_indices.get(name) {
            return *index;
        }
        let index = gl.uniform_block_index(program, name);
        if index.is_none() {
            log::warn!(
                "BindingCache: program {} has no uniform block named '{}'",
                program,
                name
            );
        }
        entry.block_indices.insert(name.to_string(), index);
        index
    }

    /// Resolves the location of the sampler uniform `name` in `program`.
    pub fn sampler_location<B: GlApi + ?Sized>(
        &mut self,
        gl: &B,
        program: RawId,
        name: &str,
    ) -> Option<u32> {
        let entry = self.programs.entry(program).or_default();
        if let Some(location) = entry.sampler_locations.get(name) {
            return *location;
        }
        let location = gl.uniform_location(program, name);
        if location.is_none() {
            log::warn!(
                "BindingCache: program {} has no sampler uniform named '{}'",
                program,
                name
            );
        }
        entry.sampler_locations.insert(name.to_string(), location);
        location
    }

    /// Points block `index` of `program` at binding `slot`, unless it already is.
    pub fn apply_block_slot<B: GlApi + ?Sized>(
        &mut self,
        gl: &B,
        program: RawId,
        index: u32,
        slot: u32,
    ) {
        let entry = self.programs.entry(program).or_default();
        if entry.block_slots.get(&index) != Some(&slot) {
            gl.uniform_block_binding(program, index, slot);
            entry.block_slots.insert(index, slot);
        }
    }

    /// Points the sampler at `location` to texture `unit`, unless it already is.
    ///
    /// `program` must be the program currently in use.
    pub fn apply_sampler_unit<B: GlApi + ?Sized>(
        &mut self,
        gl: &B,
        program: RawId,
        location: u32,
        unit: u32,
    ) {
        let entry = self.programs.entry(program).or_default();
        if entry.sampler_units.get(&location) != Some(&unit) {
            gl.uniform_1_i32(location, unit as i32);
            entry.sampler_units.insert(location, unit);
        }
    }

    /// Drops everything cached for `program`.
    pub fn purge_program(&mut self, program: RawId) {
        if self.programs.remove(&program).is_some() {
            log::debug!("BindingCache: purged bindings of program {}", program);
        }
    }

    /// Drops every cached resolution.
    pub fn clear(&mut self) {
        self.programs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::gl::recording::{GlCall, RecordingGl};

    fn linked_program(gl: &RecordingGl) -> RawId {
        let vs = gl.create_shader(glow::VERTEX_SHADER).unwrap();
        gl.compile_shader(vs, "uniform Camera {\n mat4 m;\n};\nvoid main() {}\n");
        let fs = gl.create_shader(glow::FRAGMENT_SHADER).unwrap();
        gl.compile_shader(fs, "uniform sampler2D u_tex;\nvoid main() {}\n");
        let program = gl.create_program().unwrap();
        gl.attach_shader(program, vs);
        gl.attach_shader(program, fs);
        gl.link_program(program);
        program
    }

    #[test]
    fn names_are_resolved_once_per_program() {
        let gl = RecordingGl::new();
        let program = linked_program(&gl);
        let mut cache = BindingCache::new();

        for _ in 0..3 {
            assert_eq!(cache.uniform_block_index(&gl, program, "Camera"), Some(0));
            assert_eq!(cache.sampler_location(&gl, program, "u_tex"), Some(0));
            assert_eq!(cache.uniform_block_index(&gl, program, "Nope"), None);
        }

        assert_eq!(gl.count(|c| matches!(c, GlCall::GetUniformBlockIndex { .. })), 2);
        assert_eq!(gl.count(|c| matches!(c, GlCall::GetUniformLocation { .. })), 1);
    }

    #[test]
    fn slots_are_applied_only_when_they_change() {
        let gl = RecordingGl::new();
        let mut cache = BindingCache::new();

        cache.apply_block_slot(&gl, 5, 0, 2);
        cache.apply_block_slot(&gl, 5, 0, 2);
        cache.apply_block_slot(&gl, 5, 0, 3);
        cache.apply_sampler_unit(&gl, 5, 1, 0);
        cache.apply_sampler_unit(&gl, 5, 1, 0);

        assert_eq!(
            gl.calls(),
            vec![
                GlCall::UniformBlockBinding { program: 5, index: 0, binding: 2 },
                GlCall::UniformBlockBinding { program: 5, index: 0, binding: 3 },
                GlCall::Uniform1i { location: 1, value: 0 },
            ]
        );
    }

    #[test]
    fn purging_a_program_forces_fresh_resolution() {
        let gl = RecordingGl::new();
        let program = linked_program(&gl);
        let mut cache = BindingCache::new();

        cache.uniform_block_index(&gl, program, "Camera");
        cache.purge_program(program);
        cache.uniform_block_index(&gl, program, "Camera");

        assert_eq!(gl.count(|c| matches!(c, GlCall::GetUniformBlockIndex { .. })), 2);
    }
}
