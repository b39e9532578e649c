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

//! Graphics pipeline descriptor and handle.

use std::rc::{Rc, Weak};

use super::state::{PipelineStateDescriptor, VertexLayoutDescriptor};
use crate::renderer::api::resource::{BackendResource, RawId, ResourceGuard, ResourceReleaser};
use crate::renderer::api::shader::ShaderModule;

/// A descriptor used to create a [`GraphicsPipeline`].
#[derive(Debug, Clone)]
pub struct GraphicsPipelineDescriptor<'a> {
    /// An optional debug label, used in diagnostics.
    pub label: Option<&'a str>,
    /// The compiled vertex stage.
    pub vertex_shader: &'a ShaderModule,
    /// The compiled fragment stage.
    pub fragment_shader: &'a ShaderModule,
    /// The layout of the vertex buffer the pipeline consumes.
    pub vertex_layout: VertexLayoutDescriptor,
    /// Fixed-function state applied whenever the pipeline is bound.
    pub state: PipelineStateDescriptor,
}

/// An owned, immutable graphics pipeline.
///
/// Owns a linked program and the vertex-array object that records its
/// attribute layout. The originating layout and state are kept so the
/// device can re-declare attribute pointers and re-apply state on bind.
#[derive(Debug)]
pub struct GraphicsPipeline {
    program: RawId,
    vertex_array: RawId,
    layout: Rc<VertexLayoutDescriptor>,
    state: PipelineStateDescriptor,
    label: Option<String>,
    _guard: ResourceGuard,
}

impl GraphicsPipeline {
    /// Wraps a linked program and vertex array that `owner` will release.
    pub fn new(
        program: RawId,
        vertex_array: RawId,
        layout: VertexLayoutDescriptor,
        state: PipelineStateDescriptor,
        label: Option<String>,
        owner: Weak<dyn ResourceReleaser>,
    ) -> Self {
        Self {
            program,
            vertex_array,
            layout: Rc::new(layout),
            state,
            label,
            _guard: ResourceGuard::new(
                BackendResource::Pipeline {
                    program,
                    vertex_array,
                },
                owner,
            ),
        }
    }

    /// Creates a pipeline handle with no backend objects behind it.
    pub fn detached(
        layout: VertexLayoutDescriptor,
        state: PipelineStateDescriptor,
        label: Option<String>,
    ) -> Self {
        Self {
            program: 0,
            vertex_array: 0,
            layout: Rc::new(layout),
            state,
            label,
            _guard: ResourceGuard::detached(BackendResource::Pipeline {
                program: 0,
                vertex_array: 0,
            }),
        }
    }

    /// The linked program.
    pub fn program(&self) -> RawId {
        self.program
    }

    /// The vertex-array object.
    pub fn vertex_array(&self) -> RawId {
        self.vertex_array
    }

    /// The vertex layout the pipeline was created with.
    pub fn layout(&self) -> &Rc<VertexLayoutDescriptor> {
        &self.layout
    }

    /// The fixed-function state the pipeline was created with.
    pub fn state(&self) -> &PipelineStateDescriptor {
        &self.state
    }

    /// The debug label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}
