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

//! Shader module descriptors and handles.

use std::borrow::Cow;
use std::rc::Weak;

use super::resource::{BackendResource, RawId, ResourceGuard, ResourceReleaser};

/// The programmable stage a shader module is compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Per-vertex stage.
    Vertex,
    /// Per-fragment stage.
    Fragment,
}

/// Describes a shader module to be created by the `GraphicsDevice`.
#[derive(Debug, Clone)]
pub struct ShaderModuleDescriptor<'a> {
    /// An optional debug label, used in diagnostics.
    pub label: Option<&'a str>,
    /// GLSL source text for a single stage.
    pub source: Cow<'a, str>,
    /// The stage the source is compiled for.
    pub stage: ShaderStage,
}

/// An owned, compiled shader module.
#[derive(Debug)]
pub struct ShaderModule {
    raw: RawId,
    stage: ShaderStage,
    label: Option<String>,
    _guard: ResourceGuard,
}

impl ShaderModule {
    /// Wraps a compiled backend shader object that `owner` will release.
    pub fn new(
        raw: RawId,
        stage: ShaderStage,
        label: Option<String>,
        owner: Weak<dyn ResourceReleaser>,
    ) -> Self {
        Self {
            raw,
            stage,
            label,
            _guard: ResourceGuard::new(BackendResource::ShaderModule(raw), owner),
        }
    }

    /// Creates a module handle with no backend object behind it.
    pub fn detached(stage: ShaderStage, label: Option<String>) -> Self {
        Self {
            raw: 0,
            stage,
            label,
            _guard: ResourceGuard::detached(BackendResource::ShaderModule(0)),
        }
    }

    /// The backend object name.
    pub fn raw(&self) -> RawId {
        self.raw
    }

    /// The stage this module was compiled for.
    pub fn stage(&self) -> ShaderStage {
        self.stage
    }

    /// The debug label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}
