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

//! Defines data structures related to GPU buffer resources.

use std::rc::Weak;

use super::resource::{BackendResource, RawId, ResourceGuard, ResourceReleaser};

/// How a buffer is bound by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferUsage {
    /// Per-vertex attribute data.
    Vertex,
    /// Element indices for indexed draws.
    Index,
    /// Uniform block storage.
    Uniform,
}

/// An owned GPU buffer.
///
/// Returned by [`GraphicsDevice::create_buffer`](crate::renderer::GraphicsDevice::create_buffer).
/// The backend object is released when the handle is dropped.
#[derive(Debug)]
pub struct Buffer {
    raw: RawId,
    size: usize,
    usage: BufferUsage,
    _guard: ResourceGuard,
}

impl Buffer {
    /// Wraps a backend buffer object that `owner` will release.
    pub fn new(
        raw: RawId,
        size: usize,
        usage: BufferUsage,
        owner: Weak<dyn ResourceReleaser>,
    ) -> Self {
        Self {
            raw,
            size,
            usage,
            _guard: ResourceGuard::new(BackendResource::Buffer(raw), owner),
        }
    }

    /// Creates a buffer handle with no backend object behind it.
    pub fn detached(size: usize, usage: BufferUsage) -> Self {
        Self {
            raw: 0,
            size,
            usage,
            _guard: ResourceGuard::detached(BackendResource::Buffer(0)),
        }
    }

    /// The backend object name.
    pub fn raw(&self) -> RawId {
        self.raw
    }

    /// The size of the buffer in bytes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The usage the buffer was created with.
    pub fn usage(&self) -> BufferUsage {
        self.usage
    }
}
