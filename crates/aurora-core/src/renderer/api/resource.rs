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

//! Ownership of backend resource ids.
//!
//! Every resource handle embeds a [`ResourceGuard`]. The guard remembers which
//! backend object the handle owns and who can release it. Dropping the handle
//! releases the object exactly once; a handle cannot be cloned, so a second
//! release is impossible by construction.
//!
//! The guard only holds a [`Weak`] reference to its releaser. If the device
//! (and with it the backend context) has already been torn down, dropping the
//! handle is a no-op instead of a call against a dead context.

use std::fmt;
use std::rc::Weak;

/// A raw backend object name (e.g. an OpenGL object name). Zero means "none".
pub type RawId = u32;

/// The closed set of backend objects a handle can own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendResource {
    /// A buffer object.
    Buffer(RawId),
    /// A texture object.
    Texture(RawId),
    /// A sampler object.
    Sampler(RawId),
    /// A compiled shader object.
    ShaderModule(RawId),
    /// A linked program together with its vertex-array object.
    Pipeline {
        /// The linked program.
        program: RawId,
        /// The vertex-array object holding the attribute layout.
        vertex_array: RawId,
    },
}

/// Implemented by backends that own the context resources are released against.
pub trait ResourceReleaser {
    /// Releases the backend object. Called at most once per object.
    fn release(&self, resource: BackendResource);
}

/// Releases one backend object when dropped.
pub struct ResourceGuard {
    resource: BackendResource,
    owner: Weak<dyn ResourceReleaser>,
}

/// Releaser used by guards that are not attached to any backend.
struct Detached;

impl ResourceReleaser for Detached {
    fn release(&self, _resource: BackendResource) {}
}

impl ResourceGuard {
    /// Creates a guard that releases `resource` through `owner` on drop.
    pub fn new(resource: BackendResource, owner: Weak<dyn ResourceReleaser>) -> Self {
        Self { resource, owner }
    }

    /// Creates a guard with no releaser, for backends without real objects.
    pub fn detached(resource: BackendResource) -> Self {
        let owner: Weak<dyn ResourceReleaser> = Weak::<Detached>::new();
        Self { resource, owner }
    }

    /// The backend object owned by this guard.
    pub fn resource(&self) -> BackendResource {
        self.resource
    }
}

impl Drop for ResourceGuard {
    fn drop(&mut self) {
        match self.owner.upgrade() {
            Some(owner) => owner.release(self.resource),
            None => log::trace!(
                "ResourceGuard: {:?} dropped without a live device, nothing to release",
                self.resource
            ),
        }
    }
}

impl fmt::Debug for ResourceGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceGuard")
            .field("resource", &self.resource)
            .field("attached", &(self.owner.strong_count() > 0))
            .finish()
    }
}
