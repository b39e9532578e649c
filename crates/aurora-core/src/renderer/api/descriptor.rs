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

//! Descriptor sets: immutable maps from shader-visible slots to resources.
//!
//! A binding addresses its shader resource either by numeric slot or by
//! name. A name always takes precedence: the backend resolves it against the
//! bound pipeline's program (uniform block index or sampler uniform location)
//! and routes it to `slot`.

use std::borrow::Cow;

use super::buffer::Buffer;
use super::texture::{Sampler, Texture};

/// Where a binding is routed in the shader.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BindingTarget {
    /// A numeric slot declared by the shader itself (`layout(binding = N)`).
    Slot(u32),
    /// A uniform block or sampler uniform looked up by name, then assigned `slot`.
    Named {
        /// The uniform block or sampler uniform name.
        name: Cow<'static, str>,
        /// The slot the resolved block or sampler is routed to.
        slot: u32,
    },
}

impl BindingTarget {
    /// Creates a named target.
    pub fn named(name: impl Into<Cow<'static, str>>, slot: u32) -> Self {
        BindingTarget::Named {
            name: name.into(),
            slot,
        }
    }

    /// The numeric slot the resource is bound to.
    pub fn slot(&self) -> u32 {
        match self {
            BindingTarget::Slot(slot) => *slot,
            BindingTarget::Named { slot, .. } => *slot,
        }
    }

    /// The symbolic name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            BindingTarget::Slot(_) => None,
            BindingTarget::Named { name, .. } => Some(name),
        }
    }
}

/// A uniform buffer range bound to a uniform block.
#[derive(Debug, Clone)]
pub struct UniformBufferBinding<'a> {
    /// The uniform block the buffer feeds.
    pub target: BindingTarget,
    /// The buffer holding the block data.
    pub buffer: &'a Buffer,
    /// Byte offset into the buffer.
    pub offset: usize,
    /// Byte size of the range. `0` binds the whole buffer.
    pub size: usize,
}

/// A texture and sampler pair bound to a texture unit.
#[derive(Debug, Clone)]
pub struct SampledTextureBinding<'a> {
    /// The sampler uniform the pair feeds.
    pub target: BindingTarget,
    /// The texture to sample.
    pub texture: &'a Texture,
    /// The sampler state, or `None` to use the texture's own parameters.
    pub sampler: Option<&'a Sampler>,
}

/// A descriptor used to create a [`DescriptorSet`].
#[derive(Debug, Clone, Default)]
pub struct DescriptorSetDescriptor<'a> {
    /// Uniform buffer bindings, applied in order.
    pub uniform_buffers: Vec<UniformBufferBinding<'a>>,
    /// Sampled texture bindings, applied in order.
    pub sampled_textures: Vec<SampledTextureBinding<'a>>,
}

/// An immutable set of bindings that can be bound any number of times.
///
/// Borrows the resources it references; they must outlive the set.
#[derive(Debug, Clone)]
pub struct DescriptorSet<'a> {
    desc: DescriptorSetDescriptor<'a>,
}

impl<'a> DescriptorSet<'a> {
    /// Wraps a descriptor.
    pub fn new(desc: DescriptorSetDescriptor<'a>) -> Self {
        Self { desc }
    }

    /// The uniform buffer bindings.
    pub fn uniform_buffers(&self) -> &[UniformBufferBinding<'a>] {
        &self.desc.uniform_buffers
    }

    /// The sampled texture bindings.
    pub fn sampled_textures(&self) -> &[SampledTextureBinding<'a>] {
        &self.desc.sampled_textures
    }
}
