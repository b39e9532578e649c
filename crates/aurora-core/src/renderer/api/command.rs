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

//! Deferred recording of device operations.
//!
//! A [`CommandList`] stores [`Command`] records that borrow the resources they
//! reference, so the borrow checker guarantees every handle outlives the list.
//! Submission replays the records in order, synchronously, against a device.

use super::buffer::Buffer;
use super::descriptor::DescriptorSet;
use super::pass::RenderPass;
use super::pipeline::{GraphicsPipeline, IndexFormat};
use super::swapchain::Swapchain;
use crate::renderer::error::CommandListError;
use crate::renderer::traits::GraphicsDevice;

/// The recording state of a [`CommandList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CommandListState {
    /// Freshly created, nothing recorded.
    #[default]
    Empty,
    /// Between `begin()` and `end()`.
    Recording,
    /// Closed by `end()`; ready for submission.
    Closed,
}

/// A single recorded device operation.
#[derive(Debug, Clone, Copy)]
pub enum Command<'a> {
    /// See [`GraphicsDevice::begin_render_pass`].
    BeginRenderPass {
        /// The pass to begin.
        pass: &'a RenderPass<'a>,
        /// The swapchain supplying the viewport size, if any.
        target: Option<&'a Swapchain>,
    },
    /// See [`GraphicsDevice::end_render_pass`].
    EndRenderPass,
    /// See [`GraphicsDevice::set_graphics_pipeline`].
    SetGraphicsPipeline(&'a GraphicsPipeline),
    /// See [`GraphicsDevice::set_vertex_buffer`].
    SetVertexBuffer(&'a Buffer),
    /// See [`GraphicsDevice::set_index_buffer`].
    SetIndexBuffer(&'a Buffer),
    /// See [`GraphicsDevice::bind_descriptor_set`].
    BindDescriptorSet(&'a DescriptorSet<'a>),
    /// See [`GraphicsDevice::draw`].
    Draw {
        /// Number of vertices to draw.
        vertex_count: u32,
        /// Index of the first vertex.
        first_vertex: u32,
    },
    /// See [`GraphicsDevice::draw_indexed`].
    DrawIndexed {
        /// Number of indices to draw.
        index_count: u32,
        /// Position of the first index in the index buffer.
        first_index: u32,
        /// Element type of the index buffer.
        format: IndexFormat,
    },
    /// See [`GraphicsDevice::set_debug_wireframe`].
    SetDebugWireframe(bool),
}

/// An ordered, replayable list of device operations.
#[derive(Debug, Default)]
pub struct CommandList<'a> {
    commands: Vec<Command<'a>>,
    state: CommandListState,
}

impl<'a> CommandList<'a> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts recording, discarding any previously recorded operations.
    pub fn begin(&mut self) -> Result<(), CommandListError> {
        if self.state == CommandListState::Recording {
            log::warn!("CommandList: begin() called while already recording");
            return Err(CommandListError::AlreadyRecording);
        }
        self.commands.clear();
        self.state = CommandListState::Recording;
        Ok(())
    }

    /// Stops recording and closes the list for submission.
    pub fn end(&mut self) -> Result<(), CommandListError> {
        self.ensure_recording("end")?;
        self.state = CommandListState::Closed;
        log::trace!("CommandList: closed with {} commands", self.commands.len());
        Ok(())
    }

    /// Records [`GraphicsDevice::begin_render_pass`].
    pub fn begin_render_pass(
        &mut self,
        pass: &'a RenderPass<'a>,
        target: Option<&'a Swapchain>,
    ) -> Result<(), CommandListError> {
        self.record("begin_render_pass", Command::BeginRenderPass { pass, target })
    }

    /// Records [`GraphicsDevice::end_render_pass`].
    pub fn end_render_pass(&mut self) -> Result<(), CommandListError> {
        self.record("end_render_pass", Command::EndRenderPass)
    }

    /// Records [`GraphicsDevice::set_graphics_pipeline`].
    pub fn set_graphics_pipeline(
        &mut self,
        pipeline: &'a GraphicsPipeline,
    ) -> Result<(), CommandListError> {
        self.record("set_graphics_pipeline", Command::SetGraphicsPipeline(pipeline))
    }

    /// Records [`GraphicsDevice::set_vertex_buffer`].
    pub fn set_vertex_buffer(&mut self, buffer: &'a Buffer) -> Result<(), CommandListError> {
        self.record("set_vertex_buffer", Command::SetVertexBuffer(buffer))
    }

    /// Records [`GraphicsDevice::set_index_buffer`].
    pub fn set_index_buffer(&mut self, buffer: &'a Buffer) -> Result<(), CommandListError> {
        self.record("set_index_buffer", Command::SetIndexBuffer(buffer))
    }

    /// Records [`GraphicsDevice::bind_descriptor_set`].
    pub fn bind_descriptor_set(
        &mut self,
        set: &'a DescriptorSet<'a>,
    ) -> Result<(), CommandListError> {
        self.record("bind_descriptor_set", Command::BindDescriptorSet(set))
    }

    /// Records [`GraphicsDevice::draw`].
    pub fn draw(&mut self, vertex_count: u32, first_vertex: u32) -> Result<(), CommandListError> {
        self.record(
            "draw",
            Command::Draw {
                vertex_count,
                first_vertex,
            },
        )
    }

    /// Records [`GraphicsDevice::draw_indexed`].
    pub fn draw_indexed(
        &mut self,
        index_count: u32,
        first_index: u32,
        format: IndexFormat,
    ) -> Result<(), CommandListError> {
        self.record(
            "draw_indexed",
            Command::DrawIndexed {
                index_count,
                first_index,
                format,
            },
        )
    }

    /// Records [`GraphicsDevice::set_debug_wireframe`].
    pub fn set_debug_wireframe(&mut self, enabled: bool) -> Result<(), CommandListError> {
        self.record("set_debug_wireframe", Command::SetDebugWireframe(enabled))
    }

    /// The recorded operations, in order.
    pub fn commands(&self) -> &[Command<'a>] {
        &self.commands
    }

    /// The current recording state.
    pub fn state(&self) -> CommandListState {
        self.state
    }

    /// Returns `true` if nothing is recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Replays every recorded operation against `device`, in order.
    ///
    /// ## Errors
    /// * `CommandListError::NotClosed` - If `end()` has not been called.
    pub fn replay<D: GraphicsDevice + ?Sized>(&self, device: &D) -> Result<(), CommandListError> {
        if self.state != CommandListState::Closed {
            log::warn!(
                "CommandList: submission rejected, list is {:?}",
                self.state
            );
            return Err(CommandListError::NotClosed(self.state));
        }
        for command in &self.commands {
            match *command {
                Command::BeginRenderPass { pass, target } => device.begin_render_pass(pass, target),
                Command::EndRenderPass => device.end_render_pass(),
                Command::SetGraphicsPipeline(pipeline) => device.set_graphics_pipeline(pipeline),
                Command::SetVertexBuffer(buffer) => device.set_vertex_buffer(buffer),
                Command::SetIndexBuffer(buffer) => device.set_index_buffer(buffer),
                Command::BindDescriptorSet(set) => device.bind_descriptor_set(set),
                Command::Draw {
                    vertex_count,
                    first_vertex,
                } => device.draw(vertex_count, first_vertex),
                Command::DrawIndexed {
                    index_count,
                    first_index,
                    format,
                } => device.draw_indexed(index_count, first_index, format),
                Command::SetDebugWireframe(enabled) => device.set_debug_wireframe(enabled),
            }
        }
        Ok(())
    }

    fn ensure_recording(&self, operation: &str) -> Result<(), CommandListError> {
        if self.state != CommandListState::Recording {
            log::warn!(
                "CommandList: '{}' ignored, list is {:?}",
                operation,
                self.state
            );
            return Err(CommandListError::NotRecording(self.state));
        }
        Ok(())
    }

    fn record(&mut self, operation: &str, command: Command<'a>) -> Result<(), CommandListError> {
        self.ensure_recording(operation)?;
        self.commands.push(command);
        Ok(())
    }
}
