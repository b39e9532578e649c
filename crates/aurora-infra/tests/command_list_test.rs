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

mod common;

use anyhow::Result;
use aurora_core::renderer::{
    BufferUsage, CommandList, CommandListError, CommandListState, GraphicsDevice, IndexFormat,
};
use aurora_infra::graphics::gl::GlCall;

#[test]
fn closed_list_replays_identically_on_every_submit() -> Result<()> {
    // --- 1. ARRANGE ---
    let device = common::device();
    let pipeline = common::pipeline(&device);
    let vertices = device.create_buffer(Some(&[0; 60]), 60, BufferUsage::Vertex)?;
    let pass = device.create_render_pass(Default::default());

    let mut list = device.create_command_list();
    list.begin()?;
    list.begin_render_pass(&pass, None)?;
    list.set_graphics_pipeline(&pipeline)?;
    list.set_vertex_buffer(&vertices)?;
    list.draw(3, 0)?;
    list.end_render_pass()?;
    list.end()?;

    // --- 2. ACT ---
    device.begin_frame();
    device.submit(&list)?;
    device.submit(&list)?;
    let stats = device.end_frame();

    // --- 3. ASSERT ---
    let draws: Vec<_> = device
        .api()
        .calls()
        .into_iter()
        .filter(|c| matches!(c, GlCall::DrawArrays { .. }))
        .collect();
    let expected = GlCall::DrawArrays {
        mode: glow::TRIANGLES,
        first: 0,
        count: 3,
    };
    assert_eq!(draws, vec![expected.clone(), expected]);
    assert_eq!(stats.draw_calls, 2);
    assert_eq!(stats.render_passes, 2);
    assert_eq!(stats.command_lists_submitted, 2);
    Ok(())
}

#[test]
fn replay_follows_recording_order() -> Result<()> {
    // --- 1. ARRANGE ---
    let device = common::device();
    let pipeline = common::pipeline(&device);
    let vertices = device.create_buffer(None, 60, BufferUsage::Vertex)?;
    let indices = device.create_buffer(Some(&[0, 0, 1, 0, 2, 0]), 6, BufferUsage::Index)?;

    let mut list = CommandList::new();
    list.begin()?;
    list.set_graphics_pipeline(&pipeline)?;
    list.set_vertex_buffer(&vertices)?;
    list.set_index_buffer(&indices)?;
    list.draw_indexed(3, 0, IndexFormat::Uint16)?;
    list.draw(3, 1)?;
    list.end()?;
    device.api().take_calls();

    // --- 2. ACT ---
    device.submit(&list)?;

    // --- 3. ASSERT ---
    let interesting: Vec<_> = device
        .api()
        .calls()
        .into_iter()
        .filter(|c| {
            matches!(
                c,
                GlCall::UseProgram(_)
                    | GlCall::BindBuffer { .. }
                    | GlCall::DrawElements { .. }
                    | GlCall::DrawArrays { .. }
            )
        })
        .collect();
    assert_eq!(
        interesting,
        vec![
            GlCall::UseProgram(pipeline.program()),
            GlCall::BindBuffer {
                target: glow::ARRAY_BUFFER,
                buffer: vertices.raw(),
            },
            GlCall::BindBuffer {
                target: glow::ELEMENT_ARRAY_BUFFER,
                buffer: indices.raw(),
            },
            GlCall::DrawElements {
                mode: glow::TRIANGLES,
                count: 3,
                element_type: glow::UNSIGNED_SHORT,
                offset: 0,
            },
            GlCall::DrawArrays {
                mode: glow::TRIANGLES,
                first: 1,
                count: 3,
            },
        ]
    );
    Ok(())
}

#[test]
fn indexed_draw_offset_scales_with_index_size() -> Result<()> {
    // --- 1. ARRANGE ---
    let device = common::device();
    let pipeline = common::pipeline(&device);
    let indices = device.create_buffer(None, 64, BufferUsage::Index)?;
    device.set_graphics_pipeline(&pipeline);
    device.set_index_buffer(&indices);

    // --- 2. ACT ---
    device.draw_indexed(6, 4, IndexFormat::Uint32);
    device.draw_indexed(6, 4, IndexFormat::Uint16);

    // --- 3. ASSERT ---
    let offsets: Vec<_> = device
        .api()
        .calls()
        .into_iter()
        .filter_map(|c| match c {
            GlCall::DrawElements { offset, .. } => Some(offset),
            _ => None,
        })
        .collect();
    assert_eq!(offsets, vec![16, 8]);
    Ok(())
}

#[test]
fn open_list_cannot_be_submitted() -> Result<()> {
    // --- 1. ARRANGE ---
    let device = common::device();
    let mut list = device.create_command_list();
    list.begin()?;
    list.draw(3, 0)?;

    // --- 2. ACT ---
    let result = device.submit(&list);

    // --- 3. ASSERT ---
    assert_eq!(
        result,
        Err(CommandListError::NotClosed(CommandListState::Recording))
    );
    assert_eq!(device.stats().command_lists_submitted, 0);
    Ok(())
}

#[test]
fn recording_outside_begin_is_rejected() {
    // --- 1. ARRANGE ---
    let mut list = CommandList::new();

    // --- 2. ACT ---
    let result = list.draw(3, 0);

    // --- 3. ASSERT ---
    assert_eq!(
        result,
        Err(CommandListError::NotRecording(CommandListState::Empty))
    );
    assert!(list.is_empty());
}

#[test]
fn begin_after_close_discards_previous_commands() -> Result<()> {
    // --- 1. ARRANGE ---
    let mut list = CommandList::new();
    list.begin()?;
    list.draw(3, 0)?;
    list.end()?;

    // --- 2. ACT ---
    list.begin()?;

    // --- 3. ASSERT ---
    assert!(list.is_empty());
    assert_eq!(list.state(), CommandListState::Recording);
    assert_eq!(list.begin(), Err(CommandListError::AlreadyRecording));
    Ok(())
}

#[test]
fn empty_closed_list_is_a_no_op() -> Result<()> {
    // --- 1. ARRANGE ---
    let device = common::device();
    let mut list = device.create_command_list();
    list.begin()?;
    list.end()?;
    device.api().take_calls();

    // --- 2. ACT ---
    device.submit(&list)?;

    // --- 3. ASSERT ---
    assert!(device.api().calls().is_empty());
    Ok(())
}
