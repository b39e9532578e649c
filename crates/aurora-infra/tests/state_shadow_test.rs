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

use aurora_core::renderer::{BlendFactor, CullMode, GraphicsDevice, PipelineStateDescriptor};
use aurora_infra::graphics::gl::GlCall;

fn is_state_call(call: &GlCall) -> bool {
    matches!(
        call,
        GlCall::Enable(_)
            | GlCall::Disable(_)
            | GlCall::CullFace(_)
            | GlCall::FrontFace(_)
            | GlCall::BlendFuncSeparate { .. }
            | GlCall::BlendEquationSeparate { .. }
            | GlCall::ColorMask(..)
            | GlCall::DepthMask(_)
            | GlCall::DepthFunc(_)
    )
}

#[test]
fn rebinding_a_pipeline_reissues_no_state() {
    // --- 1. ARRANGE ---
    let device = common::device();
    let pipeline = common::pipeline(&device);
    device.set_graphics_pipeline(&pipeline);
    device.api().take_calls();

    // --- 2. ACT ---
    device.set_graphics_pipeline(&pipeline);

    // --- 3. ASSERT ---
    assert_eq!(device.api().count(is_state_call), 0);
    assert_eq!(
        device.api().count(|c| matches!(c, GlCall::UseProgram(p) if *p == pipeline.program())),
        1
    );
}

#[test]
fn pipelines_with_identical_state_share_the_shadow() {
    // --- 1. ARRANGE ---
    let device = common::device();
    let first = common::pipeline(&device);
    let second = common::pipeline(&device);
    device.set_graphics_pipeline(&first);
    device.api().take_calls();

    // --- 2. ACT ---
    device.set_graphics_pipeline(&second);

    // --- 3. ASSERT ---
    assert_eq!(device.api().count(is_state_call), 0);
}

#[test]
fn switching_cull_mode_changes_culling_exactly_twice() {
    // --- 1. ARRANGE ---
    let device = common::device();
    let back = common::pipeline_with_state(&device, common::state_with_cull(CullMode::Back));
    let none = common::pipeline_with_state(&device, common::state_with_cull(CullMode::None));

    // --- 2. ACT ---
    device.set_graphics_pipeline(&back);
    device.set_graphics_pipeline(&none);

    // --- 3. ASSERT ---
    let cull_toggles = device.api().count(|c| {
        matches!(
            c,
            GlCall::Enable(glow::CULL_FACE) | GlCall::Disable(glow::CULL_FACE)
        )
    });
    assert_eq!(cull_toggles, 2);
}

#[test]
fn blend_factor_change_is_applied_while_blending_is_off() {
    // --- 1. ARRANGE ---
    let device = common::device();
    let mut state = PipelineStateDescriptor::default();
    let plain = common::pipeline_with_state(&device, state);
    state.blend.color.dst_factor = BlendFactor::One;
    let additive = common::pipeline_with_state(&device, state);
    device.set_graphics_pipeline(&plain);
    device.api().take_calls();

    // --- 2. ACT ---
    device.set_graphics_pipeline(&additive);
    device.set_graphics_pipeline(&additive);

    // --- 3. ASSERT ---
    assert_eq!(
        device.api().count(|c| matches!(c, GlCall::BlendFuncSeparate { .. })),
        1
    );
    assert_eq!(device.api().count(|c| matches!(c, GlCall::Enable(glow::BLEND))), 0);
}

#[test]
fn clear_forces_depth_writes_and_the_next_bind_restores_them() {
    // --- 1. ARRANGE ---
    let device = common::device();
    let mut state = PipelineStateDescriptor::default();
    state.depth_stencil.write_enabled = false;
    let pipeline = common::pipeline_with_state(&device, state);
    let pass = device.create_render_pass(Default::default());
    device.set_graphics_pipeline(&pipeline);
    device.api().take_calls();

    // --- 2. ACT ---
    device.begin_render_pass(&pass, None);
    device.set_graphics_pipeline(&pipeline);
    device.end_render_pass();

    // --- 3. ASSERT ---
    let masks: Vec<_> = device
        .api()
        .calls()
        .into_iter()
        .filter(|c| matches!(c, GlCall::DepthMask(_)))
        .collect();
    assert_eq!(masks, vec![GlCall::DepthMask(true), GlCall::DepthMask(false)]);
}

#[test]
fn reset_state_cache_reissues_everything() {
    // --- 1. ARRANGE ---
    let device = common::device();
    let pipeline = common::pipeline(&device);
    device.set_graphics_pipeline(&pipeline);
    let first_apply = device.api().count(is_state_call);
    device.api().take_calls();

    // --- 2. ACT ---
    device.reset_state_cache();
    device.set_graphics_pipeline(&pipeline);

    // --- 3. ASSERT ---
    assert_eq!(device.api().count(is_state_call), first_apply);
}
