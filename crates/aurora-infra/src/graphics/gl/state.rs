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

//! Shadow of the fixed-function state last applied to the context.

use aurora_core::renderer::{
    BlendComponent, ColorWrites, CullMode, PipelineStateDescriptor, PolygonMode,
};

use super::api::GlApi;
use super::conversions::IntoGl;

/// Tracks raster, blend, depth and polygon state so redundant calls are skipped.
///
/// Every path that mutates shadowed state must go through this type, otherwise
/// the shadow and the context drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateShadow {
    current: Option<PipelineStateDescriptor>,
    polygon_mode: Option<PolygonMode>,
}

impl Default for StateShadow {
    fn default() -> Self {
        Self::new()
    }
}

impl StateShadow {
    /// Creates an empty shadow; the first apply issues every field.
    pub const fn new() -> Self {
        Self {
            current: None,
            polygon_mode: None,
        }
    }

    /// The state last applied, if any.
    pub fn current(&self) -> Option<&PipelineStateDescriptor> {
        self.current.as_ref()
    }

    /// Forgets everything, so the next apply re-issues all state.
    pub fn reset(&mut self) {
        self.current = None;
        self.polygon_mode = None;
    }

    /// Applies `desc`, issuing calls only for the fields that changed.
    pub fn apply<B: GlApi + ?Sized>(&mut self, gl: &B, desc: &PipelineStateDescriptor) {
        let previous = self.current;

        // Raster
        if previous.map(|p| p.raster.cull_mode) != Some(desc.raster.cull_mode) {
            match desc.raster.cull_mode {
                CullMode::None => gl.disable(glow::CULL_FACE),
                CullMode::Back => {
                    gl.enable(glow::CULL_FACE);
                    gl.cull_face(glow::BACK);
                }
                CullMode::Front => {
                    gl.enable(glow::CULL_FACE);
                    gl.cull_face(glow::FRONT);
                }
            }
        }
        if previous.map(|p| p.raster.front_face) != Some(desc.raster.front_face) {
            gl.front_face(desc.raster.front_face.into_gl());
        }

        // Blend
        if previous.map(|p| p.blend.enabled) != Some(desc.blend.enabled) {
            if desc.blend.enabled {
                gl.enable(glow::BLEND);
            } else {
                gl.disable(glow::BLEND);
            }
        }
        let factors = |c: &BlendComponent| (c.src_factor, c.dst_factor);
        if previous.map(|p| (factors(&p.blend.color), factors(&p.blend.alpha)))
            != Some((factors(&desc.blend.color), factors(&desc.blend.alpha)))
        {
            gl.blend_func_separate(
                desc.blend.color.src_factor.into_gl(),
                desc.blend.color.dst_factor.into_gl(),
                desc.blend.alpha.src_factor.into_gl(),
                desc.blend.alpha.dst_factor.into_gl(),
            );
        }
        if previous.map(|p| (p.blend.color.operation, p.blend.alpha.operation))
            != Some((desc.blend.color.operation, desc.blend.alpha.operation))
        {
            gl.blend_equation_separate(
                desc.blend.color.operation.into_gl(),
                desc.blend.alpha.operation.into_gl(),
            );
        }
        if previous.map(|p| p.blend.write_mask) != Some(desc.blend.write_mask) {
            issue_color_mask(gl, desc.blend.write_mask);
        }

        // Depth
        if previous.map(|p| p.depth_stencil.test_enabled) != Some(desc.depth_stencil.test_enabled) {
            if desc.depth_stencil.test_enabled {
                gl.enable(glow::DEPTH_TEST);
            } else {
                gl.disable(glow::DEPTH_TEST);
            }
        }
        if previous.map(|p| p.depth_stencil.write_enabled) != Some(desc.depth_stencil.write_enabled) {
            gl.depth_mask(desc.depth_stencil.write_enabled);
        }
        if previous.map(|p| p.depth_stencil.compare) != Some(desc.depth_stencil.compare) {
            gl.depth_func(desc.depth_stencil.compare.into_gl());
        }

        self.current = Some(*desc);
    }

    /// Sets the depth write mask through the shadow.
    pub fn set_depth_write<B: GlApi + ?Sized>(&mut self, gl: &B, enabled: bool) {
        match &mut self.current {
            Some(state) if state.depth_stencil.write_enabled == enabled => {}
            Some(state) => {
                gl.depth_mask(enabled);
                state.depth_stencil.write_enabled = enabled;
            }
            // Nothing applied yet: the next apply issues every field anyway.
            None => gl.depth_mask(enabled),
        }
    }

    /// Sets the colour write mask through the shadow.
    pub fn set_color_write_mask<B: GlApi + ?Sized>(&mut self, gl: &B, mask: ColorWrites) {
        match &mut self.current {
            Some(state) if state.blend.write_mask == mask => {}
            Some(state) => {
                issue_color_mask(gl, mask);
                state.blend.write_mask = mask;
            }
            None => issue_color_mask(gl, mask),
        }
    }

    /// Sets the polygon rasterization mode through the shadow.
    pub fn set_polygon_mode<B: GlApi + ?Sized>(&mut self, gl: &B, mode: PolygonMode) {
        if self.polygon_mode != Some(mode) {
            gl.polygon_mode(mode.into_gl());
            self.polygon_mode = Some(mode);
        }
    }
}

fn issue_color_mask<B: GlApi + ?Sized>(gl: &B, mask: ColorWrites) {
    gl.color_mask(
        mask.contains(ColorWrites::R),
        mask.contains(ColorWrites::G),
        mask.contains(ColorWrites::B),
        mask.contains(ColorWrites::A),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::gl::recording::{GlCall, RecordingGl};
    use aurora_core::renderer::{BlendFactor, CompareFunction};

    #[test]
    fn first_apply_issues_every_field() {
        let gl = RecordingGl::new();
        let mut shadow = StateShadow::new();
        shadow.apply(&gl, &PipelineStateDescriptor::default());

        assert_eq!(gl.count(|c| matches!(c, GlCall::CullFace(glow::BACK))), 1);
        assert_eq!(gl.count(|c| matches!(c, GlCall::FrontFace(_))), 1);
        assert_eq!(gl.count(|c| matches!(c, GlCall::Disable(glow::BLEND))), 1);
        assert_eq!(gl.count(|c| matches!(c, GlCall::BlendFuncSeparate { .. })), 1);
        assert_eq!(gl.count(|c| matches!(c, GlCall::BlendEquationSeparate { .. })), 1);
        assert_eq!(gl.count(|c| matches!(c, GlCall::ColorMask(..))), 1);
        assert_eq!(gl.count(|c| matches!(c, GlCall::DepthMask(true))), 1);
        assert_eq!(gl.count(|c| matches!(c, GlCall::DepthFunc(glow::LESS))), 1);
    }

    #[test]
    fn reapplying_the_same_state_is_silent() {
        let gl = RecordingGl::new();
        let mut shadow = StateShadow::new();
        let state = PipelineStateDescriptor::default();
        shadow.apply(&gl, &state);
        gl.take_calls();

        shadow.apply(&gl, &state);
        assert!(gl.calls().is_empty());
    }

    #[test]
    fn blend_factors_are_tracked_while_blending_is_disabled() {
        let gl = RecordingGl::new();
        let mut shadow = StateShadow::new();
        let mut state = PipelineStateDescriptor::default();
        shadow.apply(&gl, &state);
        gl.take_calls();

        state.blend.color.src_factor = BlendFactor::One;
        shadow.apply(&gl, &state);
        assert_eq!(
            gl.calls(),
            vec![GlCall::BlendFuncSeparate {
                src_rgb: glow::ONE,
                dst_rgb: glow::ONE_MINUS_SRC_ALPHA,
                src_alpha: glow::ONE,
                dst_alpha: glow::ONE_MINUS_SRC_ALPHA,
            }]
        );
        assert_eq!(shadow.current(), Some(&state));
    }

    #[test]
    fn only_changed_depth_fields_are_issued() {
        let gl = RecordingGl::new();
        let mut shadow = StateShadow::new();
        let mut state = PipelineStateDescriptor::default();
        shadow.apply(&gl, &state);
        gl.take_calls();

        state.depth_stencil.test_enabled = true;
        state.depth_stencil.compare = CompareFunction::LessEqual;
        shadow.apply(&gl, &state);
        assert_eq!(
            gl.calls(),
            vec![GlCall::Enable(glow::DEPTH_TEST), GlCall::DepthFunc(glow::LEQUAL)]
        );
    }

    #[test]
    fn helpers_keep_the_shadow_in_sync() {
        let gl = RecordingGl::new();
        let mut shadow = StateShadow::new();
        let mut state = PipelineStateDescriptor::default();
        state.depth_stencil.write_enabled = false;
        shadow.apply(&gl, &state);
        gl.take_calls();

        shadow.set_depth_write(&gl, true);
        assert_eq!(gl.take_calls(), vec![GlCall::DepthMask(true)]);

        // The pipeline wants writes off again, so the apply must re-issue it.
        shadow.apply(&gl, &state);
        assert_eq!(gl.take_calls(), vec![GlCall::DepthMask(false)]);

        shadow.set_polygon_mode(&gl, PolygonMode::Line);
        shadow.set_polygon_mode(&gl, PolygonMode::Line);
        assert_eq!(gl.take_calls(), vec![GlCall::PolygonMode(glow::LINE)]);
    }

    #[test]
    fn reset_forces_a_full_reapply() {
        let gl = RecordingGl::new();
        let mut shadow = StateShadow::new();
        let state = PipelineStateDescriptor::default();
        shadow.apply(&gl, &state);
        let first = gl.take_calls();

        shadow.reset();
        shadow.apply(&gl, &state);
        assert_eq!(gl.take_calls(), first);
    }
}
