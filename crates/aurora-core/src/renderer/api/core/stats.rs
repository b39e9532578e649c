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

//! Per-frame statistics for the rendering system.

/// Counters collected between `begin_frame` and `end_frame`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// A sequential counter for frames, starting at 1 for the first frame.
    pub frame_number: u64,
    /// The number of draw calls issued.
    pub draw_calls: u32,
    /// The number of vertices or indices submitted by draws.
    pub vertices_submitted: u64,
    /// The number of pipeline binds.
    pub pipeline_binds: u32,
    /// The number of render passes begun.
    pub render_passes: u32,
    /// The number of command lists submitted.
    pub command_lists_submitted: u32,
}
