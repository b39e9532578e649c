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

//! The window-system seam used by swapchains.

use crate::renderer::error::RenderError;

/// A presentable surface created by the windowing layer (e.g. a GL context
/// bound to a native window).
pub trait PresentSurface {
    /// Presents the back buffer.
    fn swap_buffers(&mut self) -> Result<(), RenderError>;

    /// Sets the number of vertical blanks to wait per present. `0` disables vsync.
    fn set_swap_interval(&mut self, interval: u32) -> Result<(), RenderError>;
}
