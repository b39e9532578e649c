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

//! The presentable surface wrapper.

use std::cell::{Cell, RefCell};

use crate::math::Extent2D;
use crate::renderer::error::RenderError;
use crate::renderer::traits::PresentSurface;

/// A descriptor used to create a [`Swapchain`].
pub struct SwapchainDescriptor {
    /// The window surface to present to. `None` creates a headless swapchain.
    pub surface: Option<Box<dyn PresentSurface>>,
    /// Initial width in pixels.
    pub width: u32,
    /// Initial height in pixels.
    pub height: u32,
    /// Whether presentation waits for vertical sync. `None` uses the
    /// device's `DeviceSettings::vsync`.
    pub vsync: Option<bool>,
}

impl std::fmt::Debug for SwapchainDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwapchainDescriptor")
            .field("surface", &self.surface.is_some())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("vsync", &self.vsync)
            .finish()
    }
}

/// A presentable surface and its current size.
///
/// All methods take `&self` so render passes and recorded command lists can
/// keep borrowing the swapchain across `present` and `resize`.
pub struct Swapchain {
    surface: RefCell<Option<Box<dyn PresentSurface>>>,
    extent: Cell<Extent2D>,
    vsync: Cell<bool>,
}

impl Swapchain {
    /// Wraps the surface of `desc` and applies its vsync setting. An unset
    /// vsync enables it.
    /// ## Errors
    /// * `RenderError::SwapchainCreationFailed` - If the surface rejects the swap interval.
    pub fn new(desc: SwapchainDescriptor) -> Result<Self, RenderError> {
        let vsync = desc.vsync.unwrap_or(true);
        let swapchain = Self {
            surface: RefCell::new(desc.surface),
            extent: Cell::new(Extent2D::new(desc.width, desc.height)),
            vsync: Cell::new(vsync),
        };
        swapchain.set_vsync(vsync).map_err(|e| {
            log::error!("Swapchain: surface rejected the swap interval: {}", e);
            RenderError::SwapchainCreationFailed(e.to_string())
        })?;
        Ok(swapchain)
    }

    /// Presents the back buffer. A headless swapchain does nothing.
    pub fn present(&self) -> Result<(), RenderError> {
        match self.surface.borrow_mut().as_mut() {
            Some(surface) => surface.swap_buffers(),
            None => Ok(()),
        }
    }

    /// Records the new surface size. The next render pass uses it as viewport.
    pub fn resize(&self, width: u32, height: u32) {
        let extent = Extent2D::new(width, height);
        if self.extent.replace(extent) != extent {
            log::debug!("Swapchain: resized to {}x{}", width, height);
        }
    }

    /// Current width in pixels.
    pub fn width(&self) -> u32 {
        self.extent.get().width
    }

    /// Current height in pixels.
    pub fn height(&self) -> u32 {
        self.extent.get().height
    }

    /// Current size in pixels.
    pub fn extent(&self) -> Extent2D {
        self.extent.get()
    }

    /// Enables or disables vertical sync on the surface.
    pub fn set_vsync(&self, enabled: bool) -> Result<(), RenderError> {
        if let Some(surface) = self.surface.borrow_mut().as_mut() {
            surface.set_swap_interval(if enabled { 1 } else { 0 })?;
        }
        self.vsync.set(enabled);
        Ok(())
    }

    /// Whether vertical sync is enabled.
    pub fn vsync(&self) -> bool {
        self.vsync.get()
    }

    /// Returns `true` if the swapchain has no surface to present to.
    pub fn is_headless(&self) -> bool {
        self.surface.borrow().is_none()
    }
}

impl std::fmt::Debug for Swapchain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Swapchain")
            .field("headless", &self.is_headless())
            .field("extent", &self.extent.get())
            .field("vsync", &self.vsync.get())
            .finish()
    }
}
