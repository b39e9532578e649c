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

//! Graphics backends and the factory that selects one.

pub mod gl;
pub mod null;

use aurora_core::renderer::{DeviceSettings, GraphicsDevice, RenderError};

pub use self::gl::GlDevice;
pub use self::null::NullDevice;

/// The backend a device is created for.
#[derive(Debug)]
pub enum DeviceBackend {
    /// The inert [`NullDevice`].
    Null,
    /// OpenGL through a context created by the windowing layer.
    OpenGl(glow::Context),
}

/// Creates a device for `backend` with default settings.
pub fn create_device(backend: DeviceBackend) -> Result<Box<dyn GraphicsDevice>, RenderError> {
    create_device_with_settings(backend, DeviceSettings::default())
}

/// Creates a device for `backend` configured by `settings`.
/// ## Errors
/// * `RenderError::InitializationFailed` - If the backend cannot drive the context.
pub fn create_device_with_settings(
    backend: DeviceBackend,
    settings: DeviceSettings,
) -> Result<Box<dyn GraphicsDevice>, RenderError> {
    let device: Box<dyn GraphicsDevice> = match backend {
        DeviceBackend::Null => Box::new(NullDevice::with_settings(settings)),
        DeviceBackend::OpenGl(context) => Box::new(GlDevice::with_settings(context, settings)?),
    };
    Ok(device)
}
