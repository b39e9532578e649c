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

//! # Aurora Infra
//!
//! Concrete implementations of the `aurora-core` rendering contracts.
//!
//! The [`graphics::GlDevice`] drives any [`graphics::gl::GlApi`]: a live
//! `glow` context in applications, or the headless
//! [`graphics::gl::RecordingGl`] in tests and tools.

#![warn(missing_docs)]

pub mod graphics;

pub use graphics::{create_device, create_device_with_settings, DeviceBackend};
