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

//! Defines the hierarchy of error types for the rendering subsystem.
//!
//! Only initialization and compilation failures are represented as values.
//! Misuse of the binding state machine (drawing without a pipeline, writing
//! past the end of a buffer) is a caller contract violation and is logged by
//! the backend rather than returned.

use crate::renderer::api::command::CommandListState;
use crate::renderer::api::shader::ShaderStage;
use thiserror::Error;

/// An error related to the compilation of a shader module.
#[derive(Debug, Error)]
pub enum ShaderError {
    /// The backend compiler rejected the source.
    #[error("Shader compilation failed for {stage:?} stage '{label}': {log}")]
    CompilationFailed {
        /// The stage that was being compiled.
        stage: ShaderStage,
        /// A descriptive label for the shader.
        label: String,
        /// The compiler's info log.
        log: String,
    },
    /// The backend could not allocate a shader object.
    #[error("Failed to allocate shader object: {0}")]
    Allocation(String),
}

/// An error related to the creation of a graphics pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A shader module was supplied for the wrong pipeline stage.
    #[error("Expected a {expected:?} shader module, got a {found:?} module")]
    StageMismatch {
        /// The stage required by the slot.
        expected: ShaderStage,
        /// The stage of the supplied module.
        found: ShaderStage,
    },
    /// The backend linker rejected the shader pair.
    #[error("Pipeline link failed for '{}': {log}", .label.as_deref().unwrap_or("Unknown"))]
    LinkFailed {
        /// A descriptive label for the pipeline, if available.
        label: Option<String>,
        /// The linker's info log.
        log: String,
    },
    /// The backend could not allocate a program or vertex-array object.
    #[error("Failed to allocate pipeline object: {0}")]
    Allocation(String),
}

/// An error related to the creation of a GPU resource (buffers, textures, etc.).
#[derive(Debug, Error)]
pub enum ResourceError {
    /// A shader-specific error occurred.
    #[error("Shader resource error: {0}")]
    Shader(#[from] ShaderError),
    /// A pipeline-specific error occurred.
    #[error("Pipeline resource error: {0}")]
    Pipeline(#[from] PipelineError),
    /// The initial data does not match the size the resource requires.
    #[error("Initial data is {actual} bytes but the resource requires {expected} bytes")]
    SizeMismatch {
        /// The number of bytes the resource requires.
        expected: usize,
        /// The number of bytes supplied.
        actual: usize,
    },
    /// An error originating from the specific graphics backend implementation.
    #[error("Backend-specific resource error: {0}")]
    BackendError(String),
}

/// Misuse of the command list recording state machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandListError {
    /// A recording call was made while the list was not recording.
    #[error("Command list is not recording (state: {0:?})")]
    NotRecording(CommandListState),
    /// `begin()` was called on a list that is already recording.
    #[error("Command list is already recording")]
    AlreadyRecording,
    /// A list was submitted before `end()` closed it.
    #[error("Command list must be closed before submission (state: {0:?})")]
    NotClosed(CommandListState),
}

/// A high-level error that can occur within the graphics device.
#[derive(Debug, Error)]
pub enum RenderError {
    /// A failure occurred during the initialization of the graphics backend.
    #[error("Failed to initialize graphics backend: {0}")]
    InitializationFailed(String),
    /// The presentable surface could not be created.
    #[error("Failed to create swapchain: {0}")]
    SwapchainCreationFailed(String),
    /// The presentable surface reported a failure.
    #[error("Surface error: {0}")]
    SurfaceError(String),
    /// An error occurred while managing a GPU resource.
    #[error("Graphics resource operation failed: {0}")]
    ResourceError(#[from] ResourceError),
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn shader_error_display() {
        let err = ShaderError::CompilationFailed {
            stage: ShaderStage::Fragment,
            label: "lit.frag".to_string(),
            log: "0:12: syntax error".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "Shader compilation failed for Fragment stage 'lit.frag': 0:12: syntax error"
        );
    }

    #[test]
    fn pipeline_error_display_without_label() {
        let err = PipelineError::LinkFailed {
            label: None,
            log: "varying mismatch".to_string(),
        };
        assert_eq!(
            format!("{err}"),
            "Pipeline link failed for 'Unknown': varying mismatch"
        );
    }

    #[test]
    fn render_error_chains_to_the_pipeline_error() {
        let res_err: ResourceError = PipelineError::StageMismatch {
            expected: ShaderStage::Vertex,
            found: ShaderStage::Fragment,
        }
        .into();
        let render_err: RenderError = res_err.into();
        assert_eq!(
            format!("{render_err}"),
            "Graphics resource operation failed: Pipeline resource error: \
             Expected a Vertex shader module, got a Fragment module"
        );
        assert!(render_err.source().is_some());
        assert!(render_err.source().unwrap().source().is_some());
    }
}
