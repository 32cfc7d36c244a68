//! Error types for viewsampler.

use std::path::PathBuf;

use glam::Vec3;
use thiserror::Error;

/// The main error type for viewsampler operations.
///
/// None of these are recovered locally: every variant aborts the run that
/// produced it.
#[derive(Error, Debug)]
pub enum Error {
    /// The model file is missing, unreadable or in an unsupported format.
    #[error("failed to import model '{}': {reason}", path.display())]
    SceneImport { path: PathBuf, reason: String },

    /// The scene holds no usable mesh geometry after import.
    #[error("invalid scene: {0}")]
    InvalidScene(String),

    /// An observer sits exactly on its look-at target.
    #[error("degenerate look-at direction: position {position} coincides with target {target}")]
    DegenerateDirection { position: Vec3, target: Vec3 },

    /// Rendering a view or writing its image failed.
    #[error("render failed for '{}': {reason}", path.display())]
    RenderIo { path: PathBuf, reason: String },

    /// The run configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for viewsampler operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Builds a [`Error::RenderIo`] from any displayable cause.
    pub fn render_io(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::RenderIo {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Builds a [`Error::SceneImport`] from any displayable cause.
    pub fn scene_import(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        Self::SceneImport {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}
