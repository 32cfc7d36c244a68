//! Rendering error types.

use thiserror::Error;

/// Errors that can occur while producing or writing an image.
///
/// Backends convert these into [`viewsampler_core::Error::RenderIo`] together
/// with the output path.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The backend was asked to render before receiving a scene.
    #[error("backend not prepared - call prepare() first")]
    NotPrepared,

    /// The pixel buffer does not match the image size.
    #[error("invalid image data: expected {expected} bytes, got {actual}")]
    InvalidImageData { expected: usize, actual: usize },

    /// Image encoding error.
    #[error("image encoding error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;
