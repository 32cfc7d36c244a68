//! The renderer seam.

use std::path::Path;

use viewsampler_core::{Result, ViewRequest};
use viewsampler_scene::Scene;

use crate::RenderSettings;

/// Something that turns a posed scene into an image file.
///
/// The pipeline calls [`prepare`](RenderBackend::prepare) once with the
/// imported scene, then [`render`](RenderBackend::render) once per request in
/// enumeration order. `render` must not return before the image at `path` is
/// written. Backends apply the request's poses themselves; the pipeline never
/// mutates the scene after preparation.
pub trait RenderBackend {
    /// Short name for logs.
    fn name(&self) -> &str;

    /// Receives the scene and settings for the run.
    ///
    /// # Errors
    /// Returns [`viewsampler_core::Error::RenderIo`] if the backend cannot
    /// accept the scene.
    fn prepare(&mut self, scene: &Scene, settings: &RenderSettings) -> Result<()>;

    /// Renders one view to `path`.
    ///
    /// # Errors
    /// Returns [`viewsampler_core::Error::RenderIo`] on any render or write
    /// failure. The caller aborts the run.
    fn render(&mut self, request: &ViewRequest, path: &Path) -> Result<()>;
}
