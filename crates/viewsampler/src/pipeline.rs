//! End-to-end run: import, measure, enumerate, render.
//!
//! Everything here is synchronous. One request is computed, logged and
//! rendered before the next is computed, and the first error ends the run.

use std::path::PathBuf;

use viewsampler_core::{BoundingBox, Error, MatrixDisplay, Result};
use viewsampler_render::RenderBackend;
use viewsampler_scene::{import_model, Scene};

use crate::config::RunConfig;
use crate::strategy::{Strategy, ViewRequests, ViewSequence};

/// An imported scene with its unit scale baked in and its bounds measured.
#[derive(Debug, Clone)]
pub struct PreparedScene {
    pub scene: Scene,
    pub bounds: BoundingBox,
}

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Strategy name.
    pub strategy: &'static str,
    /// Number of images written.
    pub rendered: usize,
    pub output_dir: PathBuf,
}

/// Imports the model, applies the unit scale and measures world bounds.
///
/// Bounds are taken once here, before any model rotation is applied.
pub fn prepare_scene(config: &RunConfig) -> Result<PreparedScene> {
    let mut scene = import_model(&config.model_path)?;
    scene.rescale_meshes(config.unit_scale);
    scene.apply_scale();
    let bounds = scene.world_bounds()?;
    log::info!(
        "Model bounds: min {} max {} (center {}, max extent {:.4})",
        bounds.min,
        bounds.max,
        bounds.center(),
        bounds.max_extent()
    );
    Ok(PreparedScene { scene, bounds })
}

/// Validates the config and builds its strategy.
pub fn plan(config: &RunConfig) -> Result<Strategy> {
    config.validate()?;
    let strategy = config.strategy();
    if let Strategy::FullGrid(grid) = &strategy {
        if grid.ignores_roll() {
            log::warn!(
                "Roll values {:?} are enumerated but not applied to the model; set apply_roll to rotate about Y",
                grid.roll_deg
            );
        }
    }
    Ok(strategy)
}

/// Runs a whole config against a backend.
pub fn run<B: RenderBackend + ?Sized>(config: &RunConfig, backend: &mut B) -> Result<RunSummary> {
    let strategy = plan(config)?;
    let prepared = prepare_scene(config)?;
    run_prepared(config, &strategy, &prepared, backend)
}

/// Renders every request of `strategy` for an already prepared scene.
pub fn run_prepared<B: RenderBackend + ?Sized>(
    config: &RunConfig,
    strategy: &Strategy,
    prepared: &PreparedScene,
    backend: &mut B,
) -> Result<RunSummary> {
    let output_dir = config.output_dir.clone();
    std::fs::create_dir_all(&output_dir).map_err(|e| Error::render_io(&output_dir, e))?;

    backend.prepare(&prepared.scene, &config.render)?;
    let total = strategy.len();
    log::info!(
        "Rendering {total} views with the {} strategy using the {} backend into {}",
        strategy.name(),
        backend.name(),
        output_dir.display()
    );

    let mut rendered = 0;
    for request in ViewRequests::new(strategy, prepared.bounds) {
        let request = request?;
        log::info!(
            "[{}/{}] {}: camera at {}\n{}",
            request.index + 1,
            total,
            request.file_name,
            request.camera.position,
            MatrixDisplay(&request.camera.matrix())
        );
        log::debug!(
            "light at {} facing {}, model rotation {:?}",
            request.light.position,
            request.light.forward(),
            request.model_rotation
        );
        backend.render(&request, &output_dir.join(&request.file_name))?;
        rendered += 1;
    }

    log::info!("Rendered {rendered} views into {}", output_dir.display());
    Ok(RunSummary {
        strategy: strategy.name(),
        rendered,
        output_dir,
    })
}
