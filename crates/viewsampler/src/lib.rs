//! viewsampler: batch multi-view rendering of mesh models.
//!
//! A run imports one model, measures its world bounding box once, and then
//! walks a deterministic sequence of camera, light and model poses. Each pose
//! is handed to a [`RenderBackend`] that writes one image.
//!
//! # Quick Start
//!
//! ```no_run
//! use viewsampler::*;
//!
//! fn main() -> Result<()> {
//!     let config = RunConfig {
//!         model_path: "part.obj".into(),
//!         output_dir: "renders/part".into(),
//!         strategy: StrategyConfig::ring_pitch_grid(),
//!         ..Default::default()
//!     };
//!     let summary = run(&config, &mut PreviewRenderer::new())?;
//!     println!("{} views written", summary.rendered);
//!     Ok(())
//! }
//! ```
//!
//! # Strategies
//!
//! - [`Ring`]: the camera orbits a static model
//! - [`RingPitchGrid`]: the ring, repeated for each model pitch
//! - [`FullGrid`]: a fixed camera, the model swept over roll x pitch x yaw
//!
//! Every strategy is a [`ViewSequence`]. Any request can be computed from
//! its index alone, so the sequence is a lazy iterator and nothing is stored.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::module_name_repetitions)]

pub mod axes;
pub mod cli;
pub mod config;
pub mod light;
pub mod pipeline;
pub mod strategy;

pub use axes::{CartesianProduct, Coordinate, GridPoint, ParameterAxis};
pub use cli::{Cli, StrategyKind};
pub use config::{RunConfig, StrategyConfig, MAX_VIEWS};
pub use light::LightPlacement;
pub use pipeline::{plan, prepare_scene, run, run_prepared, PreparedScene, RunSummary};
pub use strategy::{
    FullGrid, Ring, RingGeometry, RingPitchGrid, Strategy, ViewRequests, ViewSequence,
};

// Re-export core types
pub use viewsampler_core::{
    look_at, BoundingBox, Error, MatrixDisplay, ModelRotation, Pose, Result, Transform,
    ViewRequest, Mat4, Quat, Vec3, WORLD_UP,
};

// Re-export scene and render types
pub use viewsampler_render::{
    OutputFormat, PreviewRenderer, RenderBackend, RenderSettings, ToneMapping,
};
pub use viewsampler_scene::{import_model, MeshObject, Scene, SceneObject};
