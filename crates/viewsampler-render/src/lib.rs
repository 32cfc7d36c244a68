//! Render backends for viewsampler.
//!
//! This crate provides:
//! - the [`RenderBackend`] trait the pipeline drives, one request at a time
//! - [`RenderSettings`] (image size, lens, clipping, background, view transform)
//! - image output through the `image` crate
//! - [`PreviewRenderer`], a CPU depth-cued rasterizer

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]

pub mod backend;
pub mod camera;
pub mod error;
pub mod preview;
pub mod screenshot;
pub mod settings;
pub mod tone_mapping;

pub use backend::RenderBackend;
pub use camera::RenderCamera;
pub use error::{RenderError, RenderResult};
pub use preview::PreviewRenderer;
pub use screenshot::save_image;
pub use settings::{BackgroundConfig, OutputFormat, RenderSettings};
pub use tone_mapping::ToneMapping;
