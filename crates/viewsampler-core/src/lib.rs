//! Core types for viewsampler.
//!
//! This crate holds the pure geometry the rest of the workspace builds on:
//! - [`BoundingBox`] for world-space model extents
//! - [`look_at`] orientation for cameras and lights
//! - [`Transform`] and [`ModelRotation`] for scene objects
//! - [`Pose`] and [`ViewRequest`], the unit of render work
//! - the shared [`Error`] type

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]
// Exact zero checks on configured angles are intentional
#![allow(clippy::float_cmp)]

pub mod bounds;
pub mod error;
pub mod orientation;
pub mod pose;
pub mod transform;

pub use bounds::BoundingBox;
pub use error::{Error, Result};
pub use orientation::{look_at, WORLD_UP};
pub use pose::{MatrixDisplay, Pose, ViewRequest};
pub use transform::{ModelRotation, Transform};

// Re-export glam types for convenience
pub use glam::{Mat4, Quat, Vec3};
