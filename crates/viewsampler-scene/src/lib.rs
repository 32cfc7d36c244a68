//! Scene objects and model import for viewsampler.
//!
//! A [`Scene`] is the in-memory stand-in for the content-creation
//! application's scene graph: a flat list of objects, of which only
//! [`MeshObject`]s carry geometry. [`import_model`] fills a fresh scene
//! from an OBJ or PLY file.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]

pub mod import;
pub mod mesh;
pub mod scene;

pub use import::{import_model, ModelFormat};
pub use mesh::MeshObject;
pub use scene::{Scene, SceneObject};
