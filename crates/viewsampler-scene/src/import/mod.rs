//! Model file import.
//!
//! Supported formats are chosen by file extension:
//! - `.obj` (Wavefront, through `tobj`)
//! - `.ply` (Stanford, through `ply-rs`)

mod obj;
mod ply;

use std::path::Path;

use viewsampler_core::{Error, Result};

use crate::Scene;

/// Model file formats understood by [`import_model`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    /// Wavefront OBJ.
    Obj,
    /// Stanford PLY (ASCII or binary).
    Ply,
}

impl ModelFormat {
    /// Detects the format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "obj" => Some(ModelFormat::Obj),
            "ply" => Some(ModelFormat::Ply),
            _ => None,
        }
    }
}

/// Imports a model file into a fresh scene.
///
/// Every object starts with an identity transform; vertex coordinates are
/// taken verbatim from the file.
///
/// # Errors
/// Returns [`Error::SceneImport`] if the file does not exist, has an
/// unsupported extension, cannot be parsed, or references vertices that do
/// not exist.
pub fn import_model(path: &Path) -> Result<Scene> {
    if !path.is_file() {
        return Err(Error::scene_import(path, "file not found"));
    }
    let format = ModelFormat::from_path(path)
        .ok_or_else(|| Error::scene_import(path, "unsupported model format"))?;

    let scene = match format {
        ModelFormat::Obj => obj::load(path)?,
        ModelFormat::Ply => ply::load(path)?,
    };

    log::info!(
        "Imported {} ({} objects, {} meshes)",
        path.display(),
        scene.objects().len(),
        scene.mesh_count()
    );
    Ok(scene)
}

/// Checks that every face index refers to an existing vertex.
fn check_indices(path: &Path, object: &str, faces: &[[u32; 3]], num_vertices: usize) -> Result<()> {
    match faces
        .iter()
        .flatten()
        .find(|&&i| i as usize >= num_vertices)
    {
        Some(bad) => Err(Error::scene_import(
            path,
            format!("object '{object}' references vertex {bad} but has {num_vertices} vertices"),
        )),
        None => Ok(()),
    }
}
