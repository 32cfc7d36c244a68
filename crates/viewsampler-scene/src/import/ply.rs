//! Stanford PLY loading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use glam::Vec3;
use ply_rs::parser::Parser;
use ply_rs::ply::{DefaultElement, Property};
use viewsampler_core::{Error, Result};

use super::check_indices;
use crate::{MeshObject, Scene};

/// Loads a PLY file as a single mesh object named after the file stem.
///
/// Polygon faces are fan-triangulated. A file without a `face` element
/// yields a mesh with vertices only.
pub(super) fn load(path: &Path) -> Result<Scene> {
    let file = File::open(path).map_err(|e| Error::scene_import(path, e))?;
    let mut reader = BufReader::new(file);
    let parser = Parser::<DefaultElement>::new();
    let ply = parser
        .read_ply(&mut reader)
        .map_err(|e| Error::scene_import(path, e))?;

    let vertex_elements = ply
        .payload
        .get("vertex")
        .ok_or_else(|| Error::scene_import(path, "no vertex element"))?;

    let mut vertices = Vec::with_capacity(vertex_elements.len());
    for element in vertex_elements {
        let coord = |name: &str| {
            element
                .get(name)
                .and_then(scalar)
                .ok_or_else(|| Error::scene_import(path, format!("vertex is missing '{name}'")))
        };
        vertices.push(Vec3::new(coord("x")?, coord("y")?, coord("z")?));
    }

    let mut faces = Vec::new();
    if let Some(face_elements) = ply.payload.get("face") {
        for element in face_elements {
            let polygon = element
                .get("vertex_indices")
                .or_else(|| element.get("vertex_index"))
                .and_then(index_list)
                .ok_or_else(|| Error::scene_import(path, "face is missing 'vertex_indices'"))?;
            // Fan triangulation: (n-2) triangles for an n-gon
            for i in 1..polygon.len().saturating_sub(1) {
                faces.push([polygon[0], polygon[i], polygon[i + 1]]);
            }
        }
    }

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("mesh")
        .to_string();
    check_indices(path, &name, &faces, vertices.len())?;
    log::debug!(
        "PLY object '{name}': {} vertices, {} triangles",
        vertices.len(),
        faces.len()
    );

    let mut scene = Scene::new();
    scene.push_mesh(MeshObject::new(name, vertices, faces));
    Ok(scene)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn scalar(property: &Property) -> Option<f32> {
    match *property {
        Property::Float(v) => Some(v),
        Property::Double(v) => Some(v as f32),
        Property::Char(v) => Some(f32::from(v)),
        Property::UChar(v) => Some(f32::from(v)),
        Property::Short(v) => Some(f32::from(v)),
        Property::UShort(v) => Some(f32::from(v)),
        Property::Int(v) => Some(v as f32),
        Property::UInt(v) => Some(v as f32),
        _ => None,
    }
}

fn index_list(property: &Property) -> Option<Vec<u32>> {
    match property {
        Property::ListInt(v) => v.iter().map(|&i| u32::try_from(i).ok()).collect(),
        Property::ListUInt(v) => Some(v.clone()),
        Property::ListShort(v) => v.iter().map(|&i| u32::try_from(i).ok()).collect(),
        Property::ListUShort(v) => Some(v.iter().map(|&i| u32::from(i)).collect()),
        Property::ListChar(v) => v.iter().map(|&i| u32::try_from(i).ok()).collect(),
        Property::ListUChar(v) => Some(v.iter().map(|&i| u32::from(i)).collect()),
        _ => None,
    }
}
