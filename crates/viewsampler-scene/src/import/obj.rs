//! Wavefront OBJ loading.

use std::path::Path;

use glam::Vec3;
use viewsampler_core::{Error, Result, Transform};

use super::check_indices;
use crate::{MeshObject, Scene, SceneObject};

/// Loads every OBJ model as one scene object.
///
/// Models with no faces and no vertices become empty objects.
pub(super) fn load(path: &Path) -> Result<Scene> {
    let (models, materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
    )
    .map_err(|e| Error::scene_import(path, e))?;

    // Materials are never rendered; a missing .mtl is not an error.
    if let Err(e) = materials {
        log::debug!("Ignoring OBJ materials for {}: {e}", path.display());
    }

    let mut scene = Scene::new();
    for model in models {
        let mesh = model.mesh;
        if mesh.positions.is_empty() && mesh.indices.is_empty() {
            scene.push(SceneObject::Empty {
                name: model.name,
                transform: Transform::identity(),
            });
            continue;
        }

        // Positions come in groups of 3: x, y, z
        let vertices: Vec<Vec3> = mesh
            .positions
            .chunks_exact(3)
            .map(|p| Vec3::new(p[0], p[1], p[2]))
            .collect();

        // Indices come in groups of 3 for triangles
        let faces: Vec<[u32; 3]> = mesh
            .indices
            .chunks_exact(3)
            .map(|f| [f[0], f[1], f[2]])
            .collect();

        check_indices(path, &model.name, &faces, vertices.len())?;
        log::debug!(
            "OBJ object '{}': {} vertices, {} triangles",
            model.name,
            vertices.len(),
            faces.len()
        );
        scene.push_mesh(MeshObject::new(model.name, vertices, faces));
    }
    Ok(scene)
}
