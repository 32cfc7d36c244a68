//! Triangle mesh objects.

use glam::{Mat4, Vec3};
use viewsampler_core::{BoundingBox, Transform};

/// A named triangle mesh with a world transform.
///
/// Vertices are stored in the object's local frame; [`MeshObject::transform`]
/// places them in the world.
#[derive(Debug, Clone)]
pub struct MeshObject {
    name: String,
    vertices: Vec<Vec3>,
    faces: Vec<[u32; 3]>,
    /// World transform of the object.
    pub transform: Transform,
}

impl MeshObject {
    /// Creates a mesh with an identity transform.
    ///
    /// Face indices are not checked here; importers validate them.
    pub fn new(name: impl Into<String>, vertices: Vec<Vec3>, faces: Vec<[u32; 3]>) -> Self {
        Self {
            name: name.into(),
            vertices,
            faces,
            transform: Transform::identity(),
        }
    }

    /// Returns the object name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the local-space vertices.
    pub fn vertices(&self) -> &[Vec3] {
        &self.vertices
    }

    /// Returns the triangle faces.
    pub fn faces(&self) -> &[[u32; 3]] {
        &self.faces
    }

    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    pub fn num_faces(&self) -> usize {
        self.faces.len()
    }

    /// Returns the world matrix.
    pub fn world_matrix(&self) -> Mat4 {
        self.transform.to_matrix()
    }

    /// Bounding box of the vertices in the local frame.
    ///
    /// Empty if the mesh has no vertices.
    pub fn local_bounds(&self) -> BoundingBox {
        BoundingBox::from_points(self.vertices.iter().copied())
    }

    /// The eight local bounding corners transformed to world space and
    /// re-aggregated.
    pub fn world_bounds(&self) -> BoundingBox {
        self.local_bounds().transformed(&self.world_matrix())
    }

    /// Bakes the scale component into the vertex data and resets it to one.
    ///
    /// The world-space geometry is unchanged by this call.
    pub fn apply_scale(&mut self) {
        let scale = self.transform.scale;
        if scale == Vec3::ONE {
            return;
        }
        for v in &mut self.vertices {
            *v *= scale;
        }
        self.transform.scale = Vec3::ONE;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Quat;

    fn unit_triangle() -> MeshObject {
        MeshObject::new(
            "tri",
            vec![Vec3::ZERO, Vec3::new(1000.0, 0.0, 0.0), Vec3::new(0.0, 1000.0, 0.0)],
            vec![[0, 1, 2]],
        )
    }

    #[test]
    fn test_local_bounds() {
        let mesh = unit_triangle();
        let bb = mesh.local_bounds();
        assert_eq!(bb.min, Vec3::ZERO);
        assert_eq!(bb.max, Vec3::new(1000.0, 1000.0, 0.0));
    }

    #[test]
    fn test_world_bounds_follow_transform() {
        let mut mesh = unit_triangle();
        mesh.transform.translation = Vec3::new(0.0, 0.0, 5.0);
        mesh.transform.scale = Vec3::splat(0.001);
        let bb = mesh.world_bounds();
        assert!((bb.min - Vec3::new(0.0, 0.0, 5.0)).length() < 1e-6);
        assert!((bb.max - Vec3::new(1.0, 1.0, 5.0)).length() < 1e-5);
    }

    #[test]
    fn test_apply_scale_preserves_world_geometry() {
        let mut mesh = unit_triangle();
        mesh.transform.rotation = Quat::from_rotation_z(0.3);
        mesh.transform.scale = Vec3::splat(0.001);
        let before = mesh.world_bounds();
        mesh.apply_scale();
        let after = mesh.world_bounds();
        assert_eq!(mesh.transform.scale, Vec3::ONE);
        assert!((mesh.vertices()[1] - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-6);
        assert!((before.min - after.min).length() < 1e-5);
        assert!((before.max - after.max).length() < 1e-5);
    }

    #[test]
    fn test_empty_mesh_has_empty_bounds() {
        let mesh = MeshObject::new("empty", Vec::new(), Vec::new());
        assert!(mesh.world_bounds().is_empty());
    }
}
