//! The imported scene.

use glam::{Mat4, Vec3};
use viewsampler_core::{BoundingBox, Error, ModelRotation, Result, Transform};

use crate::MeshObject;

/// An object in the scene.
#[derive(Debug, Clone)]
pub enum SceneObject {
    /// A triangle mesh.
    Mesh(MeshObject),
    /// A named node with no geometry (e.g. an empty OBJ group).
    Empty {
        /// Object name.
        name: String,
        /// World transform.
        transform: Transform,
    },
}

impl SceneObject {
    /// Returns the object name.
    pub fn name(&self) -> &str {
        match self {
            SceneObject::Mesh(mesh) => mesh.name(),
            SceneObject::Empty { name, .. } => name,
        }
    }

    /// Returns the mesh if this object is one.
    pub fn as_mesh(&self) -> Option<&MeshObject> {
        match self {
            SceneObject::Mesh(mesh) => Some(mesh),
            SceneObject::Empty { .. } => None,
        }
    }
}

/// A flat list of scene objects.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object.
    pub fn push(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    /// Adds a mesh object.
    pub fn push_mesh(&mut self, mesh: MeshObject) {
        self.objects.push(SceneObject::Mesh(mesh));
    }

    /// Returns all objects.
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Iterates over mesh objects only.
    pub fn meshes(&self) -> impl Iterator<Item = &MeshObject> {
        self.objects.iter().filter_map(SceneObject::as_mesh)
    }

    /// Iterates mutably over mesh objects only.
    pub fn meshes_mut(&mut self) -> impl Iterator<Item = &mut MeshObject> {
        self.objects.iter_mut().filter_map(|obj| match obj {
            SceneObject::Mesh(mesh) => Some(mesh),
            SceneObject::Empty { .. } => None,
        })
    }

    /// Returns the number of mesh objects.
    pub fn mesh_count(&self) -> usize {
        self.meshes().count()
    }

    /// Sets the scale of every mesh object to `factor` on each axis.
    pub fn rescale_meshes(&mut self, factor: f32) {
        for mesh in self.meshes_mut() {
            mesh.transform.scale = Vec3::splat(factor);
        }
    }

    /// Bakes every mesh object's scale into its vertex data.
    pub fn apply_scale(&mut self) {
        for mesh in self.meshes_mut() {
            mesh.apply_scale();
        }
    }

    /// World-space bounding box of all mesh geometry.
    ///
    /// # Errors
    /// Returns [`Error::InvalidScene`] if there are no mesh objects, if none
    /// of them has vertices, or if the result is not finite.
    pub fn world_bounds(&self) -> Result<BoundingBox> {
        if self.mesh_count() == 0 {
            return Err(Error::InvalidScene("scene contains no mesh objects".into()));
        }
        let bounds = self
            .meshes()
            .fold(BoundingBox::empty(), |acc, mesh| acc.union(&mesh.world_bounds()));
        if bounds.is_empty() {
            return Err(Error::InvalidScene(
                "mesh objects contain no vertices".into(),
            ));
        }
        if !bounds.is_finite() {
            return Err(Error::InvalidScene(format!(
                "bounding box is not finite: min {} max {}",
                bounds.min, bounds.max
            )));
        }
        Ok(bounds)
    }

    /// World matrices of every mesh with `rotation` assigned as its rotation.
    ///
    /// The rotation replaces whatever rotation the object had; it is not
    /// composed with it.
    pub fn posed(&self, rotation: &ModelRotation) -> Vec<(&MeshObject, Mat4)> {
        let quat = rotation.to_quat();
        self.meshes()
            .map(|mesh| (mesh, mesh.transform.with_rotation(quat).to_matrix()))
            .collect()
    }
}
