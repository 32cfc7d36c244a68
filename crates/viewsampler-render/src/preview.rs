//! CPU preview backend.
//!
//! Rasterizes the posed scene into a depth buffer and writes a depth-cued
//! silhouette over the background. There is no material or lighting model:
//! the image shows what the camera sees and how far away it is, which is
//! enough to check framing and orientation of a view sequence.

use std::path::Path;

use glam::{Mat4, Vec2, Vec3};
use viewsampler_core::{Error, Result, ViewRequest};
use viewsampler_scene::{MeshObject, Scene};

use crate::camera::RenderCamera;
use crate::screenshot::save_image;
use crate::{RenderBackend, RenderError, RenderResult, RenderSettings};

/// Fraction of brightness lost from the nearest to the farthest surface.
const DEPTH_FALLOFF: f32 = 0.6;

/// Software rasterizer writing one image per request.
#[derive(Debug, Clone)]
pub struct PreviewRenderer {
    scene: Option<Scene>,
    settings: RenderSettings,
    /// Linear color of the nearest surfaces.
    pub model_color: Vec3,
}

impl Default for PreviewRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewRenderer {
    /// Creates an unprepared renderer.
    pub fn new() -> Self {
        Self {
            scene: None,
            settings: RenderSettings::default(),
            model_color: Vec3::splat(0.8),
        }
    }

    /// Renders a request to an RGBA buffer without touching the filesystem.
    pub fn rasterize(&self, request: &ViewRequest) -> RenderResult<Vec<u8>> {
        let scene = self.scene.as_ref().ok_or(RenderError::NotPrepared)?;
        let (width, height) = (self.settings.width, self.settings.height);
        let camera = RenderCamera::new(request.camera, &self.settings);
        let view_proj = camera.view_projection_matrix();

        let mut depth = DepthBuffer::new(width, height);
        for (mesh, model) in scene.posed(&request.model_rotation) {
            let mvp = view_proj * model;
            let projected: Vec<Option<Vec3>> = mesh
                .vertices()
                .iter()
                .map(|&v| project(&mvp, v, width, height))
                .collect();
            for face in mesh.faces() {
                // Triangles crossing a clip plane are dropped whole.
                let [Some(a), Some(b), Some(c)] = face.map(|i| projected[i as usize]) else {
                    continue;
                };
                depth.fill_triangle(a, b, c);
            }
        }

        Ok(self.shade(&depth))
    }

    fn shade(&self, depth: &DepthBuffer) -> Vec<u8> {
        let tone = &self.settings.tone_mapping;
        let background = tone.to_rgb8(self.settings.background.radiance());
        let (near, far) = depth.range();
        let span = far - near;

        let mut rgba = Vec::with_capacity(depth.values.len() * 4);
        for &z in &depth.values {
            let rgb = if z.is_finite() {
                let t = if span > 0.0 { (z - near) / span } else { 0.0 };
                tone.to_rgb8(self.model_color * (1.0 - DEPTH_FALLOFF * t))
            } else {
                background
            };
            rgba.extend_from_slice(&[rgb[0], rgb[1], rgb[2], 255]);
        }
        rgba
    }
}

impl RenderBackend for PreviewRenderer {
    fn name(&self) -> &str {
        "preview"
    }

    fn prepare(&mut self, scene: &Scene, settings: &RenderSettings) -> Result<()> {
        self.scene = Some(scene.clone());
        self.settings = settings.clone();
        log::debug!(
            "Preview renderer prepared: {} meshes ({} vertices, {} triangles), {}x{}",
            scene.mesh_count(),
            scene.meshes().map(MeshObject::num_vertices).sum::<usize>(),
            scene.meshes().map(MeshObject::num_faces).sum::<usize>(),
            settings.width,
            settings.height
        );
        Ok(())
    }

    fn render(&mut self, request: &ViewRequest, path: &Path) -> Result<()> {
        let rgba = self
            .rasterize(request)
            .map_err(|e| Error::render_io(path, e))?;
        save_image(
            path,
            &rgba,
            self.settings.width,
            self.settings.height,
            self.settings.format,
        )
        .map_err(|e| Error::render_io(path, e))
    }
}

/// Projects a local-space vertex to (pixel x, pixel y, depth in [0, 1]).
///
/// Returns `None` for vertices behind the camera or outside the depth range.
#[allow(clippy::cast_precision_loss)]
fn project(mvp: &Mat4, v: Vec3, width: u32, height: u32) -> Option<Vec3> {
    let clip = *mvp * v.extend(1.0);
    if clip.w <= f32::EPSILON {
        return None;
    }
    let ndc = clip.truncate() / clip.w;
    if !(0.0..=1.0).contains(&ndc.z) {
        return None;
    }
    Some(Vec3::new(
        (ndc.x + 1.0) * 0.5 * width as f32,
        (1.0 - ndc.y) * 0.5 * height as f32,
        ndc.z,
    ))
}

/// Signed doubled area of (a, b, p); positive when p is left of a->b.
fn edge(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (b.y - a.y) * (p.x - a.x)
}

struct DepthBuffer {
    width: u32,
    height: u32,
    values: Vec<f32>,
}

impl DepthBuffer {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            values: vec![f32::INFINITY; width as usize * height as usize],
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn fill_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) {
        let (a2, b2, c2) = (a.truncate(), b.truncate(), c.truncate());
        let area = edge(a2, b2, c2);
        if area.abs() <= f32::EPSILON {
            return;
        }

        let (w, h) = (self.width as f32, self.height as f32);
        let lo = a2.min(b2).min(c2).floor().clamp(Vec2::ZERO, Vec2::new(w, h));
        let hi = a2.max(b2).max(c2).ceil().clamp(Vec2::ZERO, Vec2::new(w, h));

        for y in (lo.y as u32)..(hi.y as u32) {
            for x in (lo.x as u32)..(hi.x as u32) {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                // Dividing by the signed area accepts either winding.
                let w0 = edge(b2, c2, p) / area;
                let w1 = edge(c2, a2, p) / area;
                let w2 = edge(a2, b2, p) / area;
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }
                let z = w0 * a.z + w1 * b.z + w2 * c.z;
                let idx = y as usize * self.width as usize + x as usize;
                if z < self.values[idx] {
                    self.values[idx] = z;
                }
            }
        }
    }

    /// Nearest and farthest covered depth, or (0, 0) if nothing was drawn.
    fn range(&self) -> (f32, f32) {
        let (near, far) = self
            .values
            .iter()
            .filter(|z| z.is_finite())
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &z| {
                (lo.min(z), hi.max(z))
            });
        if near > far {
            (0.0, 0.0)
        } else {
            (near, far)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use viewsampler_core::{BoundingBox, ModelRotation, Pose};

    /// A closed cube of half-size `h` centered at the origin.
    fn cube_scene(h: f32) -> Scene {
        let vertices = BoundingBox::new(Vec3::splat(-h), Vec3::splat(h))
            .corners()
            .to_vec();
        let faces = vec![
            [0, 1, 3], [0, 3, 2], // -Z
            [4, 6, 7], [4, 7, 5], // +Z
            [0, 4, 5], [0, 5, 1], // -Y
            [2, 3, 7], [2, 7, 6], // +Y
            [0, 2, 6], [0, 6, 4], // -X
            [1, 5, 7], [1, 7, 3], // +X
        ];
        let mut scene = Scene::new();
        scene.push_mesh(MeshObject::new("cube", vertices, faces));
        scene
    }

    fn request(camera_position: Vec3) -> ViewRequest {
        let camera = Pose::look_at(camera_position, Vec3::ZERO).unwrap();
        ViewRequest {
            index: 0,
            model_rotation: ModelRotation::identity(),
            camera,
            light: camera,
            file_name: "view_000.png".into(),
        }
    }

    fn pixel(rgba: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * width + x) * 4) as usize;
        [rgba[i], rgba[i + 1], rgba[i + 2], rgba[i + 3]]
    }

    #[test]
    fn test_unprepared_render_fails() {
        let renderer = PreviewRenderer::new();
        let err = renderer.rasterize(&request(Vec3::new(0.5, 0.0, 0.0))).unwrap_err();
        assert!(matches!(err, RenderError::NotPrepared));
    }

    #[test]
    fn test_cube_covers_center_not_corner() {
        let settings = RenderSettings::default().with_size(64, 48);
        let mut renderer = PreviewRenderer::new();
        renderer.prepare(&cube_scene(0.05), &settings).unwrap();

        let rgba = renderer.rasterize(&request(Vec3::new(0.5, 0.0, 0.15))).unwrap();
        assert_eq!(rgba.len(), 64 * 48 * 4);
        let background = settings.tone_mapping.to_rgb8(settings.background.radiance());
        let corner = pixel(&rgba, 64, 0, 0);
        let center = pixel(&rgba, 64, 32, 24);
        assert_eq!(&corner[..3], &background);
        assert_ne!(&center[..3], &background);
        assert_eq!(center[3], 255);
    }

    #[test]
    fn test_camera_behind_geometry_sees_nothing() {
        let settings = RenderSettings::default().with_size(16, 16);
        let mut renderer = PreviewRenderer::new();
        renderer.prepare(&cube_scene(0.05), &settings).unwrap();
        // Looking away from the cube.
        let camera = Pose::look_at(Vec3::new(0.5, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0)).unwrap();
        let mut req = request(Vec3::new(0.5, 0.0, 0.0));
        req.camera = camera;
        let rgba = renderer.rasterize(&req).unwrap();
        let first = &rgba[0..4];
        assert!(rgba.chunks(4).all(|px| px == first));
    }

    #[test]
    fn test_render_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("view_000.png");
        let settings = RenderSettings::default().with_size(32, 32);
        let mut renderer = PreviewRenderer::new();
        renderer.prepare(&cube_scene(0.05), &settings).unwrap();
        renderer
            .render(&request(Vec3::new(0.0, -0.5, 0.1)), &path)
            .unwrap();
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (32, 32));
    }

    #[test]
    fn test_unwritable_path_is_render_io() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("view_000.png");
        let mut renderer = PreviewRenderer::new();
        renderer
            .prepare(&cube_scene(0.05), &RenderSettings::default().with_size(8, 8))
            .unwrap();
        let err = renderer
            .render(&request(Vec3::new(0.5, 0.0, 0.0)), &path)
            .unwrap_err();
        assert!(matches!(err, Error::RenderIo { .. }));
    }
}
