//! Projection of a camera pose.

use glam::Mat4;
use viewsampler_core::Pose;

use crate::RenderSettings;

/// A posed perspective camera.
#[derive(Debug, Clone, Copy)]
pub struct RenderCamera {
    /// World pose; the camera looks down its local `-Z`.
    pub pose: Pose,
    /// Vertical field of view in radians.
    pub fov: f32,
    /// Aspect ratio (width / height).
    pub aspect_ratio: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
}

impl RenderCamera {
    /// Creates a camera from a pose and the run's render settings.
    #[must_use]
    pub fn new(pose: Pose, settings: &RenderSettings) -> Self {
        Self {
            pose,
            fov: settings.fov_vertical_deg.to_radians(),
            aspect_ratio: settings.aspect_ratio(),
            near: settings.clip_start,
            far: settings.clip_end,
        }
    }

    /// Returns the view matrix (world to camera space).
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.pose.matrix().inverse()
    }

    /// Returns the projection matrix. Depth maps to `[0, 1]`.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect_ratio, self.near, self.far)
    }

    /// Returns the combined view-projection matrix.
    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
