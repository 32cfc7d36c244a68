//! Object transforms and model rotations.

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// A transformation represented as separate components.
///
/// Scene objects keep their world transform in this form so that scale and
/// rotation can be reassigned independently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// Translation component.
    pub translation: Vec3,
    /// Rotation component as a quaternion.
    pub rotation: Quat,
    /// Scale component.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Creates a new identity transform.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Converts this transform to a Mat4.
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }

    /// Returns a copy with the rotation replaced (not composed).
    #[must_use]
    pub fn with_rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }
}

/// Rotation of the model, in degrees.
///
/// Pitch turns about the model's X axis, roll about Y and yaw about Z. The
/// angles are combined with the XYZ Euler convention of the host application:
/// X is applied first, then Y, then Z, all about fixed axes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelRotation {
    /// Rotation about X in degrees.
    pub pitch_deg: f32,
    /// Rotation about Y in degrees.
    pub roll_deg: f32,
    /// Rotation about Z in degrees.
    pub yaw_deg: f32,
}

impl ModelRotation {
    /// Creates a rotation from pitch, roll and yaw in degrees.
    #[must_use]
    pub fn new(pitch_deg: f32, roll_deg: f32, yaw_deg: f32) -> Self {
        Self {
            pitch_deg,
            roll_deg,
            yaw_deg,
        }
    }

    /// No rotation.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    /// Rotation about X only.
    #[must_use]
    pub fn pitch(pitch_deg: f32) -> Self {
        Self::new(pitch_deg, 0.0, 0.0)
    }

    /// The angles in radians as (x, y, z).
    #[must_use]
    pub fn radians(&self) -> Vec3 {
        Vec3::new(
            self.pitch_deg.to_radians(),
            self.roll_deg.to_radians(),
            self.yaw_deg.to_radians(),
        )
    }

    /// Converts to a quaternion (`Rz * Ry * Rx`).
    #[must_use]
    pub fn to_quat(&self) -> Quat {
        let r = self.radians();
        Quat::from_euler(EulerRot::ZYX, r.z, r.y, r.x)
    }

    /// Returns true when all three angles are zero.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.pitch_deg == 0.0 && self.roll_deg == 0.0 && self.yaw_deg == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_matrix_applies_scale_then_rotation_then_translation() {
        let t = Transform {
            translation: Vec3::new(1.0, 2.0, 3.0),
            rotation: Quat::from_rotation_z(std::f32::consts::FRAC_PI_2),
            scale: Vec3::splat(0.001),
        };
        let p = t.to_matrix().transform_point3(Vec3::new(1000.0, 0.0, 0.0));
        assert!((p - Vec3::new(1.0, 3.0, 3.0)).length() < 1e-5);
    }

    #[test]
    fn test_with_rotation_overwrites() {
        let t = Transform {
            rotation: Quat::from_rotation_x(1.0),
            ..Transform::identity()
        };
        let r = Quat::from_rotation_z(0.25);
        assert_eq!(t.with_rotation(r).rotation, r);
    }

    #[test]
    fn test_pitch_rotates_about_x() {
        let q = ModelRotation::pitch(90.0).to_quat();
        assert!((q * Vec3::Y - Vec3::Z).length() < 1e-6);
        assert!((q * Vec3::X - Vec3::X).length() < 1e-6);
    }

    #[test]
    fn test_xyz_order_applies_pitch_before_yaw() {
        // Pitch 90 then yaw 90: +Y -> +Z (pitch) -> +Z (yaw leaves Z fixed).
        let q = ModelRotation::new(90.0, 0.0, 90.0).to_quat();
        assert!((q * Vec3::Y - Vec3::Z).length() < 1e-6);
        // +X is untouched by pitch and then turned to +Y by yaw.
        assert!((q * Vec3::X - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_identity() {
        assert!(ModelRotation::identity().is_identity());
        assert!(!ModelRotation::new(0.0, 1.0, 0.0).is_identity());
        assert!(ModelRotation::identity().to_quat().abs_diff_eq(Quat::IDENTITY, 1e-7));
    }
}
