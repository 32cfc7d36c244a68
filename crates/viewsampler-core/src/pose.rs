//! Observer poses and view requests.

use std::fmt;

use glam::{Mat4, Quat, Vec3};

use crate::orientation::{self, WORLD_UP};
use crate::{ModelRotation, Result};

/// Position and orientation of a camera or light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Position in world space.
    pub position: Vec3,
    /// Orientation; the observer looks down its local `-Z`.
    pub rotation: Quat,
}

impl Pose {
    /// Creates a pose at `position` aimed at `target` with world `+Z` up.
    ///
    /// # Errors
    /// Returns [`crate::Error::DegenerateDirection`] if `position == target`.
    pub fn look_at(position: Vec3, target: Vec3) -> Result<Self> {
        let rotation = orientation::look_at(position, target, WORLD_UP)?;
        Ok(Self { position, rotation })
    }

    /// World matrix of the observer.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position)
    }

    /// Viewing direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        orientation::forward_axis(self.rotation)
    }

    /// Opposite of the viewing direction (local `+Z`).
    #[must_use]
    pub fn backward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Up direction.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        orientation::up_axis(self.rotation)
    }
}

/// One unit of render work.
///
/// A request carries everything a backend needs to produce one image. It is
/// computed from the enumeration index alone and holds no reference to scene
/// state.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewRequest {
    /// Flat position in the enumeration, starting at zero.
    pub index: usize,
    /// Rotation assigned to every model object.
    pub model_rotation: ModelRotation,
    /// Camera pose.
    pub camera: Pose,
    /// Light pose.
    pub light: Pose,
    /// Output file name, relative to the output directory.
    pub file_name: String,
}

/// Prints a matrix row by row, the way the host application logs world matrices.
pub struct MatrixDisplay<'a>(pub &'a Mat4);

impl fmt::Display for MatrixDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = self.0.transpose();
        for (i, row) in [m.x_axis, m.y_axis, m.z_axis, m.w_axis].iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "({:>8.4}, {:>8.4}, {:>8.4}, {:>8.4})",
                row.x, row.y, row.z, row.w
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pose_axes_are_orthonormal() {
        let pose = Pose::look_at(Vec3::new(0.3, 0.4, 0.2), Vec3::ZERO).unwrap();
        assert!((pose.forward() + pose.backward()).length() < 1e-6);
        assert!(pose.forward().dot(pose.up()).abs() < 1e-6);
        assert!((pose.up().length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_matrix_translation_column() {
        let pose = Pose::look_at(Vec3::new(0.0, -0.5, 0.1), Vec3::ZERO).unwrap();
        let m = pose.matrix();
        assert_eq!(m.w_axis.truncate(), pose.position);
        assert!((m.transform_vector3(Vec3::NEG_Z) - pose.forward()).length() < 1e-6);
    }

    #[test]
    fn test_matrix_display_rows() {
        let m = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let text = MatrixDisplay(&m).to_string();
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows[0].ends_with("1.0000)"));
        assert!(rows[2].ends_with("3.0000)"));
        assert!(rows[3].starts_with("(  0.0000"));
    }
}
