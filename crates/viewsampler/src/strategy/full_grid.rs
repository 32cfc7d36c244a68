//! Fixed camera with the model swept over roll, pitch and yaw.

use glam::Vec3;
use viewsampler_core::{BoundingBox, ModelRotation, Pose, Result, ViewRequest};

use super::{ViewSequence, PITCH_AXIS, ROLL_AXIS, YAW_AXIS};
use crate::axes::{GridPoint, ParameterAxis};
use crate::light::LightPlacement;

/// Default roll values, in degrees.
pub const DEFAULT_ROLLS: [f32; 6] = [0.0, 60.0, 120.0, 180.0, 240.0, 300.0];
/// Default pitch values, in degrees.
pub const DEFAULT_GRID_PITCHES: [f32; 7] = [-90.0, -60.0, -30.0, 0.0, 30.0, 60.0, 90.0];
/// Default yaw values, in degrees.
pub const DEFAULT_YAWS: [f32; 6] = [0.0, 60.0, 120.0, 180.0, 240.0, 300.0];

/// A fixed camera with the model swept over roll x pitch x yaw.
///
/// Roll is an enumeration axis either way. Unless `apply_roll` is set the
/// roll angle does not reach the model, so each pitch/yaw pose is rendered
/// once per roll value under a different file name.
#[derive(Debug, Clone, PartialEq)]
pub struct FullGrid {
    /// Distance from the model center along `-Y`.
    pub distance: f32,
    pub elevation_factor: f32,
    pub roll_deg: Vec<f32>,
    pub pitch_deg: Vec<f32>,
    pub yaw_deg: Vec<f32>,
    pub apply_roll: bool,
    pub light: LightPlacement,
    pub extension: &'static str,
}

impl Default for FullGrid {
    fn default() -> Self {
        Self {
            distance: 0.5,
            elevation_factor: 0.3,
            roll_deg: DEFAULT_ROLLS.to_vec(),
            pitch_deg: DEFAULT_GRID_PITCHES.to_vec(),
            yaw_deg: DEFAULT_YAWS.to_vec(),
            apply_roll: false,
            light: LightPlacement::default(),
            extension: "png",
        }
    }
}

impl FullGrid {
    /// The camera position, shared by every request.
    pub fn camera_position(&self, bounds: &BoundingBox) -> Vec3 {
        bounds.center() + Vec3::new(0.0, -self.distance, bounds.max_extent() * self.elevation_factor)
    }

    /// Returns true if configured roll values will not reach the model.
    pub fn ignores_roll(&self) -> bool {
        !self.apply_roll && self.roll_deg.iter().any(|&r| r != 0.0)
    }
}

impl ViewSequence for FullGrid {
    fn name(&self) -> &'static str {
        "full_grid"
    }

    fn axes(&self) -> Vec<ParameterAxis> {
        vec![
            ParameterAxis::new(ROLL_AXIS, self.roll_deg.clone()),
            ParameterAxis::new(PITCH_AXIS, self.pitch_deg.clone()),
            ParameterAxis::new(YAW_AXIS, self.yaw_deg.clone()),
        ]
    }

    fn request(&self, bounds: &BoundingBox, point: &GridPoint) -> Result<ViewRequest> {
        let roll = point.require(ROLL_AXIS)?.value;
        let roll = if self.apply_roll { roll } else { 0.0 };
        let pitch = point.require(PITCH_AXIS)?.value;
        let yaw = point.require(YAW_AXIS)?.value;

        let center = bounds.center();
        let camera = Pose::look_at(self.camera_position(bounds), center)?;
        let light = self.light.pose(&camera, center)?;
        Ok(ViewRequest {
            index: point.index,
            model_rotation: ModelRotation::new(pitch, roll, yaw),
            camera,
            light,
            file_name: format!("view_{:03}.{}", point.index, self.extension),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> BoundingBox {
        BoundingBox::new(Vec3::new(-0.1, -0.05, 0.0), Vec3::new(0.1, 0.05, 0.1))
    }

    #[test]
    fn test_default_grid_size_and_counter() {
        let grid = FullGrid::default();
        assert_eq!(grid.len(), 252);
        let requests: Vec<ViewRequest> = grid.requests(&bounds()).collect::<Result<_>>().unwrap();
        for (k, r) in requests.iter().enumerate() {
            assert_eq!(r.index, k);
            assert_eq!(r.file_name, format!("view_{k:03}.png"));
        }
        assert_eq!(requests[251].file_name, "view_251.png");
    }

    #[test]
    fn test_camera_is_fixed() {
        let grid = FullGrid::default();
        let b = bounds();
        let first = grid.request_at(&b, 0).unwrap().unwrap();
        let last = grid.request_at(&b, 251).unwrap().unwrap();
        assert_eq!(first.camera, last.camera);
        let expected = Vec3::new(0.0, -0.5, 0.05 + 0.2 * 0.3);
        assert!((first.camera.position - expected).length() < 1e-6);
    }

    #[test]
    fn test_roll_ignored_by_default() {
        let grid = FullGrid::default();
        assert!(grid.ignores_roll());
        // Index 42 = roll[1], pitch[0], yaw[0].
        let r = grid.request_at(&bounds(), 42).unwrap().unwrap();
        assert_eq!(r.model_rotation, ModelRotation::new(-90.0, 0.0, 0.0));
        let same = grid.request_at(&bounds(), 0).unwrap().unwrap();
        assert_eq!(r.model_rotation, same.model_rotation);
        assert_ne!(r.file_name, same.file_name);
    }

    #[test]
    fn test_apply_roll() {
        let grid = FullGrid {
            apply_roll: true,
            ..Default::default()
        };
        assert!(!grid.ignores_roll());
        let r = grid.request_at(&bounds(), 42 + 7).unwrap().unwrap();
        assert_eq!(r.model_rotation, ModelRotation::new(-60.0, 60.0, 60.0));
    }

    #[test]
    fn test_point_missing_roll_is_rejected() {
        let ring_pitch = crate::axes::CartesianProduct::new(vec![
            ParameterAxis::new(PITCH_AXIS, vec![0.0]),
            ParameterAxis::indexed("view", 4),
        ]);
        let point = ring_pitch.point_at(2).unwrap();
        let err = FullGrid::default().request(&bounds(), &point).unwrap_err();
        assert!(matches!(err, viewsampler_core::Error::InvalidConfig(msg) if msg.contains("'roll'")));
    }

    #[test]
    fn test_zero_rolls_are_not_ignored() {
        let grid = FullGrid {
            roll_deg: vec![0.0],
            ..Default::default()
        };
        assert!(!grid.ignores_roll());
        assert_eq!(grid.len(), 42);
    }
}
