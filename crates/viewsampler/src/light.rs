//! Placement of the directional light.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use viewsampler_core::{Pose, Result};

/// Default distance the light trails behind the camera.
pub const DEFAULT_LIGHT_OFFSET: f32 = 0.1;

/// Where the light sits for each view. It is always aimed at the model center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LightPlacement {
    /// Co-moves with the camera, `offset` behind it along its backward axis.
    FollowCamera {
        #[serde(default = "default_offset")]
        offset: f32,
    },
    /// Stays at a fixed world position.
    Fixed { position: Vec3 },
}

fn default_offset() -> f32 {
    DEFAULT_LIGHT_OFFSET
}

impl Default for LightPlacement {
    fn default() -> Self {
        LightPlacement::FollowCamera {
            offset: DEFAULT_LIGHT_OFFSET,
        }
    }
}

impl LightPlacement {
    /// The sun position used when the light does not follow the camera.
    pub fn fixed_sun() -> Self {
        LightPlacement::Fixed {
            position: Vec3::new(2.0, 2.0, 2.0),
        }
    }

    /// Computes the light pose for a camera pose, aimed at `target`.
    ///
    /// # Errors
    /// Returns [`viewsampler_core::Error::DegenerateDirection`] if the light
    /// lands on `target`.
    pub fn pose(&self, camera: &Pose, target: Vec3) -> Result<Pose> {
        let position = match *self {
            LightPlacement::FollowCamera { offset } => camera.position + camera.backward() * offset,
            LightPlacement::Fixed { position } => position,
        };
        Pose::look_at(position, target)
    }
}
