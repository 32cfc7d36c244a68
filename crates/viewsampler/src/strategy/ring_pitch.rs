//! Camera ring repeated over a list of model pitches.

use viewsampler_core::{BoundingBox, ModelRotation, Result, ViewRequest};

use super::{RingGeometry, ViewSequence, PITCH_AXIS, VIEW_AXIS};
use crate::axes::{GridPoint, ParameterAxis};
use crate::light::LightPlacement;

/// Default model pitches, in degrees.
pub const DEFAULT_PITCHES: [f32; 7] = [0.0, 15.0, 30.0, 45.0, 60.0, 75.0, 90.0];

/// The camera ring, repeated once for every model pitch.
///
/// The pitch is assigned to the model for each request, never accumulated,
/// so request `k` depends on `k` alone.
#[derive(Debug, Clone, PartialEq)]
pub struct RingPitchGrid {
    pub ring: RingGeometry,
    /// Model pitches in degrees, outer loop.
    pub pitch_deg: Vec<f32>,
    pub light: LightPlacement,
    pub extension: &'static str,
}

impl Default for RingPitchGrid {
    fn default() -> Self {
        Self {
            ring: RingGeometry {
                n_views: 12,
                distance: 0.5,
                elevation_factor: 0.3,
            },
            pitch_deg: DEFAULT_PITCHES.to_vec(),
            light: LightPlacement::default(),
            extension: "png",
        }
    }
}

/// Pitch rounded to whole degrees, as used in file names.
#[allow(clippy::cast_possible_truncation)]
pub fn whole_degrees(pitch: f32) -> i32 {
    pitch.round() as i32
}

impl ViewSequence for RingPitchGrid {
    fn name(&self) -> &'static str {
        "ring_pitch_grid"
    }

    fn axes(&self) -> Vec<ParameterAxis> {
        vec![
            ParameterAxis::new(PITCH_AXIS, self.pitch_deg.clone()),
            ParameterAxis::indexed(VIEW_AXIS, self.ring.n_views),
        ]
    }

    fn request(&self, bounds: &BoundingBox, point: &GridPoint) -> Result<ViewRequest> {
        let pitch = point.require(PITCH_AXIS)?.value;
        let i = point.require(VIEW_AXIS)?.index;
        let camera = self.ring.camera(bounds, i)?;
        let light = self.light.pose(&camera, bounds.center())?;
        Ok(ViewRequest {
            index: point.index,
            model_rotation: ModelRotation::pitch(pitch),
            camera,
            light,
            file_name: format!(
                "pitch_{:+03}_view_{i:03}.{}",
                whole_degrees(pitch),
                self.extension
            ),
        })
    }
}
