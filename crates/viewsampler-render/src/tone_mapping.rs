//! Exposure and gamma view transform.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// View transform applied to linear color before quantization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneMapping {
    /// Exposure in stops; color is multiplied by `2^exposure` (default 0.0).
    pub exposure: f32,
    /// Display gamma; color is raised to `1/gamma` (default 1.0).
    pub gamma: f32,
}

impl Default for ToneMapping {
    fn default() -> Self {
        Self {
            exposure: 0.0,
            gamma: 1.0,
        }
    }
}

impl ToneMapping {
    /// Creates a new tone mapping configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the exposure value.
    pub fn with_exposure(mut self, exposure: f32) -> Self {
        self.exposure = exposure;
        self
    }

    /// Sets the gamma value.
    pub fn with_gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    /// Maps linear color to display color in `[0, 1]`.
    pub fn apply(&self, linear: Vec3) -> Vec3 {
        let exposed = linear * self.exposure.exp2();
        let gamma = if self.gamma > 0.0 { self.gamma } else { 1.0 };
        exposed.max(Vec3::ZERO).powf(gamma.recip()).min(Vec3::ONE)
    }

    /// Maps linear color straight to 8-bit RGB.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn to_rgb8(&self, linear: Vec3) -> [u8; 3] {
        let c = self.apply(linear) * 255.0;
        [
            c.x.round() as u8,
            c.y.round() as u8,
            c.z.round() as u8,
        ]
    }
}
