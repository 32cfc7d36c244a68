//! Render settings shared by all backends.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::ToneMapping;

/// Image file format for rendered views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossless PNG (default).
    #[default]
    Png,
    /// JPEG; alpha is dropped.
    Jpeg,
}

impl OutputFormat {
    /// File extension without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
        }
    }
}

/// World background behind the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundConfig {
    /// Linear RGB color.
    pub color: Vec3,
    /// Multiplier applied to `color`.
    pub strength: f32,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            color: Vec3::splat(0.05),
            strength: 1.0,
        }
    }
}

impl BackgroundConfig {
    /// Effective linear radiance of the background.
    #[must_use]
    pub fn radiance(&self) -> Vec3 {
        self.color * self.strength
    }
}

/// Settings handed to a backend once per run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Vertical field of view in degrees.
    pub fov_vertical_deg: f32,
    /// Near clipping distance.
    pub clip_start: f32,
    /// Far clipping distance.
    pub clip_end: f32,
    /// Background color and strength.
    pub background: BackgroundConfig,
    /// Exposure and gamma view transform.
    pub tone_mapping: ToneMapping,
    /// Image format written for each view.
    pub format: OutputFormat,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
            // 50 mm lens on a 36 mm sensor
            fov_vertical_deg: 39.6,
            clip_start: 0.01,
            clip_end: 100.0,
            background: BackgroundConfig::default(),
            tone_mapping: ToneMapping::default(),
            format: OutputFormat::Png,
        }
    }
}

impl RenderSettings {
    /// Width divided by height.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Sets the image size.
    #[must_use]
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}
