//! Run configuration.
//!
//! A run is described by one [`RunConfig`], usually loaded from JSON. Every
//! field has a default, so a config file only needs the values it changes:
//!
//! ```json
//! {
//!   "model_path": "models/bracket.obj",
//!   "output_dir": "renders/bracket",
//!   "strategy": { "kind": "ring_pitch_grid", "pitch_deg": [0, 45, 90] }
//! }
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use viewsampler_core::{Error, Result};
use viewsampler_render::RenderSettings;

use crate::axes::checked_axis_product;
use crate::light::LightPlacement;
use crate::strategy::{
    full_grid, ring_pitch, FullGrid, Ring, RingGeometry, RingPitchGrid, Strategy,
};

/// Largest number of views a single run may request.
pub const MAX_VIEWS: usize = 1_000_000;

/// Which strategy to run, with its own parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StrategyConfig {
    /// Camera ring around a static model.
    Ring {
        #[serde(default = "default_n_views")]
        n_views: usize,
    },
    /// Camera ring for each model pitch.
    RingPitchGrid {
        #[serde(default = "default_n_views")]
        n_views: usize,
        #[serde(default = "default_ring_pitches")]
        pitch_deg: Vec<f32>,
    },
    /// Fixed camera, model over roll x pitch x yaw.
    FullGrid {
        #[serde(default = "default_rolls")]
        roll_deg: Vec<f32>,
        #[serde(default = "default_grid_pitches")]
        pitch_deg: Vec<f32>,
        #[serde(default = "default_yaws")]
        yaw_deg: Vec<f32>,
        #[serde(default)]
        apply_roll: bool,
    },
}

fn default_n_views() -> usize {
    12
}

fn default_ring_pitches() -> Vec<f32> {
    ring_pitch::DEFAULT_PITCHES.to_vec()
}

fn default_rolls() -> Vec<f32> {
    full_grid::DEFAULT_ROLLS.to_vec()
}

fn default_grid_pitches() -> Vec<f32> {
    full_grid::DEFAULT_GRID_PITCHES.to_vec()
}

fn default_yaws() -> Vec<f32> {
    full_grid::DEFAULT_YAWS.to_vec()
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self::ring()
    }
}

impl StrategyConfig {
    /// Ring with default parameters.
    pub fn ring() -> Self {
        StrategyConfig::Ring {
            n_views: default_n_views(),
        }
    }

    /// Ring-pitch grid with default parameters.
    pub fn ring_pitch_grid() -> Self {
        StrategyConfig::RingPitchGrid {
            n_views: default_n_views(),
            pitch_deg: default_ring_pitches(),
        }
    }

    /// Full grid with default parameters.
    pub fn full_grid() -> Self {
        StrategyConfig::FullGrid {
            roll_deg: default_rolls(),
            pitch_deg: default_grid_pitches(),
            yaw_deg: default_yaws(),
            apply_roll: false,
        }
    }

    /// Length of each enumeration axis, outermost first.
    pub fn axis_lengths(&self) -> Vec<usize> {
        match self {
            StrategyConfig::Ring { n_views } => vec![*n_views],
            StrategyConfig::RingPitchGrid { n_views, pitch_deg } => vec![pitch_deg.len(), *n_views],
            StrategyConfig::FullGrid {
                roll_deg,
                pitch_deg,
                yaw_deg,
                ..
            } => vec![roll_deg.len(), pitch_deg.len(), yaw_deg.len()],
        }
    }
}

/// Everything a run needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Model file to import.
    pub model_path: PathBuf,
    /// Directory the images are written to. Created if missing.
    pub output_dir: PathBuf,
    /// Scale applied to imported meshes before measuring (mm to m by default).
    pub unit_scale: f32,
    /// Camera distance from the model center.
    pub camera_distance: f32,
    /// Camera height as a fraction of the model's largest extent.
    pub elevation_factor: f32,
    pub light: LightPlacement,
    pub strategy: StrategyConfig,
    pub render: RenderSettings,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::new(),
            output_dir: PathBuf::from("renders"),
            unit_scale: 0.001,
            camera_distance: 0.5,
            elevation_factor: 0.3,
            light: LightPlacement::default(),
            strategy: StrategyConfig::default(),
            render: RenderSettings::default(),
        }
    }
}

impl RunConfig {
    /// Reads a config from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::InvalidConfig(format!("cannot read '{}': {e}", path.display()))
        })?;
        let config = serde_json::from_str(&text)?;
        log::debug!("Loaded run config from {}", path.display());
        Ok(config)
    }

    /// Writes the config as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    /// Checks the config for values that cannot produce a valid run.
    pub fn validate(&self) -> Result<()> {
        if self.model_path.as_os_str().is_empty() {
            return Err(invalid("no model path given"));
        }
        positive("camera_distance", self.camera_distance)?;
        positive("unit_scale", self.unit_scale)?;
        if !self.elevation_factor.is_finite() {
            return Err(invalid("elevation_factor must be finite"));
        }
        if let LightPlacement::FollowCamera { offset } = self.light {
            if !offset.is_finite() || offset < 0.0 {
                return Err(invalid("light offset must be finite and non-negative"));
            }
        }
        if self.render.width == 0 || self.render.height == 0 {
            return Err(invalid("render size must be non-zero"));
        }

        self.validate_strategy()?;
        match checked_axis_product(&self.strategy.axis_lengths()) {
            Some(total) if total <= MAX_VIEWS => Ok(()),
            _ => Err(invalid(&format!("strategy requests more than {MAX_VIEWS} views"))),
        }
    }

    fn validate_strategy(&self) -> Result<()> {
        match &self.strategy {
            StrategyConfig::Ring { n_views } => views(*n_views),
            StrategyConfig::RingPitchGrid { n_views, pitch_deg } => {
                views(*n_views)?;
                angles("pitch_deg", pitch_deg)?;
                let mut seen = HashSet::new();
                for &pitch in pitch_deg {
                    let whole = ring_pitch::whole_degrees(pitch);
                    if !seen.insert(whole) {
                        return Err(invalid(&format!(
                            "pitch {pitch} repeats {whole:+03} after rounding; file names would collide"
                        )));
                    }
                }
                Ok(())
            }
            StrategyConfig::FullGrid {
                roll_deg,
                pitch_deg,
                yaw_deg,
                ..
            } => {
                angles("roll_deg", roll_deg)?;
                angles("pitch_deg", pitch_deg)?;
                angles("yaw_deg", yaw_deg)
            }
        }
    }

    /// Builds the strategy this config describes.
    pub fn strategy(&self) -> Strategy {
        let extension = self.render.format.extension();
        let ring = |n_views| RingGeometry {
            n_views,
            distance: self.camera_distance,
            elevation_factor: self.elevation_factor,
        };
        match &self.strategy {
            StrategyConfig::Ring { n_views } => Strategy::Ring(Ring {
                ring: ring(*n_views),
                light: self.light,
                extension,
            }),
            StrategyConfig::RingPitchGrid { n_views, pitch_deg } => {
                Strategy::RingPitchGrid(RingPitchGrid {
                    ring: ring(*n_views),
                    pitch_deg: pitch_deg.clone(),
                    light: self.light,
                    extension,
                })
            }
            StrategyConfig::FullGrid {
                roll_deg,
                pitch_deg,
                yaw_deg,
                apply_roll,
            } => Strategy::FullGrid(FullGrid {
                distance: self.camera_distance,
                elevation_factor: self.elevation_factor,
                roll_deg: roll_deg.clone(),
                pitch_deg: pitch_deg.clone(),
                yaw_deg: yaw_deg.clone(),
                apply_roll: *apply_roll,
                light: self.light,
                extension,
            }),
        }
    }
}

fn invalid(message: &str) -> Error {
    Error::InvalidConfig(message.to_string())
}

fn positive(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(&format!("{name} must be positive and finite, got {value}")))
    }
}

fn views(n_views: usize) -> Result<()> {
    if n_views == 0 {
        return Err(invalid("n_views must be at least 1"));
    }
    Ok(())
}

fn angles(name: &str, values: &[f32]) -> Result<()> {
    if values.is_empty() {
        return Err(invalid(&format!("{name} must not be empty")));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(invalid(&format!("{name} must contain only finite angles")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::ViewSequence;
    use viewsampler_render::OutputFormat;

    fn with_model() -> RunConfig {
        RunConfig {
            model_path: PathBuf::from("model.obj"),
            ..Default::default()
        }
    }

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.unit_scale, 0.001);
        assert_eq!(config.camera_distance, 0.5);
        assert_eq!(config.elevation_factor, 0.3);
        assert_eq!(config.strategy, StrategyConfig::Ring { n_views: 12 });
        assert!(with_model().validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let json = r#"{
            "model_path": "part.ply",
            "strategy": { "kind": "full_grid", "apply_roll": true },
            "render": { "width": 128 }
        }"#;
        let config: RunConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.render.width, 128);
        assert_eq!(config.render.height, 512);
        match &config.strategy {
            StrategyConfig::FullGrid {
                roll_deg,
                apply_roll,
                ..
            } => {
                assert_eq!(roll_deg.len(), 6);
                assert!(*apply_roll);
            }
            other => panic!("unexpected strategy {other:?}"),
        }
        assert_eq!(config.strategy().len(), 252);
    }

    #[test]
    fn test_missing_model_is_invalid() {
        let err = RunConfig::default().validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = with_model();
        config.camera_distance = 0.0;
        assert!(config.validate().is_err());

        let mut config = with_model();
        config.strategy = StrategyConfig::Ring { n_views: 0 };
        assert!(config.validate().is_err());

        let mut config = with_model();
        config.strategy = StrategyConfig::FullGrid {
            roll_deg: vec![0.0],
            pitch_deg: Vec::new(),
            yaw_deg: vec![0.0],
            apply_roll: false,
        };
        assert!(config.validate().is_err());

        let mut config = with_model();
        config.render.height = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_grids() {
        let mut config = with_model();
        config.strategy = StrategyConfig::RingPitchGrid {
            n_views: usize::MAX,
            pitch_deg: vec![0.0, 45.0],
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(msg) if msg.contains("more than")));

        let mut config = with_model();
        config.strategy = StrategyConfig::Ring {
            n_views: MAX_VIEWS + 1,
        };
        assert!(config.validate().is_err());

        config.strategy = StrategyConfig::Ring { n_views: MAX_VIEWS };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_axis_lengths_match_strategy() {
        for strategy in [
            StrategyConfig::ring(),
            StrategyConfig::ring_pitch_grid(),
            StrategyConfig::full_grid(),
        ] {
            let config = RunConfig {
                strategy,
                ..with_model()
            };
            let lengths: Vec<usize> = config.strategy().axes().iter().map(|a| a.len()).collect();
            assert_eq!(config.strategy.axis_lengths(), lengths);
        }
    }

    #[test]
    fn test_rejects_colliding_pitches() {
        let mut config = with_model();
        config.strategy = StrategyConfig::RingPitchGrid {
            n_views: 4,
            pitch_deg: vec![10.0, 10.4],
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("collide"));
    }

    #[test]
    fn test_strategy_uses_format_extension() {
        let mut config = with_model();
        config.render.format = OutputFormat::Jpeg;
        let strategy = config.strategy();
        assert_eq!(strategy.name(), "ring");
        match strategy {
            Strategy::Ring(ring) => {
                assert_eq!(ring.extension, "jpg");
                assert_eq!(ring.ring.distance, 0.5);
            }
            other => panic!("unexpected strategy {other:?}"),
        }
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");
        let mut config = with_model();
        config.strategy = StrategyConfig::ring_pitch_grid();
        config.light = LightPlacement::fixed_sun();
        config.save(&path).unwrap();
        assert_eq!(RunConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let err = RunConfig::load(Path::new("/nonexistent/run.json")).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }
}
