//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use viewsampler_core::Result;

use crate::config::{RunConfig, StrategyConfig};

/// Strategy selectable from the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    /// Camera ring around a static model
    Ring,
    /// Camera ring for each model pitch
    RingPitchGrid,
    /// Fixed camera, model over roll x pitch x yaw
    FullGrid,
}

impl StrategyKind {
    /// The kind of an existing strategy config.
    pub fn of(config: &StrategyConfig) -> Self {
        match config {
            StrategyConfig::Ring { .. } => StrategyKind::Ring,
            StrategyConfig::RingPitchGrid { .. } => StrategyKind::RingPitchGrid,
            StrategyConfig::FullGrid { .. } => StrategyKind::FullGrid,
        }
    }

    /// Default parameters for this kind.
    pub fn default_config(self) -> StrategyConfig {
        match self {
            StrategyKind::Ring => StrategyConfig::ring(),
            StrategyKind::RingPitchGrid => StrategyConfig::ring_pitch_grid(),
            StrategyKind::FullGrid => StrategyConfig::full_grid(),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "viewsampler")]
#[command(about = "Render a mesh model from a deterministic set of views", long_about = None)]
pub struct Cli {
    /// JSON run config; flags below override its values
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Model file (.obj or .ply)
    #[arg(short, long)]
    pub model: Option<PathBuf>,

    /// Output directory for rendered images
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Sampling strategy; keeps the config's parameters when the kind matches
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyKind>,

    /// Number of ring views (ring strategies only)
    #[arg(long)]
    pub views: Option<usize>,

    /// Camera distance from the model center
    #[arg(long)]
    pub distance: Option<f32>,

    /// Apply roll about Y in the full grid
    #[arg(long, default_value = "false")]
    pub apply_roll: bool,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// List the views without rendering
    #[arg(long, default_value = "false")]
    pub dry_run: bool,
}

impl Cli {
    /// Loads the config file, if any, and applies the flag overrides.
    pub fn into_config(self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::default(),
        };

        if let Some(model) = self.model {
            config.model_path = model;
        }
        if let Some(output) = self.output {
            config.output_dir = output;
        }
        // Same kind as the file keeps the file's parameters.
        if let Some(kind) = self.strategy {
            if StrategyKind::of(&config.strategy) != kind {
                config.strategy = kind.default_config();
            }
        }
        if let Some(views) = self.views {
            match &mut config.strategy {
                StrategyConfig::Ring { n_views } | StrategyConfig::RingPitchGrid { n_views, .. } => {
                    *n_views = views;
                }
                StrategyConfig::FullGrid { .. } => {
                    log::warn!("--views has no effect on the full grid strategy");
                }
            }
        }
        if self.apply_roll {
            match &mut config.strategy {
                StrategyConfig::FullGrid { apply_roll, .. } => *apply_roll = true,
                _ => log::warn!("--apply-roll only affects the full grid strategy"),
            }
        }
        if let Some(distance) = self.distance {
            config.camera_distance = distance;
        }
        if let Some(width) = self.width {
            config.render.width = width;
        }
        if let Some(height) = self.height {
            config.render.height = height;
        }
        Ok(config)
    }
}
