use std::{path::PathBuf, str::FromStr};

use anyhow::{Context, Result};
use clap::Parser;
use common::config::{Direction, SliceConfig};

#[derive(Debug, Parser)]
/// Slices an ASCII STL model into horizontal layers of line segments.
pub struct Args {
    /// Path to an ASCII .stl file.
    pub mesh: PathBuf,

    #[arg(long, conflicts_with_all = ["height", "pitch", "speed", "fast", "direction", "scale"])]
    /// Read the slice parameters from a TOML file instead of the flags below.
    pub config: Option<PathBuf>,
    #[arg(long)]
    /// Write the slice parameters that were used to a TOML file.
    pub save_config: Option<PathBuf>,

    #[arg(long, default_value_t = 0.43)]
    /// Distance between slicing planes.
    pub height: f32,
    #[arg(long, default_value_t = 0.38)]
    /// Scan line spacing. Recorded in the config, not used for slicing.
    pub pitch: f32,
    #[arg(long, default_value_t = 20.0)]
    /// Scanning feed rate. Recorded in the config, not used for slicing.
    pub speed: f32,
    #[arg(long, default_value_t = 20.0)]
    /// Rapid move feed rate. Recorded in the config, not used for slicing.
    pub fast: f32,
    #[arg(
        long,
        default_value = "+Z",
        allow_hyphen_values = true,
        value_parser = Direction::from_str
    )]
    /// Slicing direction, one of +X, -X, +Y, -Y, +Z or -Z. Only +Z is
    /// supported, anything else falls back to it.
    pub direction: Direction,
    #[arg(long, default_value_t = 1.0)]
    /// Uniform scale applied to the model before slicing.
    pub scale: f32,

    #[arg(long)]
    /// Write a preview of every layer to an SVG file.
    pub svg: Option<PathBuf>,
    #[arg(short, long)]
    /// Log every step of loading and slicing.
    pub verbose: bool,
}

impl Args {
    pub fn slice_config(&self) -> Result<SliceConfig> {
        if let Some(path) = &self.config {
            return SliceConfig::load(path)
                .with_context(|| format!("Loading config from `{}`", path.display()));
        }

        let config = SliceConfig {
            height: self.height,
            pitch: self.pitch,
            speed: self.speed,
            fast: self.fast,
            direction: self.direction,
            scale: self.scale,
        };
        config.validate()?;
        Ok(config)
    }
}
