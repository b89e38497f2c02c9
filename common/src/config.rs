use std::{collections::HashMap, fmt, fs, io, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Parameters for one slicing run. Every field is required when reading the
/// record from a file or a parameter map.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SliceConfig {
    /// Distance between consecutive slicing planes.
    pub height: f32,
    /// Spacing of scan lines for path generation. Carried through, slicing
    /// does not use it.
    pub pitch: f32,
    /// Scanning feed rate. Carried through.
    pub speed: f32,
    /// Rapid move feed rate. Carried through.
    pub fast: f32,
    pub direction: Direction,
    /// Uniform scale applied to the unscaled model before slicing.
    pub scale: f32,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    #[serde(rename = "+X")]
    PosX,
    #[serde(rename = "-X")]
    NegX,
    #[serde(rename = "+Y")]
    PosY,
    #[serde(rename = "-Y")]
    NegY,
    #[serde(rename = "+Z")]
    PosZ,
    #[serde(rename = "-Z")]
    NegZ,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing slice parameter `{0}`")]
    Missing(&'static str),
    #[error("slice parameter `{key}` is not a number: `{value}`")]
    NotNumber { key: &'static str, value: String },
    #[error("unknown slice direction `{0}`")]
    Direction(String),
    #[error("slice parameter `{key}` must be {expected}, got {value}")]
    OutOfRange {
        key: &'static str,
        expected: &'static str,
        value: f32,
    },
    #[error("failed to access config file: {0}")]
    Io(#[from] io::Error),
    #[error("invalid config file: {0}")]
    Deserialize(#[from] toml::de::Error),
    #[error("failed to encode config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

impl SliceConfig {
    /// Builds a config from a string keyed record, as handed over by a
    /// parameter dialog. Keys are `height`, `pitch`, `speed`, `fast`,
    /// `direction` and `scale`.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |key: &'static str| {
            params
                .get(key)
                .map(|x| x.trim())
                .ok_or(ConfigError::Missing(key))
        };
        let number = |key: &'static str| -> Result<f32, ConfigError> {
            let value = get(key)?;
            value.parse::<f32>().map_err(|_| ConfigError::NotNumber {
                key,
                value: value.to_owned(),
            })
        };

        let config = Self {
            height: number("height")?,
            pitch: number("pitch")?,
            speed: number("speed")?,
            fast: number("fast")?,
            direction: get("direction")?.parse()?,
            scale: number("scale")?,
        };

        config.validate()?;
        Ok(config)
    }

    /// Checks that the numbers make sense before any geometry work is done.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn check(
            key: &'static str,
            value: f32,
            expected: &'static str,
            ok: impl Fn(f32) -> bool,
        ) -> Result<(), ConfigError> {
            if value.is_finite() && ok(value) {
                return Ok(());
            }

            Err(ConfigError::OutOfRange {
                key,
                expected,
                value,
            })
        }

        check("height", self.height, "greater than zero", |x| x > 0.0)?;
        check("scale", self.scale, "greater than zero", |x| x > 0.0)?;
        check("pitch", self.pitch, "finite", |_| true)?;
        check("speed", self.speed, "finite", |_| true)?;
        check("fast", self.fast, "finite", |_| true)?;
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let string = fs::read_to_string(path)?;
        let config = toml::from_str::<Self>(&string)?;
        config.validate()?;
        info!("Loaded slice config from `{}`", path.display());
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let string = toml::to_string(self)?;
        fs::write(path, string)?;
        Ok(())
    }
}

impl Default for SliceConfig {
    fn default() -> Self {
        Self {
            height: 0.43,
            pitch: 0.38,
            speed: 20.0,
            fast: 20.0,
            direction: Direction::PosZ,
            scale: 1.0,
        }
    }
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::PosX,
        Direction::NegX,
        Direction::PosY,
        Direction::NegY,
        Direction::PosZ,
        Direction::NegZ,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Direction::PosX => "+X",
            Direction::NegX => "-X",
            Direction::PosY => "+Y",
            Direction::NegY => "-Y",
            Direction::PosZ => "+Z",
            Direction::NegZ => "-Z",
        }
    }

    /// Whether the slicer can sweep in this direction. Only `+Z` is
    /// implemented.
    pub fn is_supported(&self) -> bool {
        matches!(self, Direction::PosZ)
    }
}

impl FromStr for Direction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|x| x.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::Direction(s.to_owned()))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
