//! JSON configuration and report helpers for frame fitting.

use crate::{
    fit_parts, AffineTransform2D, FitParts, FrameDescriptor, FrameError, Orientation,
    OrientationParseError, HORIZONTAL_INVERSION, VERTICAL_INVERSION,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

#[derive(thiserror::Error, Debug)]
pub enum FitIoError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum FitConfigError {
    #[error("source frame: {0}")]
    Source(#[source] FrameError),
    #[error("target frame: {0}")]
    Target(#[source] FrameError),
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum FrameParseError {
    #[error("expected `WIDTHxHEIGHT:orientation`, got `{0}`")]
    Format(String),
    #[error("invalid dimension `{0}`")]
    Dimension(String),
    #[error(transparent)]
    Orientation(#[from] OrientationParseError),
}

impl FromStr for FrameDescriptor {
    type Err = FrameParseError;

    /// Parse `WIDTHxHEIGHT:orientation`, e.g. `1920x1080:landscape_left`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (size, orientation) = s
            .split_once(':')
            .ok_or_else(|| FrameParseError::Format(s.to_string()))?;
        let (w, h) = size
            .split_once(['x', 'X'])
            .ok_or_else(|| FrameParseError::Format(s.to_string()))?;
        let parse_dim = |v: &str| {
            v.trim()
                .parse::<f32>()
                .map_err(|_| FrameParseError::Dimension(v.to_string()))
        };
        Ok(FrameDescriptor::new(
            parse_dim(w)?,
            parse_dim(h)?,
            orientation.parse::<Orientation>()?,
        ))
    }
}

/// A fit request: the two frames plus post-fit UV flips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitConfig {
    pub source: FrameDescriptor,
    pub target: FrameDescriptor,
    #[serde(default)]
    pub reverse_rotation: bool,
    #[serde(default)]
    pub flip_vertical: bool,
    #[serde(default)]
    pub flip_horizontal: bool,
    #[serde(default)]
    pub output_path: Option<String>,
}

impl FitConfig {
    pub fn new(source: FrameDescriptor, target: FrameDescriptor) -> Self {
        Self {
            source,
            target,
            reverse_rotation: false,
            flip_vertical: false,
            flip_horizontal: false,
            output_path: None,
        }
    }

    /// Load a JSON config from disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, FitIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this config to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), FitIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Resolve the output report path.
    pub fn output_path(&self) -> PathBuf {
        self.output_path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("fit_report.json"))
    }

    pub fn validate(&self) -> Result<(), FitConfigError> {
        self.source.validate().map_err(FitConfigError::Source)?;
        self.target.validate().map_err(FitConfigError::Target)?;
        Ok(())
    }

    /// Fitted transform with the configured flips applied to its output.
    pub fn build_transform(&self) -> Result<AffineTransform2D, FitConfigError> {
        self.validate()?;
        let parts = fit_parts(&self.source, &self.target, self.reverse_rotation);
        Ok(self.apply_flips(parts.transform()))
    }

    fn apply_flips(&self, t: AffineTransform2D) -> AffineTransform2D {
        let mut t = t;
        if self.flip_vertical {
            t = t.then(&VERTICAL_INVERSION);
        }
        if self.flip_horizontal {
            t = t.then(&HORIZONTAL_INVERSION);
        }
        t
    }

    /// Validate the frames, run the fit and collect a report.
    pub fn report(&self) -> Result<FitReport, FitConfigError> {
        self.validate()?;
        let parts = fit_parts(&self.source, &self.target, self.reverse_rotation);
        let transform = self.apply_flips(parts.transform());
        debug!(
            "fit {}x{} {} -> {}x{} {}: scale=({:.4}, {:.4}) rotation={:.1}deg",
            self.source.width,
            self.source.height,
            self.source.orientation,
            self.target.width,
            self.target.height,
            self.target.orientation,
            parts.scale.x,
            parts.scale.y,
            parts.radians.to_degrees()
        );
        Ok(FitReport::new(self, &parts, &transform))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitReport {
    pub source: FrameDescriptor,
    pub target: FrameDescriptor,
    pub reverse_rotation: bool,
    pub flip_vertical: bool,
    pub flip_horizontal: bool,
    pub radians: f64,
    pub degrees: f64,
    pub container: [f64; 2],
    pub scale: [f64; 2],
    pub translation: [f64; 2],
    /// Row-major 4x4 matrix, flips included.
    pub matrix: [[f64; 4]; 4],
}

impl FitReport {
    pub fn new(cfg: &FitConfig, parts: &FitParts, transform: &AffineTransform2D) -> Self {
        Self {
            source: cfg.source,
            target: cfg.target,
            reverse_rotation: cfg.reverse_rotation,
            flip_vertical: cfg.flip_vertical,
            flip_horizontal: cfg.flip_horizontal,
            radians: parts.radians,
            degrees: parts.radians.to_degrees(),
            container: [parts.container.x, parts.container.y],
            scale: [parts.scale.x, parts.scale.y],
            translation: [parts.translation.x, parts.translation.y],
            matrix: transform.to_array(),
        }
    }

    /// Load a report from JSON on disk.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, FitIoError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Write this report to disk as pretty JSON.
    pub fn write_json(&self, path: impl AsRef<Path>) -> Result<(), FitIoError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
