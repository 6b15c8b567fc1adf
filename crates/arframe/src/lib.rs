//! High-level facade crate for the `arframe-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of `arframe-core`,
//! - [`uv::UvMapper`], a validated display-to-camera UV mapping that also
//!   handles bottom-left texture origins and mirrored (front) cameras,
//! - (feature `cli`) the `arframe` command line tool for inspecting fits.
//!
//! ## Quickstart
//!
//! ```
//! use arframe::uv::{TextureOrigin, UvMapper};
//! use arframe::{FrameDescriptor, Orientation};
//! use nalgebra::Point2;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let camera = FrameDescriptor::new(1920.0, 1440.0, Orientation::LandscapeRight);
//! let display = FrameDescriptor::new(1170.0, 2532.0, Orientation::Portrait);
//! let mapper = UvMapper::new(camera, display, TextureOrigin::BottomLeft)?;
//!
//! let uv = mapper.to_camera(Point2::new(0.5, 0.5));
//! assert!((uv.x - 0.5).abs() < 1e-5);
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `arframe::core`: orientations, affine transforms, `fit`, capture
//!   formats and localization records.
//! - `arframe::uv`: UV remapping between a camera texture and the display.

pub use arframe_core as core;

pub use arframe_core::{
    capture, fit, get_radians, AffineTransform2D, CaptureFormat, FitConfig, FitReport,
    FrameDescriptor, GeoPoint, LocalizationTarget, Orientation,
};

pub mod uv;
