//! Core types and geometry for mapping normalized coordinates between AR
//! camera and display frames.
//!
//! The interesting part is [`fit`]: given the size and orientation of a
//! source frame and a target frame it returns the affine transform taking
//! target UVs to source UVs under an aspect-fit (letterbox) policy. The rest
//! is plain data shared with the capture and localization layers.
//!
//! ```
//! use arframe_core::{fit, FrameDescriptor, Orientation};
//! use nalgebra::Point2;
//!
//! let camera = FrameDescriptor::new(1920.0, 1080.0, Orientation::LandscapeLeft);
//! let display = FrameDescriptor::new(1080.0, 1920.0, Orientation::Portrait);
//! let display_to_camera = fit(&camera, &display, false);
//!
//! let center = display_to_camera.apply(Point2::new(0.5, 0.5));
//! assert!((center.x - 0.5).abs() < 1e-6 && (center.y - 0.5).abs() < 1e-6);
//! ```

mod affine;
pub mod capture;
mod fit;
mod io;
mod localization;
mod logger;
mod orientation;

pub use affine::{
    rotation, scaling, translation, AffineTransform2D, HORIZONTAL_INVERSION, VERTICAL_INVERSION,
};
pub use capture::CaptureFormat;
pub use fit::{fit, fit_parts, FitParts, FrameDescriptor, FrameError};
pub use io::{FitConfig, FitConfigError, FitIoError, FitReport, FrameParseError};
pub use localization::{GeoPoint, LocalizationTarget};
pub use orientation::{get_radians, Orientation, OrientationParseError};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
