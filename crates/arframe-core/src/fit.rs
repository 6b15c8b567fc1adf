//! Aspect-fit mapping between two oriented rectangular frames.
//!
//! Given a source frame (for example the camera image) and a target frame
//! (for example the display), [`fit`] builds the transform that takes a
//! normalized target coordinate (`[0, 1]` on both axes, origin top-left) to
//! the normalized source coordinate showing the same content. The target is
//! letterboxed or pillarboxed into the source without distortion and stays
//! centered.
//!
//! No input validation happens here. Zero or negative dimensions produce
//! non-finite matrices; use [`FrameDescriptor::validate`] at the boundary
//! when the values are not already known to be sane.

use crate::affine::{rotation, scaling, translation, AffineTransform2D};
use crate::orientation::{get_radians, Orientation};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Pixel size and physical orientation of a rectangular buffer.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrameDescriptor {
    pub width: f32,
    pub height: f32,
    pub orientation: Orientation,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FrameError {
    #[error("frame width must be finite and > 0 (got {0})")]
    InvalidWidth(f32),
    #[error("frame height must be finite and > 0 (got {0})")]
    InvalidHeight(f32),
}

impl FrameDescriptor {
    pub fn new(width: f32, height: f32, orientation: Orientation) -> Self {
        Self {
            width,
            height,
            orientation,
        }
    }

    /// Check that both dimensions are finite and strictly positive.
    pub fn validate(&self) -> Result<(), FrameError> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(FrameError::InvalidWidth(self.width));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(FrameError::InvalidHeight(self.height));
        }
        Ok(())
    }

    #[inline]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }
}

/// Intermediate quantities of a fit, kept for inspection and reporting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitParts {
    /// Source dimensions as seen from the target's orientation.
    pub container: Vector2<f64>,
    pub scale: Vector2<f64>,
    pub translation: Vector2<f64>,
    /// Rotation about the frame center, in radians.
    pub radians: f64,
}

impl FitParts {
    /// Compose the parts: scale, re-center, then rotate about `(0.5, 0.5)`.
    pub fn transform(&self) -> AffineTransform2D {
        screen_rotation(self.radians) * translation(self.translation) * scaling(self.scale)
    }
}

/// Source resolution reinterpreted in the target's orientation class. A
/// landscape/portrait mismatch swaps the axes.
fn rotate_resolution(source: &FrameDescriptor, target: Orientation) -> Vector2<f64> {
    let w = f64::from(source.width);
    let h = f64::from(source.height);
    if source.orientation.is_landscape() == target.is_landscape() {
        Vector2::new(w, h)
    } else {
        Vector2::new(h, w)
    }
}

/// Rotation by `angle` pivoting on the normalized frame center.
fn screen_rotation(angle: f64) -> AffineTransform2D {
    let center = Vector2::new(0.5, 0.5);
    translation(center) * rotation(angle) * translation(-center)
}

/// Compute the individual components of [`fit`].
pub fn fit_parts(
    source: &FrameDescriptor,
    target: &FrameDescriptor,
    reverse_rotation: bool,
) -> FitParts {
    let container = rotate_resolution(source, target.orientation);
    let tw = f64::from(target.width);
    let th = f64::from(target.height);

    let scale = if tw / th < 1.0 {
        Vector2::new(tw / (th / container.y * container.x), 1.0)
    } else {
        Vector2::new(1.0, th / (tw / container.x * container.y))
    };

    let radians = if reverse_rotation {
        get_radians(target.orientation, source.orientation)
    } else {
        get_radians(source.orientation, target.orientation)
    };

    let translation = Vector2::new((1.0 - scale.x) / 2.0, (1.0 - scale.y) / 2.0);

    FitParts {
        container,
        scale,
        translation,
        radians,
    }
}

/// Affine transform mapping normalized target coordinates into normalized
/// source coordinates under an aspect-fit policy.
///
/// With `reverse_rotation` the rotation component runs from target to source
/// orientation instead of source to target; scale and translation are
/// unchanged.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "trace", skip_all))]
pub fn fit(
    source: &FrameDescriptor,
    target: &FrameDescriptor,
    reverse_rotation: bool,
) -> AffineTransform2D {
    fit_parts(source, target, reverse_rotation).transform()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orientation::Orientation::*;
    use nalgebra::{Matrix4, Point2};
    use std::f64::consts::FRAC_PI_2;

    fn assert_close(a: Point2<f32>, b: Point2<f32>, tol: f32) {
        let dx = (a.x - b.x).abs();
        let dy = (a.y - b.y).abs();
        assert!(
            dx < tol && dy < tol,
            "expected ({:.6},{:.6}) ~ ({:.6},{:.6}) within {}",
            a.x,
            a.y,
            b.x,
            b.y,
            tol
        );
    }

    #[test]
    fn same_frame_fits_to_identity() {
        for o in Orientation::ALL {
            let f = FrameDescriptor::new(1280.0, 720.0, o);
            let t = fit(&f, &f, false);
            assert_eq!(t.m, Matrix4::identity());
        }
    }

    #[test]
    fn rotate_resolution_swaps_only_across_classes() {
        let src = FrameDescriptor::new(1920.0, 1080.0, LandscapeLeft);
        assert_eq!(
            rotate_resolution(&src, LandscapeRight),
            Vector2::new(1920.0, 1080.0)
        );
        assert_eq!(rotate_resolution(&src, Portrait), Vector2::new(1080.0, 1920.0));
        assert_eq!(
            rotate_resolution(&src, PortraitUpsideDown),
            Vector2::new(1080.0, 1920.0)
        );
    }

    #[test]
    fn screen_rotation_pivots_on_center() {
        let r = screen_rotation(FRAC_PI_2);
        assert_close(r.apply(Point2::new(0.5, 0.5)), Point2::new(0.5, 0.5), 1e-6);
        assert_close(r.apply(Point2::new(1.0, 0.5)), Point2::new(0.5, 1.0), 1e-6);
        assert_close(r.apply(Point2::new(0.0, 0.0)), Point2::new(1.0, 0.0), 1e-6);
    }

    #[test]
    fn landscape_camera_on_portrait_display() {
        let camera = FrameDescriptor::new(1920.0, 1080.0, LandscapeLeft);
        let display = FrameDescriptor::new(1080.0, 1920.0, Portrait);
        let parts = fit_parts(&camera, &display, false);

        assert_eq!(parts.container, Vector2::new(1080.0, 1920.0));
        assert!((parts.radians - FRAC_PI_2).abs() < 1e-12);
        // 16:9 turned sideways is exactly 9:16, so nothing is boxed.
        assert!((parts.scale.x - 1.0).abs() < 1e-12);
        assert_eq!(parts.scale.y, 1.0);
    }

    #[test]
    fn tall_display_is_pillarboxed_into_rotated_camera() {
        // 4:3 camera seen in portrait is 3:4, wider than a 9:16 display.
        let camera = FrameDescriptor::new(1440.0, 1080.0, LandscapeRight);
        let display = FrameDescriptor::new(1080.0, 1920.0, Portrait);
        let parts = fit_parts(&camera, &display, false);

        assert!((parts.scale.x - 0.75).abs() < 1e-12);
        assert_eq!(parts.scale.y, 1.0);
        assert!((parts.translation.x - 0.125).abs() < 1e-12);
        assert_eq!(parts.translation.y, 0.0);
        assert!((parts.radians + FRAC_PI_2).abs() < 1e-12);

        // Left edge of the display lands a quarter of the box in from the
        // camera's top or bottom edge after the quarter turn.
        let t = parts.transform();
        let p = t.apply(Point2::new(0.0, 0.5));
        assert!((p.x - 0.5).abs() < 1e-6);
        assert!((p.y - 0.875).abs() < 1e-6 || (p.y - 0.125).abs() < 1e-6);
    }

    #[test]
    fn wide_display_is_letterboxed() {
        let camera = FrameDescriptor::new(1440.0, 1080.0, LandscapeLeft);
        let display = FrameDescriptor::new(1920.0, 1080.0, LandscapeLeft);
        let parts = fit_parts(&camera, &display, false);

        assert_eq!(parts.scale.x, 1.0);
        assert!((parts.scale.y - 0.75).abs() < 1e-12);
        assert_eq!(parts.radians, 0.0);

        let t = parts.transform();
        assert_close(t.apply(Point2::new(0.0, 0.0)), Point2::new(0.0, 0.125), 1e-6);
        assert_close(t.apply(Point2::new(1.0, 1.0)), Point2::new(1.0, 0.875), 1e-6);
    }

    #[test]
    fn reverse_rotation_negates_angle_only() {
        let camera = FrameDescriptor::new(640.0, 480.0, LandscapeLeft);
        let display = FrameDescriptor::new(720.0, 1280.0, PortraitUpsideDown);
        let fwd = fit_parts(&camera, &display, false);
        let rev = fit_parts(&camera, &display, true);

        assert_eq!(rev.radians, -fwd.radians);
        assert_eq!(rev.scale, fwd.scale);
        assert_eq!(rev.translation, fwd.translation);
        assert_eq!(rev.container, fwd.container);
    }

    #[test]
    fn validate_rejects_degenerate_frames() {
        assert_eq!(
            FrameDescriptor::new(0.0, 10.0, Portrait).validate(),
            Err(FrameError::InvalidWidth(0.0))
        );
        assert_eq!(
            FrameDescriptor::new(10.0, -1.0, Portrait).validate(),
            Err(FrameError::InvalidHeight(-1.0))
        );
        assert!(FrameDescriptor::new(f32::NAN, 1.0, Portrait)
            .validate()
            .is_err());
        assert!(FrameDescriptor::new(256.0, 144.0, Portrait)
            .validate()
            .is_ok());
    }

    #[test]
    fn zero_dimension_is_not_checked_by_fit() {
        let camera = FrameDescriptor::new(1440.0, 0.0, LandscapeLeft);
        let display = FrameDescriptor::new(1920.0, 1080.0, LandscapeLeft);
        let t = fit(&camera, &display, false);
        assert!(t.m.iter().any(|v| !v.is_finite()));
    }
}
