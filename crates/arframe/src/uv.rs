use crate::core::{
    fit, AffineTransform2D, FrameDescriptor, FrameError, HORIZONTAL_INVERSION, VERTICAL_INVERSION,
};
use log::debug;
use nalgebra::Point2;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Errors produced by the high-level UV helpers.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum UvError {
    #[error("camera frame: {0}")]
    Camera(#[source] FrameError),
    #[error("display frame: {0}")]
    Display(#[source] FrameError),
}

/// Where a texture's `(0, 0)` UV sits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextureOrigin {
    /// Same convention as the fit math: `(0, 0)` at the top-left.
    #[default]
    TopLeft,
    /// OpenGL-style textures, `v` grows upwards.
    BottomLeft,
}

/// Cached display-to-camera UV mapping for one camera/display configuration.
///
/// Rebuild it whenever either frame changes size or orientation.
#[derive(Clone, Copy, Debug)]
pub struct UvMapper {
    display_to_camera: AffineTransform2D,
    camera_to_display: AffineTransform2D,
}

impl UvMapper {
    /// Validate both frames and build the mapping. Camera UVs are produced in
    /// the camera texture's `origin` convention.
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip_all))]
    pub fn new(
        camera: FrameDescriptor,
        display: FrameDescriptor,
        origin: TextureOrigin,
    ) -> Result<Self, UvError> {
        camera.validate().map_err(UvError::Camera)?;
        display.validate().map_err(UvError::Display)?;

        let mut display_to_camera = fit(&camera, &display, false);
        if origin == TextureOrigin::BottomLeft {
            display_to_camera = display_to_camera.then(&VERTICAL_INVERSION);
        }
        let camera_to_display = display_to_camera
            .inverse()
            .unwrap_or_else(AffineTransform2D::identity);

        debug!(
            "uv mapper: camera {}x{} {} / display {}x{} {} ({:?})",
            camera.width,
            camera.height,
            camera.orientation,
            display.width,
            display.height,
            display.orientation,
            origin
        );

        Ok(Self {
            display_to_camera,
            camera_to_display,
        })
    }

    /// Mirror the camera image left to right (front-facing cameras).
    pub fn mirrored(self) -> Self {
        let display_to_camera = self.display_to_camera.then(&HORIZONTAL_INVERSION);
        Self {
            display_to_camera,
            camera_to_display: display_to_camera
                .inverse()
                .unwrap_or_else(AffineTransform2D::identity),
        }
    }

    pub fn display_to_camera(&self) -> &AffineTransform2D {
        &self.display_to_camera
    }

    pub fn camera_to_display(&self) -> &AffineTransform2D {
        &self.camera_to_display
    }

    #[inline]
    pub fn to_camera(&self, display_uv: Point2<f32>) -> Point2<f32> {
        self.display_to_camera.apply(display_uv)
    }

    #[inline]
    pub fn to_display(&self, camera_uv: Point2<f32>) -> Point2<f32> {
        self.camera_to_display.apply(camera_uv)
    }

    /// Map a batch of display UVs into camera UVs in place.
    pub fn to_camera_in_place(&self, uvs: &mut [Point2<f32>]) {
        for uv in uvs.iter_mut() {
            *uv = self.display_to_camera.apply(*uv);
        }
    }
}
