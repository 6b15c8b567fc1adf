//! Fixed frame formats handed to the capture/encoding pipeline.

use serde::Serialize;

pub const RGBA_BYTES_PER_PIXEL: usize = 4;

pub const RAW_RGBA_WIDTH: usize = 256;
pub const RAW_RGBA_HEIGHT: usize = 144;
pub const RAW_RGBA_BYTE_LENGTH: usize = RAW_RGBA_WIDTH * RAW_RGBA_HEIGHT * RGBA_BYTES_PER_PIXEL;

pub const JPEG_WIDTH: usize = 720;
pub const JPEG_HEIGHT: usize = 540;
/// Encoder quality in `1..=100`.
pub const JPEG_QUALITY: u8 = 90;
/// Capacity reserved for one encoded frame, sized as the same frame in
/// packed RGB.
pub const JPEG_MAX_BYTE_LENGTH: usize = JPEG_WIDTH * JPEG_HEIGHT * 3;

/// Frame encodings accepted by the upload pipeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureFormat {
    RawRgba,
    Jpeg,
}

impl CaptureFormat {
    pub const ALL: [CaptureFormat; 2] = [CaptureFormat::RawRgba, CaptureFormat::Jpeg];

    pub const fn width(self) -> usize {
        match self {
            CaptureFormat::RawRgba => RAW_RGBA_WIDTH,
            CaptureFormat::Jpeg => JPEG_WIDTH,
        }
    }

    pub const fn height(self) -> usize {
        match self {
            CaptureFormat::RawRgba => RAW_RGBA_HEIGHT,
            CaptureFormat::Jpeg => JPEG_HEIGHT,
        }
    }

    /// Size of the buffer to allocate for one frame.
    pub const fn byte_length(self) -> usize {
        match self {
            CaptureFormat::RawRgba => RAW_RGBA_BYTE_LENGTH,
            CaptureFormat::Jpeg => JPEG_MAX_BYTE_LENGTH,
        }
    }

    pub const fn quality(self) -> Option<u8> {
        match self {
            CaptureFormat::RawRgba => None,
            CaptureFormat::Jpeg => Some(JPEG_QUALITY),
        }
    }
}
