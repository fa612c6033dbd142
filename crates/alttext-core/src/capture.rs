use std::path::Path;

use alttext_types::ScreenRect;
use image::{DynamicImage, ImageFormat, RgbaImage};

use crate::error::CaptureError;
use crate::fingerprint::Fingerprint;

/// Source of screen pixels for a rectangle
pub trait PixelCapture: Send + Sync {
    fn capture(&self, rect: ScreenRect) -> Result<PixelBuffer, CaptureError>;
}

/// Row-major RGBA pixels of a captured region
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, CaptureError> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(CaptureError::BufferSize {
                width,
                height,
                len: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn red(&self, x: u32, y: u32) -> u8 {
        self.data[(y as usize * self.width as usize + x as usize) * 4]
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(self)
    }

    /// Encode as JPEG at `path`, dropping the alpha channel
    pub fn save_jpeg(&self, path: &Path) -> image::ImageResult<()> {
        let rgba = RgbaImage::from_raw(self.width, self.height, self.data.clone()).ok_or_else(|| {
            image::ImageError::Parameter(image::error::ParameterError::from_kind(
                image::error::ParameterErrorKind::DimensionMismatch,
            ))
        })?;
        DynamicImage::ImageRgba8(rgba)
            .to_rgb8()
            .save_with_format(path, ImageFormat::Jpeg)
    }
}
