//! Shared, read-only RGBA8 pixel buffers.
use std::fmt;
use std::sync::Arc;

use glam::Vec2;

use crate::error::{Error, Result};

/// Row-major RGBA8 pixels with a known width; the height is implied by the byte length.
///
/// The bytes live behind an [`Arc`], so cloning is cheap and a buffer can be handed to a
/// worker thread without copying or synchronization.
#[derive(Clone)]
pub struct PixelBuffer {
    data: Arc<[u8]>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Bytes per pixel (R, G, B, A).
    pub const BYTES_PER_PIXEL: usize = 4;

    /// Wraps `data` as a buffer of the given pixel `width`.
    ///
    /// Fails when the width is zero, when the buffer is empty, or when the byte length is not a
    /// whole number of rows.
    pub fn try_new(data: impl Into<Arc<[u8]>>, width: u32) -> Result<Self> {
        let data = data.into();
        if width == 0 {
            return Err(Error::InvalidBuffer("width must be > 0".into()));
        }
        if data.is_empty() {
            return Err(Error::InvalidBuffer("buffer has no pixels".into()));
        }
        let row_bytes = width as usize * Self::BYTES_PER_PIXEL;
        if data.len() % row_bytes != 0 {
            return Err(Error::InvalidBuffer(format!(
                "length {} is not a multiple of the row size {} (width {})",
                data.len(),
                row_bytes,
                width
            )));
        }
        let height = u32::try_from(data.len() / row_bytes)
            .map_err(|_| Error::InvalidBuffer("height does not fit in u32".into()))?;

        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width and height as a float extent, the domain random centers are drawn from.
    pub fn extent(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Returns the RGBA value at integer pixel coordinates, or `None` outside the buffer.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let i = self.offset(x, y)?;
        let px = self.data.get(i..i + Self::BYTES_PER_PIXEL)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Returns the alpha channel at integer pixel coordinates, or `None` outside the buffer.
    #[inline]
    pub fn alpha(&self, x: u32, y: u32) -> Option<u8> {
        let i = self.offset(x, y)?;
        self.data.get(i + 3).copied()
    }

    /// Returns the RGBA value of the pixel nearest to `p`, rounding halves up.
    ///
    /// Positions that round outside the buffer have no pixel.
    #[inline]
    pub fn nearest(&self, p: Vec2) -> Option<[u8; 4]> {
        let x = round_to_pixel(p.x)?;
        let y = round_to_pixel(p.y)?;
        self.pixel(x, y)
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((self.width as usize * y as usize + x as usize) * Self::BYTES_PER_PIXEL)
    }
}

impl fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

#[inline]
fn round_to_pixel(v: f32) -> Option<u32> {
    let r = (v + 0.5).floor();
    if !r.is_finite() || r < 0.0 || r > u32::MAX as f32 {
        return None;
    }
    Some(r as u32)
}
