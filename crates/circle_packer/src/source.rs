//! Procedurally generated pixel buffers for shapes without an image file.
use crate::buffer::PixelBuffer;
use crate::error::{Error, Result};

impl PixelBuffer {
    /// A `width × height` buffer filled with `rgba`.
    pub fn from_rect(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self> {
        let pixels = checked_area(width, height)?;
        Self::try_new(rgba.repeat(pixels), width)
    }

    /// An `edge × edge` buffer filled with `rgba`.
    pub fn from_square(edge: u32, rgba: [u8; 4]) -> Result<Self> {
        Self::from_rect(edge, edge, rgba)
    }

    /// A `2r × 2r` buffer holding a disk of `radius` filled with `rgba`; the corners are fully
    /// transparent.
    ///
    /// A pixel belongs to the disk when its center lies within `radius` of the canvas center.
    pub fn from_disk(radius: u32, rgba: [u8; 4]) -> Result<Self> {
        let edge = radius
            .checked_mul(2)
            .ok_or_else(|| Error::InvalidBuffer(format!("disk radius {radius} is too large")))?;
        let pixels = checked_area(edge, edge)?;

        let r = radius as f64;
        let r2 = r * r;
        let mut data = Vec::with_capacity(pixels * Self::BYTES_PER_PIXEL);
        for y in 0..edge {
            let dy = y as f64 + 0.5 - r;
            for x in 0..edge {
                let dx = x as f64 + 0.5 - r;
                if dx * dx + dy * dy <= r2 {
                    data.extend_from_slice(&rgba);
                } else {
                    data.extend_from_slice(&[0; 4]);
                }
            }
        }
        Self::try_new(data, edge)
    }
}

fn checked_area(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .filter(|&n| n > 0)
        .ok_or_else(|| Error::InvalidBuffer(format!("cannot build a {width}x{height} buffer")))
}
