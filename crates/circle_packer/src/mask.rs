//! Occupancy queries against the alpha channel of a [`PixelBuffer`].
//!
//! A pixel is occupied when its raw alpha byte is strictly greater than the configured
//! threshold. Coordinates are rounded to the nearest pixel with halves rounding up, and anything
//! that rounds outside the buffer is treated as unoccupied.
use glam::Vec2;

use crate::buffer::PixelBuffer;

/// Offset applied along both axes for the four diagonal containment samples.
///
/// This is `cos(π/4)` in pixels, measured from the circle center, and does not scale with the
/// radius.
pub const DIAGONAL_OFFSET: f32 = std::f32::consts::FRAC_1_SQRT_2;

/// Alpha-threshold view over a pixel buffer.
#[derive(Debug, Clone, Copy)]
pub struct AlphaMask<'a> {
    buffer: &'a PixelBuffer,
    min_alpha: u8,
}

impl<'a> AlphaMask<'a> {
    pub fn new(buffer: &'a PixelBuffer, min_alpha: u8) -> Self {
        Self { buffer, min_alpha }
    }

    pub fn buffer(&self) -> &'a PixelBuffer {
        self.buffer
    }

    pub fn min_alpha(&self) -> u8 {
        self.min_alpha
    }

    /// Returns `true` if the pixel nearest to `p` is inside the filled region.
    #[inline]
    pub fn is_occupied(&self, p: Vec2) -> bool {
        self.buffer
            .nearest(p)
            .is_some_and(|[_, _, _, alpha]| alpha > self.min_alpha)
    }

    /// Approximate containment test for a circle by sampling its boundary.
    ///
    /// Checks the four axis-aligned points at distance `radius` from `center`, and with
    /// `higher_accuracy` also the four diagonal points at [`DIAGONAL_OFFSET`]. Concave regions
    /// between sample points are not detected.
    #[inline]
    pub fn is_circle_inside(&self, center: Vec2, radius: f32, higher_accuracy: bool) -> bool {
        sample_points(center, radius, higher_accuracy).all(|p| self.is_occupied(p))
    }
}

/// Points sampled by [`AlphaMask::is_circle_inside`], in sampling order.
pub fn sample_points(
    center: Vec2,
    radius: f32,
    higher_accuracy: bool,
) -> impl Iterator<Item = Vec2> {
    let axis = [
        Vec2::new(0.0, -radius),
        Vec2::new(0.0, radius),
        Vec2::new(radius, 0.0),
        Vec2::new(-radius, 0.0),
    ];
    let o = DIAGONAL_OFFSET;
    let diagonal = [
        Vec2::new(o, o),
        Vec2::new(-o, o),
        Vec2::new(-o, -o),
        Vec2::new(o, -o),
    ];
    let diagonal_count = if higher_accuracy { diagonal.len() } else { 0 };

    axis.into_iter()
        .chain(diagonal.into_iter().take(diagonal_count))
        .map(move |d| center + d)
}
