//! Fill colors for packed circles.
use std::fmt;

use rand::RngCore;

use crate::buffer::PixelBuffer;
use crate::error::{Error, Result};
use crate::packing::{rand01, PackResult, PlacedCircle};

/// An opaque 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub const BLACK: Rgb = Rgb([0, 0, 0]);
    pub const WHITE: Rgb = Rgb([255, 255, 255]);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    pub fn r(&self) -> u8 {
        self.0[0]
    }

    pub fn g(&self) -> u8 {
        self.0[1]
    }

    pub fn b(&self) -> u8 {
        self.0[2]
    }
}

/// Formats as a CSS color, e.g. `rgb(12,34,56)`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "rgb({r},{g},{b})")
    }
}

/// How circles get their fill color.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorPolicy {
    /// Take the RGB of the pixel under the circle center.
    #[default]
    Auto,
    /// Pick a uniformly random entry for every circle.
    Palette(Vec<Rgb>),
}

impl ColorPolicy {
    /// Builds a palette policy; fails on an empty palette.
    pub fn palette(colors: impl IntoIterator<Item = Rgb>) -> Result<Self> {
        let colors: Vec<Rgb> = colors.into_iter().collect();
        if colors.is_empty() {
            return Err(Error::InvalidConfig("palette must not be empty".into()));
        }
        Ok(Self::Palette(colors))
    }
}

/// A placed circle together with its fill.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColoredCircle {
    pub circle: PlacedCircle,
    pub color: Rgb,
}

/// Assigns a color to every circle of `result`, dropping circles that get none.
///
/// With [`ColorPolicy::Auto`] a circle gets no color when the pixel under its rounded center is
/// missing or when `alpha / 255 < min_alpha`. The comparison mixes a normalized alpha with the raw
/// threshold, so any `min_alpha >= 1` only colors fully opaque centers.
pub fn colorize(
    result: &PackResult,
    buffer: &PixelBuffer,
    policy: &ColorPolicy,
    min_alpha: u8,
    rng: &mut dyn RngCore,
) -> Result<Vec<ColoredCircle>> {
    if let ColorPolicy::Palette(colors) = policy {
        if colors.is_empty() {
            return Err(Error::InvalidConfig("palette must not be empty".into()));
        }
    }

    Ok(result
        .circles
        .iter()
        .filter_map(|&circle| {
            let color = match policy {
                ColorPolicy::Auto => sample_center(buffer, &circle, min_alpha),
                ColorPolicy::Palette(colors) => pick_uniform(colors, rng),
            }?;
            Some(ColoredCircle { circle, color })
        })
        .collect())
}

fn pick_uniform(colors: &[Rgb], rng: &mut dyn RngCore) -> Option<Rgb> {
    let i = (rand01(rng) * colors.len() as f32) as usize;
    colors.get(i.min(colors.len().saturating_sub(1))).copied()
}

fn sample_center(buffer: &PixelBuffer, circle: &PlacedCircle, min_alpha: u8) -> Option<Rgb> {
    let [r, g, b, a] = buffer.nearest(circle.center())?;
    if (a as f32 / 255.0) < min_alpha as f32 {
        return None;
    }
    Some(Rgb([r, g, b]))
}
