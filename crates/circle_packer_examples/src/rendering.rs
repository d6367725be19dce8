//! Shared helpers for the example binaries: logging setup, PNG input and raster output.
use std::path::Path;

use circle_packer::prelude::{ColoredCircle, PixelBuffer, Rgb};
use glam::Vec2;
use image::{Rgb as ImageRgb, RgbImage};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Installs a formatting subscriber filtered by `RUST_LOG`, defaulting to `info`.
///
/// Calling it more than once is harmless.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Decodes an image file into an RGBA8 [`PixelBuffer`].
pub fn load_png(path: impl AsRef<Path>) -> anyhow::Result<PixelBuffer> {
    let path = path.as_ref();
    let image = image::open(path)?.to_rgba8();
    let (width, height) = image.dimensions();
    info!("Loaded {} ({}x{}).", path.display(), width, height);
    Ok(PixelBuffer::try_new(image.into_raw(), width)?)
}

/// Output size and background for rasterized circles.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Output pixels per source pixel.
    pub scale: f32,
    pub background: Rgb,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            background: Rgb::WHITE,
        }
    }
}

impl RenderConfig {
    pub fn new(scale: f32) -> Self {
        Self {
            scale,
            ..Default::default()
        }
    }

    pub fn with_background(mut self, background: Rgb) -> Self {
        self.background = background;
        self
    }

    fn image_size(&self, width: u32, height: u32) -> (u32, u32) {
        let s = self.scale.max(f32::EPSILON);
        (
            ((width as f32 * s).ceil() as u32).max(1),
            ((height as f32 * s).ceil() as u32).max(1),
        )
    }
}

/// Rasterizes `circles` over a `width × height` source area.
///
/// Pixels are filled when their center lies inside a circle; later circles paint over earlier
/// ones.
pub fn render_circles_to_rgb(
    circles: &[ColoredCircle],
    width: u32,
    height: u32,
    rc: &RenderConfig,
) -> RgbImage {
    let (w, h) = rc.image_size(width, height);
    let mut img = RgbImage::from_pixel(w, h, ImageRgb(rc.background.0));

    for ColoredCircle { circle, color } in circles {
        let center = circle.center() * rc.scale;
        let r = circle.radius * rc.scale;
        let min = (center - Vec2::splat(r)).floor().max(Vec2::ZERO);
        let max = (center + Vec2::splat(r)).ceil().min(Vec2::new(w as f32, h as f32));

        for y in min.y as u32..max.y as u32 {
            for x in min.x as u32..max.x as u32 {
                let p = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if p.distance_squared(center) <= r * r {
                    img.put_pixel(x, y, ImageRgb(color.0));
                }
            }
        }
    }

    img
}

/// Rasterizes `circles` and writes the result as a PNG file.
pub fn render_circles_to_png(
    circles: &[ColoredCircle],
    width: u32,
    height: u32,
    rc: &RenderConfig,
    out: impl AsRef<Path>,
) -> anyhow::Result<()> {
    let out = out.as_ref();
    let img = render_circles_to_rgb(circles, width, height, rc);
    img.save(out)?;
    info!(
        "Wrote {} ({}x{}, {} circles).",
        out.display(),
        img.width(),
        img.height(),
        circles.len()
    );
    Ok(())
}
