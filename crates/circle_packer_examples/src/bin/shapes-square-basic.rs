use circle_packer::prelude::*;
use circle_packer_examples::{init_tracing, render_circles_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    // A 400x400 opaque square in a warm orange.
    let buffer = PixelBuffer::from_square(400, [240, 140, 40, 255])?;

    let config = PackConfig::new(1500)
        .with_radius_range(1.5, 24.0)
        .with_spacing(1.0)
        .with_use_main_thread(true);
    let mut packer = CirclePacker::with_seed(config, 42)?;
    let result = packer.pack(buffer.clone()).wait()?;

    let mut rng = StdRng::seed_from_u64(7);
    let circles = colorize(
        &result,
        &buffer,
        &ColorPolicy::Auto,
        packer.config().min_alpha,
        &mut rng,
    )?;

    let rc = RenderConfig::new(2.0).with_background(Rgb::new(24, 24, 28));
    render_circles_to_png(
        &circles,
        buffer.width(),
        buffer.height(),
        &rc,
        "shapes-square-basic.png",
    )
}
