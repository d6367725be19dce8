use circle_packer::prelude::*;
use circle_packer_examples::{init_tracing, load_png, render_circles_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let Some(path) = std::env::args().nth(1) else {
        anyhow::bail!("usage: images-png-pack <image.png> [num_circles]");
    };
    let num_circles = match std::env::args().nth(2) {
        Some(n) => n.parse()?,
        None => 3000,
    };

    let buffer = load_png(&path)?;

    // Only pixels with alpha above 128 count as inside the shape.
    let config = PackConfig::new(num_circles)
        .with_radius_range(1.0, 16.0)
        .with_min_alpha(128)
        .with_higher_accuracy(true);
    let mut packer = CirclePacker::new(config)?;
    let result = packer.pack(buffer.clone()).wait()?;

    let mut rng = StdRng::seed_from_u64(0);
    let circles = colorize(&result, &buffer, &ColorPolicy::Auto, 0, &mut rng)?;

    let rc = RenderConfig::new(1.0).with_background(Rgb::WHITE);
    render_circles_to_png(
        &circles,
        buffer.width(),
        buffer.height(),
        &rc,
        "images-png-pack.png",
    )
}
