use circle_packer::prelude::*;
use circle_packer_examples::init_tracing;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let (width, height) = (600, 300);
    let buffer = PixelBuffer::from_rect(width, height, [0, 0, 0, 255])?;

    let config = PackConfig::new(1200)
        .with_radius_range(2.0, 30.0)
        .with_spacing(2.0)
        .with_use_main_thread(true);
    let mut packer = CirclePacker::with_seed(config, 99)?;
    let result = packer.pack(buffer.clone()).wait()?;

    let palette = ColorPolicy::palette([
        Rgb::new(38, 70, 83),
        Rgb::new(42, 157, 143),
        Rgb::new(233, 196, 106),
        Rgb::new(244, 162, 97),
        Rgb::new(231, 111, 81),
    ])?;
    let mut rng = StdRng::seed_from_u64(5);
    let circles = colorize(&result, &buffer, &palette, 0, &mut rng)?;

    let svg = to_svg_string(width, height, &circles, Some(Rgb::new(250, 247, 240)));
    let out = "palette-rect-svg.svg";
    std::fs::write(out, svg)?;
    info!("Wrote {} ({} circles).", out, circles.len());

    Ok(())
}
