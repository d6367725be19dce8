use circle_packer::prelude::*;
use circle_packer_examples::{init_tracing, render_circles_to_png, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let buffer = PixelBuffer::from_disk(200, [30, 144, 255, 255])?;

    // Packs run on a worker thread kept alive between calls.
    let config = PackConfig::new(2000)
        .with_radius_range(1.0, 18.0)
        .with_higher_accuracy(true)
        .with_reuse_worker(true);
    let (tx, rx) = crossbeam_channel::unbounded();
    let mut packer = CirclePacker::with_seed(config, 2024)?.with_event_channel(tx);
    info!("Offloaded: {}.", packer.is_offloaded());

    // Both jobs are queued before either is awaited.
    let first = packer.pack(buffer.clone());
    let second = packer.pack(buffer.clone());
    let first = first.wait()?;
    let second = second.wait()?;

    let finished = rx
        .try_iter()
        .filter(|e| e.kind() == PackEventKind::RunFinished)
        .count();
    info!(
        "Runs finished: {}; placed {} and {} circles.",
        finished,
        first.len(),
        second.len()
    );

    let mut rng = StdRng::seed_from_u64(1);
    let rc = RenderConfig::new(2.0).with_background(Rgb::WHITE);
    for (result, out) in [
        (&first, "shapes-disk-offloaded-1.png"),
        (&second, "shapes-disk-offloaded-2.png"),
    ] {
        let circles = colorize(result, &buffer, &ColorPolicy::Auto, 1, &mut rng)?;
        render_circles_to_png(&circles, buffer.width(), buffer.height(), &rc, out)?;
    }

    Ok(())
}
