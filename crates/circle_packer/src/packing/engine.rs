//! The placement loop.
//!
//! Circles are tried largest first. Each gets [`TRIAL_BUDGET`] uniformly random centers; the
//! first center that passes the containment test and keeps `spacing` to every placed circle is
//! committed. A circle that runs out of trials is dropped without error.
use glam::Vec2;
use rand::RngCore;
use tracing::{debug, info};

use crate::buffer::PixelBuffer;
use crate::collision::CollisionIndex;
use crate::error::Result;
use crate::mask::AlphaMask;
use crate::packing::events::{EventSink, PackEvent, PackEventKind};
use crate::packing::{rand01, CirclePool, PackConfig, PlacedCircle};

/// Random centers tried per circle before it is abandoned.
pub const TRIAL_BUDGET: usize = 1000;

/// Totals for one packing run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackStats {
    /// Circles taken from the pool.
    pub attempted: usize,
    /// Circles committed.
    pub placed: usize,
    /// Circles that exhausted their trial budget.
    pub skipped: usize,
    /// Random centers drawn over the whole run.
    pub trials: usize,
}

/// Output of a packing run.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackResult {
    /// Committed circles in the order they were tried, largest radius first.
    pub circles: Vec<PlacedCircle>,
    /// Run totals.
    pub stats: PackStats,
}

impl PackResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.circles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty()
    }
}

/// Packs `pool` into the occupied region of `buffer`.
///
/// Fails with [`crate::error::Error::InvalidConfig`] before drawing any center if `config` does not validate.
pub fn pack<R: RngCore>(
    buffer: &PixelBuffer,
    pool: &CirclePool,
    config: &PackConfig,
    rng: &mut R,
) -> Result<PackResult> {
    config.validate()?;
    Ok(pack_internal(buffer, pool, config, rng, &mut ()))
}

/// Like [`pack`], reporting progress to `sink`.
pub fn pack_with_events<R: RngCore>(
    buffer: &PixelBuffer,
    pool: &CirclePool,
    config: &PackConfig,
    rng: &mut R,
    sink: &mut dyn EventSink,
) -> Result<PackResult> {
    config.validate()?;
    Ok(pack_internal(buffer, pool, config, rng, sink))
}

fn pack_internal(
    buffer: &PixelBuffer,
    pool: &CirclePool,
    config: &PackConfig,
    rng: &mut dyn RngCore,
    sink: &mut dyn EventSink,
) -> PackResult {
    let mask = AlphaMask::new(buffer, config.min_alpha);
    let extent = buffer.extent();
    let mut index = CollisionIndex::with_capacity(config.spacing, pool.len());
    let mut stats = PackStats::default();

    if sink.wants(PackEventKind::RunStarted) {
        sink.send(PackEvent::RunStarted {
            width: buffer.width(),
            height: buffer.height(),
            pool_len: pool.len(),
            config: config.clone(),
        });
    }

    for (order, radius) in pool.largest_first().enumerate() {
        stats.attempted += 1;
        let (center, trials) =
            find_center(&mask, &index, radius, extent, config.higher_accuracy, rng);
        stats.trials += trials;

        match center {
            Some(center) => {
                let circle = PlacedCircle::at(radius, center);
                index.commit(circle);
                stats.placed += 1;
                if sink.wants(PackEventKind::CircleCommitted) {
                    sink.send(PackEvent::CircleCommitted {
                        order,
                        circle,
                        trials,
                    });
                }
            }
            None => {
                stats.skipped += 1;
                debug!("Circle {} (r = {:.3}) found no free spot.", order, radius);
                if sink.wants(PackEventKind::CircleSkipped) {
                    sink.send(PackEvent::CircleSkipped { order, radius });
                }
            }
        }
    }

    info!(
        "Packed {}/{} circles into {}x{} ({} trials).",
        stats.placed,
        stats.attempted,
        buffer.width(),
        buffer.height(),
        stats.trials,
    );
    if sink.wants(PackEventKind::RunFinished) {
        sink.send(PackEvent::RunFinished { stats });
    }

    PackResult {
        circles: index.into_inner(),
        stats,
    }
}

/// Draws random centers until one fits or the budget runs out. Returns the center, if any, and
/// the number of trials spent.
fn find_center(
    mask: &AlphaMask<'_>,
    index: &CollisionIndex,
    radius: f32,
    extent: Vec2,
    higher_accuracy: bool,
    rng: &mut dyn RngCore,
) -> (Option<Vec2>, usize) {
    for trial in 1..=TRIAL_BUDGET {
        let x = rand01(rng) * extent.x;
        let y = rand01(rng) * extent.y;
        let center = Vec2::new(x, y);

        if mask.is_circle_inside(center, radius, higher_accuracy)
            && !index.touches(center, radius)
        {
            return (Some(center), trial);
        }
    }

    (None, TRIAL_BUDGET)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::error::Error;
    use crate::mask::sample_points;
    use crate::packing::events::VecSink;
    use crate::packing::test_support::FixedRng;

    fn uniform_buffer(width: u32, height: u32, alpha: u8) -> PixelBuffer {
        let data: Vec<u8> = (0..width * height)
            .flat_map(|_| [0, 0, 0, alpha])
            .collect();
        PixelBuffer::try_new(data, width).unwrap()
    }

    fn assert_spacing(circles: &[PlacedCircle], spacing: f32) {
        for (i, a) in circles.iter().enumerate() {
            for b in &circles[i + 1..] {
                let d = a.center().distance(b.center());
                assert!(
                    d >= a.radius + b.radius + spacing,
                    "{a:?} and {b:?} are {d} apart"
                );
            }
        }
    }

    #[test]
    fn single_large_circle_fits_opaque_square() {
        let buffer = uniform_buffer(200, 200, 255);
        let config = PackConfig::new(1)
            .with_radius_range(50.0, 50.0)
            .with_spacing(0.0);
        let mut rng = StdRng::seed_from_u64(3);
        let pool = CirclePool::generate(&config, &mut rng).unwrap();

        let result = pack(&buffer, &pool, &config, &mut rng).unwrap();

        assert_eq!(result.len(), 1);
        let circle = result.circles[0];
        assert_eq!(circle.radius, 50.0);
        let mask = AlphaMask::new(&buffer, config.min_alpha);
        for p in sample_points(circle.center(), circle.radius, config.higher_accuracy) {
            assert!(mask.is_occupied(p), "sample {p:?} is outside");
        }
        assert_eq!(result.stats.placed, 1);
        assert_eq!(result.stats.skipped, 0);
    }

    #[test]
    fn transparent_buffer_places_nothing() {
        let buffer = uniform_buffer(64, 64, 0);
        let config = PackConfig::new(20)
            .with_radius_range(1.0, 3.0)
            .with_min_alpha(1);
        let mut rng = StdRng::seed_from_u64(11);
        let pool = CirclePool::generate(&config, &mut rng).unwrap();

        let result = pack(&buffer, &pool, &config, &mut rng).unwrap();

        assert!(result.is_empty());
        assert_eq!(result.stats.skipped, 20);
        assert_eq!(result.stats.trials, 20 * TRIAL_BUDGET);
    }

    #[test]
    fn forced_identical_centers_reject_the_second_circle() {
        let buffer = uniform_buffer(200, 200, 255);
        let config = PackConfig::new(2)
            .with_radius_range(10.0, 10.0)
            .with_spacing(5.0);
        let pool = CirclePool::from_radii([10.0, 10.0]).unwrap();
        let mut rng = FixedRng {
            value: u32::MAX / 2,
        };

        let mut sink = VecSink::new();
        let result = pack_with_events(&buffer, &pool, &config, &mut rng, &mut sink).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result.stats.skipped, 1);
        let first = result.circles[0];
        assert!((first.x - 100.0).abs() < 1e-3);
        assert!((first.y - 100.0).abs() < 1e-3);

        let skipped: Vec<usize> = sink
            .as_slice()
            .iter()
            .filter_map(|e| match e {
                PackEvent::CircleSkipped { order, .. } => Some(*order),
                _ => None,
            })
            .collect();
        assert_eq!(skipped, vec![1]);
    }

    #[test]
    fn dense_run_respects_spacing_and_pool() {
        let buffer = uniform_buffer(500, 500, 255);
        let config = PackConfig::new(500)
            .with_radius_range(1.0, 5.0)
            .with_spacing(1.0);
        let mut rng = StdRng::seed_from_u64(2024);
        let pool = CirclePool::generate(&config, &mut rng).unwrap();

        let result = pack(&buffer, &pool, &config, &mut rng).unwrap();

        assert!(result.len() <= 500);
        assert!(result.len() > 450, "only {} placed", result.len());
        assert_spacing(&result.circles, config.spacing);

        // Output radii are a sub-multiset of the pool.
        let mut remaining: Vec<f32> = pool.radii().to_vec();
        for c in &result.circles {
            let i = remaining
                .iter()
                .position(|r| *r == c.radius)
                .expect("radius not in pool");
            remaining.swap_remove(i);
        }
    }

    #[test]
    fn attempts_run_largest_first() {
        let buffer = uniform_buffer(80, 80, 255);
        let config = PackConfig::new(150)
            .with_radius_range(1.0, 12.0)
            .with_spacing(2.0)
            .with_higher_accuracy(true);
        let mut rng = StdRng::seed_from_u64(5);
        let pool = CirclePool::generate(&config, &mut rng).unwrap();

        let mut sink = VecSink::new();
        let result = pack_with_events(&buffer, &pool, &config, &mut rng, &mut sink).unwrap();

        let attempts: Vec<(usize, f32)> = sink
            .as_slice()
            .iter()
            .filter_map(|e| match e {
                PackEvent::CircleCommitted { order, circle, .. } => Some((*order, circle.radius)),
                PackEvent::CircleSkipped { order, radius } => Some((*order, *radius)),
                _ => None,
            })
            .collect();
        assert_eq!(attempts.len(), 150);
        assert!(attempts.iter().enumerate().all(|(i, (order, _))| i == *order));
        assert!(attempts.windows(2).all(|w| w[0].1 >= w[1].1));

        // Committed circles keep the traversal order as well.
        assert!(result.circles.windows(2).all(|w| w[0].radius >= w[1].radius));
        assert_eq!(result.stats.attempted, 150);
        assert_eq!(result.stats.placed + result.stats.skipped, 150);
    }

    #[test]
    fn committed_circles_pass_containment_on_a_disk() {
        // Opaque disk of radius 40 centered in a 100x100 buffer.
        let width = 100u32;
        let data: Vec<u8> = (0..width * width)
            .flat_map(|i| {
                let p = Vec2::new((i % width) as f32, (i / width) as f32);
                let a = if p.distance(Vec2::splat(50.0)) <= 40.0 {
                    255
                } else {
                    0
                };
                [10, 20, 30, a]
            })
            .collect();
        let buffer = PixelBuffer::try_new(data, width).unwrap();
        let config = PackConfig::new(200)
            .with_radius_range(1.0, 8.0)
            .with_higher_accuracy(true);
        let mut rng = StdRng::seed_from_u64(77);
        let pool = CirclePool::generate(&config, &mut rng).unwrap();

        let result = pack(&buffer, &pool, &config, &mut rng).unwrap();

        assert!(!result.is_empty());
        let mask = AlphaMask::new(&buffer, config.min_alpha);
        for c in &result.circles {
            assert!(mask.is_circle_inside(c.center(), c.radius, true));
            assert!(c.center().distance(Vec2::splat(50.0)) <= 41.0);
        }
        assert_spacing(&result.circles, config.spacing);
    }

    #[test]
    fn run_events_bracket_the_run() {
        let buffer = uniform_buffer(30, 30, 255);
        let config = PackConfig::new(4).with_radius_range(1.0, 2.0);
        let mut rng = StdRng::seed_from_u64(8);
        let pool = CirclePool::generate(&config, &mut rng).unwrap();

        let mut sink = VecSink::new();
        let result = pack_with_events(&buffer, &pool, &config, &mut rng, &mut sink).unwrap();

        let events = sink.into_inner();
        assert!(matches!(
            events.first(),
            Some(PackEvent::RunStarted {
                width: 30,
                height: 30,
                pool_len: 4,
                ..
            })
        ));
        match events.last() {
            Some(PackEvent::RunFinished { stats }) => assert_eq!(*stats, result.stats),
            other => panic!("unexpected last event {other:?}"),
        }
    }

    #[test]
    fn same_seed_same_packing() {
        let buffer = uniform_buffer(120, 90, 200);
        let config = PackConfig::new(60).with_radius_range(1.0, 6.0);
        let pool = CirclePool::generate(&config, &mut StdRng::seed_from_u64(1)).unwrap();

        let a = pack(&buffer, &pool, &config, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = pack(&buffer, &pool, &config, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a.circles, b.circles);
    }

    #[test]
    fn invalid_spacing_is_rejected_before_placing() {
        let buffer = uniform_buffer(100, 100, 255);
        let pool = CirclePool::from_radii([2.0; 50]).unwrap();

        for spacing in [f32::NAN, -1.0, f32::NEG_INFINITY] {
            let config = PackConfig::new(50)
                .with_radius_range(2.0, 2.0)
                .with_spacing(spacing);
            let mut rng = StdRng::seed_from_u64(6);
            let mut sink = VecSink::new();

            let result = pack_with_events(&buffer, &pool, &config, &mut rng, &mut sink);

            assert!(matches!(result, Err(Error::InvalidConfig(_))));
            assert!(sink.is_empty());
            assert!(matches!(
                pack(&buffer, &pool, &config, &mut rng),
                Err(Error::InvalidConfig(_))
            ));
        }
    }
}
