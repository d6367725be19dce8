mod common;

use std::hint::black_box;

use circle_packer::collision::CollisionIndex;
use circle_packer::mask::AlphaMask;
use circle_packer::packing::PlacedCircle;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

const QUERIES: usize = 4096;
const PLACED: [usize; 4] = [10, 100, 1000, 5000];

fn random_points(rng: &mut StdRng, extent: f32, n: usize) -> Vec<Vec2> {
    let unit = |rng: &mut StdRng| (rng.next_u32() >> 8) as f32 / (1u32 << 24) as f32;
    (0..n)
        .map(|_| Vec2::new(unit(rng) * extent, unit(rng) * extent))
        .collect()
}

fn mask_benches(c: &mut Criterion) {
    let buffer = common::disk(256);
    let mask = AlphaMask::new(&buffer, 1);
    let mut rng = StdRng::seed_from_u64(0x0C0);
    let points = random_points(&mut rng, 512.0, QUERIES);

    let mut group = c.benchmark_group("oracle/mask");
    group.throughput(common::circles_throughput(QUERIES));

    group.bench_function("is_occupied", |b| {
        b.iter(|| black_box(points.iter().filter(|&&p| mask.is_occupied(p)).count()));
    });
    for accurate in [false, true] {
        group.bench_with_input(
            BenchmarkId::new("is_circle_inside", accurate),
            &accurate,
            |b, &accurate| {
                b.iter(|| {
                    black_box(
                        points
                            .iter()
                            .filter(|&&p| mask.is_circle_inside(p, 6.0, accurate))
                            .count(),
                    )
                });
            },
        );
    }

    group.finish();
}

fn collision_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("oracle/collision");
    group.throughput(common::circles_throughput(QUERIES));

    for &placed in &PLACED {
        let mut rng = StdRng::seed_from_u64(0xC011 ^ placed as u64);
        let mut index = CollisionIndex::with_capacity(1.0, placed);
        for p in random_points(&mut rng, 1024.0, placed) {
            index.commit(PlacedCircle::at(2.0, p));
        }
        let queries = random_points(&mut rng, 1024.0, QUERIES);

        group.bench_with_input(BenchmarkId::from_parameter(placed), &placed, |b, _| {
            b.iter(|| black_box(queries.iter().filter(|&&q| index.touches(q, 3.0)).count()));
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = mask_benches, collision_benches
}
criterion_main!(benches);
