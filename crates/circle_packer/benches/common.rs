use std::time::Duration;

use circle_packer::buffer::PixelBuffer;
use criterion::{Criterion, Throughput};

pub const SAMPLE_SIZE: usize = 15;
pub const WARM_UP: Duration = Duration::from_millis(500);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(3);

pub const OPAQUE: [u8; 4] = [255, 255, 255, 255];

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn circles_throughput(circles: usize) -> Throughput {
    Throughput::Elements(circles.max(1) as u64)
}

#[allow(dead_code)]
pub fn square(edge: u32) -> PixelBuffer {
    PixelBuffer::from_square(edge, OPAQUE).expect("non-empty square")
}

pub fn disk(radius: u32) -> PixelBuffer {
    PixelBuffer::from_disk(radius, OPAQUE).expect("non-empty disk")
}
