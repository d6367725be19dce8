//! Greedy randomized placement of a radius pool into the occupied region of a pixel buffer.
use glam::Vec2;
use rand::RngCore;

pub mod config;
pub mod engine;
pub mod events;
pub mod pool;

pub use config::PackConfig;
pub use engine::{pack, pack_with_events, PackResult, PackStats, TRIAL_BUDGET};
pub use pool::CirclePool;

/// A circle that was committed at a position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlacedCircle {
    pub radius: f32,
    pub x: f32,
    pub y: f32,
}

impl PlacedCircle {
    pub fn new(radius: f32, x: f32, y: f32) -> Self {
        Self { radius, x, y }
    }

    pub fn at(radius: f32, center: Vec2) -> Self {
        Self::new(radius, center.x, center.y)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Uniform float in `[0, 1)` built from the top 24 bits of one `u32` draw.
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    const SCALE: f32 = 1.0 / (1u32 << 24) as f32;
    (rng.next_u32() >> 8) as f32 * SCALE
}


#[cfg(test)]
mod tests {
    use super::test_support::FixedRng;
    use super::*;

    #[test]
    fn rand01_bounds() {
        let mut lo = FixedRng { value: 0 };
        assert_eq!(rand01(&mut lo), 0.0);

        let mut hi = FixedRng { value: u32::MAX };
        let v = rand01(&mut hi);
        assert!(v < 1.0);
        assert!(v > 0.999_999);
    }

    #[test]
    fn rand01_midpoint() {
        let mut rng = FixedRng {
            value: u32::MAX / 2,
        };
        assert!((rand01(&mut rng) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn placed_circle_center_round_trips() {
        let c = PlacedCircle::at(3.0, Vec2::new(4.0, 5.0));
        assert_eq!(c, PlacedCircle::new(3.0, 4.0, 5.0));
        assert_eq!(c.center(), Vec2::new(4.0, 5.0));
    }
}
