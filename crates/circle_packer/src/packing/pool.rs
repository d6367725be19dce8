//! The fixed pool of radii a session tries to place.
use std::sync::Arc;

use rand::RngCore;

use crate::error::{Error, Result};
use crate::packing::{rand01, PackConfig};

/// Radii sorted ascending. Placement consumes the pool from its tail, largest first.
#[derive(Debug, Clone, PartialEq)]
pub struct CirclePool {
    radii: Arc<[f32]>,
}

impl CirclePool {
    /// Draws `num_circles` radii as `min + u1 * u2 * (max - min)`.
    ///
    /// The product of two uniforms skews the pool toward small circles.
    pub fn generate(config: &PackConfig, rng: &mut dyn RngCore) -> Result<Self> {
        config.validate()?;
        let span = config.max_radius - config.min_radius;
        let mut radii: Vec<f32> = (0..config.num_circles)
            .map(|_| {
                let u1 = rand01(rng);
                let u2 = rand01(rng);
                config.min_radius + u1 * u2 * span
            })
            .collect();
        radii.sort_by(f32::total_cmp);

        Ok(Self {
            radii: radii.into(),
        })
    }

    /// Builds a pool from explicit radii, sorting them ascending.
    pub fn from_radii(radii: impl IntoIterator<Item = f32>) -> Result<Self> {
        let mut radii: Vec<f32> = radii.into_iter().collect();
        if radii.is_empty() {
            return Err(Error::InvalidConfig(
                "pool must contain at least one radius".into(),
            ));
        }
        if let Some(bad) = radii.iter().find(|r| !r.is_finite() || **r <= 0.0) {
            return Err(Error::InvalidConfig(format!(
                "radius {bad} must be finite and > 0"
            )));
        }
        radii.sort_by(f32::total_cmp);

        Ok(Self {
            radii: radii.into(),
        })
    }

    /// All radii, ascending.
    pub fn radii(&self) -> &[f32] {
        &self.radii
    }

    /// Radii in placement order.
    pub fn largest_first(&self) -> impl Iterator<Item = f32> + '_ {
        self.radii.iter().rev().copied()
    }

    pub fn len(&self) -> usize {
        self.radii.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }
}
