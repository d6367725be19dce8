//! Overlap queries against the circles committed so far.
use glam::Vec2;

use crate::packing::PlacedCircle;

/// Append-only record of placed circles with a minimum edge-to-edge gap.
///
/// Queries scan every placed circle. Packing runs stay in the low thousands of circles, where a
/// flat scan is fast enough.
#[derive(Debug, Clone, Default)]
pub struct CollisionIndex {
    spacing: f32,
    placed: Vec<PlacedCircle>,
}

impl CollisionIndex {
    pub fn new(spacing: f32) -> Self {
        Self {
            spacing,
            placed: Vec::new(),
        }
    }

    pub fn with_capacity(spacing: f32, capacity: usize) -> Self {
        Self {
            spacing,
            placed: Vec::with_capacity(capacity),
        }
    }

    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    /// Returns `true` if a circle at `center` with `radius` would come closer than `spacing` to
    /// any placed circle.
    #[inline]
    pub fn touches(&self, center: Vec2, radius: f32) -> bool {
        self.placed
            .iter()
            .any(|c| center.distance(c.center()) < c.radius + radius + self.spacing)
    }

    /// Records a circle as placed.
    pub fn commit(&mut self, circle: PlacedCircle) {
        self.placed.push(circle);
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }

    pub fn as_slice(&self) -> &[PlacedCircle] {
        &self.placed
    }

    pub fn into_inner(self) -> Vec<PlacedCircle> {
        self.placed
    }
}
