//! Configuration for a packing session.
use crate::error::{Error, Result};

/// Parameters for one packing run, plus where the run should execute.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PackConfig {
    /// Minimum gap between the edges of any two placed circles.
    pub spacing: f32,
    /// Number of circles in the radius pool.
    pub num_circles: usize,
    /// Smallest radius the pool may contain.
    pub min_radius: f32,
    /// Largest radius the pool may contain.
    pub max_radius: f32,
    /// Also sample four diagonal points when testing containment.
    pub higher_accuracy: bool,
    /// Pixels with alpha strictly above this value are fillable.
    pub min_alpha: u8,
    /// Always run on the calling thread, even when a worker thread is available.
    pub use_main_thread: bool,
    /// Keep the worker thread alive between runs instead of tearing it down after each one.
    /// On by default.
    pub reuse_worker: bool,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            spacing: 1.0,
            num_circles: 1000,
            min_radius: 1.0,
            max_radius: 10.0,
            higher_accuracy: false,
            min_alpha: 1,
            use_main_thread: false,
            reuse_worker: true,
        }
    }
}

impl PackConfig {
    /// Creates a new [`PackConfig`] with `num_circles` and default values otherwise.
    pub fn new(num_circles: usize) -> Self {
        Self {
            num_circles,
            ..Default::default()
        }
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_num_circles(mut self, num_circles: usize) -> Self {
        self.num_circles = num_circles;
        self
    }

    /// Sets both radius bounds.
    pub fn with_radius_range(mut self, min_radius: f32, max_radius: f32) -> Self {
        self.min_radius = min_radius;
        self.max_radius = max_radius;
        self
    }

    pub fn with_higher_accuracy(mut self, higher_accuracy: bool) -> Self {
        self.higher_accuracy = higher_accuracy;
        self
    }

    pub fn with_min_alpha(mut self, min_alpha: u8) -> Self {
        self.min_alpha = min_alpha;
        self
    }

    pub fn with_use_main_thread(mut self, use_main_thread: bool) -> Self {
        self.use_main_thread = use_main_thread;
        self
    }

    pub fn with_reuse_worker(mut self, reuse_worker: bool) -> Self {
        self.reuse_worker = reuse_worker;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.num_circles == 0 {
            return Err(Error::InvalidConfig("num_circles must be > 0".into()));
        }
        if !self.min_radius.is_finite() || self.min_radius <= 0.0 {
            return Err(Error::InvalidConfig(
                "min_radius must be finite and > 0".into(),
            ));
        }
        if !self.max_radius.is_finite() || self.max_radius < self.min_radius {
            return Err(Error::InvalidConfig(format!(
                "max_radius ({}) must be finite and >= min_radius ({})",
                self.max_radius, self.min_radius
            )));
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(Error::InvalidConfig(
                "spacing must be finite and >= 0".into(),
            ));
        }

        Ok(())
    }
}
