//! A packing session: one configuration, one radius pool, one executor.
use crossbeam_channel::Sender;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::info;

use crate::buffer::PixelBuffer;
use crate::dispatch::{select_executor, PackExecutor, PackJob, PackTask};
use crate::error::Result;
use crate::packing::events::PackEvent;
use crate::packing::{CirclePool, PackConfig};

/// Owns the configuration, the radius pool drawn for it, and the executor that runs jobs.
///
/// Every [`CirclePacker::pack`] call packs the same pool into the given buffer with a fresh seed
/// drawn from the session RNG.
pub struct CirclePacker {
    config: PackConfig,
    pool: CirclePool,
    rng: StdRng,
    executor: Box<dyn PackExecutor>,
    events: Option<Sender<PackEvent>>,
}

impl CirclePacker {
    /// Creates a session seeded from the thread-local RNG.
    pub fn new(config: PackConfig) -> Result<Self> {
        let seed = rand::rng().next_u64();
        Self::with_seed(config, seed)
    }

    /// Creates a session whose pool and placements derive from `seed`.
    pub fn with_seed(config: PackConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let executor = select_executor(&config);
        Self::with_executor(config, seed, executor)
    }

    /// Creates a session that runs jobs on `executor` regardless of the configured dispatch
    /// options.
    pub fn with_executor(
        config: PackConfig,
        seed: u64,
        executor: Box<dyn PackExecutor>,
    ) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let pool = CirclePool::generate(&config, &mut rng)?;
        info!(
            "Circle pool ready: {} radii in [{}, {}].",
            pool.len(),
            config.min_radius,
            config.max_radius
        );

        Ok(Self {
            config,
            pool,
            rng,
            executor,
            events: None,
        })
    }

    /// Forwards run and per-circle events of every subsequent job to `tx`.
    pub fn with_event_channel(mut self, tx: Sender<PackEvent>) -> Self {
        self.events = Some(tx);
        self
    }

    pub fn config(&self) -> &PackConfig {
        &self.config
    }

    pub fn pool(&self) -> &CirclePool {
        &self.pool
    }

    /// Returns `true` if jobs run off the calling thread.
    pub fn is_offloaded(&self) -> bool {
        self.executor.is_offloaded()
    }

    /// Packs the pool into `buffer`.
    pub fn pack(&mut self, buffer: PixelBuffer) -> PackTask {
        let seed = self.rng.next_u64();
        let mut job = match PackJob::new(buffer, self.pool.clone(), self.config.clone(), seed) {
            Ok(job) => job,
            Err(e) => return PackTask::failed(e),
        };
        if let Some(tx) = &self.events {
            job = job.with_events(tx.clone());
        }
        self.executor.execute(job)
    }
}
