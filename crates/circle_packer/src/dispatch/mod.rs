//! Where a packing run executes.
//!
//! A [`PackJob`] is self-contained: it owns a handle to the pixels, the radius pool, the
//! configuration and an RNG seed, so it can run on the calling thread ([`InlineExecutor`]) or be
//! shipped to a worker thread ([`WorkerExecutor`]). Either way the caller gets a [`PackTask`].
use crossbeam_channel::Sender;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::buffer::PixelBuffer;
use crate::error::Result;
use crate::packing::events::{ChannelSink, PackEvent};
use crate::packing::{pack, pack_with_events, CirclePool, PackConfig, PackResult};

pub mod inline;
pub mod task;
pub mod worker;

pub use inline::InlineExecutor;
pub use task::PackTask;
pub use worker::{PackWorker, WorkerExecutor};

/// Everything one packing run needs.
#[derive(Debug, Clone)]
pub struct PackJob {
    pub buffer: PixelBuffer,
    pub pool: CirclePool,
    pub config: PackConfig,
    /// Seed for the run's [`StdRng`].
    pub seed: u64,
    /// Optional listener for run and per-circle events.
    pub events: Option<Sender<PackEvent>>,
}

impl PackJob {
    /// Bundles a run, rejecting a configuration that does not validate.
    pub fn new(
        buffer: PixelBuffer,
        pool: CirclePool,
        config: PackConfig,
        seed: u64,
    ) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            buffer,
            pool,
            config,
            seed,
            events: None,
        })
    }

    /// Forwards events to `tx` while the job runs.
    pub fn with_events(mut self, tx: Sender<PackEvent>) -> Self {
        self.events = Some(tx);
        self
    }

    /// Runs the job on the current thread.
    ///
    /// Re-validates the configuration first.
    pub fn run(&self) -> Result<PackResult> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        match &self.events {
            Some(tx) => {
                let mut sink = ChannelSink::new(tx.clone()).with_per_circle(true);
                pack_with_events(&self.buffer, &self.pool, &self.config, &mut rng, &mut sink)
            }
            None => pack(&self.buffer, &self.pool, &self.config, &mut rng),
        }
    }
}

/// Strategy that decides where a [`PackJob`] runs.
pub trait PackExecutor: Send {
    fn execute(&mut self, job: PackJob) -> PackTask;

    /// Returns `true` if jobs leave the calling thread.
    fn is_offloaded(&self) -> bool {
        false
    }
}

/// Returns `true` if this target can run packing on a separate thread.
pub fn offload_supported() -> bool {
    cfg!(not(target_family = "wasm"))
}

/// Picks the worker path unless the configuration pins execution to the calling thread or the
/// target has no threads.
pub fn select_executor(config: &PackConfig) -> Box<dyn PackExecutor> {
    if config.use_main_thread || !offload_supported() {
        debug!("Packing runs inline.");
        Box::new(InlineExecutor)
    } else {
        debug!(
            "Packing runs on a worker thread (reuse_worker = {}).",
            config.reuse_worker
        );
        Box::new(WorkerExecutor::new(config.reuse_worker))
    }
}
