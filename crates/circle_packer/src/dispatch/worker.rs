//! A dedicated packing thread fed over a channel.
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};
use tracing::{debug, warn};

use crate::dispatch::{PackExecutor, PackJob, PackTask};
use crate::error::{Error, Result};
use crate::packing::PackResult;

const WORKER_THREAD_NAME: &str = "circle-pack-worker";

struct WorkerRequest {
    job: PackJob,
    reply: async_channel::Sender<Result<PackResult>>,
}

/// Handle to one worker thread that runs jobs in submission order.
///
/// Dropping the handle closes the inbox; the thread finishes any queued jobs and then exits on
/// its own.
pub struct PackWorker {
    inbox: Sender<WorkerRequest>,
    handle: JoinHandle<()>,
}

impl PackWorker {
    /// Starts the worker thread.
    pub fn spawn() -> Result<Self> {
        let (inbox, requests) = crossbeam_channel::unbounded();
        let handle = thread::Builder::new()
            .name(WORKER_THREAD_NAME.into())
            .spawn(move || worker_loop(requests))
            .map_err(|e| Error::Dispatch(format!("failed to spawn worker thread: {e}")))?;
        debug!("Spawned packing worker.");

        Ok(Self { inbox, handle })
    }

    /// Queues `job` and returns the channel its result will arrive on.
    pub fn submit(&self, job: PackJob) -> Result<async_channel::Receiver<Result<PackResult>>> {
        let (reply, rx) = async_channel::bounded(1);
        self.inbox
            .send(WorkerRequest { job, reply })
            .map_err(|_| Error::Dispatch("worker inbox is closed".into()))?;
        Ok(rx)
    }

    /// Returns `false` once the thread has exited.
    pub fn is_alive(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Closes the inbox and waits for queued jobs to finish.
    pub fn shutdown(self) -> Result<()> {
        let PackWorker { inbox, handle } = self;
        drop(inbox);
        handle
            .join()
            .map_err(|_| Error::Dispatch("worker thread panicked".into()))
    }
}

fn worker_loop(requests: Receiver<WorkerRequest>) {
    for WorkerRequest { job, reply } in requests.iter() {
        let result = job.run();
        if reply.send_blocking(result).is_err() {
            debug!("Pack task dropped before the worker replied.");
        }
    }
    debug!("Packing worker inbox closed; exiting.");
}

/// Sends jobs to a lazily spawned [`PackWorker`].
///
/// With `reuse` set, the worker survives between calls. Otherwise each call gets a fresh worker
/// that is released as soon as the job is queued.
pub struct WorkerExecutor {
    worker: Option<PackWorker>,
    reuse: bool,
}

impl WorkerExecutor {
    pub fn new(reuse: bool) -> Self {
        Self {
            worker: None,
            reuse,
        }
    }

    /// Returns `true` if a worker is currently held for the next call.
    pub fn has_worker(&self) -> bool {
        self.worker.is_some()
    }

    fn ensure_worker(&mut self) -> Result<&PackWorker> {
        if self.worker.as_ref().is_some_and(|w| !w.is_alive()) {
            warn!("Packing worker exited unexpectedly; a new one will be spawned.");
            self.worker = None;
        }
        if self.worker.is_none() {
            self.worker = Some(PackWorker::spawn()?);
        }
        self.worker
            .as_ref()
            .ok_or_else(|| Error::Dispatch("worker unavailable".into()))
    }
}

impl PackExecutor for WorkerExecutor {
    fn execute(&mut self, job: PackJob) -> PackTask {
        let task = match self.ensure_worker().and_then(|worker| worker.submit(job)) {
            Ok(rx) => PackTask::pending(rx),
            Err(e) => {
                warn!("Failed to dispatch packing job: {}.", e);
                self.worker = None;
                PackTask::failed(e)
            }
        };

        if !self.reuse && self.worker.take().is_some() {
            debug!("Released packing worker after dispatch.");
        }

        task
    }

    fn is_offloaded(&self) -> bool {
        true
    }
}
