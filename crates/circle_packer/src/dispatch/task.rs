//! Future-shaped handle to a packing result.
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use async_channel::Receiver;
use futures_lite::Stream;

use crate::error::{Error, Result};
use crate::packing::PackResult;

/// The eventual outcome of a [`crate::dispatch::PackJob`].
///
/// Inline runs produce an already-resolved task. Offloaded runs resolve once the worker replies,
/// or fail with [`Error::Dispatch`] if the worker goes away without replying.
#[must_use = "a PackTask does nothing unless awaited or waited on"]
pub struct PackTask {
    state: TaskState,
}

enum TaskState {
    Ready(Option<Result<PackResult>>),
    Pending(Pin<Box<Receiver<Result<PackResult>>>>),
}

impl PackTask {
    pub(crate) fn ready(result: Result<PackResult>) -> Self {
        Self {
            state: TaskState::Ready(Some(result)),
        }
    }

    pub(crate) fn failed(error: Error) -> Self {
        Self::ready(Err(error))
    }

    pub(crate) fn pending(rx: Receiver<Result<PackResult>>) -> Self {
        Self {
            state: TaskState::Pending(Box::pin(rx)),
        }
    }

    /// Returns `true` once awaiting the task would not block.
    pub fn is_finished(&self) -> bool {
        match &self.state {
            TaskState::Ready(_) => true,
            TaskState::Pending(rx) => !rx.is_empty() || rx.is_closed(),
        }
    }

    /// Blocks the current thread until the result is available.
    pub fn wait(self) -> Result<PackResult> {
        futures_lite::future::block_on(self)
    }
}

impl Future for PackTask {
    type Output = Result<PackResult>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.state {
            TaskState::Ready(slot) => match slot.take() {
                Some(result) => Poll::Ready(result),
                None => Poll::Ready(Err(Error::Dispatch(
                    "pack task polled after completion".into(),
                ))),
            },
            TaskState::Pending(rx) => match rx.as_mut().poll_next(cx) {
                Poll::Ready(Some(result)) => Poll::Ready(result),
                Poll::Ready(None) => Poll::Ready(Err(Error::Dispatch(
                    "worker stopped before replying".into(),
                ))),
                Poll::Pending => Poll::Pending,
            },
        }
    }
}
