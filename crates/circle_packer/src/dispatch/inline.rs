use crate::dispatch::{PackExecutor, PackJob, PackTask};

/// Runs jobs synchronously on the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct InlineExecutor;

impl PackExecutor for InlineExecutor {
    fn execute(&mut self, job: PackJob) -> PackTask {
        PackTask::ready(job.run())
    }
}
