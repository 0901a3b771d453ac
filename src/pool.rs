use crate::FftError;

/// Fixed-size worker pool the parallel schedulings dispatch butterfly work to.
///
/// Wraps a rayon thread pool with an exact worker count. Work is submitted by
/// spawning into a scope, and the end of the scope is the await-all barrier
/// the stage synchronization relies on. One pool can be reused across any
/// number of transform invocations.
pub struct WorkerPool {
    pool: rayon::ThreadPool,
}

impl WorkerPool {
    /// Builds a pool with exactly `workers` threads.
    pub fn new(workers: usize) -> Result<Self, FftError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .map_err(|_| FftError::WorkerPool)?;
        Ok(Self { pool })
    }

    /// Number of workers in the pool.
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Runs `op` inside a scope on the pool and blocks until every task it
    /// spawned has completed.
    ///
    /// Tasks run to completion and cannot be cancelled. A panicking task
    /// resumes its panic on the caller after the scope has drained, so a
    /// failed stage aborts the whole transform invocation instead of leaving
    /// a half-written signal behind silently.
    pub(crate) fn run<'scope, OP>(&self, op: OP)
    where
        OP: FnOnce(&rayon::Scope<'scope>) + Send,
    {
        self.pool.scope(op);
    }
}
