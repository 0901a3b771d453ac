//! Radix-2 FFT engine with serial, recursive, and task-parallel execution
//! paths.
//!
//! The [`dft`] reference transform is the O(N²) correctness oracle. The fast
//! paths — [`fft_recursive`], [`fft_iterative`], and the two parallel
//! schedulings [`fft_parallel_groups`] and [`fft_parallel_chunks`] — all
//! require a power-of-two length and transform the signal in place. [`fft`]
//! dispatches between the serial and parallel paths based on input size.

mod complex;
mod dft;
mod error;
mod iterative;
mod observer;
mod parallel;
mod pool;
mod recursive;

pub use complex::Complex64;
pub use dft::dft;
pub use error::FftError;
pub use iterative::{bit_reverse, fft_iterative, fft_iterative_observed};
pub use observer::{StageObserver, StageTimings};
pub use parallel::{
    fft_parallel_chunks, fft_parallel_chunks_observed, fft_parallel_groups,
    fft_parallel_groups_observed,
};
pub use pool::WorkerPool;
pub use recursive::fft_recursive;

/// Largest input length the dispatcher still transforms serially.
///
/// Below this, task submission and stage barriers cost more than the
/// parallel butterfly work saves. A tuning constant, not a derived value.
pub const PARALLEL_THRESHOLD: usize = 1 << 11;

/// Worker count of the pool the dispatcher builds for large inputs.
pub const DEFAULT_WORKERS: usize = 4;

/// Transforms `data` in place, choosing the execution path by input size.
///
/// Runs [`fft_iterative`] for lengths up to [`PARALLEL_THRESHOLD`], otherwise
/// builds a [`WorkerPool`] of [`DEFAULT_WORKERS`] workers and runs
/// [`fft_parallel_chunks`]. Callers that transform repeatedly above the
/// threshold should keep their own pool and call the parallel entry points
/// directly.
pub fn fft(data: &mut [Complex64]) -> Result<(), FftError> {
    if data.len() <= PARALLEL_THRESHOLD {
        fft_iterative(data)
    } else {
        let pool = WorkerPool::new(DEFAULT_WORKERS)?;
        fft_parallel_chunks(data, &pool)
    }
}
