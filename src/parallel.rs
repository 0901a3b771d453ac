use std::time::Instant;

use crate::{
    Complex64, FftError, StageObserver, WorkerPool,
    error::ensure_power_of_two,
    iterative::{bit_reverse, butterfly_block, stage_rotation},
};

/// Number of chunks the coarse-grained scheduling aims for per stage.
const CHUNK_TARGET: usize = 4;

/// Fine-grained parallel FFT: one task per butterfly block.
///
/// Reuses the iterative stage structure, but submits every block of a stage
/// to the worker pool. Blocks of one stage cover disjoint index ranges, so
/// the tasks share no writes and need no locking; the scope barrier between
/// stages is what makes the next stage's reads safe.
///
/// The per-index arithmetic is identical to [`crate::fft_iterative`], so the
/// output matches the serial result for any worker count.
pub fn fft_parallel_groups(data: &mut [Complex64], pool: &WorkerPool) -> Result<(), FftError> {
    fft_parallel_groups_observed(data, pool, &mut ())
}

/// [`fft_parallel_groups`] reporting each stage's wall-clock duration
/// (barrier included) to `observer`.
pub fn fft_parallel_groups_observed(
    data: &mut [Complex64],
    pool: &WorkerPool,
    observer: &mut impl StageObserver,
) -> Result<(), FftError> {
    ensure_power_of_two(data.len())?;

    let n = data.len();
    if n == 1 {
        return Ok(());
    }

    bit_reverse(data);

    let mut s = 2;
    while s <= n {
        let wn = stage_rotation(s);

        let started = Instant::now();
        pool.run(|scope| {
            for block in data.chunks_exact_mut(s) {
                scope.spawn(move |_| butterfly_block(block, wn));
            }
        });
        observer.stage_complete(s, started.elapsed());

        s *= 2;
    }

    Ok(())
}

/// Coarse-grained parallel FFT: a handful of contiguous chunks per stage.
///
/// Like [`fft_parallel_groups`] but submits at most four tasks per stage
/// (the chunk target), each running the butterfly loops of a contiguous run of
/// blocks. The chunk length is derived per stage as a whole number of
/// blocks, so a chunk never straddles a butterfly block no matter how large
/// the stage gets; once a stage has fewer blocks than the target, one task
/// per block is submitted.
pub fn fft_parallel_chunks(data: &mut [Complex64], pool: &WorkerPool) -> Result<(), FftError> {
    fft_parallel_chunks_observed(data, pool, &mut ())
}

/// [`fft_parallel_chunks`] reporting each stage's wall-clock duration
/// (barrier included) to `observer`.
pub fn fft_parallel_chunks_observed(
    data: &mut [Complex64],
    pool: &WorkerPool,
    observer: &mut impl StageObserver,
) -> Result<(), FftError> {
    ensure_power_of_two(data.len())?;

    let n = data.len();
    if n == 1 {
        return Ok(());
    }

    bit_reverse(data);

    let mut s = 2;
    while s <= n {
        let wn = stage_rotation(s);

        // Whole blocks per chunk keeps every chunk boundary stage-aligned.
        let blocks = n / s;
        let chunk_len = blocks.div_ceil(CHUNK_TARGET.min(blocks)) * s;

        let started = Instant::now();
        pool.run(|scope| {
            for chunk in data.chunks_mut(chunk_len) {
                scope.spawn(move |_| {
                    for block in chunk.chunks_exact_mut(s) {
                        butterfly_block(block, wn);
                    }
                });
            }
        });
        observer.stage_complete(s, started.elapsed());

        s *= 2;
    }

    Ok(())
}
