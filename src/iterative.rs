use core::f64::consts::PI;
use std::time::Instant;

use crate::{Complex64, FftError, StageObserver, error::ensure_power_of_two};

/// Performs the bit-reversal permutation on `data` in place.
///
/// The element at index `i` moves to the index formed by reversing the
/// log2(N)-bit binary representation of `i`. A single forward scan keeps the
/// reversed index in a running counter updated by binary carries, and only
/// swaps when the reversed index is ahead of the scan index so no pair moves
/// twice. Applying the permutation twice restores the original order.
///
/// Must run exactly once before the butterfly stages of the iterative and
/// parallel transforms.
pub fn bit_reverse(data: &mut [Complex64]) {
    let n = data.len();

    let mut reversed = 0usize;
    for index in 0..n {
        if reversed > index {
            data.swap(index, reversed);
        }

        // Binary-carry increment of the reversed counter: clear set bits from
        // the top down, then set the first clear one.
        let mut bit = n / 2;
        while bit >= 2 && reversed >= bit {
            reversed -= bit;
            bit /= 2;
        }
        reversed += bit;
    }
}

/// Base rotation of a combining stage of size `s`.
///
/// Positive sign: the fast paths combine with the rotation conjugate to the
/// reference transform's twiddle definition. All of them share this
/// convention, so their outputs agree with each other element-wise.
pub(crate) fn stage_rotation(s: usize) -> Complex64 {
    let angle = 2.0 * PI / (s as f64);
    Complex64::new(angle.cos(), angle.sin())
}

/// Runs the butterfly loop over one block of the current stage.
///
/// `block.len()` is the stage size and `wn` the stage rotation. The twiddle
/// walk restarts at one for every block and advances by multiplication, which
/// accumulates rounding across the block; that drift against the reference
/// transform is expected and bounded, not corrected.
pub(crate) fn butterfly_block(block: &mut [Complex64], wn: Complex64) {
    let half = block.len() / 2;

    let mut w = Complex64::one();
    for j in 0..half {
        let t = w.mul(&block[j + half]);
        let u = block[j];
        block[j] = u.add(&t);
        block[j + half] = u.sub(&t);
        w = w.mul(&wn);
    }
}

/// In-place iterative radix-2 FFT.
///
/// Bit-reverses the input, then combines blocks bottom-up with stage sizes
/// doubling from 2 to N. Allocation-free; (N/2)·log2(N) butterflies in total.
/// This is the production serial path and the baseline the parallel
/// schedulings must reproduce.
///
/// Returns [`FftError::NonPowerOfTwoLength`] (before touching the signal)
/// unless the length is a power of two. Length 1 is a no-op.
pub fn fft_iterative(data: &mut [Complex64]) -> Result<(), FftError> {
    fft_iterative_observed(data, &mut ())
}

/// [`fft_iterative`] reporting each stage's wall-clock duration to `observer`.
pub fn fft_iterative_observed(
    data: &mut [Complex64],
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
        for block in data.chunks_exact_mut(s) {
            butterfly_block(block, wn);
        }
        observer.stage_complete(s, started.elapsed());

        s *= 2;
    }

    Ok(())
}
