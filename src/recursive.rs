use crate::{Complex64, FftError, error::ensure_power_of_two, iterative::stage_rotation};

/// Radix-2 Cooley-Tukey FFT via divide and conquer.
///
/// Deinterleaves the signal into its even- and odd-indexed halves, transforms
/// both recursively and combines them with a twiddle walk that starts at one
/// and advances by the stage rotation. Recursion depth is log2(N) and every
/// level allocates two fresh half-size buffers; the iterative path is the
/// allocation-free production variant, this one is kept for clarity and as a
/// second implementation to test against.
///
/// Returns [`FftError::NonPowerOfTwoLength`] (before touching the signal)
/// unless the length is a power of two. Length 1 is a no-op.
pub fn fft_recursive(data: &mut [Complex64]) -> Result<(), FftError> {
    ensure_power_of_two(data.len())?;
    recurse(data);
    Ok(())
}

fn recurse(data: &mut [Complex64]) {
    let n = data.len();
    if n <= 1 {
        return;
    }
    let half = n / 2;

    // Deinterleave, not first-half/second-half: radix-2 splits on index parity.
    let mut even: Vec<Complex64> = data.iter().step_by(2).copied().collect();
    let mut odd: Vec<Complex64> = data.iter().skip(1).step_by(2).copied().collect();

    recurse(&mut even);
    recurse(&mut odd);

    let wn = stage_rotation(n);
    let mut w = Complex64::one();
    for i in 0..half {
        let t = w.mul(&odd[i]);
        data[i] = even[i].add(&t);
        data[i + half] = even[i].sub(&t);
        w = w.mul(&wn);
    }
}
