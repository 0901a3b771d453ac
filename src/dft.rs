use core::f64::consts::PI;

use crate::Complex64;

/// Direct O(N²) discrete Fourier transform.
///
/// Computes `output[k] = Σ input[n]·exp(-2πi·k·n/N)` by plain summation,
/// recomputing every twiddle factor from its angle. Accepts any length and
/// never mutates the input. This is the correctness oracle the fast paths
/// are validated against.
///
/// The fast paths combine with the opposite rotation sign, so on real input
/// their output is the element-wise conjugate of this transform.
pub fn dft(input: &[Complex64]) -> Vec<Complex64> {
    let n = input.len();
    let mut output = Vec::with_capacity(n);

    for k in 0..n {
        let mut sum = Complex64::zero();
        for (i, value) in input.iter().enumerate() {
            let angle = -2.0 * PI * (k as f64) * (i as f64) / (n as f64);
            let w = Complex64::new(angle.cos(), angle.sin());
            sum = sum.add(&value.mul(&w));
        }
        output.push(sum);
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_empty_input() {
        assert!(dft(&[]).is_empty());
    }

    #[test]
    fn test_single_value_is_identity() {
        let output = dft(&[Complex64::new(3.5, -1.25)]);
        assert_eq!(output.len(), 1);
        assert!((output[0].re - 3.5).abs() < EPSILON);
        assert!((output[0].im + 1.25).abs() < EPSILON);
    }

    #[test]
    fn test_impulse_spreads_flat() {
        // A unit impulse at index 0 transforms to all ones.
        let mut input = vec![Complex64::zero(); 8];
        input[0] = Complex64::one();

        let output = dft(&input);
        for (k, bin) in output.iter().enumerate() {
            assert!(
                (bin.re - 1.0).abs() < EPSILON && bin.im.abs() < EPSILON,
                "Bin {k} is not flat: ({}, {})",
                bin.re,
                bin.im
            );
        }
    }

    #[test]
    fn test_dc_signal() {
        // A constant signal puts all energy in bin 0.
        let input = vec![Complex64::new(0.5, 0.0); 16];
        let output = dft(&input);

        assert!((output[0].re - 8.0).abs() < EPSILON);
        assert!(output[0].im.abs() < EPSILON);
        for (k, bin) in output.iter().enumerate().skip(1) {
            assert!(
                bin.re.abs() < EPSILON && bin.im.abs() < EPSILON,
                "Bin {k} carries energy: ({}, {})",
                bin.re,
                bin.im
            );
        }
    }

    #[test]
    fn test_non_power_of_two_length_is_accepted() {
        // The reference transform has no power-of-two restriction.
        let input = vec![Complex64::new(1.0, 0.0); 6];
        let output = dft(&input);
        assert_eq!(output.len(), 6);
        assert!((output[0].re - 6.0).abs() < EPSILON);
    }
}
