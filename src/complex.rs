/// Simple complex number struct
#[derive(Clone, Copy, Debug, Default)]
#[repr(C)]
pub struct Complex64 {
    pub re: f64,
    pub im: f64,
}

impl Complex64 {
    #[inline(always)]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    #[inline(always)]
    pub const fn zero() -> Self {
        Self { re: 0.0, im: 0.0 }
    }

    /// Multiplicative identity, the starting value of every twiddle walk.
    #[inline(always)]
    pub const fn one() -> Self {
        Self { re: 1.0, im: 0.0 }
    }

    #[inline(always)]
    pub const fn conj(&self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    #[inline(always)]
    pub const fn add(&self, o: &Self) -> Self {
        Self {
            re: self.re + o.re,
            im: self.im + o.im,
        }
    }

    #[inline(always)]
    pub const fn sub(&self, o: &Self) -> Self {
        Self {
            re: self.re - o.re,
            im: self.im - o.im,
        }
    }

    /// Complex product `(ac − bd, ad + bc)`.
    ///
    /// Every transform routes its arithmetic through this exact formula, so
    /// the rounding behavior stays comparable across algorithms.
    #[inline(always)]
    pub const fn mul(&self, o: &Self) -> Self {
        Self {
            re: self.re * o.re - self.im * o.im,
            im: self.re * o.im + self.im * o.re,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mul_formula() {
        let a = Complex64::new(1.0, 2.0);
        let b = Complex64::new(3.0, -4.0);
        let c = a.mul(&b);
        assert_eq!(c.re, 11.0);
        assert_eq!(c.im, 2.0);
    }

    #[test]
    fn test_unit_rotation() {
        // i * i == -1
        let i = Complex64::new(0.0, 1.0);
        let c = i.mul(&i);
        assert_eq!(c.re, -1.0);
        assert_eq!(c.im, 0.0);
    }

    #[test]
    fn test_conj_is_involution() {
        let a = Complex64::new(0.5, -1.5);
        let back = a.conj().conj();
        assert_eq!(back.re, a.re);
        assert_eq!(back.im, a.im);
    }
}
