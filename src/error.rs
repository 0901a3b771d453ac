/// Errors the transform entry points can return.
#[derive(Copy, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum FftError {
    /// Input length is not a power of two (this includes the empty input).
    NonPowerOfTwoLength,
    /// The worker pool could not be built.
    WorkerPool,
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NonPowerOfTwoLength => "Input length is not a power of two".fmt(f),
            Self::WorkerPool => "The worker pool could not be built".fmt(f),
        }
    }
}

impl core::fmt::Debug for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self, f)
    }
}

impl std::error::Error for FftError {}

/// Checks the power-of-two length precondition.
///
/// Runs before any element of the signal is touched, so a violation leaves
/// the input exactly as the caller passed it.
pub(crate) fn ensure_power_of_two(len: usize) -> Result<(), FftError> {
    if len.is_power_of_two() {
        Ok(())
    } else {
        Err(FftError::NonPowerOfTwoLength)
    }
}
