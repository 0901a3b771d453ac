use std::time::Duration;

/// Receives per-stage wall-clock timing from the observed transform variants.
///
/// The unit type is the no-op observer, so the plain entry points carry no
/// instrumentation of their own.
pub trait StageObserver {
    /// Called once per stage, after the stage has finished. For the parallel
    /// paths this includes the stage barrier.
    fn stage_complete(&mut self, stage_size: usize, elapsed: Duration);
}

impl StageObserver for () {
    #[inline(always)]
    fn stage_complete(&mut self, _stage_size: usize, _elapsed: Duration) {}
}

/// Observer that records every stage duration, smallest stage first.
#[derive(Clone, Debug, Default)]
pub struct StageTimings {
    stages: Vec<(usize, Duration)>,
}

impl StageTimings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded `(stage_size, duration)` pairs in completion order.
    pub fn stages(&self) -> &[(usize, Duration)] {
        &self.stages
    }
}

impl StageObserver for StageTimings {
    fn stage_complete(&mut self, stage_size: usize, elapsed: Duration) {
        self.stages.push((stage_size, elapsed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Complex64, fft_iterative_observed};

    #[test]
    fn test_one_record_per_stage() {
        let mut timings = StageTimings::new();
        let mut data = vec![Complex64::new(1.0, 0.0); 64];

        fft_iterative_observed(&mut data, &mut timings).unwrap();

        // 64 = 2^6, so stage sizes 2, 4, 8, 16, 32, 64.
        let sizes: Vec<usize> = timings.stages().iter().map(|(s, _)| *s).collect();
        assert_eq!(sizes, vec![2, 4, 8, 16, 32, 64]);
    }

    #[test]
    fn test_length_one_has_no_stages() {
        let mut timings = StageTimings::new();
        let mut data = vec![Complex64::one()];

        fft_iterative_observed(&mut data, &mut timings).unwrap();
        assert!(timings.stages().is_empty());
    }
}
