//! Pseudo-random sample source for the demo charts.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::{
    AUTORANGE_CYCLE, AUTORANGE_LARGE_SAMPLES, AUTORANGE_SMALL_ITERATIONS, AUTORANGE_SMALL_SAMPLES, CLIPPING_SAMPLES,
    FIXED_SAMPLES,
};

/// One new sample per chart.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Samples {
    pub fixed: f32,
    pub clipping: f32,
    pub autorange: f32,
}

/// Generates the next value for each chart every frame.
///
/// The autorange chart alternates between a small and a large value range so
/// its bounds visibly grow and shrink.
pub struct DemoFeed {
    rng: StdRng,
    iteration: u32,
}

impl DemoFeed {
    /// Seeded feeds are reproducible; without a seed the OS entropy source is
    /// used.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng, iteration: 0 }
    }

    pub fn next_samples(&mut self) -> Samples {
        let fixed = self.rng.random_range(FIXED_SAMPLES);
        let clipping = self.rng.random_range(CLIPPING_SAMPLES);
        let autorange = if self.iteration < AUTORANGE_SMALL_ITERATIONS {
            self.rng.random_range(AUTORANGE_SMALL_SAMPLES)
        } else {
            self.rng.random_range(AUTORANGE_LARGE_SAMPLES)
        };

        self.iteration += 1;
        if self.iteration > AUTORANGE_CYCLE {
            self.iteration = 0;
        }

        Samples {
            fixed,
            clipping,
            autorange,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_stay_in_configured_ranges() {
        let mut feed = DemoFeed::new(Some(7));
        for _ in 0..500 {
            let samples = feed.next_samples();
            assert!(FIXED_SAMPLES.contains(&samples.fixed));
            assert!(CLIPPING_SAMPLES.contains(&samples.clipping));
            assert!(AUTORANGE_LARGE_SAMPLES.contains(&samples.autorange));
        }
    }

    #[test]
    fn test_small_phase_uses_small_range() {
        let mut feed = DemoFeed::new(Some(11));
        for _ in 0..AUTORANGE_SMALL_ITERATIONS {
            assert!(AUTORANGE_SMALL_SAMPLES.contains(&feed.next_samples().autorange));
        }
        assert_eq!(feed.iteration, AUTORANGE_SMALL_ITERATIONS);
    }

    #[test]
    fn test_iteration_wraps_after_cycle() {
        let mut feed = DemoFeed::new(Some(3));
        for _ in 0..AUTORANGE_CYCLE {
            feed.next_samples();
        }
        assert_eq!(feed.iteration, AUTORANGE_CYCLE);
        feed.next_samples();
        assert_eq!(feed.iteration, 0);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = DemoFeed::new(Some(42));
        let mut b = DemoFeed::new(Some(42));
        for _ in 0..50 {
            assert_eq!(a.next_samples(), b.next_samples());
        }
    }
}
