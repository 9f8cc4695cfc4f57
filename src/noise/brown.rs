use crate::util::gaussian;
use rand::Rng;

/// Step size applied to each gaussian draw.
const GAIN: f64 = 0.02;
/// Pulls the walk back towards zero.
const DAMPING: f64 = 1.02;

/// Damped random walk: a first-order low-pass of gaussian noise.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrownNoiseState {
    previous: f64,
}

impl BrownNoiseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the walk by one gaussian draw `g` and returns the new value.
    pub fn step(&mut self, g: f64) -> f64 {
        let current = (self.previous + GAIN * g) / DAMPING;
        self.previous = current;
        current
    }
}

pub fn fill<R: Rng + ?Sized>(samples: &mut [f32], rng: &mut R) {
    let mut state = BrownNoiseState::new();
    for sample in samples.iter_mut() {
        *sample = state.step(gaussian(rng)) as f32;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_step() {
        let mut state = BrownNoiseState::new();
        assert_eq!(state.step(1.0), 0.02 / 1.02);
        assert_eq!(state.step(0.0), (0.02 / 1.02) / 1.02);
        assert_eq!(state.step(-3.0), ((0.02 / 1.02) / 1.02 - 0.02 * 3.0) / 1.02);
    }

    #[test]
    fn test_matches_recurrence() {
        let mut samples = vec![0.0; 10_000];
        fill(&mut samples, &mut StdRng::seed_from_u64(11));

        // Replay the same gaussian draws through the recurrence by hand
        let mut rng = StdRng::seed_from_u64(11);
        let mut previous = 0.0f64;
        for &sample in &samples {
            let current = (previous + 0.02 * gaussian(&mut rng)) / 1.02;
            assert_eq!(sample, current as f32);
            previous = current;
        }
    }

    #[test]
    fn test_stays_bounded() {
        let mut samples = vec![0.0; 500_000];
        fill(&mut samples, &mut StdRng::seed_from_u64(12));
        assert!(samples.iter().all(|s| s.abs() < 1.0));
    }
}
