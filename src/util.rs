use rand::Rng;
use std::f64::consts::PI;

/// Converts a number of semitones above A4 to a frequency in Hz.
pub fn hz_from_steps(steps: i32) -> f64 {
    440.0 * 2.0f64.powf(steps as f64 / 12.0)
}

/// Draws a uniformly distributed value between -1 and 1.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(-1.0..1.0)
}

/// Draws a value from the standard normal distribution using the Box-Muller transform.
pub fn gaussian<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    // `gen` yields [0, 1), so flip it to keep the logarithm finite
    let u1 = 1.0 - rng.gen::<f64>();
    let u2 = rng.gen::<f64>();
    (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_hz_from_steps() {
        assert_eq!(hz_from_steps(0), 440.0);
        assert_eq!(hz_from_steps(12), 880.0);
        assert_eq!(hz_from_steps(24), 1760.0);
        assert!((hz_from_steps(7) - 659.255).abs() < 0.001);
    }

    #[test]
    fn test_uniform_range() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!((0..10_000).map(|_| uniform(&mut rng)).all(|v| (-1.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_gaussian_moments() {
        let mut rng = StdRng::seed_from_u64(2);
        let n = 100_000;
        let draws: Vec<f64> = (0..n).map(|_| gaussian(&mut rng)).collect();
        let mean = draws.iter().sum::<f64>() / n as f64;
        let variance = draws.iter().map(|g| (g - mean).powi(2)).sum::<f64>() / n as f64;
        assert!(draws.iter().all(|g| g.is_finite()));
        assert!(mean.abs() < 0.02);
        assert!((variance - 1.0).abs() < 0.03);
    }
}
