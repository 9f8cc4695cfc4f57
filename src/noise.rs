use crate::error::ArgumentError;
use rand::Rng;
use std::{fmt, str::FromStr};

pub use brown::BrownNoiseState;
pub use minor::NoteTable;
pub use pink::PinkNoiseState;

pub mod brown;
pub mod minor;
pub mod pink;
pub mod white;

/// One channel of audio samples at `SAMPLE_RATE`.
pub type SampleBuffer = Vec<f32>;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NoiseType {
    White,
    Brown,
    Pink,
    Minor,
}

impl NoiseType {
    pub const fn all() -> [NoiseType; 4] {
        [NoiseType::White, NoiseType::Brown, NoiseType::Pink, NoiseType::Minor]
    }

    pub fn name(&self) -> &'static str {
        match self {
            NoiseType::White => "White",
            NoiseType::Brown => "Brown",
            NoiseType::Pink => "Pink",
            NoiseType::Minor => "Minor",
        }
    }
}

impl fmt::Display for NoiseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for NoiseType {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "white" => Ok(NoiseType::White),
            "brown" => Ok(NoiseType::Brown),
            "pink" => Ok(NoiseType::Pink),
            "minor" => Ok(NoiseType::Minor),
            _ => Err(ArgumentError::UnknownNoiseType(s.to_string())),
        }
    }
}

/// Generates `length` samples of the given noise type.
///
/// The result depends only on `noise_type`, `length` and the state of `rng`.
pub fn generate<R: Rng + ?Sized>(noise_type: NoiseType, length: usize, rng: &mut R) -> SampleBuffer {
    let mut samples = vec![0.0; length];
    match noise_type {
        NoiseType::White => white::fill(&mut samples, rng),
        NoiseType::Brown => brown::fill(&mut samples, rng),
        NoiseType::Pink => pink::fill(&mut samples, rng),
        NoiseType::Minor => minor::fill(&mut samples, rng),
    }
    samples
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::constants::{NOTE_LENGTH, SAMPLE_RATE};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_parse() {
        assert_eq!("white".parse::<NoiseType>().unwrap(), NoiseType::White);
        assert_eq!("Brown".parse::<NoiseType>().unwrap(), NoiseType::Brown);
        assert_eq!("PINK".parse::<NoiseType>().unwrap(), NoiseType::Pink);
        assert_eq!("minor".parse::<NoiseType>().unwrap(), NoiseType::Minor);
        assert!(matches!(
            "red".parse::<NoiseType>(),
            Err(ArgumentError::UnknownNoiseType(name)) if name == "red"
        ));
    }

    #[test]
    fn test_display_round_trip() {
        for noise_type in NoiseType::all() {
            assert_eq!(noise_type.to_string().parse::<NoiseType>().unwrap(), noise_type);
        }
    }

    #[test]
    fn test_generate_white() {
        let samples = generate(NoiseType::White, 44100, &mut StdRng::seed_from_u64(1));
        assert_eq!(samples.len(), 44100);
        assert!(samples.iter().all(|s| (-1.0..=1.0).contains(s)));
    }

    #[test]
    fn test_generate_minor_single_note() {
        let length = (NOTE_LENGTH * SAMPLE_RATE) as usize;
        let samples = generate(NoiseType::Minor, length, &mut StdRng::seed_from_u64(1));
        assert_eq!(samples.len(), 88200);
        assert_eq!(samples[0], 0.0);
        assert!(samples.iter().filter(|&&s| s != 0.0).count() > length / 2);
    }

    #[test]
    fn test_generate_is_seeded() {
        for noise_type in NoiseType::all() {
            let a = generate(noise_type, 200_000, &mut StdRng::seed_from_u64(42));
            let b = generate(noise_type, 200_000, &mut StdRng::seed_from_u64(42));
            assert_eq!(a, b);
        }
    }
}
