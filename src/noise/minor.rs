use crate::{
    constants::{NOTE_LENGTH, NOTE_TABLE_SIZE, SAMPLE_RATE, VIBRATO_DEPTH, VIBRATO_RATE},
    util::hz_from_steps,
};
use rand::Rng;
use std::f64::consts::PI;

/// Number of samples in one note.
pub const WINDOW_LEN: usize = (NOTE_LENGTH * SAMPLE_RATE) as usize;

/// Frequencies to pick notes from, drawn fresh for every pass.
#[derive(Clone, Debug)]
pub struct NoteTable {
    notes: [f64; NOTE_TABLE_SIZE],
}

impl NoteTable {
    /// Draws notes from the 2nd to 4th octave, each a step of 0 to 6 within the octave.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            notes: std::array::from_fn(|_| {
                let octave = rng.gen_range(2..5);
                let step = rng.gen_range(0..7);
                hz_from_steps(octave + step)
            }),
        }
    }

    pub fn notes(&self) -> &[f64] {
        &self.notes
    }

    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.notes[rng.gen_range(0..self.notes.len())]
    }
}

/// Fills each whole note window of `samples` with an enveloped, vibrato-shaped sine.
/// A trailing remainder shorter than one window is left untouched.
pub fn fill<R: Rng + ?Sized>(samples: &mut [f32], rng: &mut R) {
    let table = NoteTable::random(rng);
    for window in samples.chunks_exact_mut(WINDOW_LEN) {
        render_note(window, table.pick(rng));
    }
}

/// Synthesises a single note of `frequency` Hz across the whole of `window`.
pub fn render_note(window: &mut [f32], frequency: f64) {
    let sample_rate = SAMPLE_RATE as f64;
    let omega = 2.0 * PI * frequency / sample_rate;
    let len = window.len() as f64;

    for (j, sample) in window.iter_mut().enumerate() {
        let j = j as f64;
        let vibrato = 1.0 + VIBRATO_DEPTH * (2.0 * PI * VIBRATO_RATE * j / sample_rate).sin();
        // Half-sine fade in and out over the note
        let envelope = (PI * j / len).sin();
        *sample = (envelope * vibrato * (j * omega).sin()) as f32;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_note_table() {
        let table = NoteTable::random(&mut StdRng::seed_from_u64(8));
        assert_eq!(table.notes().len(), 16);
        let allowed: Vec<f64> = (2..=10).map(hz_from_steps).collect();
        assert!(table.notes().iter().all(|f| allowed.contains(f)));
    }

    #[test]
    fn test_tail_is_untouched() {
        let mut samples = vec![0.0; 2 * WINDOW_LEN + 1000];
        fill(&mut samples, &mut StdRng::seed_from_u64(9));
        assert!(samples[2 * WINDOW_LEN..].iter().all(|&s| s == 0.0));
        assert!(samples[..2 * WINDOW_LEN].iter().any(|&s| s != 0.0));
    }

    #[test]
    fn test_envelope_edges() {
        let mut samples = vec![0.0; 3 * WINDOW_LEN];
        fill(&mut samples, &mut StdRng::seed_from_u64(10));
        for window in samples.chunks_exact(WINDOW_LEN) {
            assert_eq!(window[0], 0.0);
            // Amplitude fades towards zero at the end of the window
            assert!(window[WINDOW_LEN - 1].abs() < 1e-3);
            assert!(window.iter().all(|s| s.abs() <= 1.0 + VIBRATO_DEPTH as f32));
        }
    }

    #[test]
    fn test_constant_frequency_within_window() {
        let frequency = hz_from_steps(5);
        let mut window = vec![0.0; WINDOW_LEN];
        render_note(&mut window, frequency);

        // Count sign changes of the carrier over the whole window
        let crossings = window.windows(2).filter(|w| (w[0] < 0.0) != (w[1] < 0.0)).count() as f64;
        let expected = 2.0 * frequency * NOTE_LENGTH as f64;
        assert!((crossings - expected).abs() <= 2.0);
    }

    #[test]
    fn test_too_short_for_a_note() {
        let mut samples = vec![0.0; WINDOW_LEN - 1];
        fill(&mut samples, &mut StdRng::seed_from_u64(11));
        assert!(samples.iter().all(|&s| s == 0.0));
    }
}
