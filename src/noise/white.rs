use crate::util::uniform;
use rand::Rng;

/// Fills `samples` with independent uniform draws between -1 and 1.
pub fn fill<R: Rng + ?Sized>(samples: &mut [f32], rng: &mut R) {
    for sample in samples.iter_mut() {
        *sample = uniform(rng) as f32;
    }
}
