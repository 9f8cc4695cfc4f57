use crate::{constants::PINK_SLOTS, util::uniform};
use rand::Rng;

/// Rolling slots of a Voss-McCartney style pink noise approximation.
///
/// Unlike the textbook scheme, each sample replaces one slot chosen uniformly at
/// random and emits the difference between the old and the new slot value.
#[derive(Clone, Copy, Debug)]
pub struct PinkNoiseState {
    slots: [f64; PINK_SLOTS],
}

impl PinkNoiseState {
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            slots: std::array::from_fn(|_| uniform(rng)),
        }
    }

    pub fn slots(&self) -> &[f64; PINK_SLOTS] {
        &self.slots
    }

    /// Produces the next sample, in the range -2 to 2.
    pub fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> f64 {
        let k = rng.gen_range(0..PINK_SLOTS);
        let output = self.slots[k];
        self.slots[k] = uniform(rng);
        output - self.slots[k]
    }
}

pub fn fill<R: Rng + ?Sized>(samples: &mut [f32], rng: &mut R) {
    let mut state = PinkNoiseState::new(rng);
    for sample in samples.iter_mut() {
        *sample = state.next(rng) as f32;
    }
}
