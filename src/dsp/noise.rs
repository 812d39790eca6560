use rand::rngs::{OsRng, SmallRng};
use rand::{Rng, SeedableRng, TryRngCore};
use thiserror::Error;

/*
White Noise Source
==================

Every voice draws exactly one noise sample per output frame. The samples are
independent and uniform over [-1, 1], which gives a flat spectrum ("white").

    amplitude
      1 ┤ ·    ·        ·   ·
        │   ·      ·  ·        ·
      0 ┼───────·──────────·─────→ frame
        │ ·  ·     ·     ·   ·
     -1 ┤      ·       ·

Ownership
---------

A source is created at the top of a render call and dropped when the call
returns. Nothing is stored globally, so two renders on two threads never
share generator state. Seeding from the OS can fail (no entropy device,
sandboxed process); that failure is reported instead of panicking and the
calling voice writes nothing.
*/

pub const NOISE_MIN: f32 = -1.0;
pub const NOISE_MAX: f32 = 1.0;

#[derive(Debug, Error)]
pub enum NoiseError {
    #[error("could not gather OS entropy: {0}")]
    Entropy(String),
}

pub struct NoiseSource {
    rng: SmallRng,
}

impl NoiseSource {
    /// Seed from operating system entropy.
    pub fn from_entropy() -> Result<Self, NoiseError> {
        Self::try_from_rng(&mut OsRng)
    }

    /// Seed from any fallible entropy source.
    pub fn try_from_rng<R: TryRngCore>(source: &mut R) -> Result<Self, NoiseError> {
        let rng =
            SmallRng::try_from_rng(source).map_err(|err| NoiseError::Entropy(err.to_string()))?;
        Ok(Self { rng })
    }

    /// Deterministic source; the same seed yields the same stream.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    #[inline]
    pub fn next_sample(&mut self) -> f32 {
        self.rng.random_range(NOISE_MIN..=NOISE_MAX)
    }

    pub fn fill(&mut self, buffer: &mut [f32]) {
        for sample in buffer.iter_mut() {
            *sample = self.next_sample();
        }
    }
}
