//! Per-call render parameters and the error type every voice returns.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dsp::noise::{NoiseError, NoiseSource};

/// Where the per-call noise generator takes its seed from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoiseSeed {
    /// Fresh OS entropy for every call.
    #[default]
    Entropy,
    /// A fixed seed; identical params render identical buffers.
    Fixed(u64),
}

/// Parameters for a single render call.
///
/// Constructed by the caller per invocation and consumed once:
/// - sample_rate: frames per second (e.g., 44100)
/// - sample_count: frames to produce, must match the output buffer
/// - seed: noise seeding for this call
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderParams {
    pub sample_rate: u32,
    pub sample_count: usize,
    pub seed: NoiseSeed,
}

impl RenderParams {
    pub fn new(sample_rate: u32, sample_count: usize) -> Self {
        Self {
            sample_rate,
            sample_count,
            seed: NoiseSeed::Entropy,
        }
    }

    /// Make the render reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = NoiseSeed::Fixed(seed);
        self
    }

    /// Duration of the render in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.sample_count as f64 / self.sample_rate as f64
    }

    /// Check the parameters against the output buffer before any write.
    pub fn validate(&self, out: &[f32]) -> Result<(), RenderError> {
        if self.sample_rate == 0 {
            return Err(RenderError::InvalidSampleRate);
        }
        if out.len() != self.sample_count {
            return Err(RenderError::BufferLength {
                expected: self.sample_count,
                actual: out.len(),
            });
        }
        Ok(())
    }

    /// Build the call-local noise generator.
    pub(crate) fn noise(&self) -> Result<NoiseSource, RenderError> {
        let source = match self.seed {
            NoiseSeed::Entropy => NoiseSource::from_entropy(),
            NoiseSeed::Fixed(seed) => Ok(NoiseSource::seeded(seed)),
        };
        source.map_err(|err| {
            log::warn!("noise source failed to initialize: {err}");
            RenderError::NoiseInit(err)
        })
    }

    /// Time value for frame `index` under the given convention.
    #[inline]
    pub fn time_at(&self, index: usize, base: TimeBase) -> f64 {
        match base {
            TimeBase::Progress => index as f64 / self.sample_count as f64,
            TimeBase::Seconds => index as f64 / self.sample_rate as f64,
        }
    }
}

/// How a voice derives its time variable from the frame index.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBase {
    /// index / sample_count, runs 0 → 1 across the sound
    Progress,
    /// index / sample_rate, elapsed seconds
    Seconds,
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("sample rate must be positive")]
    InvalidSampleRate,
    #[error("output buffer holds {actual} samples, expected {expected}")]
    BufferLength { expected: usize, actual: usize },
    #[error("noise source failed to initialize")]
    NoiseInit(#[source] NoiseError),
    #[error("tempo must be positive")]
    InvalidTempo,
}
