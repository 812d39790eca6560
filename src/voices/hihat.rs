//! Hi-hat voice (closed).
//!
//! A tight, bright burst of noise with no tonal part at all.
//!
//! # How It Works
//!
//! 1. Noise through a heavy one-pole low-pass (a = 0.95)
//! 2. High-pass = noise minus that low-pass, keeping only the fizz
//! 3. Very sharp envelope e^(-40t) for the short "tss"

use crate::{
    dsp::{ExpDecay, NoiseSource, OnePole},
    render::{RenderError, RenderParams, TimeBase},
};

pub const TIME_BASE: TimeBase = TimeBase::Progress;

pub const SMOOTHING: f64 = 0.95;
pub const DECAY: f64 = 40.0;

/// Render a closed hi-hat into `out`.
pub fn render(out: &mut [f32], params: &RenderParams) -> Result<(), RenderError> {
    super::VoiceKind::HiHat.render(out, params)
}

pub(crate) fn fill(out: &mut [f32], params: &RenderParams, mut noise: NoiseSource) {
    let mut split = OnePole::new(SMOOTHING);
    let env = ExpDecay::new(DECAY);

    for (i, sample) in out.iter_mut().enumerate() {
        let t = params.time_at(i, TIME_BASE);
        let fizz = split.split(noise.next_sample() as f64).highpass;
        *sample = (fizz * env.level(t)) as f32;
    }
}
