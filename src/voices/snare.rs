//! Snare drum voice.
//!
//! A tonal drum-head body under a wash of noise standing in for the wires
//! stretched across the bottom head.
//!
//! # How It Works
//!
//! 1. Noise is split by a one-pole pair (a = 0.7) into low and high bands
//! 2. The bands are mixed back 50/50 and shaped by e^(-6t)
//! 3. Sine body sweeps 200Hz → 140Hz under e^(-4t)
//! 4. Output = 0.7 · noise + 0.3 · body
//!
//! The noise dominates; the body gives the hit its pitch.

use crate::{
    dsp::{ExpDecay, NoiseSource, OnePole, SweptSine},
    render::{RenderError, RenderParams, TimeBase},
};

pub const TIME_BASE: TimeBase = TimeBase::Progress;

pub const SMOOTHING: f64 = 0.7;
pub const LOW_BAND_WEIGHT: f64 = 0.5;
pub const HIGH_BAND_WEIGHT: f64 = 0.5;
pub const NOISE_DECAY: f64 = 6.0;

pub const SWEEP_START_HZ: f64 = 200.0;
pub const SWEEP_END_HZ: f64 = 140.0;
pub const BODY_DECAY: f64 = 4.0;

pub const NOISE_MIX: f64 = 0.7;
pub const BODY_MIX: f64 = 0.3;

/// Render a snare drum into `out`.
pub fn render(out: &mut [f32], params: &RenderParams) -> Result<(), RenderError> {
    super::VoiceKind::Snare.render(out, params)
}

pub(crate) fn fill(out: &mut [f32], params: &RenderParams, mut noise: NoiseSource) {
    let mut split = OnePole::new(SMOOTHING);
    let noise_env = ExpDecay::new(NOISE_DECAY);
    let mut body = SweptSine::new(SWEEP_START_HZ, SWEEP_END_HZ, params.sample_rate);
    let body_env = ExpDecay::new(BODY_DECAY);

    for (i, sample) in out.iter_mut().enumerate() {
        let t = params.time_at(i, TIME_BASE);
        let bands = split.split(noise.next_sample() as f64);

        let rattle = (bands.highpass * HIGH_BAND_WEIGHT + bands.lowpass * LOW_BAND_WEIGHT)
            * noise_env.level(t);
        let tone = body.next_sample(t) * body_env.level(t);
        *sample = (rattle * NOISE_MIX + tone * BODY_MIX) as f32;
    }
}
