//! Clap voice.
//!
//! Several hands clapping a few milliseconds apart, built from raw noise
//! gated by a burst of three spikes.
//!
//! # How It Works
//!
//! 1. White noise, unfiltered
//! 2. Burst: spikes at 0ms, 20ms and 40ms, each e^(-100·|t - t_j|)
//! 3. Overall envelope e^(-6t) lets the later claps come in quieter
//!
//! Unlike the other voices, `t` here is elapsed seconds, not progress, so
//! the clap spacing stays 20ms no matter how long the render is.

use crate::{
    dsp::{Burst, ExpDecay, NoiseSource},
    render::{RenderError, RenderParams, TimeBase},
};

pub const TIME_BASE: TimeBase = TimeBase::Seconds;

/// Clap onsets in seconds.
pub const CLAP_OFFSETS: [f64; 3] = [0.0, 0.02, 0.04];
pub const CLAP_SHARPNESS: f64 = 100.0;
pub const DECAY: f64 = 6.0;

/// Render a hand clap into `out`.
pub fn render(out: &mut [f32], params: &RenderParams) -> Result<(), RenderError> {
    super::VoiceKind::Clap.render(out, params)
}

pub(crate) fn fill(out: &mut [f32], params: &RenderParams, mut noise: NoiseSource) {
    let burst = Burst::new(&CLAP_OFFSETS, CLAP_SHARPNESS);
    let env = ExpDecay::new(DECAY);

    for (i, sample) in out.iter_mut().enumerate() {
        let t = params.time_at(i, TIME_BASE);
        let n = noise.next_sample() as f64;
        *sample = (n * burst.level(t) * env.level(t)) as f32;
    }
}
