//! Kick drum voice.
//!
//! A sine body with a falling pitch, plus a burst of raw noise at the very
//! start for the beater "click".
//!
//! # How It Works
//!
//! 1. Sine oscillator sweeps 150Hz → 50Hz across the hit
//! 2. Body envelope: e^(-5t), t = progress through the hit
//! 3. Click: unfiltered noise under a very sharp e^(-40t)
//! 4. Output = body + click, added without clamping
//!
//! By the last frame the body is down to e^-5 ≈ 0.0067 and the click is
//! effectively gone, so the hit ends near silence whatever its length.

use crate::{
    dsp::{ExpDecay, NoiseSource, SweptSine},
    render::{RenderError, RenderParams, TimeBase},
};

pub const TIME_BASE: TimeBase = TimeBase::Progress;

pub const SWEEP_START_HZ: f64 = 150.0;
pub const SWEEP_END_HZ: f64 = 50.0;
pub const BODY_DECAY: f64 = 5.0;
pub const CLICK_DECAY: f64 = 40.0;

/// Render a kick drum into `out`.
pub fn render(out: &mut [f32], params: &RenderParams) -> Result<(), RenderError> {
    super::VoiceKind::Kick.render(out, params)
}

pub(crate) fn fill(out: &mut [f32], params: &RenderParams, mut noise: NoiseSource) {
    let mut body = SweptSine::new(SWEEP_START_HZ, SWEEP_END_HZ, params.sample_rate);
    let body_env = ExpDecay::new(BODY_DECAY);
    let click_env = ExpDecay::new(CLICK_DECAY);

    for (i, sample) in out.iter_mut().enumerate() {
        let t = params.time_at(i, TIME_BASE);
        let n = noise.next_sample() as f64;

        let tone = body.next_sample(t) * body_env.level(t);
        let click = n * click_env.level(t);
        *sample = (tone + click) as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    #[test]
    fn first_frame_is_click_plus_first_phase_step() {
        let params = RenderParams::new(44_100, 4_410).with_seed(5);
        let mut out = vec![0.0f32; 4_410];
        render(&mut out, &params).unwrap();

        let n0 = NoiseSource::seeded(5).next_sample() as f64;
        let expected = (TAU * 150.0 / 44_100.0).sin() + n0;
        assert!((out[0] as f64 - expected).abs() < 1e-6);
    }

    #[test]
    fn tail_is_near_silent() {
        let params = RenderParams::new(44_100, 4_410).with_seed(11);
        let mut out = vec![0.0f32; 4_410];
        render(&mut out, &params).unwrap();

        let floor = (-BODY_DECAY * 4_409.0 / 4_410.0).exp();
        assert!(
            (out[4_409].abs() as f64) <= floor * 1.05,
            "tail {} exceeds envelope floor {floor}",
            out[4_409]
        );
    }
}
