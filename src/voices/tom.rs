//! Tom drum voice.
//!
//! A pitched drum between kick and snare: a long, falling sine with a little
//! dull noise underneath for the stick impact.
//!
//! # How It Works
//!
//! 1. Sine body sweeps 300Hz → 100Hz under a slow e^(-3t)
//! 2. Noise through a one-pole low-pass (a = 0.8) takes the edge off
//! 3. The dulled noise enters at 20% under e^(-6t)
//! 4. Output = body + 0.2 · noise
//!
//! The wide sweep gives the tom its "boing"; the slow body decay lets it ring.

use crate::{
    dsp::{ExpDecay, NoiseSource, OnePole, SweptSine},
    render::{RenderError, RenderParams, TimeBase},
};

pub const TIME_BASE: TimeBase = TimeBase::Progress;

pub const SWEEP_START_HZ: f64 = 300.0;
pub const SWEEP_END_HZ: f64 = 100.0;
pub const BODY_DECAY: f64 = 3.0;

pub const SMOOTHING: f64 = 0.8;
pub const NOISE_DECAY: f64 = 6.0;
pub const NOISE_LEVEL: f64 = 0.2;

/// Render a tom into `out`.
pub fn render(out: &mut [f32], params: &RenderParams) -> Result<(), RenderError> {
    super::VoiceKind::Tom.render(out, params)
}

pub(crate) fn fill(out: &mut [f32], params: &RenderParams, mut noise: NoiseSource) {
    let mut body = SweptSine::new(SWEEP_START_HZ, SWEEP_END_HZ, params.sample_rate);
    let body_env = ExpDecay::new(BODY_DECAY);
    let mut smoother = OnePole::new(SMOOTHING);
    let noise_env = ExpDecay::new(NOISE_DECAY);

    for (i, sample) in out.iter_mut().enumerate() {
        let t = params.time_at(i, TIME_BASE);
        let thud = smoother.lowpass(noise.next_sample() as f64);

        let tone = body.next_sample(t) * body_env.level(t);
        *sample = (tone + NOISE_LEVEL * thud * noise_env.level(t)) as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::TAU;

    #[test]
    fn matches_reference_formula() {
        let count = 300;
        let params = RenderParams::new(22_050, count).with_seed(17);
        let mut out = vec![0.0f32; count];
        render(&mut out, &params).unwrap();

        let mut noise = NoiseSource::seeded(17);
        let (mut lp, mut phase) = (0.0f64, 0.0f64);
        for (i, &actual) in out.iter().enumerate() {
            let t = i as f64 / count as f64;
            lp = lp * 0.8 + noise.next_sample() as f64 * 0.2;
            phase += TAU * (300.0 - 200.0 * t) / 22_050.0;
            let expected = (phase.sin() * (-3.0 * t).exp() + 0.2 * lp * (-6.0 * t).exp()) as f32;
            assert!((actual - expected).abs() < 1e-6, "frame {i}");
        }
    }

    #[test]
    fn body_dominates_the_noise() {
        // |lowpass| <= 1, so noise never adds more than 0.2
        let params = RenderParams::new(44_100, 22_050).with_seed(2);
        let mut out = vec![0.0f32; 22_050];
        render(&mut out, &params).unwrap();
        assert!(out.iter().all(|s| s.abs() <= 1.2 + 1e-6));
    }
}
