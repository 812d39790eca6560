/*
Exponential Decay Envelope
==========================

Every voice shapes its loudness with

    env(t) = e^(-k·t)

where `k` sets the sharpness and `t` is the voice's time variable (progress
0 → 1 or elapsed seconds, chosen per voice).

  Level
    1.0 ┐╲
        │ ╲╲            k = 3   (tom body, long ring)
        │  ╲ ╲__
        │   ╲   ‾‾‾──___
        │    ╲__         ‾‾‾───___
    0.0 └───────‾‾‾‾────────────────→ t
             k = 40  (hi-hat, kick click)

There is no attack stage: percussion starts at full level on frame zero.
The envelope is stateless, so evaluating it at any t is independent of
every other frame.
*/

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpDecay {
    rate: f64,
}

impl ExpDecay {
    pub const fn new(rate: f64) -> Self {
        Self { rate }
    }

    #[inline]
    pub fn level(&self, t: f64) -> f64 {
        (-self.rate * t).exp()
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Render envelope values for evenly spaced `t` starting at zero.
    pub fn render(&self, buffer: &mut [f32], dt: f64) {
        for (i, sample) in buffer.iter_mut().enumerate() {
            *sample = self.level(i as f64 * dt) as f32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_full_level() {
        assert_eq!(ExpDecay::new(6.0).level(0.0), 1.0);
    }

    #[test]
    fn matches_natural_exponential() {
        let env = ExpDecay::new(5.0);
        assert!((env.level(1.0) - (-5.0f64).exp()).abs() < 1e-15);
        assert!((env.level(1.0) - 0.006_737_947).abs() < 1e-9);
    }

    #[test]
    fn decays_monotonically() {
        let env = ExpDecay::new(40.0);
        let mut buffer = vec![0.0f32; 64];
        env.render(&mut buffer, 1.0 / 64.0);

        assert!(buffer.windows(2).all(|w| w[1] < w[0]));
        assert!(buffer[63] < 1e-16);
    }

    #[test]
    fn sharper_rate_falls_faster() {
        let soft = ExpDecay::new(3.0);
        let hard = ExpDecay::new(40.0);
        assert!(hard.level(0.1) < soft.level(0.1));
    }
}
