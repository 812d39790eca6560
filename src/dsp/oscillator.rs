use std::f64::consts::TAU;

/*
Swept Sine Oscillator
=====================

Drum bodies are sines whose pitch falls while they ring. The frequency is
a straight line from `start_hz` at t = 0 to `end_hz` at t = 1:

    freq(t) = start_hz + (end_hz - start_hz) · t

Phase Accumulation
------------------

The phase is advanced every frame rather than computed from scratch:

    phase += 2π · freq(t) / sample_rate
    out    = sin(phase)

Computing `sin(2π·freq(t)·n/sr)` directly would jump whenever freq changes,
because the whole history of the sweep would be re-scaled by the new
frequency. Accumulating keeps the waveform continuous.

  Hz
  150 ┤‾‾──__
      │      ‾‾──__          kick: 150 → 50
      │            ‾‾──__
   50 ┤                  ‾‾
      └─────────────────────→ t
      0                     1

The phase is advanced before the sine is taken, so frame zero already sits
one step into the cycle.
*/

#[derive(Debug, Clone)]
pub struct SweptSine {
    start_hz: f64,
    end_hz: f64,
    sample_rate: f64,
    phase: f64,
}

impl SweptSine {
    pub fn new(start_hz: f64, end_hz: f64, sample_rate: u32) -> Self {
        Self {
            start_hz,
            end_hz,
            sample_rate: sample_rate as f64,
            phase: 0.0,
        }
    }

    #[inline]
    pub fn frequency(&self, t: f64) -> f64 {
        self.start_hz + (self.end_hz - self.start_hz) * t
    }

    /// Advance one frame at time `t` and return the sine.
    #[inline]
    pub fn next_sample(&mut self, t: f64) -> f64 {
        self.phase += TAU * self.frequency(t) / self.sample_rate;
        self.phase.sin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_sweeps_linearly() {
        let osc = SweptSine::new(200.0, 140.0, 44_100);
        assert_eq!(osc.frequency(0.0), 200.0);
        assert!((osc.frequency(0.5) - 170.0).abs() < 1e-12);
        assert!((osc.frequency(1.0) - 140.0).abs() < 1e-12);
    }

    #[test]
    fn constant_sweep_matches_plain_sine() {
        let sample_rate = 48_000;
        let mut osc = SweptSine::new(440.0, 440.0, sample_rate);

        for n in 1..=128 {
            let actual = osc.next_sample(0.0);
            let expected = (TAU * 440.0 * n as f64 / sample_rate as f64).sin();
            assert!(
                (actual - expected).abs() < 1e-9,
                "frame {n}: expected {expected}, got {actual}"
            );
        }
    }

    #[test]
    fn phase_advances_before_first_sample() {
        let mut osc = SweptSine::new(150.0, 50.0, 44_100);
        let first = osc.next_sample(0.0);
        let expected = (TAU * 150.0 / 44_100.0).sin();
        assert!((first - expected).abs() < 1e-12);
    }

    #[test]
    fn sweep_stays_continuous() {
        let sample_rate = 44_100;
        let count = 4_410;
        let mut osc = SweptSine::new(300.0, 100.0, sample_rate);
        let mut prev = 0.0;
        // Largest per-frame step of a unit sine at 300 Hz
        let max_step = TAU * 300.0 / sample_rate as f64 + 1e-9;

        for i in 0..count {
            let sample = osc.next_sample(i as f64 / count as f64);
            assert!((sample - prev).abs() <= max_step, "jump at frame {i}");
            prev = sample;
        }
    }
}
