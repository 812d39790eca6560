//! Multi-impulse burst shaping.
//!
//! A hand clap is several claps a few milliseconds apart. Each one is a
//! two-sided exponential spike centred on its offset; the burst is their sum:
//!
//! ```text
//! burst(t) = Σ_j e^(-κ·|t - t_j|)
//! ```
//!
//! With κ = 100 and offsets 20 ms apart, neighbouring spikes overlap only
//! slightly, so the result has one clear peak per offset.

#[derive(Debug, Clone, Copy)]
pub struct Burst<'a> {
    offsets: &'a [f64],
    sharpness: f64,
}

impl<'a> Burst<'a> {
    pub const fn new(offsets: &'a [f64], sharpness: f64) -> Self {
        Self { offsets, sharpness }
    }

    #[inline]
    pub fn level(&self, t: f64) -> f64 {
        self.offsets
            .iter()
            .map(|&offset| (-self.sharpness * (t - offset).abs()).exp())
            .sum()
    }
}
