//! Signal-shaping primitives shared by the drum voices.
//!
//! Each primitive is tiny and allocation-free; voices create fresh instances
//! at the start of every render so no state leaks from one hit to the next.
//! Internal math runs in `f64` and is narrowed to `f32` only when a voice
//! writes its output frame.

/// Sum of time-shifted exponential pulses (multi-clap transients).
pub mod burst;
/// Exponential decay envelope.
pub mod envelope;
/// One-pole low-pass and its complementary high-pass.
pub mod filter;
/// Per-call white noise source.
pub mod noise;
/// Phase-accumulating sine with a linear pitch sweep.
pub mod oscillator;

pub use burst::Burst;
pub use envelope::ExpDecay;
pub use filter::OnePole;
pub use noise::NoiseSource;
pub use oscillator::SweptSine;
