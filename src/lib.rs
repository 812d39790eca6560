pub mod dsp; // Noise, filters, envelopes, oscillators
pub mod io;
pub mod render;
pub mod synth; // Instruments, playback and offline mixing
pub mod voices;

pub use render::{NoiseSeed, RenderError, RenderParams, TimeBase};
pub use voices::{render_clap, render_hihat, render_kick, render_snare, render_tom, VoiceKind};
