//! The five drum voices.
//!
//! Each voice is a fixed signal-flow graph over the shaping primitives in
//! [`crate::dsp`]. Its constants are public so hosts and tests can inspect
//! them, but they are not runtime parameters.
//!
//! Every renderer follows the same contract:
//! - the buffer must be exactly `sample_count` long, checked before any write
//! - `sample_count == 0` is a no-op
//! - a fresh noise source is created for the call and dropped after it
//! - if the noise source cannot start, nothing is written and
//!   [`RenderError::NoiseInit`] is returned
//!
//! # Example
//!
//! ```
//! use drumkit::voices::{self, VoiceKind};
//! use drumkit::RenderParams;
//!
//! let mut out = vec![0.0f32; 4_410];
//! voices::render_kick(&mut out, 44_100, 4_410)?;
//!
//! // Reproducible render with a fixed noise seed
//! let params = RenderParams::new(44_100, 4_410).with_seed(7);
//! VoiceKind::Snare.render(&mut out, &params)?;
//! # Ok::<(), drumkit::RenderError>(())
//! ```

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    dsp::NoiseSource,
    render::{RenderError, RenderParams, TimeBase},
};

pub mod clap;
pub mod hihat;
pub mod kick;
pub mod snare;
pub mod tom;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VoiceKind {
    Kick,
    Snare,
    HiHat,
    Tom,
    Clap,
}

impl VoiceKind {
    pub const ALL: [VoiceKind; 5] = [
        VoiceKind::Kick,
        VoiceKind::Snare,
        VoiceKind::HiHat,
        VoiceKind::Tom,
        VoiceKind::Clap,
    ];

    pub fn name(self) -> &'static str {
        match self {
            VoiceKind::Kick => "kick",
            VoiceKind::Snare => "snare",
            VoiceKind::HiHat => "hihat",
            VoiceKind::Tom => "tom",
            VoiceKind::Clap => "clap",
        }
    }

    /// The time convention this voice's envelopes run on.
    pub fn time_base(self) -> TimeBase {
        match self {
            VoiceKind::Kick => kick::TIME_BASE,
            VoiceKind::Snare => snare::TIME_BASE,
            VoiceKind::HiHat => hihat::TIME_BASE,
            VoiceKind::Tom => tom::TIME_BASE,
            VoiceKind::Clap => clap::TIME_BASE,
        }
    }

    pub fn render(self, out: &mut [f32], params: &RenderParams) -> Result<(), RenderError> {
        self.render_with(out, params, RenderParams::noise)
    }

    /// Render with a caller-chosen way of starting the noise source.
    ///
    /// Validation runs first, then `start_noise`; either failing leaves `out`
    /// untouched.
    fn render_with<F>(
        self,
        out: &mut [f32],
        params: &RenderParams,
        start_noise: F,
    ) -> Result<(), RenderError>
    where
        F: FnOnce(&RenderParams) -> Result<NoiseSource, RenderError>,
    {
        log::debug!(
            "rendering {} ({} samples @ {}Hz)",
            self.name(),
            params.sample_count,
            params.sample_rate
        );

        params.validate(out)?;
        if params.sample_count == 0 {
            return Ok(());
        }
        let noise = start_noise(params)?;

        match self {
            VoiceKind::Kick => kick::fill(out, params, noise),
            VoiceKind::Snare => snare::fill(out, params, noise),
            VoiceKind::HiHat => hihat::fill(out, params, noise),
            VoiceKind::Tom => tom::fill(out, params, noise),
            VoiceKind::Clap => clap::fill(out, params, noise),
        }
        Ok(())
    }
}

impl fmt::Display for VoiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
#[error("unknown voice `{0}` (expected kick, snare, hihat, tom or clap)")]
pub struct UnknownVoice(pub String);

impl FromStr for VoiceKind {
    type Err = UnknownVoice;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kick" => Ok(VoiceKind::Kick),
            "snare" => Ok(VoiceKind::Snare),
            "hihat" | "hi-hat" => Ok(VoiceKind::HiHat),
            "tom" => Ok(VoiceKind::Tom),
            "clap" => Ok(VoiceKind::Clap),
            _ => Err(UnknownVoice(s.to_string())),
        }
    }
}

pub fn render_kick(out: &mut [f32], sample_rate: u32, sample_count: usize) -> Result<(), RenderError> {
    VoiceKind::Kick.render(out, &RenderParams::new(sample_rate, sample_count))
}

pub fn render_snare(out: &mut [f32], sample_rate: u32, sample_count: usize) -> Result<(), RenderError> {
    VoiceKind::Snare.render(out, &RenderParams::new(sample_rate, sample_count))
}

pub fn render_hihat(out: &mut [f32], sample_rate: u32, sample_count: usize) -> Result<(), RenderError> {
    VoiceKind::HiHat.render(out, &RenderParams::new(sample_rate, sample_count))
}

pub fn render_tom(out: &mut [f32], sample_rate: u32, sample_count: usize) -> Result<(), RenderError> {
    VoiceKind::Tom.render(out, &RenderParams::new(sample_rate, sample_count))
}

pub fn render_clap(out: &mut [f32], sample_rate: u32, sample_count: usize) -> Result<(), RenderError> {
    VoiceKind::Clap.render(out, &RenderParams::new(sample_rate, sample_count))
}
