use crate::{
    io::DecodedAudio,
    render::{RenderError, RenderParams},
    synth::voice::PlaybackVoice,
    voices::VoiceKind,
};

/// Something that can be triggered to produce a one-shot voice.
///
/// This is the "instrument design" layer: the sound is fixed once, and
/// every trigger renders a fresh hit sized for the current tempo.
pub trait Instrument: Send + Sync {
    fn new_voice(&self, bpm: u32, sample_rate: u32) -> Result<PlaybackVoice, RenderError>;
}

impl<F> Instrument for F
where
    F: Fn(u32, u32) -> Result<PlaybackVoice, RenderError> + Send + Sync,
{
    fn new_voice(&self, bpm: u32, sample_rate: u32) -> Result<PlaybackVoice, RenderError> {
        self(bpm, sample_rate)
    }
}

/// Frames in `beats` beats at `bpm`, truncated.
pub fn beat_samples(bpm: u32, sample_rate: u32, beats: f64) -> Result<usize, RenderError> {
    if bpm == 0 {
        return Err(RenderError::InvalidTempo);
    }
    let seconds_per_beat = 60.0 / bpm as f64;
    Ok((sample_rate as f64 * seconds_per_beat * beats) as usize)
}

/// One of the synthesized drum voices, sized in beats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrumInstrument {
    kind: VoiceKind,
    seed: Option<u64>,
}

impl DrumInstrument {
    pub fn new(kind: VoiceKind) -> Self {
        Self { kind, seed: None }
    }

    /// Every hit uses the same noise.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn kind(&self) -> VoiceKind {
        self.kind
    }

    /// Hit length in beats.
    pub fn beats(&self) -> f64 {
        match self.kind {
            VoiceKind::Kick | VoiceKind::Snare | VoiceKind::Tom => 0.5,
            VoiceKind::Clap => 0.25,
            VoiceKind::HiHat => 0.125,
        }
    }
}

impl Instrument for DrumInstrument {
    fn new_voice(&self, bpm: u32, sample_rate: u32) -> Result<PlaybackVoice, RenderError> {
        let sample_count = beat_samples(bpm, sample_rate, self.beats())?;
        let mut params = RenderParams::new(sample_rate, sample_count);
        if let Some(seed) = self.seed {
            params = params.with_seed(seed);
        }

        let mut buffer = vec![0.0f32; sample_count];
        self.kind.render(&mut buffer, &params)?;
        Ok(PlaybackVoice::new(buffer))
    }
}

/// A decoded sample played back once at its own length.
#[derive(Debug, Clone)]
pub struct SampleInstrument {
    audio: DecodedAudio,
}

impl SampleInstrument {
    pub fn new(audio: DecodedAudio) -> Self {
        Self { audio }
    }

    pub fn sample_rate(&self) -> u32 {
        self.audio.sample_rate
    }

    pub fn frames(&self) -> usize {
        self.audio.frames()
    }
}

impl Instrument for SampleInstrument {
    fn new_voice(&self, _bpm: u32, _sample_rate: u32) -> Result<PlaybackVoice, RenderError> {
        Ok(PlaybackVoice::new(self.audio.samples.clone()))
    }
}
