use std::collections::HashMap;
use std::path::Path;

use thiserror::Error;

use crate::{
    io::{load_wav, DecodeError},
    render::RenderError,
    synth::{
        instrument::{DrumInstrument, Instrument, SampleInstrument},
        voice::PlaybackVoice,
    },
    voices::VoiceKind,
};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("no instrument registered as `{0}`")]
    UnknownInstrument(String),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("expected {expected}Hz audio, got {actual}Hz")]
    SampleRateMismatch { expected: u32, actual: u32 },
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Instruments addressable by string id.
#[derive(Default)]
pub struct Registry {
    instruments: HashMap<String, Box<dyn Instrument>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the five drum voices under their names.
    pub fn with_drums() -> Self {
        let mut registry = Self::new();
        for kind in VoiceKind::ALL {
            registry.register(kind.name(), DrumInstrument::new(kind));
        }
        registry
    }

    /// Register `instrument`, replacing anything already under `id`.
    pub fn register<I: Instrument + 'static>(&mut self, id: impl Into<String>, instrument: I) {
        let id = id.into();
        log::debug!("registering instrument `{id}`");
        self.instruments.insert(id, Box::new(instrument));
    }

    /// Decode a WAV file and register it as a one-shot sample.
    pub fn register_wav(
        &mut self,
        id: impl Into<String>,
        path: impl AsRef<Path>,
        expected_rate: u32,
    ) -> Result<(), RegistryError> {
        let audio = load_wav(path)?;
        if audio.sample_rate != expected_rate {
            return Err(RegistryError::SampleRateMismatch {
                expected: expected_rate,
                actual: audio.sample_rate,
            });
        }
        self.register(id, SampleInstrument::new(audio));
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&dyn Instrument> {
        self.instruments.get(id).map(|inst| &**inst)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.instruments.contains_key(id)
    }

    /// Trigger the instrument registered under `id`.
    pub fn trigger(&self, id: &str, bpm: u32, sample_rate: u32) -> Result<PlaybackVoice, RegistryError> {
        let instrument = self
            .get(id)
            .ok_or_else(|| RegistryError::UnknownInstrument(id.to_string()))?;
        Ok(instrument.new_voice(bpm, sample_rate)?)
    }

    /// Registered ids in sorted order.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.instruments.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}
