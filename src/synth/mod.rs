// Purpose: triggering drum hits and mixing them offline
// This layer sits above the voices and never touches an audio device

pub mod instrument;
pub mod mixer;
pub mod registry;
pub mod voice;

pub use instrument::{beat_samples, DrumInstrument, Instrument, SampleInstrument};
pub use mixer::Mixer;
pub use registry::{Registry, RegistryError};
pub use voice::{PlaybackVoice, VoiceState};
