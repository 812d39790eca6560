use crate::synth::voice::PlaybackVoice;

struct ScheduledVoice {
    start: u64,
    voice: PlaybackVoice,
}

/// Offline mixer for triggered one-shot voices.
///
/// Voices are scheduled relative to the mixer's current position. Every
/// rendered frame is the sum of the voices that have started, clamped to
/// [-1, 1]. Finished voices are dropped as soon as their last frame is mixed.
#[derive(Default)]
pub struct Mixer {
    voices: Vec<ScheduledVoice>,
    position: u64,
}

impl Mixer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start `voice` after `delay_samples` frames from now.
    pub fn schedule(&mut self, voice: PlaybackVoice, delay_samples: usize) {
        let start = self.position + delay_samples as u64;
        log::trace!("scheduling {} frames at {start}", voice.len());
        self.voices.push(ScheduledVoice { start, voice });
    }

    #[inline]
    fn next_frame(&mut self) -> f32 {
        let position = self.position;
        let mut sum = 0.0f32;

        self.voices.retain_mut(|scheduled| {
            if position < scheduled.start {
                return true;
            }
            match scheduled.voice.next_sample() {
                Some(sample) => {
                    sum += sample;
                    !scheduled.voice.is_finished()
                }
                None => false,
            }
        });

        self.position += 1;
        sum.clamp(-1.0, 1.0)
    }

    /// Mix the next `out.len()` frames.
    pub fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = self.next_frame();
        }
    }

    /// Fill `out` with little-endian 16-bit mono frames.
    ///
    /// Returns the number of bytes written; a trailing odd byte is left alone.
    pub fn read_pcm16(&mut self, out: &mut [u8]) -> usize {
        let frames = out.len() / 2;
        for chunk in out.chunks_exact_mut(2) {
            let value = (self.next_frame() * i16::MAX as f32) as i16;
            chunk.copy_from_slice(&value.to_le_bytes());
        }
        frames * 2
    }

    /// Frames mixed so far.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Voices scheduled or still sounding.
    pub fn active_voices(&self) -> usize {
        self.voices.len()
    }

    /// Drop every pending voice; the position keeps running.
    pub fn clear(&mut self) {
        self.voices.clear();
    }
}
