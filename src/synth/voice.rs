#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceState {
    Playing,  // Frames remain
    Finished, // Every frame has been read
}

/// A one-shot voice: a pre-rendered buffer read out one frame at a time.
#[derive(Debug, Clone)]
pub struct PlaybackVoice {
    buffer: Vec<f32>,
    position: usize,
}

impl PlaybackVoice {
    pub fn new(buffer: Vec<f32>) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    /// Next frame, or `None` once the buffer is exhausted.
    #[inline]
    pub fn next_sample(&mut self) -> Option<f32> {
        let sample = self.buffer.get(self.position).copied()?;
        self.position += 1;
        Some(sample)
    }

    pub fn state(&self) -> VoiceState {
        if self.position >= self.buffer.len() {
            VoiceState::Finished
        } else {
            VoiceState::Playing
        }
    }

    pub fn is_finished(&self) -> bool {
        self.state() == VoiceState::Finished
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len().saturating_sub(self.position)
    }

    pub fn samples(&self) -> &[f32] {
        &self.buffer
    }
}

impl Iterator for PlaybackVoice {
    type Item = f32;

    fn next(&mut self) -> Option<f32> {
        self.next_sample()
    }
}
