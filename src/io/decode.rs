//! WAV decoding into mono `f32` buffers.
//!
//! Decoding is independent of synthesis: it reads a whole file, downmixes
//! to mono and hands back an owned buffer with the file's own sample rate.
//! Failures carry a [`ResultCode`] that hosts can match on or turn into a
//! message with [`result_description`].

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Stable result codes for decode operations.
///
/// Non-success codes are negative so they can share a channel with a
/// positive frame count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ResultCode {
    Success = 0,
    Error = -1,
    InvalidArgs = -2,
    OutOfMemory = -4,
    DoesNotExist = -7,
    InvalidFile = -10,
    IoError = -20,
    NoFrames = -34,
    FormatNotSupported = -200,
}

impl ResultCode {
    pub const ALL: [ResultCode; 9] = [
        ResultCode::Success,
        ResultCode::Error,
        ResultCode::InvalidArgs,
        ResultCode::OutOfMemory,
        ResultCode::DoesNotExist,
        ResultCode::InvalidFile,
        ResultCode::IoError,
        ResultCode::NoFrames,
        ResultCode::FormatNotSupported,
    ];

    pub fn code(self) -> i32 {
        self as i32
    }

    /// Unknown values map to the generic [`ResultCode::Error`].
    pub fn from_code(code: i32) -> Self {
        Self::ALL
            .into_iter()
            .find(|rc| rc.code() == code)
            .unwrap_or(ResultCode::Error)
    }

    pub fn description(self) -> &'static str {
        match self {
            ResultCode::Success => "No error",
            ResultCode::Error => "Unknown error",
            ResultCode::InvalidArgs => "Invalid argument",
            ResultCode::OutOfMemory => "Out of memory",
            ResultCode::DoesNotExist => "Resource does not exist",
            ResultCode::InvalidFile => "Invalid file",
            ResultCode::IoError => "Input/output error",
            ResultCode::NoFrames => "Audio stream contains no frames",
            ResultCode::FormatNotSupported => "Format not supported",
        }
    }
}

/// Describe any raw result code.
pub fn result_description(code: i32) -> &'static str {
    ResultCode::from_code(code).description()
}

/// hound header errors that describe a valid but unsupported encoding.
const UNSUPPORTED_LAYOUTS: [&str; 2] = [
    "bits per sample is not 32",
    "sample bits exceeds size of sample",
];

#[derive(Debug, Error)]
#[error("failed to decode {}: {}", .path.display(), .code.description())]
pub struct DecodeError {
    code: ResultCode,
    path: PathBuf,
    #[source]
    source: Option<hound::Error>,
}

impl DecodeError {
    fn new(code: ResultCode, path: &Path) -> Self {
        Self {
            code,
            path: path.to_path_buf(),
            source: None,
        }
    }

    fn from_hound(err: hound::Error, path: &Path) -> Self {
        let code = match &err {
            hound::Error::IoError(io_err) => match io_err.kind() {
                io::ErrorKind::NotFound => ResultCode::DoesNotExist,
                io::ErrorKind::UnexpectedEof | io::ErrorKind::InvalidData => {
                    ResultCode::InvalidFile
                }
                io::ErrorKind::OutOfMemory => ResultCode::OutOfMemory,
                _ => ResultCode::IoError,
            },
            hound::Error::FormatError(reason) if UNSUPPORTED_LAYOUTS.contains(reason) => {
                ResultCode::FormatNotSupported
            }
            hound::Error::FormatError(_) | hound::Error::UnfinishedSample => {
                ResultCode::InvalidFile
            }
            _ => ResultCode::FormatNotSupported,
        };
        Self {
            code,
            path: path.to_path_buf(),
            source: Some(err),
        }
    }

    /// Any failure once the header has parsed means the sample data is bad.
    fn corrupt(err: hound::Error, path: &Path) -> Self {
        Self {
            code: ResultCode::InvalidFile,
            path: path.to_path_buf(),
            source: Some(err),
        }
    }

    pub fn code(&self) -> ResultCode {
        self.code
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// A decoded, mono audio buffer owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedAudio {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
}

impl DecodedAudio {
    pub fn frames(&self) -> usize {
        self.samples.len()
    }

    pub fn duration_secs(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.samples.len() as f64 / self.sample_rate as f64
    }

    pub fn into_samples(self) -> Vec<f32> {
        self.samples
    }
}

/// Decode a WAV file to mono `f32`.
///
/// Integer PCM is scaled by `2^(bits-1)` into [-1, 1); float PCM passes
/// through. Multi-channel frames are averaged.
pub fn load_wav(path: impl AsRef<Path>) -> Result<DecodedAudio, DecodeError> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(DecodeError::new(ResultCode::InvalidArgs, path));
    }

    let result = decode(path);
    match &result {
        Ok(audio) => log::debug!(
            "decoded {} ({} frames @ {}Hz)",
            path.display(),
            audio.frames(),
            audio.sample_rate
        ),
        Err(err) => log::warn!("{err}"),
    }
    result
}

fn decode(path: &Path) -> Result<DecodedAudio, DecodeError> {
    let reader = hound::WavReader::open(path).map_err(|e| DecodeError::from_hound(e, path))?;
    let spec = reader.spec();
    if !is_supported(&spec) {
        return Err(DecodeError::new(ResultCode::FormatNotSupported, path));
    }
    let channels = spec.channels.max(1) as usize;

    let mut interleaved: Vec<f32> = Vec::new();
    interleaved
        .try_reserve_exact(reader.len() as usize)
        .map_err(|_| DecodeError::new(ResultCode::OutOfMemory, path))?;

    match spec.sample_format {
        hound::SampleFormat::Int => {
            let scale = (1u64 << (spec.bits_per_sample.clamp(1, 32) - 1)) as f32;
            for sample in reader.into_samples::<i32>() {
                let sample = sample.map_err(|e| DecodeError::corrupt(e, path))?;
                interleaved.push(sample as f32 / scale);
            }
        }
        hound::SampleFormat::Float => {
            for sample in reader.into_samples::<f32>() {
                interleaved.push(sample.map_err(|e| DecodeError::corrupt(e, path))?);
            }
        }
    }

    if interleaved.len() < channels {
        return Err(DecodeError::new(ResultCode::NoFrames, path));
    }

    let samples = if channels > 1 {
        interleaved
            .chunks_exact(channels)
            .map(|frame| frame.iter().sum::<f32>() / channels as f32)
            .collect()
    } else {
        interleaved
    };

    Ok(DecodedAudio {
        samples,
        sample_rate: spec.sample_rate,
    })
}

/// Integer PCM at 8 to 32 bits, or 32-bit float.
fn is_supported(spec: &hound::WavSpec) -> bool {
    match spec.sample_format {
        hound::SampleFormat::Int => (8..=32).contains(&spec.bits_per_sample),
        hound::SampleFormat::Float => spec.bits_per_sample == 32,
    }
}
