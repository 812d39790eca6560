//! Offline measurements of a rendered hit.

use rustfft::{num_complex::Complex, FftPlanner};

pub struct Stats {
    pub peak: f32,
    pub rms: f32,
    /// Mean |x| over the last tenth divided by the first tenth.
    pub decay_ratio: f32,
    /// Magnitude-weighted mean frequency in Hz.
    pub centroid_hz: f32,
}

pub fn analyze(samples: &[f32], sample_rate: u32) -> Stats {
    if samples.is_empty() {
        return Stats {
            peak: 0.0,
            rms: 0.0,
            decay_ratio: 0.0,
            centroid_hz: 0.0,
        };
    }

    let peak = samples.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
    let rms = (samples.iter().map(|&x| x * x).sum::<f32>() / samples.len() as f32).sqrt();

    let tenth = (samples.len() / 10).max(1);
    let mean_abs = |s: &[f32]| s.iter().map(|x| x.abs()).sum::<f32>() / s.len() as f32;
    let head = mean_abs(&samples[..tenth]);
    let tail = mean_abs(&samples[samples.len() - tenth..]);
    let decay_ratio = if head > 0.0 { tail / head } else { 0.0 };

    Stats {
        peak,
        rms,
        decay_ratio,
        centroid_hz: spectral_centroid(samples, sample_rate),
    }
}

fn spectral_centroid(samples: &[f32], sample_rate: u32) -> f32 {
    let size = samples.len().next_power_of_two();
    let mut buffer: Vec<Complex<f32>> = samples
        .iter()
        .map(|&re| Complex { re, im: 0.0 })
        .chain(std::iter::repeat(Complex { re: 0.0, im: 0.0 }))
        .take(size)
        .collect();

    let mut planner = FftPlanner::<f32>::new();
    planner.plan_fft_forward(size).process(&mut buffer);

    let bin_hz = sample_rate as f32 / size as f32;
    let (weighted, total) = buffer[..size / 2]
        .iter()
        .enumerate()
        .fold((0.0f32, 0.0f32), |(weighted, total), (k, bin)| {
            let magnitude = bin.norm();
            (weighted + k as f32 * bin_hz * magnitude, total + magnitude)
        });

    if total > 0.0 {
        weighted / total
    } else {
        0.0
    }
}
