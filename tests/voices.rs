use drumkit::{render_clap, render_kick, RenderError, RenderParams, VoiceKind};

const SAMPLE_RATE: u32 = 44_100;
const COUNT: usize = 4_410; // 100ms

fn render(kind: VoiceKind, params: &RenderParams) -> Vec<f32> {
    let mut out = vec![f32::NAN; params.sample_count];
    kind.render(&mut out, params).unwrap();
    out
}

fn mean_abs(samples: &[f32]) -> f32 {
    samples.iter().map(|s| s.abs()).sum::<f32>() / samples.len() as f32
}

fn rms(samples: &[f32]) -> f32 {
    (samples.iter().map(|s| s * s).sum::<f32>() / samples.len() as f32).sqrt()
}

#[test]
fn every_frame_is_written_and_finite() {
    for kind in VoiceKind::ALL {
        for count in [1, 2, 17, COUNT] {
            let out = render(kind, &RenderParams::new(SAMPLE_RATE, count));
            assert!(
                out.iter().all(|s| s.is_finite()),
                "{kind} left a non-finite frame at count {count}"
            );
        }
    }
}

#[test]
fn amplitude_stays_bounded() {
    for kind in VoiceKind::ALL {
        for seed in 0..8 {
            let out = render(kind, &RenderParams::new(SAMPLE_RATE, COUNT).with_seed(seed));
            let peak = out.iter().fold(0.0f32, |acc, &x| acc.max(x.abs()));
            assert!(peak <= 1.5, "{kind} peaked at {peak} (seed {seed})");
        }
    }
}

#[test]
fn tail_is_quieter_than_head() {
    for kind in VoiceKind::ALL {
        for seed in 0..4 {
            let out = render(kind, &RenderParams::new(SAMPLE_RATE, COUNT).with_seed(seed));
            let tenth = COUNT / 10;
            let head = mean_abs(&out[..tenth]);
            let tail = mean_abs(&out[COUNT - tenth..]);
            assert!(tail < head, "{kind}: tail {tail} not below head {head}");
        }
    }
}

#[test]
fn fixed_seed_is_deterministic() {
    for kind in VoiceKind::ALL {
        let params = RenderParams::new(48_000, 2_048).with_seed(0xD5);
        assert_eq!(render(kind, &params), render(kind, &params), "{kind}");
    }
}

#[test]
fn different_seeds_differ() {
    for kind in VoiceKind::ALL {
        let a = render(kind, &RenderParams::new(48_000, 512).with_seed(1));
        let b = render(kind, &RenderParams::new(48_000, 512).with_seed(2));
        assert_ne!(a, b, "{kind}");
    }
}

#[test]
fn zero_samples_is_a_no_op() {
    for kind in VoiceKind::ALL {
        let mut out: [f32; 0] = [];
        kind.render(&mut out, &RenderParams::new(SAMPLE_RATE, 0)).unwrap();
    }
}

#[test]
fn bad_parameters_are_reported() {
    let mut out = vec![0.0f32; 16];
    assert!(matches!(
        render_kick(&mut out, 0, 16),
        Err(RenderError::InvalidSampleRate)
    ));
    assert!(matches!(
        render_kick(&mut out, SAMPLE_RATE, 32),
        Err(RenderError::BufferLength { expected: 32, actual: 16 })
    ));
}

#[test]
fn kick_starts_loud_and_ends_near_silent() {
    let mut out = vec![0.0f32; COUNT];
    render_kick(&mut out, SAMPLE_RATE, COUNT).unwrap();

    // Body envelope at the last frame is e^-5 ≈ 0.0067; the click is gone
    assert!(out[COUNT - 1].abs() < 0.0071, "tail {}", out[COUNT - 1]);

    // Averaged over seeds, the attack is far louder than the tail
    let mut head = 0.0;
    for seed in 0..16 {
        let out = render(VoiceKind::Kick, &RenderParams::new(SAMPLE_RATE, COUNT).with_seed(seed));
        head += out[0].abs();
    }
    assert!(head / 16.0 > 0.2, "attack too quiet: {}", head / 16.0);
}

#[test]
fn clap_has_a_bump_per_hand() {
    let window = |center_secs: f64| {
        let center = (center_secs * SAMPLE_RATE as f64) as usize;
        let half = 88; // 2ms
        center.saturating_sub(half)..center + half
    };

    let mut peaks = [0.0f32; 3];
    let mut troughs = [0.0f32; 2];
    for seed in 0..8 {
        let out = render(VoiceKind::Clap, &RenderParams::new(SAMPLE_RATE, COUNT).with_seed(seed));
        for (acc, t) in peaks.iter_mut().zip([0.0, 0.02, 0.04]) {
            *acc += rms(&out[window(t)]);
        }
        for (acc, t) in troughs.iter_mut().zip([0.01, 0.03]) {
            *acc += rms(&out[window(t)]);
        }
    }

    assert!(peaks[0] > troughs[0], "{peaks:?} vs {troughs:?}");
    assert!(peaks[1] > troughs[0] && peaks[1] > troughs[1], "{peaks:?} vs {troughs:?}");
    assert!(peaks[2] > troughs[1], "{peaks:?} vs {troughs:?}");
}

#[test]
fn clap_wrapper_matches_seconds_timing() {
    let mut out = vec![0.0f32; 441];
    render_clap(&mut out, SAMPLE_RATE, 441).unwrap();
    assert!(out.iter().all(|s| s.abs() <= 1.2));
}

#[test]
fn concurrent_renders_do_not_interfere() {
    let params = RenderParams::new(SAMPLE_RATE, COUNT).with_seed(77);
    let reference = render(VoiceKind::Snare, &params);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| render(VoiceKind::Snare, &params)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), reference);
        }
    });
}
