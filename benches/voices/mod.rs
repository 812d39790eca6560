//! Benchmarks for complete voice renders.
//!
//! Each render builds its own noise source, so these include generator
//! setup as a host would see it.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use drumkit::{RenderParams, VoiceKind};

use crate::HIT_SIZES;

pub fn bench_voices(c: &mut Criterion) {
    let mut group = c.benchmark_group("voices");

    for &size in HIT_SIZES {
        let mut buffer = vec![0.0f32; size];
        let params = RenderParams::new(44_100, size).with_seed(7);

        for kind in VoiceKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.name(), size), &size, |b, _| {
                b.iter(|| kind.render(black_box(&mut buffer), black_box(&params)))
            });
        }

        // Entropy seeding cost on top of a kick render
        let entropy = RenderParams::new(44_100, size);
        group.bench_with_input(BenchmarkId::new("kick_entropy", size), &size, |b, _| {
            b.iter(|| VoiceKind::Kick.render(black_box(&mut buffer), black_box(&entropy)))
        });
    }

    group.finish();
}
