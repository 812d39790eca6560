//! Benchmarks for the per-sample shaping primitives.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use drumkit::dsp::{Burst, ExpDecay, NoiseSource, OnePole, SweptSine};

use crate::HIT_SIZES;

pub fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp");

    for &size in HIT_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Noise - one PRNG draw per frame
        let mut noise = NoiseSource::seeded(1);
        group.bench_with_input(BenchmarkId::new("noise", size), &size, |b, _| {
            b.iter(|| noise.fill(black_box(&mut buffer)))
        });

        // One-pole split - two multiplies and a subtract
        noise.fill(&mut buffer);
        group.bench_with_input(BenchmarkId::new("one_pole_split", size), &size, |b, _| {
            b.iter(|| {
                let mut filter = OnePole::new(0.95);
                let mut acc = 0.0;
                for &x in buffer.iter() {
                    acc += filter.split(black_box(x as f64)).highpass;
                }
                acc
            })
        });

        // Envelope - exp() per frame
        group.bench_with_input(BenchmarkId::new("exp_decay", size), &size, |b, _| {
            let env = ExpDecay::new(6.0);
            b.iter(|| env.render(black_box(&mut buffer), 1.0 / size as f64))
        });

        // Swept sine - sin() per frame
        group.bench_with_input(BenchmarkId::new("swept_sine", size), &size, |b, _| {
            b.iter(|| {
                let mut osc = SweptSine::new(150.0, 50.0, 44_100);
                let mut acc = 0.0;
                for i in 0..size {
                    acc += osc.next_sample(black_box(i as f64 / size as f64));
                }
                acc
            })
        });

        // Burst - three exp() per frame
        group.bench_with_input(BenchmarkId::new("burst", size), &size, |b, _| {
            let burst = Burst::new(&[0.0, 0.02, 0.04], 100.0);
            b.iter(|| {
                let mut acc = 0.0;
                for i in 0..size {
                    acc += burst.level(black_box(i as f64 / 44_100.0));
                }
                acc
            })
        });
    }

    group.finish();
}
