//! Benchmarks for stereo gain processing with automation.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use gain_automator::{GainProcessor, ParameterChanges, ProcessorConfig, GAIN_PARAM_ID};

use crate::BLOCK_SIZES;

pub fn bench_processor(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/processor");

    for &size in BLOCK_SIZES {
        let mut left = vec![0.5f32; size];
        let mut right = vec![-0.5f32; size];
        let mut effect = GainProcessor::new(ProcessorConfig::default()).unwrap();

        // === HELD: no changes for gain ===
        let idle = ParameterChanges::with_capacity(1, 1);
        group.bench_with_input(BenchmarkId::new("held", size), &size, |b, _| {
            b.iter(|| {
                effect.process_with_changes(
                    black_box(&mut [&mut left[..], &mut right[..]]),
                    size,
                    black_box(&idle),
                )
            })
        });

        // === FADE: one ramp across the block ===
        let mut fade = ParameterChanges::with_capacity(1, 4);
        fade.add_point(GAIN_PARAM_ID, 0, 1.0).unwrap();
        fade.add_point(GAIN_PARAM_ID, size as i32 - 1, 0.0).unwrap();
        group.bench_with_input(BenchmarkId::new("fade", size), &size, |b, _| {
            b.iter(|| {
                left.fill(0.5);
                right.fill(-0.5);
                effect.set_gain(1.0);
                effect.process_with_changes(
                    black_box(&mut [&mut left[..], &mut right[..]]),
                    size,
                    black_box(&fade),
                )
            })
        });
    }

    group.finish();
}
