//! Benchmarks for the ramp and the ramp sequencer.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use gain_automator::{automation::block::ramp_block, Breakpoint, Breakpoints, Ramp, RampSequencer};

use crate::BLOCK_SIZES;

/// Evenly spaced points across a block, alternating between two levels.
fn lane(size: usize, points: usize) -> Vec<Breakpoint> {
    (0..points)
        .map(|i| {
            let offset = (i * size / points) as i32;
            let value = if i % 2 == 0 { 0.2 } else { 0.9 };
            Breakpoint::new(offset, value)
        })
        .collect()
}

pub fn bench_ramp(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/ramp");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Moving the whole block
        group.bench_with_input(BenchmarkId::new("moving", size), &size, |b, &size| {
            b.iter(|| {
                let mut ramp = Ramp::new(0.0, 1.0, size as i32);
                ramp.render(black_box(&mut buffer));
            })
        });

        // Already on target
        group.bench_with_input(BenchmarkId::new("settled", size), &size, |b, _| {
            b.iter(|| {
                let mut ramp = Ramp::flat(0.5);
                ramp.render(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}

pub fn bench_sequencer(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/sequencer");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // No automation this block
        group.bench_with_input(BenchmarkId::new("empty", size), &size, |b, _| {
            b.iter(|| {
                let mut seq = RampSequencer::new(Breakpoints::new(&[]), 0.5);
                seq.render(black_box(&mut buffer));
            })
        });

        // Typical host density
        let sparse = lane(size, 4);
        group.bench_with_input(BenchmarkId::new("4_points", size), &size, |b, _| {
            b.iter(|| ramp_block(Breakpoints::new(black_box(&sparse)), 0.5, &mut buffer))
        });

        // Worst case: a breakpoint every frame
        let dense = lane(size, size);
        group.bench_with_input(BenchmarkId::new("every_frame", size), &size, |b, _| {
            b.iter(|| ramp_block(Breakpoints::new(black_box(&dense)), 0.5, &mut buffer))
        });
    }

    group.finish();
}
