//! Benchmarks for low-level automation primitives.

mod amplify;
mod ramp;

pub use amplify::bench_amplify;
pub use ramp::{bench_ramp, bench_sequencer};
