//! Real-world scenario benchmarks.
//!
//! These run complete processor blocks the way a host drives them: fill the
//! parameter changes, process a stereo buffer, carry the gain forward.

mod processor;

pub use processor::bench_processor;
