//! One block of automation at a time.
//!
//! A sequencer lives for exactly one block. The only thing that survives into
//! the next block is the scalar value the stream ended on, and these helpers
//! make that hand-off explicit: the seed goes in by value, the final value
//! comes back out.

use crate::automation::{sequencer::RampSequencer, source::BreakpointSource};

/// Render one block of automation into `out` and return the value the next
/// block should be seeded with.
///
/// Each frame receives the value in effect at its offset, and the stream is
/// advanced after it is written. A breakpoint at offset `k` is therefore
/// audible from frame `k` onward: with points `(0, 0.6), (4, 1.0)`, frames
/// 0..4 read 0.6, 0.7, 0.8, 0.9 and the returned seed is 1.0.
pub fn ramp_block<S: BreakpointSource>(source: S, seed: f32, out: &mut [f32]) -> f32 {
    let mut sequencer = RampSequencer::new(source, seed);
    for sample in out.iter_mut() {
        *sample = sequencer.value();
        sequencer.advance_one_sample();
    }
    sequencer.value()
}

/// Advance through `num_samples` frames without recording them and return
/// the final value. For parameters that only need their end-of-block state.
pub fn advance_block<S: BreakpointSource>(source: S, seed: f32, num_samples: usize) -> f32 {
    let mut sequencer = RampSequencer::new(source, seed);
    let mut value = sequencer.value();
    for _ in 0..num_samples {
        value = sequencer.advance_one_sample();
    }
    value
}
