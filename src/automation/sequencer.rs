use crate::{
    automation::{breakpoint::Breakpoint, source::BreakpointSource},
    dsp::ramp::Ramp,
};

/*
Ramp Sequencer
==============

The host hands us automation as sparse breakpoints, a few per block:

    offset:   0          4              9
    value:   0.6 ─────► 1.0 ─────────► 0.5

The audio loop wants one value per frame. The sequencer bridges the two by
treating each pair of neighbouring breakpoints as one ramp segment:

    segment 0:  Ramp(0.6 → 1.0, 4 steps)
    segment 1:  Ramp(1.0 → 0.5, 5 steps)
    segment 2:  point 2 has no successor → hold 0.5

When the active ramp reports done, the next tick starts the next segment.
Both breakpoints of a segment are pulled from the source right then, so a
segment costs two queries and nothing is buffered.


Running Out
-----------

The source signals the end of the block's points by returning `None`. From
then on the sequencer is exhausted: it stops querying and returns whatever
value the ramp had reached. There is no error path, the parameter simply
stops moving.

    Source points        First query     What the stream does
    ------------------   -------------   -------------------------------
    none                 index 0 fails   holds the seed value
    one                  index 1 fails   jumps to the point, holds it
    two or more          ...             ramps, then holds the last point


Segment Timing
--------------

A ramp over `n` steps lands on its target on tick `n`. The sequencer only
notices on the following tick, which starts the next segment and
immediately ticks it. So the first value of segment `k + 1` is one step past
breakpoint `k + 1`, and the two segments join without a repeated sample.

Offsets are expected to be non-decreasing. A smaller offset after a larger
one yields a negative step count, which `Ramp` takes literally.
*/

/// Turns a breakpoint source into a per-sample value stream.
pub struct RampSequencer<S> {
    ramp: Ramp,
    source: S,
    segment: usize,      // index of the breakpoint the active ramp started at
    more_segments: bool, // false once the source reported exhaustion
}

impl<S: BreakpointSource> RampSequencer<S> {
    /// Bind a source for one block, seeded with the value the previous block
    /// ended on. Resolves segment 0 immediately.
    pub fn new(source: S, initial: f32) -> Self {
        let mut sequencer = Self {
            ramp: Ramp::flat(initial),
            source,
            segment: 0,
            more_segments: true,
        };
        sequencer.init_segment(0);
        sequencer
    }

    /// Produce the value for the next frame.
    #[inline]
    pub fn advance_one_sample(&mut self) -> f32 {
        if !self.more_segments {
            return self.ramp.value();
        }

        if self.ramp.is_done() {
            self.segment += 1;
            self.init_segment(self.segment);
        }

        self.ramp.tick()
    }

    /// Fill a buffer with successive `advance_one_sample` values.
    pub fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            *sample = self.advance_one_sample();
        }
    }

    /// Current value without advancing.
    #[inline]
    pub fn value(&self) -> f32 {
        self.ramp.value()
    }

    pub fn is_exhausted(&self) -> bool {
        !self.more_segments
    }

    pub fn segment(&self) -> usize {
        self.segment
    }

    pub fn ramp(&self) -> &Ramp {
        &self.ramp
    }

    /// Give the source back once the block is done with it.
    pub fn into_source(self) -> S {
        self.source
    }

    fn init_segment(&mut self, index: usize) {
        let Some(Breakpoint { offset: start, value: from }) = self.source.point(index) else {
            self.more_segments = false;
            return;
        };

        let Some(Breakpoint { offset: end, value: to }) = self.source.point(index + 1) else {
            // Last point of the block: hold it
            self.ramp = Ramp::flat(from);
            self.more_segments = false;
            return;
        };

        self.ramp = Ramp::new(from, to, end - start);
    }
}
