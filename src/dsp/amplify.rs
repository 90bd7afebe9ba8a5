//! Gain application primitives.

/*
Applying Automated Gain
=======================

A gain effect is the simplest processor there is: every output sample is the
input sample times a gain factor. Automation makes the factor change over
time, and that is where the trouble starts.

Vocabulary
----------

  gain          A multiplier applied to amplitude, here a normalized value
                in [0.0, 1.0] straight from the host parameter.
                  gain = 1.0  →  unchanged (unity)
                  gain = 0.0  →  silence

  gain curve    One gain value per frame, produced by the ramp sequencer.
                Multiplying a block by its curve applies sample-accurate
                automation.

  zipper noise  The buzzy artifact heard when gain jumps once per block
                instead of moving smoothly. A 64-sample block at 48 kHz
                updates gain 750 times per second, which is audible as a
                750 Hz buzz riding on the signal.


The Math
--------

For each frame index i and every channel c:

    out[c][i] = in[c][i] × curve[i]

All channels share the same curve so the stereo image does not wobble.


Why Per-Sample
--------------

    Block-rate gain (steps):        Sample-rate gain (ramp):

    1.0 ┤      ┌───                 1.0 ┤        ╱───
        │   ┌──┘                        │      ╱
        │┌──┘                           │    ╱
    0.5 ┼┘                          0.5 ┼──╱

Each step on the left is a discontinuity in the signal's envelope. The ramp
on the right has none, at the cost of one multiply per sample.
*/

/// Multiply a signal by a constant gain factor (in-place).
///
/// Used when a block carries no automation and the gain is held.
#[inline]
pub fn apply_gain(signal: &mut [f32], gain: f32) {
    for sample in signal.iter_mut() {
        *sample *= gain;
    }
}

/// Multiply a signal by a per-frame gain curve (in-place).
#[inline]
pub fn multiply_in_place(signal: &mut [f32], curve: &[f32]) {
    debug_assert_eq!(signal.len(), curve.len());

    for (s, &g) in signal.iter_mut().zip(curve.iter()) {
        *s *= g;
    }
}
