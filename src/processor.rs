//! The gain effect around the automation core.
//!
//! A host calls `process` once per block with that block's parameter
//! changes. The processor builds a fresh sequencer over the gain queue,
//! seeds it with the gain the previous block ended on, scales every channel
//! frame by frame, and keeps the final value for the next block. That scalar
//! is the only automation state that outlives a block.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    automation::{
        message::{AutomationMessage, MessageReceiver},
        queue::ParameterChanges,
        sequencer::RampSequencer,
        source::BreakpointSource,
    },
    config::ProcessorConfig,
    dsp::amplify::{apply_gain, multiply_in_place},
    error::AutomationError,
};

/// What the gain effect persists: a single normalized gain.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GainState {
    pub gain: f32,
}

pub struct GainProcessor {
    config: ProcessorConfig,
    gain: f32,
    pending: ParameterChanges, // editor changes queued for the next block
    curve: Vec<f32>,           // per-frame gain, sized to max_block_size
}

impl GainProcessor {
    pub fn new(config: ProcessorConfig) -> Result<Self, AutomationError> {
        config.validate()?;

        log::debug!(
            "gain processor: {} frames/block, {} points/block",
            config.max_block_size,
            config.max_points_per_block
        );

        Ok(Self {
            gain: config.initial_gain,
            pending: ParameterChanges::with_capacity(
                config.max_parameters,
                config.max_points_per_block,
            ),
            curve: vec![0.0; config.max_block_size],
            config,
        })
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Gain the next block will start from.
    pub fn gain(&self) -> f32 {
        self.gain
    }

    pub fn set_gain(&mut self, gain: f32) {
        self.gain = gain;
    }

    /// Back to the configured initial gain, dropping queued changes.
    pub fn reset(&mut self) {
        log::debug!("gain processor reset to {}", self.config.initial_gain);
        self.gain = self.config.initial_gain;
        self.pending.clear();
    }

    pub fn state(&self) -> GainState {
        GainState { gain: self.gain }
    }

    pub fn restore(&mut self, state: GainState) {
        self.gain = state.gain;
    }

    /// Changes queued for the next `process` call.
    pub fn pending_mut(&mut self) -> &mut ParameterChanges {
        &mut self.pending
    }

    /// Drain editor messages into the next block's changes.
    ///
    /// Points that do not fit (full queue, out of order) are dropped; the
    /// count of dropped messages is returned.
    pub fn process_messages<R: MessageReceiver>(&mut self, rx: &mut R) -> usize {
        let mut dropped = 0;
        while let Some(message) = rx.pop() {
            let result = match message {
                AutomationMessage::SetValue { id, value } => self.pending.add_point(id, 0, value),
                AutomationMessage::Breakpoint { id, point } => {
                    self.pending.add_point(id, point.offset, point.value)
                }
                AutomationMessage::Reset => {
                    self.gain = self.config.initial_gain;
                    self.pending.clear();
                    Ok(0)
                }
            };

            if result.is_err() {
                dropped += 1;
            }
        }
        dropped
    }

    /// Process one `num_samples` block using the changes queued on the
    /// processor, then clear them.
    pub fn process(&mut self, channels: &mut [&mut [f32]], num_samples: usize) {
        let source = self.pending.source(self.config.gain_param);
        self.gain = render_gain(&mut self.curve, self.gain, source, channels, num_samples);
        self.pending.clear();
    }

    /// Process one `num_samples` block against changes supplied by the host.
    ///
    /// The automation advances `num_samples` frames whatever the channels
    /// hold; each channel is scaled up to its own length.
    pub fn process_with_changes(
        &mut self,
        channels: &mut [&mut [f32]],
        num_samples: usize,
        changes: &ParameterChanges,
    ) {
        let source = changes.source(self.config.gain_param);
        self.gain = render_gain(&mut self.curve, self.gain, source, channels, num_samples);
    }
}

/// Scale `channels` by the automation stream over `frames` frames and return
/// the gain the stream ended on. Frame `k` is scaled by the value in effect
/// at offset `k`.
fn render_gain<S: BreakpointSource>(
    curve: &mut [f32],
    seed: f32,
    source: S,
    channels: &mut [&mut [f32]],
    frames: usize,
) -> f32 {
    let mut sequencer = RampSequencer::new(source, seed);

    // Nothing to ramp: one multiply per sample at a constant gain
    if sequencer.is_exhausted() {
        let gain = sequencer.value();
        for channel in channels.iter_mut() {
            let end = channel.len().min(frames);
            apply_gain(&mut channel[..end], gain);
        }
        return gain;
    }

    // Blocks longer than the curve buffer are handled in curve-sized chunks
    // with the same sequencer, so offsets stay relative to the block start.
    let mut start = 0;
    while start < frames {
        let len = (frames - start).min(curve.len());
        let chunk = &mut curve[..len];
        for value in chunk.iter_mut() {
            *value = sequencer.value();
            sequencer.advance_one_sample();
        }

        for channel in channels.iter_mut() {
            let end = channel.len().min(start + len);
            if end > start {
                multiply_in_place(&mut channel[start..end], &chunk[..end - start]);
            }
        }

        start += len;
    }

    sequencer.value()
}
