//! Automator - application builder and audio runner

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use rtrb::{PushError, RingBuffer};

use gain_automator::{
    automation::message::AutomationMessage, GainProcessor, ProcessorConfig, GAIN_PARAM_ID,
    MAX_BLOCK_SIZE,
};

use super::lane::AutomationLane;
use super::tone::TestTone;
use super::ui::{ControlMessage, UiApp, UiStateInit, UiStateUpdate};

const EDIT_RING_LEN: usize = 64;
const CONTROL_RING_LEN: usize = 16;
const AUDIO_RING_LEN: usize = 16 * 1024;
const STATE_RING_LEN: usize = 256;
const TONE_LEVEL: f32 = 0.5;

/// Main application builder
pub struct Automator {
    frequency: f32,
    block_size: usize,
    lane: AutomationLane,
}

impl Automator {
    pub fn new() -> Self {
        Self {
            frequency: 440.0,
            block_size: 512,
            lane: AutomationLane::new(48_000),
        }
    }

    /// Test tone frequency in Hz
    pub fn frequency(mut self, frequency: f32) -> Self {
        self.frequency = frequency;
        self
    }

    /// Frames per processing block, capped at `MAX_BLOCK_SIZE`
    pub fn block_size(mut self, frames: usize) -> Self {
        self.block_size = frames.clamp(1, MAX_BLOCK_SIZE);
        self
    }

    /// Looping lane that drives the gain parameter
    pub fn lane(mut self, lane: AutomationLane) -> Self {
        self.lane = lane;
        self
    }

    /// Run the application (takes over the terminal, plays audio)
    pub fn run(self) -> EyreResult<()> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| eyre!("no default output device available"))?;
        let config = device
            .default_output_config()
            .wrap_err("failed to fetch default output config")?;

        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;
        let block_size = self.block_size;

        let mut processor = GainProcessor::new(
            ProcessorConfig::default().max_block_size(block_size),
        )
        .wrap_err("invalid processor config")?;

        let init = UiStateInit {
            sample_rate,
            block_size,
            frequency: self.frequency,
            lane_frames: self.lane.length(),
            lane_points: self.lane.len(),
        };
        let initial = UiStateUpdate::new(processor.gain());

        // --- Cross-thread rings ---
        let (edit_tx, mut edit_rx) = RingBuffer::<AutomationMessage>::new(EDIT_RING_LEN);
        let (control_tx, mut control_rx) = RingBuffer::<ControlMessage>::new(CONTROL_RING_LEN);
        let (mut audio_tx, audio_rx) = RingBuffer::<f32>::new(AUDIO_RING_LEN);
        let (mut state_tx, state_rx) = RingBuffer::<UiStateUpdate>::new(STATE_RING_LEN);

        let lane = self.lane;
        let mut tone = TestTone::new(self.frequency, sample_rate, TONE_LEVEL);
        let mut render_buf = vec![0.0f32; block_size];
        let mut position = 0u64;
        let mut lane_active = true;
        let mut dropped = 0u32;

        let stream = device
            .build_output_stream(
                &config.into(),
                move |data: &mut [f32], _| {
                    while let Ok(control) = control_rx.pop() {
                        match control {
                            ControlMessage::ToggleLane => lane_active = !lane_active,
                            ControlMessage::Touch => lane_active = false,
                            ControlMessage::Reset => {
                                processor.reset();
                                tone.reset();
                                position = 0;
                                lane_active = true;
                                dropped = 0;
                            }
                        }
                    }

                    let total_frames = data.len() / channels;
                    let mut frames_written = 0;
                    while frames_written < total_frames {
                        let frames_to_render = (total_frames - frames_written).min(block_size);

                        // Lane points go in first; editor edits at offset 0
                        // land after them and are rejected while it plays.
                        if lane_active {
                            let lost = lane.fill_block(
                                position,
                                frames_to_render,
                                processor.pending_mut(),
                                GAIN_PARAM_ID,
                            );
                            dropped += lost as u32;
                        }
                        dropped += processor.process_messages(&mut edit_rx) as u32;

                        let block = &mut render_buf[..frames_to_render];
                        tone.render(block);
                        processor.process(&mut [&mut block[..]], frames_to_render);

                        // Duplicate mono to all channels and write to device
                        let out_off = frames_written * channels;
                        for (i, &s) in block.iter().enumerate() {
                            for ch in 0..channels {
                                data[out_off + i * channels + ch] = s;
                            }
                        }

                        // Push mono block to UI ring, non-blocking (drop on overflow)
                        for &s in block.iter() {
                            if let Err(PushError::Full(_)) = audio_tx.push(s) {
                                break;
                            }
                        }

                        position += frames_to_render as u64;
                        let _ = state_tx.push(UiStateUpdate {
                            position,
                            gain: processor.gain(),
                            lane_active,
                            dropped,
                        });

                        frames_written += frames_to_render;
                    }
                },
                move |err| eprintln!("Stream error: {err}"),
                None,
            )
            .wrap_err("failed to build output stream")?;

        stream.play().wrap_err("failed to start output stream")?;

        let mut terminal = ratatui::init();
        let mut app = UiApp::new(audio_rx, state_rx, control_tx, edit_tx, init, initial);
        let result = app.run(&mut terminal);
        ratatui::restore();

        result
    }
}

impl Default for Automator {
    fn default() -> Self {
        Self::new()
    }
}
