//! Shared state types for UI communication
//!
//! Static data is captured once before the stream starts; per-block updates
//! are `Copy` so the audio thread can send them without allocating.

/// Commands sent from UI thread to audio thread
#[derive(Clone, Copy, Debug)]
pub enum ControlMessage {
    /// Switch lane playback on or off
    ToggleLane,
    /// Stop the lane so editor edits take effect
    Touch,
    /// Rewind the lane and return to the initial gain
    Reset,
}

/// Static state captured at startup (can allocate)
#[derive(Clone, Debug)]
pub struct UiStateInit {
    /// Audio sample rate in Hz
    pub sample_rate: f32,
    /// Frames per processing block
    pub block_size: usize,
    /// Test tone frequency in Hz
    pub frequency: f32,
    /// Lane loop length in frames
    pub lane_frames: u64,
    /// Number of points on the lane
    pub lane_points: usize,
}

/// Dynamic state sent from audio thread once per block (allocation-free)
#[derive(Clone, Copy, Debug)]
pub struct UiStateUpdate {
    /// Frames processed since start or last reset
    pub position: u64,
    /// Gain the block ended on
    pub gain: f32,
    /// Whether the lane drives the gain
    pub lane_active: bool,
    /// Points and edits rejected since start
    pub dropped: u32,
}

impl UiStateUpdate {
    pub fn new(gain: f32) -> Self {
        Self {
            position: 0,
            gain,
            lane_active: true,
            dropped: 0,
        }
    }
}
