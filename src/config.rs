#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{automation::queue::ParamId, error::AutomationError, GAIN_PARAM_ID, MAX_BLOCK_SIZE};

/// Setup for a `GainProcessor`. Everything sized here is allocated once in
/// `GainProcessor::new` and never grows afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProcessorConfig {
    pub max_block_size: usize,
    /// Breakpoints a single parameter may carry in one block.
    pub max_points_per_block: usize,
    /// Parameters that may change within one block.
    pub max_parameters: usize,
    /// Normalized gain before any automation arrives.
    pub initial_gain: f32,
    pub gain_param: ParamId,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            max_block_size: MAX_BLOCK_SIZE,
            max_points_per_block: 64,
            max_parameters: 4,
            initial_gain: 1.0,
            gain_param: GAIN_PARAM_ID,
        }
    }
}

impl ProcessorConfig {
    pub fn max_block_size(mut self, frames: usize) -> Self {
        self.max_block_size = frames;
        self
    }

    pub fn max_points_per_block(mut self, points: usize) -> Self {
        self.max_points_per_block = points;
        self
    }

    pub fn max_parameters(mut self, parameters: usize) -> Self {
        self.max_parameters = parameters;
        self
    }

    pub fn initial_gain(mut self, gain: f32) -> Self {
        self.initial_gain = gain;
        self
    }

    pub fn gain_param(mut self, id: ParamId) -> Self {
        self.gain_param = id;
        self
    }

    pub fn validate(&self) -> Result<(), AutomationError> {
        if self.max_block_size == 0 {
            return Err(AutomationError::InvalidConfig("block size must be non-zero"));
        }
        if self.max_points_per_block == 0 {
            return Err(AutomationError::InvalidConfig("point capacity must be non-zero"));
        }
        if self.max_parameters == 0 {
            return Err(AutomationError::InvalidConfig("parameter capacity must be non-zero"));
        }
        if !self.initial_gain.is_finite() {
            return Err(AutomationError::InvalidConfig("initial gain must be finite"));
        }
        if !(0.0..=1.0).contains(&self.initial_gain) {
            log::warn!(
                "initial gain {} is outside the normalized range",
                self.initial_gain
            );
        }

        Ok(())
    }
}
