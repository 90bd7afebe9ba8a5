pub mod automation; // Breakpoint sources, ramp sequencing, parameter queues
pub mod config;
pub mod dsp;
pub mod error;
pub mod processor; // Gain processor threading automation across blocks

pub use automation::{
    block::ramp_block,
    breakpoint::Breakpoint,
    queue::{ParamId, ParamValueQueue, ParameterChanges},
    sequencer::RampSequencer,
    source::{BreakpointSource, Breakpoints, NoPoints},
};
pub use config::ProcessorConfig;
pub use dsp::ramp::Ramp;
pub use error::AutomationError;
pub use processor::{GainProcessor, GainState};

pub const MAX_BLOCK_SIZE: usize = 2048;

/// Parameter id the gain processor listens on unless configured otherwise.
pub const GAIN_PARAM_ID: automation::queue::ParamId = automation::queue::ParamId(0);
