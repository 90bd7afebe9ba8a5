//! Sample-accurate parameter automation.
//!
//! A host delivers automation as a handful of breakpoints per block. This
//! module turns them into one value per frame: `sequencer` walks the points
//! segment by segment, `block` threads the value from one block into the
//! next, and `queue` holds the per-block points on the host side.

/// Sample offset plus target value.
pub mod breakpoint;
/// Per-block value threading helpers.
pub mod block;
/// Editor-to-audio control messages.
pub mod message;
/// Fixed-capacity parameter value queues and change lists.
pub mod queue;
/// Walks a breakpoint source one ramp segment at a time.
pub mod sequencer;
/// The capability the sequencer pulls breakpoints from.
pub mod source;

pub use breakpoint::Breakpoint;
pub use sequencer::RampSequencer;
pub use source::{BreakpointSource, Breakpoints, NoPoints};
