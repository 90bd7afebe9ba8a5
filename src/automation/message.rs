#[cfg(feature = "rtrb")]
use rtrb::Consumer;

use crate::automation::{breakpoint::Breakpoint, queue::ParamId};

/// Control changes sent from an editor or UI thread to the audio thread.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AutomationMessage {
    /// Editor edit: the parameter jumps to `value` at the start of the next block.
    SetValue { id: ParamId, value: f32 },
    /// A scheduled point within the next block.
    Breakpoint { id: ParamId, point: Breakpoint },
    /// Return the processor to its configured initial state.
    Reset,
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<AutomationMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<AutomationMessage> {
    fn pop(&mut self) -> Option<AutomationMessage> {
        Consumer::pop(self).ok()
    }
}
