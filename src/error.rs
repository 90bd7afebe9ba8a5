use thiserror::Error;

/// Errors from the non-realtime side of automation: filling queues and
/// validating configuration. Nothing on the per-sample path returns these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AutomationError {
    #[error("parameter value queue is full ({capacity} points)")]
    QueueFull { capacity: usize },

    #[error("point offset {offset} comes before the previous point at {previous}")]
    UnorderedOffset { previous: i32, offset: i32 },

    #[error("point offset {0} is negative")]
    NegativeOffset(i32),

    #[error("parameter change list is full ({capacity} parameters)")]
    TooManyParameters { capacity: usize },

    #[error("invalid processor config: {0}")]
    InvalidConfig(&'static str),
}
