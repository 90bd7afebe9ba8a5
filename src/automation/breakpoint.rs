#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One automation point: the value a parameter should have at a sample
/// offset within the current block.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Breakpoint {
    pub offset: i32,
    pub value: f32,
}

impl Breakpoint {
    pub const fn new(offset: i32, value: f32) -> Self {
        Self { offset, value }
    }
}
