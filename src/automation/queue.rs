//! Per-block parameter changes, the way a plugin host hands them over.
//!
//! Every block, each automated parameter gets a queue of breakpoints sorted
//! by sample offset. Storage is reserved up front so filling a queue on the
//! audio thread never reallocates; a full queue rejects the point instead.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    automation::{breakpoint::Breakpoint, source::Breakpoints},
    error::AutomationError,
};

/// Identifies an automatable parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParamId(pub u32);

/// Breakpoints for one parameter within one block.
#[derive(Debug, Clone)]
pub struct ParamValueQueue {
    id: ParamId,
    points: Vec<Breakpoint>,
}

impl ParamValueQueue {
    pub fn with_capacity(id: ParamId, capacity: usize) -> Self {
        Self {
            id,
            points: Vec::with_capacity(capacity),
        }
    }

    pub fn id(&self) -> ParamId {
        self.id
    }

    /// Append a point and return its index.
    ///
    /// Offsets must be non-negative and non-decreasing within a block. A
    /// point at the same offset as the last one replaces its value.
    pub fn add_point(&mut self, offset: i32, value: f32) -> Result<usize, AutomationError> {
        if offset < 0 {
            return Err(AutomationError::NegativeOffset(offset));
        }

        if let Some(last) = self.points.last_mut() {
            if offset < last.offset {
                return Err(AutomationError::UnorderedOffset {
                    previous: last.offset,
                    offset,
                });
            }
            if offset == last.offset {
                last.value = value;
                return Ok(self.points.len() - 1);
            }
        }

        if self.points.len() == self.points.capacity() {
            return Err(AutomationError::QueueFull {
                capacity: self.points.capacity(),
            });
        }

        self.points.push(Breakpoint::new(offset, value));
        Ok(self.points.len() - 1)
    }

    pub fn point(&self, index: usize) -> Option<Breakpoint> {
        self.points.get(index).copied()
    }

    pub fn points(&self) -> &[Breakpoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.points.capacity()
    }

    /// Drop all points, keeping the reserved storage.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Borrow the points as a breakpoint source for one sequencer.
    pub fn as_source(&self) -> Breakpoints<'_> {
        Breakpoints::new(&self.points)
    }
}

/// The parameter changes delivered with one block.
///
/// Queues are allocated once; `clear` empties them and releases their ids so
/// the next block can claim them for any parameter.
#[derive(Debug, Clone)]
pub struct ParameterChanges {
    queues: Vec<ParamValueQueue>,
    active: usize, // queues[..active] carry changes this block
}

impl ParameterChanges {
    pub fn with_capacity(max_params: usize, max_points: usize) -> Self {
        let queues = (0..max_params)
            .map(|_| ParamValueQueue::with_capacity(ParamId::default(), max_points))
            .collect();

        Self { queues, active: 0 }
    }

    /// Find the queue for `id`, claiming a free one if this is the first
    /// change for that parameter in the block.
    pub fn queue_mut(&mut self, id: ParamId) -> Result<&mut ParamValueQueue, AutomationError> {
        if let Some(index) = self.queues[..self.active].iter().position(|q| q.id == id) {
            return Ok(&mut self.queues[index]);
        }

        if self.active == self.queues.len() {
            return Err(AutomationError::TooManyParameters {
                capacity: self.queues.len(),
            });
        }

        let queue = &mut self.queues[self.active];
        queue.id = id;
        queue.clear();
        self.active += 1;
        Ok(queue)
    }

    /// Convenience for `queue_mut(id)?.add_point(offset, value)`.
    pub fn add_point(
        &mut self,
        id: ParamId,
        offset: i32,
        value: f32,
    ) -> Result<usize, AutomationError> {
        self.queue_mut(id)?.add_point(offset, value)
    }

    pub fn find(&self, id: ParamId) -> Option<&ParamValueQueue> {
        self.iter().find(|q| q.id == id)
    }

    /// Breakpoints for `id`, or an empty source if it has no changes.
    pub fn source(&self, id: ParamId) -> Breakpoints<'_> {
        self.find(id).map(ParamValueQueue::as_source).unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParamValueQueue> {
        self.queues[..self.active].iter()
    }

    /// Number of parameters with changes this block.
    pub fn len(&self) -> usize {
        self.active
    }

    pub fn is_empty(&self) -> bool {
        self.active == 0
    }

    pub fn clear(&mut self) {
        for queue in &mut self.queues[..self.active] {
            queue.clear();
        }
        self.active = 0;
    }
}
