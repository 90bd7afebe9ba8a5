use crate::automation::breakpoint::Breakpoint;

/// Something the ramp sequencer can pull breakpoints from.
///
/// `point(index)` returns the breakpoint at `index` in the current block's
/// delivery, or `None` once the delivery is exhausted. The sequencer asks
/// for contiguous indices starting at 0, at most twice per segment, and
/// treats `None` as final for the rest of the block.
///
/// A source is handed to one sequencer for one block and dropped with it.
/// Borrowing sources (`Breakpoints`, `&mut F`) make that explicit: the
/// borrow cannot outlive the block.
pub trait BreakpointSource {
    fn point(&mut self, index: usize) -> Option<Breakpoint>;
}

impl<F> BreakpointSource for F
where
    F: FnMut(usize) -> Option<Breakpoint>,
{
    #[inline]
    fn point(&mut self, index: usize) -> Option<Breakpoint> {
        self(index)
    }
}

/// A source over a borrowed slice of breakpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct Breakpoints<'a> {
    points: &'a [Breakpoint],
}

impl<'a> Breakpoints<'a> {
    pub fn new(points: &'a [Breakpoint]) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl BreakpointSource for Breakpoints<'_> {
    #[inline]
    fn point(&mut self, index: usize) -> Option<Breakpoint> {
        self.points.get(index).copied()
    }
}

/// A source with no points. A block without changes for a parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPoints;

impl BreakpointSource for NoPoints {
    #[inline]
    fn point(&mut self, _index: usize) -> Option<Breakpoint> {
        None
    }
}
