//! Looping automation lane, sliced into per-block breakpoints the way a host
//! delivers automation to a plugin.

use gain_automator::{ParamId, ParameterChanges};

/// A looping curve of `(frame, value)` points, linearly interpolated.
pub struct AutomationLane {
    points: Vec<(u64, f32)>, // sorted by frame, all < length
    length: u64,
}

impl AutomationLane {
    pub fn new(length: u64) -> Self {
        Self {
            points: Vec::new(),
            length: length.max(1),
        }
    }

    /// Add a point. Frames beyond the loop length wrap.
    pub fn point(mut self, frame: u64, value: f32) -> Self {
        let frame = frame % self.length;
        let index = self.points.partition_point(|&(f, _)| f <= frame);
        self.points.insert(index, (frame, value));
        self
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn length(&self) -> u64 {
        self.length
    }

    /// Lane value at an absolute frame position. The segment from the last
    /// point wraps around to the first one.
    pub fn value_at(&self, frame: u64) -> f32 {
        let (Some(&first), Some(&last)) = (self.points.first(), self.points.last()) else {
            return 1.0;
        };

        let t = (frame % self.length) as f64;
        let length = self.length as f64;
        let index = self.points.partition_point(|&(f, _)| (f as f64) <= t);

        let (prev_frame, prev_value) = if index == 0 {
            (last.0 as f64 - length, last.1)
        } else {
            let (f, v) = self.points[index - 1];
            (f as f64, v)
        };
        let (next_frame, next_value) = if index == self.points.len() {
            (first.0 as f64 + length, first.1)
        } else {
            let (f, v) = self.points[index];
            (f as f64, v)
        };

        if next_frame <= prev_frame {
            return prev_value;
        }

        let fraction = ((t - prev_frame) / (next_frame - prev_frame)) as f32;
        prev_value + (next_value - prev_value) * fraction
    }

    /// Queue the breakpoints for the block `[start, start + frames)`: the
    /// lane value at the block start, every lane point inside the block, and
    /// the value the block should end on at offset `frames`. Returns how many
    /// points did not fit.
    pub fn fill_block(
        &self,
        start: u64,
        frames: usize,
        changes: &mut ParameterChanges,
        id: ParamId,
    ) -> usize {
        if frames == 0 {
            return 0;
        }

        let end = start + frames as u64;
        let mut dropped = 0;
        let mut add = |frame: u64, value: f32| {
            if changes.add_point(id, (frame - start) as i32, value).is_err() {
                dropped += 1;
            }
        };

        add(start, self.value_at(start));

        let mut cycle = start - start % self.length;
        while cycle < end {
            for &(frame, value) in &self.points {
                let position = cycle + frame;
                if position > start && position < end {
                    add(position, value);
                }
            }
            cycle += self.length;
        }

        add(end, self.value_at(end));
        dropped
    }
}
