// Recorded frame history for replay

mod summary;

pub use summary::Summary;

use crate::model::Frame;

/// The complete, ordered list of frames produced for one (input, algorithm) pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Run {
    frames: Vec<Frame>,
}

impl Run {
    pub fn new() -> Self {
        Run { frames: Vec::new() }
    }

    /// Append a frame to history
    pub(crate) fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Get a frame by index
    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    /// Get the final frame
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Get the number of frames
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Frame> {
        self.frames.iter()
    }

    /// Counters of the last frame, or zero for an empty run
    pub fn totals(&self) -> (u64, u64) {
        self.last()
            .map(|f| (f.comparisons, f.swaps))
            .unwrap_or((0, 0))
    }
}

impl<'a> IntoIterator for &'a Run {
    type Item = &'a Frame;
    type IntoIter = std::slice::Iter<'a, Frame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}
