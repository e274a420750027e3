// Working state for a single compile

use crate::model::{Element, ElementState, Frame};
use crate::run::Run;

/// Instrumented working copy of the input.
///
/// Every algorithm mutates `work` through this type and calls
/// [`Recorder::snapshot`] after each micro-operation. Counters live here, so
/// they are scoped to one compile and never shared between runs.
pub(crate) struct Recorder {
    work: Vec<Element>,
    comparisons: u64,
    swaps: u64,
    run: Run,
}

impl Recorder {
    pub fn new(input: &[Element]) -> Self {
        Recorder {
            work: input.iter().map(|e| e.cleared()).collect(),
            comparisons: 0,
            swaps: 0,
            run: Run::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.work.len()
    }

    pub fn value(&self, index: usize) -> u32 {
        self.work[index].value
    }

    pub fn count_comparison(&mut self) {
        self.comparisons += 1;
    }

    pub fn count_swap(&mut self) {
        self.swaps += 1;
    }

    /// Exchange two elements; a `Sorted` tag travels with its element
    pub fn swap(&mut self, a: usize, b: usize) {
        self.work.swap(a, b);
    }

    /// Move the element at `to` into `from`, shifting `from..to` one slot right
    pub fn rotate_into(&mut self, from: usize, to: usize) {
        self.work[from..=to].rotate_right(1);
    }

    pub fn mark_sorted(&mut self, index: usize) {
        self.work[index].state = ElementState::Sorted;
    }

    /// Append a copy of the working array with `indices` tagged as `state`.
    ///
    /// Untouched indices show `Sorted` if finalized and `Default` otherwise.
    pub fn snapshot<I>(&mut self, indices: I, state: ElementState)
    where
        I: IntoIterator<Item = usize>,
    {
        let mut array: Vec<Element> = self
            .work
            .iter()
            .map(|e| match e.state {
                ElementState::Sorted => *e,
                _ => e.cleared(),
            })
            .collect();
        for index in indices {
            if let Some(element) = array.get_mut(index) {
                element.state = state;
            }
        }
        self.run.push(Frame {
            array,
            comparisons: self.comparisons,
            swaps: self.swaps,
        });
    }

    pub fn finish(self) -> Run {
        self.run
    }
}
