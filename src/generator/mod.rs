//! Step generator: turns an input array and an algorithm into a [`Run`].
//!
//! - [`Algorithm`]: the closed registry of supported sorts
//! - [`compile`] / [`compile_id`]: run an instrumented simulation
//! - [`errors`]: registry lookup errors
//!
//! # Execution Model
//!
//! Compilation runs to completion synchronously. The simulation works on a
//! private copy of the input and appends a cloned [`Frame`](crate::model::Frame)
//! after every comparison, swap/placement, or finalization, so emitted frames
//! never change after the fact. Recursion inside the algorithms is not visible
//! to callers; only the flattened trace is.

mod algorithms;
pub mod errors;
mod recorder;

pub use errors::UnknownAlgorithm;

use crate::model::Element;
use crate::run::Run;
use recorder::Recorder;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// A supported comparison sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BubbleSort,
    SelectionSort,
    InsertionSort,
    QuickSort,
    MergeSort,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::BubbleSort,
        Algorithm::SelectionSort,
        Algorithm::InsertionSort,
        Algorithm::QuickSort,
        Algorithm::MergeSort,
    ];

    /// Selectable identifier, e.g. `quick-sort`
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "bubble-sort",
            Algorithm::SelectionSort => "selection-sort",
            Algorithm::InsertionSort => "insertion-sort",
            Algorithm::QuickSort => "quick-sort",
            Algorithm::MergeSort => "merge-sort",
        }
    }

    /// Display name
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::SelectionSort => "Selection Sort",
            Algorithm::InsertionSort => "Insertion Sort",
            Algorithm::QuickSort => "Quick Sort",
            Algorithm::MergeSort => "Merge Sort",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Algorithm::ALL.into_iter().find(|a| a.id() == id)
    }

    /// Next algorithm in registry order, wrapping around
    pub fn next(self) -> Self {
        let idx = Algorithm::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Algorithm::ALL[(idx + 1) % Algorithm::ALL.len()]
    }

    /// Previous algorithm in registry order, wrapping around
    pub fn prev(self) -> Self {
        let idx = Algorithm::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Algorithm::ALL[(idx + Algorithm::ALL.len() - 1) % Algorithm::ALL.len()]
    }

    fn simulate(self, rec: &mut Recorder) {
        match self {
            Algorithm::BubbleSort => algorithms::bubble::simulate(rec),
            Algorithm::SelectionSort => algorithms::selection::simulate(rec),
            Algorithm::InsertionSort => algorithms::insertion::simulate(rec),
            Algorithm::QuickSort => algorithms::quick::simulate(rec),
            Algorithm::MergeSort => algorithms::merge::simulate(rec),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::from_id(s.trim()).ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

/// Simulate `algorithm` over a private copy of `input` and record every step.
///
/// An empty input yields an empty run; a single element yields one frame with
/// that element `Sorted`.
pub fn compile(input: &[Element], algorithm: Algorithm) -> Run {
    if input.is_empty() {
        debug!(algorithm = algorithm.id(), "empty input, nothing to compile");
        return Run::new();
    }

    let mut rec = Recorder::new(input);
    algorithm.simulate(&mut rec);
    let run = rec.finish();

    let (comparisons, swaps) = run.totals();
    debug!(
        algorithm = algorithm.id(),
        len = input.len(),
        frames = run.len(),
        comparisons,
        swaps,
        "compiled run"
    );
    run
}

/// Like [`compile`], keyed by identifier. Unknown identifiers yield an empty run.
pub fn compile_id(input: &[Element], id: &str) -> Run {
    match Algorithm::from_id(id) {
        Some(algorithm) => compile(input, algorithm),
        None => {
            warn!(id, "unknown algorithm, producing empty run");
            Run::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{elements_from_values, ElementState, Frame};

    fn values(values: &[u32]) -> Vec<Element> {
        elements_from_values(values)
    }

    #[test]
    fn test_registry_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::from_id(algorithm.id()), Some(algorithm));
            assert_eq!(algorithm.to_string().parse::<Algorithm>(), Ok(algorithm));
        }
        assert_eq!(Algorithm::from_id("bogo-sort"), None);
        assert_eq!(
            "heap-sort".parse::<Algorithm>(),
            Err(UnknownAlgorithm("heap-sort".to_string()))
        );
    }

    #[test]
    fn test_cycling_wraps() {
        assert_eq!(Algorithm::MergeSort.next(), Algorithm::BubbleSort);
        assert_eq!(Algorithm::BubbleSort.prev(), Algorithm::MergeSort);
        let mut algorithm = Algorithm::QuickSort;
        for _ in 0..Algorithm::ALL.len() {
            algorithm = algorithm.next();
        }
        assert_eq!(algorithm, Algorithm::QuickSort);
    }

    #[test]
    fn test_unknown_id_yields_empty_run() {
        assert!(compile_id(&values(&[3, 1, 2]), "bogo-sort").is_empty());
        assert!(!compile_id(&values(&[3, 1, 2]), "merge-sort").is_empty());
    }

    #[test]
    fn test_degenerate_inputs() {
        for algorithm in Algorithm::ALL {
            assert!(compile(&[], algorithm).is_empty());

            let run = compile(&values(&[42]), algorithm);
            assert_eq!(run.len(), 1, "{}", algorithm);
            let frame = run.last().unwrap();
            assert_eq!(frame.values(), vec![42]);
            assert!(frame.all_in_state(ElementState::Sorted));
            assert_eq!((frame.comparisons, frame.swaps), (0, 0));
        }
    }

    #[test]
    fn test_input_is_not_mutated() {
        let input = values(&[9, 4, 7, 1]);
        let before = input.clone();
        for algorithm in Algorithm::ALL {
            compile(&input, algorithm);
        }
        assert_eq!(input, before);
    }

    #[test]
    fn test_bubble_sort_counts() {
        let run = compile(&values(&[5, 3, 4, 1, 2]), Algorithm::BubbleSort);
        let last = run.last().unwrap();
        assert_eq!(last.values(), vec![1, 2, 3, 4, 5]);
        assert_eq!(last.comparisons, 10);
        // inversions in the input
        assert_eq!(last.swaps, 8);
        // 10 comparing + 8 swapping + 4 pass-end + 1 closing
        assert_eq!(run.len(), 23);
    }

    #[test]
    fn test_bubble_sort_first_frames() {
        let run = compile(&values(&[2, 1, 3]), Algorithm::BubbleSort);

        let first = run.get(0).unwrap();
        assert_eq!(first.indices_in_state(ElementState::Comparing), vec![0, 1]);
        assert_eq!((first.comparisons, first.swaps), (0, 0));

        let second = run.get(1).unwrap();
        assert_eq!(second.indices_in_state(ElementState::Swapping), vec![0, 1]);
        assert_eq!(second.values(), vec![1, 2, 3]);
        assert_eq!((second.comparisons, second.swaps), (1, 1));
    }

    #[test]
    fn test_selection_sort_trace() {
        let run = compile(&values(&[3, 1, 2]), Algorithm::SelectionSort);
        let states: Vec<Vec<usize>> = run
            .iter()
            .map(|f| {
                let mut touched = f.indices_in_state(ElementState::Comparing);
                touched.extend(f.indices_in_state(ElementState::Swapping));
                touched
            })
            .collect();

        // compare (0,1), compare (1,2), swap (0,1), sorted 0,
        // compare (1,2), swap (1,2), sorted 1, sorted 2
        assert_eq!(
            states,
            vec![
                vec![0, 1],
                vec![1, 2],
                vec![0, 1],
                vec![],
                vec![1, 2],
                vec![1, 2],
                vec![],
                vec![],
            ]
        );
        let last = run.last().unwrap();
        assert_eq!((last.comparisons, last.swaps), (3, 2));
        assert!(last.all_in_state(ElementState::Sorted));
    }

    #[test]
    fn test_insertion_sort_counts_shifts() {
        let run = compile(&values(&[4, 3, 2, 1]), Algorithm::InsertionSort);
        let last = run.last().unwrap();
        assert_eq!(last.values(), vec![1, 2, 3, 4]);
        // 1 + 2 + 3 shifts, each a comparison and a swap
        assert_eq!((last.comparisons, last.swaps), (6, 6));

        let first = run.get(0).unwrap();
        assert_eq!(first.indices_in_state(ElementState::Sorted), vec![0]);
        let second = run.get(1).unwrap();
        assert_eq!(second.indices_in_state(ElementState::Comparing), vec![1]);
    }

    #[test]
    fn test_insertion_sort_sorted_prefix_frame() {
        let run = compile(&values(&[1, 2, 3]), Algorithm::InsertionSort);
        // sorted 0, compare 1, sorted 0..=1, compare 2, sorted 0..=2
        assert_eq!(run.len(), 5);
        assert_eq!(
            run.get(2).unwrap().indices_in_state(ElementState::Sorted),
            vec![0, 1]
        );
        assert_eq!(run.totals(), (0, 0));
    }

    #[test]
    fn test_quick_sort_pivot_first() {
        let run = compile(&values(&[4, 1, 3]), Algorithm::QuickSort);
        let first = run.get(0).unwrap();
        assert_eq!(first.indices_in_state(ElementState::Pivot), vec![2]);
        let last = run.last().unwrap();
        assert_eq!(last.values(), vec![1, 3, 4]);
        assert!(last.all_in_state(ElementState::Sorted));
    }

    #[test]
    fn test_quick_sort_all_equal() {
        let run = compile(&values(&[3, 3, 3]), Algorithm::QuickSort);
        let last = run.last().unwrap();
        assert_eq!(last.values(), vec![3, 3, 3]);
        assert!(last.all_in_state(ElementState::Sorted));
        // two partitions, each with a counted pivot placement
        assert_eq!((last.comparisons, last.swaps), (3, 2));
    }

    #[test]
    fn test_merge_sort_counts_right_placements_only() {
        let run = compile(&values(&[2, 1]), Algorithm::MergeSort);
        let frames: Vec<&Frame> = run.iter().collect();
        // compare, place right, place leftover left, closing
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0].indices_in_state(ElementState::Comparing), vec![0, 1]);
        assert_eq!(frames[1].values(), vec![1, 2]);
        assert_eq!(frames[1].indices_in_state(ElementState::Swapping), vec![0]);
        assert_eq!(frames[2].indices_in_state(ElementState::Swapping), vec![1]);
        assert!(frames[3].all_in_state(ElementState::Sorted));
        assert_eq!(run.totals(), (1, 1));

        let presorted = compile(&values(&[1, 2, 3, 4]), Algorithm::MergeSort);
        let (comparisons, swaps) = presorted.totals();
        assert_eq!(comparisons, 4);
        assert_eq!(swaps, 0);
    }

    #[test]
    fn test_merge_sort_is_stable_on_ties() {
        let run = compile(&values(&[5, 5, 1]), Algorithm::MergeSort);
        assert_eq!(run.last().unwrap().values(), vec![1, 5, 5]);
    }

    #[test]
    fn test_compile_is_deterministic() {
        let input = values(&[8, 3, 5, 1, 9, 2]);
        for algorithm in Algorithm::ALL {
            assert_eq!(compile(&input, algorithm), compile(&input, algorithm));
        }
    }
}
