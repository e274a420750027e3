use crate::generator::recorder::Recorder;
use crate::model::ElementState;
use std::ops::Range;

/// Lomuto quick sort over an explicit worklist of pending ranges.
///
/// Ranges are popped depth-first with the left partition ahead of the right,
/// which yields the same trace as the recursive formulation.
pub(crate) fn simulate(rec: &mut Recorder) {
    let mut pending: Vec<Range<usize>> = vec![0..rec.len()];

    while let Some(range) = pending.pop() {
        match range.len() {
            0 => {}
            1 => {
                rec.mark_sorted(range.start);
                rec.snapshot([range.start], ElementState::Sorted);
            }
            _ => {
                let pivot_idx = partition(rec, range.start, range.end - 1);
                pending.push(pivot_idx + 1..range.end);
                pending.push(range.start..pivot_idx);
            }
        }
    }
}

/// Partition `low..=high` around the value at `high`; returns the pivot's final index
fn partition(rec: &mut Recorder, low: usize, high: usize) -> usize {
    let pivot = rec.value(high);
    rec.snapshot([high], ElementState::Pivot);

    // Next slot for an element smaller than the pivot
    let mut store = low;
    for j in low..high {
        rec.snapshot([j, high], ElementState::Comparing);
        rec.count_comparison();
        if rec.value(j) < pivot {
            if store != j {
                rec.count_swap();
                rec.swap(store, j);
                rec.snapshot([store, j], ElementState::Swapping);
            }
            store += 1;
        }
    }

    rec.count_swap();
    rec.swap(store, high);
    rec.snapshot([store, high], ElementState::Swapping);

    rec.mark_sorted(store);
    rec.snapshot([store], ElementState::Sorted);
    store
}
