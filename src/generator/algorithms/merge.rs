use crate::generator::recorder::Recorder;
use crate::model::ElementState;

pub(crate) fn simulate(rec: &mut Recorder) {
    let n = rec.len();
    sort_range(rec, 0, n - 1);

    for i in 0..n {
        rec.mark_sorted(i);
    }
    rec.snapshot(0..n, ElementState::Sorted);
}

fn sort_range(rec: &mut Recorder, start: usize, end: usize) {
    if start < end {
        let mid = (start + end) / 2;
        sort_range(rec, start, mid);
        sort_range(rec, mid + 1, end);
        merge(rec, start, mid, end);
    }
}

/// Merge `start..=mid` with `mid+1..=end` in place.
///
/// While merging, `start..k` is the merged prefix, `k..right` holds the rest of
/// the left run and `right..=end` the rest of the right run. Taking from the
/// right rotates that element down to `k`. Only right-run placements count as
/// swaps.
fn merge(rec: &mut Recorder, start: usize, mid: usize, end: usize) {
    let mut k = start;
    let mut right = mid + 1;

    while k < right && right <= end {
        rec.snapshot([k, right], ElementState::Comparing);
        rec.count_comparison();
        if rec.value(right) < rec.value(k) {
            rec.rotate_into(k, right);
            right += 1;
            rec.count_swap();
        }
        rec.snapshot([k], ElementState::Swapping);
        k += 1;
    }

    // Leftovers from either run are already in position
    while k <= end {
        rec.snapshot([k], ElementState::Swapping);
        k += 1;
    }
}
