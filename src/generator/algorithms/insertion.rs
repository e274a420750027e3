use crate::generator::recorder::Recorder;
use crate::model::ElementState;

/// Shifts are adjacent exchanges so every frame stays a permutation of the input.
/// Each shift counts as one comparison and one swap.
pub(crate) fn simulate(rec: &mut Recorder) {
    let n = rec.len();

    rec.mark_sorted(0);
    rec.snapshot([0], ElementState::Sorted);

    for i in 1..n {
        rec.snapshot([i], ElementState::Comparing);

        let mut j = i;
        while j > 0 && rec.value(j - 1) > rec.value(j) {
            rec.count_comparison();
            rec.count_swap();
            rec.swap(j - 1, j);
            rec.snapshot([j - 1, j], ElementState::Swapping);
            j -= 1;
        }

        for k in 0..=i {
            rec.mark_sorted(k);
        }
        rec.snapshot(0..=i, ElementState::Sorted);
    }
}
