use crate::generator::recorder::Recorder;
use crate::model::ElementState;

pub(crate) fn simulate(rec: &mut Recorder) {
    let n = rec.len();

    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in i + 1..n {
            rec.snapshot([min_idx, j], ElementState::Comparing);
            rec.count_comparison();
            if rec.value(j) < rec.value(min_idx) {
                min_idx = j;
            }
        }

        if min_idx != i {
            rec.count_swap();
            rec.swap(i, min_idx);
            rec.snapshot([i, min_idx], ElementState::Swapping);
        }

        rec.mark_sorted(i);
        rec.snapshot([i], ElementState::Sorted);
    }

    rec.mark_sorted(n - 1);
    rec.snapshot([n - 1], ElementState::Sorted);
}
