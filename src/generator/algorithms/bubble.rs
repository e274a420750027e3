use crate::generator::recorder::Recorder;
use crate::model::ElementState;

/// Full passes with no early exit, so every pass is visible
pub(crate) fn simulate(rec: &mut Recorder) {
    let n = rec.len();

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            rec.snapshot([j, j + 1], ElementState::Comparing);
            rec.count_comparison();
            if rec.value(j) > rec.value(j + 1) {
                rec.count_swap();
                rec.swap(j, j + 1);
                rec.snapshot([j, j + 1], ElementState::Swapping);
            }
        }
        rec.mark_sorted(n - i - 1);
        rec.snapshot([n - i - 1], ElementState::Sorted);
    }

    rec.mark_sorted(0);
    rec.snapshot([0], ElementState::Sorted);
}
