//! The five-stage fractal filter chain. Each sub-pass only ever clears
//! marks; none ever create one. The re-entrant structure (F2 re-run after F3
//! and after F4, then F3/F4 each run once more as "F5") is expressed as a
//! fixed sequence of unconditional passes rather than dirty-bit tracked
//! re-runs: running F2 on an already-F2-clean sequence is a no-op, so the
//! fixed schedule is behaviorally identical and simpler.

mod f1;
mod f2;
mod f3;
mod f4;

use crate::bar::StructuralBar;
use crate::constant::FractalType;

pub use f1::f1_window_filter;
pub use f2::f2_alternation_filter;
pub use f3::f3_relationship_validator;
pub use f4::f4_proximity_filter;

/// Runs the full chain: F1, F2, F3, F2, F4, F2, F3, F2, F4, F2 — i.e.
/// F1 ∘ F2 ∘ (F2∘F3) ∘ (F2∘F4) ∘ (F2∘F3) ∘ (F2∘F4), where the final
/// (F3, F4) pass is the settle-once-more "F5" stage.
pub fn run_chain(bars: &mut [StructuralBar]) {
    f1_window_filter(bars);
    f2_alternation_filter(bars);

    f3_relationship_validator(bars);
    f2_alternation_filter(bars);

    f4_proximity_filter(bars);
    f2_alternation_filter(bars);

    // F5: re-run F3 then F4 once more.
    f3_relationship_validator(bars);
    f2_alternation_filter(bars);

    f4_proximity_filter(bars);
    f2_alternation_filter(bars);
}

/// Indices (into `bars`) and types of every currently-surviving mark, in
/// chronological order. Always recomputed fresh from current state — never
/// cached across calls.
fn surviving_marks(bars: &[StructuralBar]) -> Vec<(usize, FractalType)> {
    bars.iter()
        .enumerate()
        .filter(|(_, b)| b.fractal_type.is_some())
        .map(|(i, b)| (i, b.fractal_type))
        .collect()
}

fn clear(bars: &mut [StructuralBar], index: usize) {
    bars[index].fractal_type = FractalType::None;
}

/// Nearest surviving mark of `wanted` type strictly before structural-bar
/// index `from`, scanned fresh over current state.
fn prev_surviving_of_type(
    bars: &[StructuralBar],
    from: usize,
    wanted: FractalType,
) -> Option<usize> {
    (0..from)
        .rev()
        .find(|&i| bars[i].fractal_type == wanted)
}

/// Nearest surviving mark of `wanted` type strictly after structural-bar
/// index `from`, scanned fresh over current state.
fn next_surviving_of_type(
    bars: &[StructuralBar],
    from: usize,
    wanted: FractalType,
) -> Option<usize> {
    ((from + 1)..bars.len()).find(|&i| bars[i].fractal_type == wanted)
}
