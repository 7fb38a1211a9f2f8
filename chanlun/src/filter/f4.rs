//! F4: proximity filter. Adjacent surviving marks closer together than
//! `PROXIMITY_GAP` structural bars are too close to form a meaningful swing;
//! one of the pair (or a nearby third mark) is cleared by a pair of
//! symmetric top→bottom / bottom→top resolution rules. Every dependent
//! lookup (`A1`, `B1`) is re-derived fresh from the currently surviving
//! marks rather than a stale snapshot, and a lookup that finds nothing
//! simply skips that dependent step rather than defaulting to a clear.
//!
//! The adjacent-pair scan walks the snapshot taken at the start of the call
//! and never revisits a mark that already took part in a triggered
//! resolution: once `(A, B)` triggers, the scan resumes at the mark after
//! `B` rather than re-pairing `B` with its other neighbor. Without this, a
//! chain of three marks all closer than the gap would have its middle mark
//! adjudicated twice, against two different partners — the middle bottom
//! should survive once its neighboring top is cleared, not be re-adjudicated
//! against its other neighbor in the same pass.

use super::{clear, next_surviving_of_type, prev_surviving_of_type, surviving_marks};
use crate::bar::StructuralBar;
use crate::constant::{Const, FractalType};

pub fn f4_proximity_filter(bars: &mut [StructuralBar]) {
    let snapshot = surviving_marks(bars);
    let gap = Const::PROXIMITY_GAP;

    let mut w = 0;
    while w + 1 < snapshot.len() {
        let (a_idx, a_type) = snapshot[w];
        let (b_idx, b_type) = snapshot[w + 1];

        if b_idx - a_idx >= gap {
            w += 1;
            continue;
        }

        // A mark resolved earlier in this same pass may have already
        // cleared one side of this pair; such stale pairs are skipped
        // (without consuming the window) since they no longer describe a
        // live proximity conflict.
        if bars[a_idx].fractal_type != a_type || bars[b_idx].fractal_type != b_type {
            w += 1;
            continue;
        }

        match (a_type, b_type) {
            (FractalType::Top, FractalType::Bottom) => resolve_top_then_bottom(bars, a_idx, b_idx),
            (FractalType::Bottom, FractalType::Top) => resolve_bottom_then_top(bars, a_idx, b_idx),
            _ => {}
        }
        w += 2;
    }
}

fn resolve_top_then_bottom(bars: &mut [StructuralBar], a_idx: usize, b_idx: usize) {
    let Some(a1_idx) = next_surviving_of_type(bars, b_idx, FractalType::Top) else {
        return;
    };

    if bars[a1_idx].high > bars[a_idx].high {
        clear(bars, a_idx);
        if let Some(b1_idx) = prev_surviving_of_type(bars, a_idx, FractalType::Bottom) {
            if bars[b_idx].low < bars[b1_idx].low {
                clear(bars, b1_idx);
            } else {
                clear(bars, b_idx);
            }
        }
    } else {
        clear(bars, a1_idx);
        if let Some(b1_idx) = next_surviving_of_type(bars, a1_idx, FractalType::Bottom) {
            if bars[b_idx].low < bars[b1_idx].low {
                clear(bars, b1_idx);
            } else {
                clear(bars, b_idx);
            }
        }
    }
}

fn resolve_bottom_then_top(bars: &mut [StructuralBar], a_idx: usize, b_idx: usize) {
    let Some(a1_idx) = next_surviving_of_type(bars, b_idx, FractalType::Bottom) else {
        return;
    };

    if bars[a1_idx].low < bars[a_idx].low {
        clear(bars, a_idx);
        if let Some(b1_idx) = prev_surviving_of_type(bars, a_idx, FractalType::Top) {
            if bars[b_idx].high > bars[b1_idx].high {
                clear(bars, b1_idx);
            } else {
                clear(bars, b_idx);
            }
        }
    } else {
        clear(bars, a1_idx);
        if let Some(b1_idx) = next_surviving_of_type(bars, a1_idx, FractalType::Top) {
            if bars[b_idx].high > bars[b1_idx].high {
                clear(bars, b1_idx);
            } else {
                clear(bars, b_idx);
            }
        }
    }
}
