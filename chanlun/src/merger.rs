//! Folds consecutive raw bars that stand in a containment relation into
//! structural bars. The direction used to merge a run is a pure function of
//! the *already emitted* structural bars, never of the candidate being built
//! — this self-referential rule is the hardest invariant in the pipeline to
//! get right.

use crate::bar::{RawBar, StructuralBar, is_inclusive};
use crate::constant::Direction;

/// Direction inferred from the last two already-emitted structural bars.
/// With zero or one emitted bars, the seed direction is used; with two or
/// more, a strictly higher high means up, a strictly lower low means down,
/// and otherwise the most recent bar's own direction is inherited.
fn infer_direction(emitted: &[StructuralBar], seed: Direction) -> Direction {
    if emitted.len() <= 1 {
        return seed;
    }
    let a = &emitted[emitted.len() - 2];
    let b = &emitted[emitted.len() - 1];
    if b.high > a.high {
        Direction::Up
    } else if b.low < a.low {
        Direction::Down
    } else {
        b.direction
    }
}

/// Merges a trimmed, chronologically ordered raw bar sequence into structural
/// bars. `seed` is the direction produced by the trimmer. Missing
/// volume/amount are expected to already have been defaulted to 0 upstream
/// (by the acquirer), with a warning logged there.
pub fn merge(trimmed: &[RawBar], seed: Direction) -> Vec<StructuralBar> {
    if trimmed.is_empty() {
        return Vec::new();
    }

    if trimmed.len() == 1 {
        return vec![seed_structural_bar(&trimmed[0], seed)];
    }

    let mut emitted: Vec<StructuralBar> = Vec::new();
    let mut i = 0;

    while i < trimmed.len() {
        let first = &trimmed[i];
        let mut candidate_high = first.high;
        let mut candidate_low = first.low;
        let mut candidate_close = first.close;
        let mut candidate_volume = first.volume;
        let mut candidate_amount = first.amount;

        let mut j = i + 1;
        while j < trimmed.len() {
            let next = &trimmed[j];
            if !is_inclusive(candidate_high, candidate_low, next.high, next.low) {
                break;
            }

            match infer_direction(&emitted, seed) {
                Direction::Up => {
                    candidate_high = candidate_high.max(next.high);
                    candidate_low = candidate_low.max(next.low);
                }
                Direction::Down => {
                    candidate_high = candidate_high.min(next.high);
                    candidate_low = candidate_low.min(next.low);
                }
            }
            candidate_close = next.close;
            candidate_volume += next.volume;
            candidate_amount += next.amount;
            j += 1;
        }

        let direction = infer_direction(&emitted, seed);
        emitted.push(StructuralBar {
            timestamp: first.timestamp,
            open: first.open,
            high: candidate_high,
            low: candidate_low,
            close: candidate_close,
            volume: candidate_volume,
            amount: candidate_amount,
            direction,
            fractal_type: crate::constant::FractalType::None,
        });

        i = j;
    }

    emitted
}

fn seed_structural_bar(bar: &RawBar, seed: Direction) -> StructuralBar {
    StructuralBar {
        timestamp: bar.timestamp,
        open: bar.open,
        high: bar.high,
        low: bar.low,
        close: bar.close,
        volume: bar.volume,
        amount: bar.amount,
        direction: seed,
        fractal_type: crate::constant::FractalType::None,
    }
}
