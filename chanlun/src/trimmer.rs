//! Locates the earliest global price extreme and discards everything before it,
//! fixing the pipeline's seed direction.

use crate::bar::RawBar;
use crate::constant::Direction;

/// Result of trimming: the surviving suffix of bars plus the seed direction
/// implied by which extreme (high or low) occurred earlier. `None` when the
/// input was empty — there is nothing to seed a direction from.
pub struct TrimResult {
    pub bars: Vec<RawBar>,
    pub seed_direction: Option<Direction>,
}

/// Finds `argmax(high)` and `argmin(low)` (ties break on the earliest index),
/// drops everything before whichever occurs first in time, and derives the
/// seed direction from which of the two extremes that was.
pub fn trim(bars: Vec<RawBar>) -> TrimResult {
    if bars.is_empty() {
        return TrimResult {
            bars,
            seed_direction: None,
        };
    }

    let i_high = argmax_high(&bars);
    let i_low = argmin_low(&bars);
    let k = i_high.min(i_low);

    let seed_direction = Direction::from_earlier_extreme_is_high(k == i_high);

    let bars = if k == 0 { bars } else { bars[k..].to_vec() };

    TrimResult {
        bars,
        seed_direction: Some(seed_direction),
    }
}

fn argmax_high(bars: &[RawBar]) -> usize {
    let mut best = 0;
    for (i, bar) in bars.iter().enumerate().skip(1) {
        if bar.high > bars[best].high {
            best = i;
        }
    }
    best
}

fn argmin_low(bars: &[RawBar]) -> usize {
    let mut best = 0;
    for (i, bar) in bars.iter().enumerate().skip(1) {
        if bar.low < bars[best].low {
            best = i;
        }
    }
    best
}
