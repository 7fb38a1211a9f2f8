//! F2: consecutive-same-type filter. Within a maximal run of surviving marks
//! that share a type, only the most extreme one survives; ties keep the
//! earliest (leftmost) occurrence. Cleared marks are invisible to run
//! detection, so re-running F2 on an already-clean sequence is a no-op —
//! the property the chain's fixed-schedule design relies on.

use super::{clear, surviving_marks};
use crate::bar::StructuralBar;
use crate::constant::FractalType;

pub fn f2_alternation_filter(bars: &mut [StructuralBar]) {
    let marks = surviving_marks(bars);
    let mut i = 0;
    while i < marks.len() {
        let ty = marks[i].1;
        let mut j = i;
        while j + 1 < marks.len() && marks[j + 1].1 == ty {
            j += 1;
        }

        if j > i {
            let mut best = i;
            for k in (i + 1)..=j {
                let (idx_k, _) = marks[k];
                let (idx_best, _) = marks[best];
                let better = match ty {
                    FractalType::Top => bars[idx_k].high > bars[idx_best].high,
                    FractalType::Bottom => bars[idx_k].low < bars[idx_best].low,
                    FractalType::None => false,
                };
                if better {
                    best = k;
                }
            }
            for k in i..=j {
                if k != best {
                    clear(bars, marks[k].0);
                }
            }
        }

        i = j + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::tests::bar;

    #[test]
    fn keeps_highest_of_consecutive_tops() {
        let mut bars = vec![
            bar(0, 10.0, 1.0, FractalType::Top),
            bar(1, 5.0, 1.0, FractalType::None),
            bar(2, 15.0, 1.0, FractalType::Top),
            bar(3, 5.0, 1.0, FractalType::None),
            bar(4, 12.0, 1.0, FractalType::Top),
        ];
        f2_alternation_filter(&mut bars);
        assert_eq!(bars[0].fractal_type, FractalType::None);
        assert_eq!(bars[2].fractal_type, FractalType::Top);
        assert_eq!(bars[4].fractal_type, FractalType::None);
    }

    #[test]
    fn ties_keep_earliest() {
        let mut bars = vec![
            bar(0, 10.0, 1.0, FractalType::Bottom),
            bar(1, 10.0, 1.0, FractalType::Bottom),
        ];
        // low is the discriminator for bottoms, both equal -> tie, earliest wins.
        bars[0].low = 3.0;
        bars[1].low = 3.0;
        f2_alternation_filter(&mut bars);
        assert_eq!(bars[0].fractal_type, FractalType::Bottom);
        assert_eq!(bars[1].fractal_type, FractalType::None);
    }

    #[test]
    fn alternating_marks_are_untouched() {
        let mut bars = vec![
            bar(0, 10.0, 1.0, FractalType::Top),
            bar(1, 5.0, 2.0, FractalType::Bottom),
            bar(2, 12.0, 1.0, FractalType::Top),
        ];
        f2_alternation_filter(&mut bars);
        assert_eq!(bars[0].fractal_type, FractalType::Top);
        assert_eq!(bars[1].fractal_type, FractalType::Bottom);
        assert_eq!(bars[2].fractal_type, FractalType::Top);
    }

    #[test]
    fn idempotent_on_already_filtered_input() {
        let mut bars = vec![
            bar(0, 10.0, 1.0, FractalType::Top),
            bar(1, 5.0, 2.0, FractalType::Bottom),
            bar(2, 12.0, 1.0, FractalType::Top),
        ];
        f2_alternation_filter(&mut bars);
        let once = bars.clone();
        f2_alternation_filter(&mut bars);
        assert_eq!(bars, once);
    }
}
