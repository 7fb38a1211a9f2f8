//! F3: relationship validator. Every surviving mark except the first must
//! sit on the correct side of its nearest surviving neighbors of the
//! opposite type: a bottom's low must undercut the high of both its nearest
//! preceding and following surviving tops, and symmetrically for a top's
//! high against neighboring bottoms' lows. A neighbor that doesn't exist
//! imposes no constraint.

use super::{clear, surviving_marks};
use crate::bar::StructuralBar;
use crate::constant::FractalType;

pub fn f3_relationship_validator(bars: &mut [StructuralBar]) {
    let marks = surviving_marks(bars);
    if marks.len() <= 1 {
        return;
    }

    let mut to_clear = Vec::new();
    for w in 1..marks.len() {
        let (idx, ty) = marks[w];
        let prev_opp = marks[..w].iter().rev().find(|(_, t)| *t != ty).map(|(i, _)| *i);
        let next_opp = marks[(w + 1)..].iter().find(|(_, t)| *t != ty).map(|(i, _)| *i);

        let valid = match ty {
            FractalType::Bottom => {
                prev_opp.is_none_or(|p| bars[idx].low < bars[p].high)
                    && next_opp.is_none_or(|n| bars[idx].low < bars[n].high)
            }
            FractalType::Top => {
                prev_opp.is_none_or(|p| bars[idx].high > bars[p].low)
                    && next_opp.is_none_or(|n| bars[idx].high > bars[n].low)
            }
            FractalType::None => true,
        };

        if !valid {
            to_clear.push(idx);
        }
    }

    for idx in to_clear {
        clear(bars, idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::tests::bar;

    #[test]
    fn clears_bottom_not_below_neighboring_top() {
        // bottom's low (9.0) is not below the preceding top's low-bound (high=8.0)... -> invalid
        let mut bars = vec![
            bar(0, 8.0, 6.0, FractalType::Top),
            bar(1, 9.5, 9.0, FractalType::Bottom),
        ];
        f3_relationship_validator(&mut bars);
        assert_eq!(bars[1].fractal_type, FractalType::None);
    }

    #[test]
    fn keeps_valid_relationship() {
        let mut bars = vec![
            bar(0, 20.0, 15.0, FractalType::Top),
            bar(1, 12.0, 5.0, FractalType::Bottom),
            bar(2, 25.0, 18.0, FractalType::Top),
        ];
        f3_relationship_validator(&mut bars);
        assert_eq!(bars[1].fractal_type, FractalType::Bottom);
    }

    #[test]
    fn first_surviving_mark_is_exempt() {
        let mut bars = vec![bar(0, 5.0, 100.0, FractalType::Bottom)];
        f3_relationship_validator(&mut bars);
        assert_eq!(bars[0].fractal_type, FractalType::Bottom);
    }
}
