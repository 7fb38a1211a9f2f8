//! F1: window extremum filter. A mark survives only if its price is the
//! extreme of its own `±W` neighborhood, not merely a strict local extremum
//! among its immediate neighbors.

use super::clear;
use crate::bar::StructuralBar;
use crate::constant::{Const, FractalType};

pub fn f1_window_filter(bars: &mut [StructuralBar]) {
    let n = bars.len();
    if n == 0 {
        return;
    }
    let w = Const::FRACTAL_WINDOW;

    let marked: Vec<usize> = bars
        .iter()
        .enumerate()
        .filter(|(_, b)| b.fractal_type.is_some())
        .map(|(i, _)| i)
        .collect();

    for i in marked {
        let l = i.saturating_sub(w);
        let r = (i + w).min(n - 1);

        match bars[i].fractal_type {
            FractalType::Top => {
                let window_max = bars[l..=r].iter().map(|b| b.high).fold(f64::MIN, f64::max);
                if bars[i].high < window_max {
                    clear(bars, i);
                }
            }
            FractalType::Bottom => {
                let window_min = bars[l..=r].iter().map(|b| b.low).fold(f64::MAX, f64::min);
                if bars[i].low > window_min {
                    clear(bars, i);
                }
            }
            FractalType::None => {}
        }
    }
}
