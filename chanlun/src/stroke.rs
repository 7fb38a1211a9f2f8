//! Builds strokes by walking the surviving fractals in order and keeping
//! only a strictly alternating subsequence; every consecutive kept pair
//! becomes one stroke.

use crate::bar::{Stroke, StructuralBar};
use crate::constant::{Direction, FractalType};

/// Collects surviving marks, enforces top/bottom alternation by skipping
/// off-type fractals, and emits one stroke per consecutive alternating pair.
pub fn build(bars: &[StructuralBar]) -> Vec<Stroke> {
    let surviving: Vec<usize> = bars
        .iter()
        .enumerate()
        .filter(|(_, b)| b.is_fractal())
        .map(|(i, _)| i)
        .collect();

    let mut kept: Vec<usize> = Vec::new();
    let mut expected: Option<FractalType> = None;

    for idx in surviving {
        let ty = bars[idx].fractal_type;
        match expected {
            None => {
                kept.push(idx);
                expected = Some(ty.opposite());
            }
            Some(want) if ty == want => {
                kept.push(idx);
                expected = Some(ty.opposite());
            }
            Some(_) => {
                tracing::debug!(index = idx, "stroke builder skipping off-type fractal");
            }
        }
    }

    if kept.len() < 2 {
        return Vec::new();
    }

    kept.windows(2)
        .enumerate()
        .map(|(id, pair)| {
            let (start_index, end_index) = (pair[0], pair[1]);
            let start_type = bars[start_index].fractal_type;
            let end_type = bars[end_index].fractal_type;
            let start_price = endpoint_price(&bars[start_index], start_type);
            let end_price = endpoint_price(&bars[end_index], end_type);
            let direction = if start_type == FractalType::Bottom {
                Direction::Up
            } else {
                Direction::Down
            };
            Stroke {
                id,
                start_index,
                end_index,
                start_type,
                end_type,
                start_price,
                end_price,
                direction,
            }
        })
        .collect()
}

fn endpoint_price(bar: &StructuralBar, ty: FractalType) -> f64 {
    match ty {
        FractalType::Top => bar.high,
        FractalType::Bottom | FractalType::None => bar.low,
    }
}
