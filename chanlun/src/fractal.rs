//! Tags each structural bar as a local 3-bar extremum (top/bottom) or
//! neither. The very first bar has no left neighbor, so its mark is instead
//! driven by the seed direction established by the trimmer.

use crate::bar::StructuralBar;
use crate::constant::{Direction, FractalType};

/// Marks every structural bar's `fractal_type` in place. The last bar never
/// receives a mark (it has no right neighbor).
pub fn identify(bars: &mut [StructuralBar], seed: Direction) {
    for bar in bars.iter_mut() {
        bar.fractal_type = FractalType::None;
    }

    if bars.is_empty() {
        return;
    }

    bars[0].fractal_type = match seed {
        Direction::Down => FractalType::Top,
        Direction::Up => FractalType::Bottom,
    };

    if bars.len() < 3 {
        return;
    }

    for i in 1..=(bars.len() - 2) {
        let is_top = bars[i].high > bars[i - 1].high && bars[i].high > bars[i + 1].high;
        let is_bottom = bars[i].low < bars[i - 1].low && bars[i].low < bars[i + 1].low;
        bars[i].fractal_type = if is_top {
            FractalType::Top
        } else if is_bottom {
            FractalType::Bottom
        } else {
            FractalType::None
        };
    }
}
