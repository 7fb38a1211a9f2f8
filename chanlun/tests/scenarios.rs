//! Integration tests covering literal end-to-end scenarios and the
//! quantified invariants from the pipeline's testable-properties section,
//! exercised through the crate's public surface rather than module
//! internals.

use chanlun::bar::{RawBar, StructuralBar};
use chanlun::constant::{Direction, FractalType};
use chanlun::{filter, pipeline, stroke};
use chrono::{TimeZone, Utc};

fn sbar(hour: i64, high: f64, low: f64, fractal_type: FractalType) -> StructuralBar {
    StructuralBar {
        timestamp: Utc.timestamp_opt(1_700_000_000 + hour * 3600, 0).unwrap(),
        open: (high + low) / 2.0,
        high,
        low,
        close: (high + low) / 2.0,
        volume: 0.0,
        amount: 0.0,
        direction: Direction::Up,
        fractal_type,
    }
}

fn raw(hour: i64, open: f64, high: f64, low: f64, close: f64) -> RawBar {
    RawBar {
        timestamp: Utc.timestamp_opt(1_700_000_000 + hour * 3600, 0).unwrap(),
        open,
        high,
        low,
        close,
        volume: 100.0,
        amount: 1000.0,
    }
}

#[test]
fn scenario_d_alternation_skip() {
    // Surviving marks (in order): top@2, top@5, bottom@8, top@11.
    let mut bars: Vec<StructuralBar> = (0..=11)
        .map(|i| sbar(i, 10.0, 5.0, FractalType::None))
        .collect();
    bars[2].fractal_type = FractalType::Top;
    bars[5].fractal_type = FractalType::Top;
    bars[8].fractal_type = FractalType::Bottom;
    bars[11].fractal_type = FractalType::Top;

    let strokes = stroke::build(&bars);

    assert_eq!(strokes.len(), 2);
    assert_eq!((strokes[0].start_index, strokes[0].end_index), (2, 8));
    assert_eq!(strokes[0].direction, Direction::Down);
    assert_eq!((strokes[1].start_index, strokes[1].end_index), (8, 11));
    assert_eq!(strokes[1].direction, Direction::Up);
}

#[test]
fn scenario_f_relationship_invalidation_kept() {
    let mut bars = vec![
        sbar(5, 60.0, 50.0, FractalType::Bottom),
        sbar(7, 52.0, 40.0, FractalType::Top),
        sbar(9, 60.0, 51.0, FractalType::Bottom),
    ];
    filter::f3_relationship_validator(&mut bars);
    assert_eq!(bars[1].fractal_type, FractalType::Top);
}

#[test]
fn scenario_f_relationship_invalidation_cleared() {
    // Same shape, but top@7's high (50) no longer strictly dominates bottom@5's low (50).
    let mut bars = vec![
        sbar(5, 60.0, 50.0, FractalType::Bottom),
        sbar(7, 50.0, 40.0, FractalType::Top),
        sbar(9, 60.0, 51.0, FractalType::Bottom),
    ];
    filter::f3_relationship_validator(&mut bars);
    assert_eq!(bars[1].fractal_type, FractalType::None);
}

#[test]
fn invariant_no_adjacent_containment_across_full_pipeline() {
    let bars: Vec<RawBar> = (0..40)
        .map(|i| {
            let base = 10.0 + ((i as f64) * 0.9).cos() * 6.0;
            raw(i, base, base + 3.0, base - 3.0, base + 0.2)
        })
        .collect();
    let out = pipeline::run(bars).unwrap();
    for pair in out.structural_bars.windows(2) {
        assert!(!pair[0].is_inclusive(&pair[1]));
    }
}

#[test]
fn invariant_strokes_alternate_and_are_ordered() {
    let bars: Vec<RawBar> = (0..60)
        .map(|i| {
            let base = 20.0 + ((i as f64) * 0.5).sin() * 8.0;
            raw(i, base, base + 2.5, base - 2.5, base + 0.3)
        })
        .collect();
    let out = pipeline::run(bars).unwrap();

    for stroke in &out.strokes {
        assert_ne!(stroke.start_type, stroke.end_type);
        assert!(stroke.start_index < stroke.end_index);
        let expected_direction = if stroke.start_type == FractalType::Bottom {
            Direction::Up
        } else {
            Direction::Down
        };
        assert_eq!(stroke.direction, expected_direction);
    }
    for pair in out.strokes.windows(2) {
        assert!(pair[0].end_index <= pair[1].start_index);
    }
}

#[test]
fn filter_chain_monotonicity_is_a_fixpoint() {
    let n: i64 = 25;
    let mut bars: Vec<StructuralBar> = (0..n)
        .map(|i| {
            let h = 10.0 + ((i as f64) * 1.3).sin() * 7.0;
            sbar(i, h + 2.0, h - 2.0, FractalType::None)
        })
        .collect();

    bars[0].fractal_type = FractalType::Bottom;
    for i in 1..(bars.len() - 1) {
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

    filter::run_chain(&mut bars);
    let once = bars.clone();
    filter::run_chain(&mut bars);
    assert_eq!(bars, once);
}

#[test]
fn determinism_across_repeated_runs() {
    let bars: Vec<RawBar> = (0..50)
        .map(|i| {
            let base = 20.0 + ((i as f64) * 0.33).cos() * 9.0;
            raw(i, base, base + 4.0, base - 4.0, base + 1.0)
        })
        .collect();
    let a = pipeline::run(bars.clone()).unwrap();
    let b = pipeline::run(bars).unwrap();
    assert_eq!(a, b);
}

#[test]
fn boundary_all_identical_bars_merge_into_one_structural_bar() {
    let bars: Vec<RawBar> = (0..5).map(|i| raw(i, 5.0, 10.0, 5.0, 7.0)).collect();
    let out = pipeline::run(bars).unwrap();
    assert_eq!(out.structural_bars.len(), 1);
}

#[test]
fn boundary_strictly_increasing_highs_and_lows_never_merge() {
    let bars: Vec<RawBar> = (0..10)
        .map(|i| {
            let base = i as f64 + 1.0;
            raw(i, base, base + 5.0, base, base + 2.0)
        })
        .collect();
    let out = pipeline::run(bars.clone()).unwrap();
    assert_eq!(out.structural_bars.len(), bars.len());
}
