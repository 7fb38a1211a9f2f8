//! Top-level driver wiring trimmer → merger → fractal identifier → filter
//! chain → stroke builder into a single batch call.

use crate::bar::{self, RawBar, Stroke, StructuralBar};
use crate::error::ChanlunError;
use crate::filter::run_chain;
use crate::{fractal, merger, stroke, trimmer};

/// Everything the pipeline produces from one batch of raw bars.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub structural_bars: Vec<StructuralBar>,
    pub strokes: Vec<Stroke>,
}

/// Runs the full batch pipeline: trim, merge, identify fractals, run the
/// five-stage filter chain, then build strokes. Validates every raw bar
/// first; a single malformed bar fails the whole batch rather than
/// silently dropping it.
pub fn run(bars: Vec<RawBar>) -> Result<PipelineOutput, ChanlunError> {
    for raw in &bars {
        raw.validate()?;
    }
    bar::validate_sequence(&bars)?;

    let trimmed = trimmer::trim(bars);
    let Some(seed) = trimmed.seed_direction else {
        return Ok(PipelineOutput {
            structural_bars: Vec::new(),
            strokes: Vec::new(),
        });
    };

    let mut structural_bars = merger::merge(&trimmed.bars, seed);
    assert_no_adjacent_containment(&structural_bars)?;

    fractal::identify(&mut structural_bars, seed);
    run_chain(&mut structural_bars);
    let strokes = stroke::build(&structural_bars);

    tracing::info!(
        structural_bars = structural_bars.len(),
        strokes = strokes.len(),
        "pipeline run complete"
    );

    Ok(PipelineOutput {
        structural_bars,
        strokes,
    })
}

/// Defensive check on the merger's output: no two adjacent structural bars
/// may stand in containment, since the merger is supposed to have folded
/// every such pair away. A violation here is a programming bug in the
/// merger, not a bad input — surfaced as `InvariantViolation` rather than
/// one of the input-facing error kinds.
fn assert_no_adjacent_containment(bars: &[StructuralBar]) -> Result<(), ChanlunError> {
    for (i, pair) in bars.windows(2).enumerate() {
        if pair[0].is_inclusive(&pair[1]) {
            return Err(ChanlunError::InvariantViolation(format!(
                "structural bars {i} and {} are in containment after merge",
                i + 1
            )));
        }
    }
    Ok(())
}
