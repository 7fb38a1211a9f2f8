use chrono::{DateTime, Utc};

use crate::constant::{Direction, FractalType};
use crate::error::ChanlunError;

/// A single OHLCV price bar as delivered by an acquirer. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct RawBar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub amount: f64,
}

/// Validates the sequence-level invariants of a raw bar batch: strictly
/// ascending, unique timestamps. A single out-of-order or duplicated
/// timestamp fails the whole batch, since the merger and trimmer both
/// assume chronological order with no local recovery.
pub fn validate_sequence(bars: &[RawBar]) -> Result<(), ChanlunError> {
    for pair in bars.windows(2) {
        if pair[1].timestamp <= pair[0].timestamp {
            return Err(ChanlunError::InputShape(format!(
                "non-monotonic or duplicate timestamp: {} did not strictly follow {}",
                pair[1].timestamp, pair[0].timestamp
            )));
        }
    }
    Ok(())
}

impl RawBar {
    /// Validates the OHLC ordering and positivity invariants from the data model.
    pub fn validate(&self) -> Result<(), ChanlunError> {
        if self.open <= 0.0 || self.high <= 0.0 || self.low <= 0.0 || self.close <= 0.0 {
            return Err(ChanlunError::InputValue(format!(
                "non-positive price at {}",
                self.timestamp
            )));
        }
        let max_body = self.open.max(self.close).max(self.low);
        let min_body = self.open.min(self.close).min(self.high);
        if self.high < max_body {
            return Err(ChanlunError::InputValue(format!(
                "high {} below max(open,close,low) at {}",
                self.high, self.timestamp
            )));
        }
        if self.low > min_body {
            return Err(ChanlunError::InputValue(format!(
                "low {} above min(open,close,high) at {}",
                self.low, self.timestamp
            )));
        }
        Ok(())
    }
}

/// A containment-merged bar. Carries the fractal mark it was last tagged
/// with; a single `FractalType::None` variant stands in for "no mark",
/// which removes the "is_fractal=true but fractal_type=None" inconsistency
/// a boolean-plus-option pair would allow.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuralBar {
    pub timestamp: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub amount: f64,
    pub direction: Direction,
    pub fractal_type: FractalType,
}

impl StructuralBar {
    pub fn is_fractal(&self) -> bool {
        self.fractal_type.is_some()
    }

    /// Containment relation: one bar's range fully covers the other's.
    pub fn is_inclusive(&self, other: &Self) -> bool {
        is_inclusive(self.high, self.low, other.high, other.low)
    }
}

pub(crate) fn is_inclusive(a_high: f64, a_low: f64, b_high: f64, b_low: f64) -> bool {
    (a_high >= b_high && a_low <= b_low) || (a_high <= b_high && a_low >= b_low)
}

/// A stroke linking two consecutive, alternating surviving fractals.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub id: usize,
    pub start_index: usize,
    pub end_index: usize,
    pub start_type: FractalType,
    pub end_type: FractalType,
    pub start_price: f64,
    pub end_price: f64,
    pub direction: Direction,
}
