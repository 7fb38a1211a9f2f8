//! Data acquirer interface: the pipeline's only inbound boundary.
//! `CsvAcquirer` is the one concrete, fully working acquirer; `MootdxAcquirer`
//! and `BaostockAcquirer` are thin stubs standing in for network-backed
//! sources this crate does not reach out over the network for.

use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;

use crate::bar::RawBar;
use crate::constant::{AdjustMode, DataType, Frequency};
use crate::error::ChanlunError;

#[derive(Debug, Clone)]
pub struct FetchRequest {
    pub symbol: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub data_type: DataType,
    pub frequency: Frequency,
    pub adjust_mode: AdjustMode,
}

pub trait Acquirer {
    /// Returns strictly-ascending, deduplicated, cleaned bars for the
    /// requested window. May return an empty vector if no data exists in
    /// range; never returns bars outside `[start_date, end_date]`.
    fn fetch(&self, request: &FetchRequest) -> Result<Vec<RawBar>, ChanlunError>;
}

/// Reads bars from a CSV file on disk. Column names accept common aliases
/// so exports from different sources line up without preprocessing.
pub struct CsvAcquirer {
    path: PathBuf,
}

impl CsvAcquirer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Acquirer for CsvAcquirer {
    fn fetch(&self, request: &FetchRequest) -> Result<Vec<RawBar>, ChanlunError> {
        let bars = load_raw_bars(&self.path)?;
        let mut filtered: Vec<RawBar> = bars
            .into_iter()
            .filter(|bar| {
                let date = bar.timestamp.date_naive();
                date >= request.start_date && date <= request.end_date
            })
            .collect();

        filtered.sort_by_key(|bar| bar.timestamp);
        filtered.dedup_by_key(|bar| bar.timestamp);

        for bar in &filtered {
            bar.validate()?;
        }

        Ok(filtered)
    }
}

#[derive(Debug, Deserialize)]
struct CsvBarRow {
    datetime: String,
    #[serde(alias = "open")]
    open: f64,
    #[serde(alias = "high")]
    high: f64,
    #[serde(alias = "low")]
    low: f64,
    #[serde(alias = "close")]
    close: f64,
    #[serde(default)]
    volume: f64,
    #[serde(default, alias = "money")]
    amount: f64,
}

fn load_raw_bars(path: &Path) -> Result<Vec<RawBar>, ChanlunError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut out = Vec::new();

    for row in reader.deserialize::<CsvBarRow>() {
        let row = row?;
        let timestamp = parse_datetime(&row.datetime)?;

        if row.volume == 0.0 || row.amount == 0.0 {
            tracing::warn!(%timestamp, "bar missing volume/amount, defaulting to 0");
        }

        out.push(RawBar {
            timestamp,
            open: row.open,
            high: row.high,
            low: row.low,
            close: row.close,
            volume: row.volume,
            amount: row.amount,
        });
    }

    Ok(out)
}

fn parse_datetime(value: &str) -> Result<DateTime<Utc>, ChanlunError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }

    let patterns = [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y/%m/%d %H:%M:%S%.f",
        "%Y%m%d%H%M%S%.f",
        "%Y-%m-%d",
    ];

    for pattern in patterns {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, pattern) {
            return Ok(DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc));
        }
        if let Ok(date) = NaiveDate::parse_from_str(value, pattern) {
            return Ok(DateTime::<Utc>::from_naive_utc_and_offset(
                date.and_hms_opt(0, 0, 0).expect("midnight is always valid"),
                Utc,
            ));
        }
    }

    Err(ChanlunError::InputValue(format!(
        "unrecognized datetime format: {value}"
    )))
}

/// Mootdx-backed fetcher placeholder. This crate does not open network
/// connections; callers needing live data should implement `Acquirer`
/// against their own transport.
pub struct MootdxAcquirer;

impl Acquirer for MootdxAcquirer {
    fn fetch(&self, _request: &FetchRequest) -> Result<Vec<RawBar>, ChanlunError> {
        Err(ChanlunError::DataUnavailable(
            "mootdx acquirer requires a network-backed implementation".into(),
        ))
    }
}

/// Baostock-backed fetcher placeholder; see [`MootdxAcquirer`].
pub struct BaostockAcquirer;

impl Acquirer for BaostockAcquirer {
    fn fetch(&self, _request: &FetchRequest) -> Result<Vec<RawBar>, ChanlunError> {
        Err(ChanlunError::DataUnavailable(
            "baostock acquirer requires a network-backed implementation".into(),
        ))
    }
}
