//! Pipeline and acquirer configuration.
//!
//! `PipelineConfig` is the TOML-deserializable set of run defaults.
//! `ServerProbeConfig` persists the best-latency data server choice to a
//! JSON sidecar file with a time-to-live.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::constant::{AdjustMode, DataSource, DataType, Frequency};
use crate::error::ChanlunError;

/// Run defaults, loaded from a TOML file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PipelineConfig {
    pub stock_code: String,
    pub start_date: chrono::NaiveDate,
    pub data_source: DataSourceName,
    pub data_type: DataType,
    pub frequency: Frequency,
    #[serde(default)]
    pub adjust_mode: AdjustMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSourceName {
    Mootdx,
    Baostock,
}

impl From<DataSourceName> for DataSource {
    fn from(name: DataSourceName) -> Self {
        match name {
            DataSourceName::Mootdx => DataSource::Mootdx,
            DataSourceName::Baostock => DataSource::Baostock,
        }
    }
}

impl PipelineConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, ChanlunError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self, ChanlunError> {
        let raw = fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}

/// The best-latency server probe result, persisted as JSON next to the
/// config file. A probe older than [`ServerProbeConfig::TTL_DAYS`] is
/// treated as stale and must be re-run.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerProbeConfig {
    pub optimal_server: String,
    pub latency_ms: Option<f64>,
    pub last_updated: DateTime<Utc>,
}

impl ServerProbeConfig {
    pub const TTL_DAYS: i64 = 7;

    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(self.last_updated) > Duration::days(Self::TTL_DAYS)
    }

    /// Loads a probe config from disk. Returns `Ok(None)` if the file is
    /// missing or the stored probe has gone stale (never an error — a
    /// missing or expired cache simply means "probe again").
    pub fn load(path: &Path, now: DateTime<Utc>) -> Result<Option<Self>, ChanlunError> {
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path)?;
        let parsed: Self = serde_json::from_str(&raw)?;
        if parsed.is_stale(now) {
            tracing::info!(last_updated = %parsed.last_updated, "server probe config stale, re-probing");
            return Ok(None);
        }
        Ok(Some(parsed))
    }

    pub fn save(&self, path: &Path) -> Result<(), ChanlunError> {
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(path, raw)?;
        Ok(())
    }
}
