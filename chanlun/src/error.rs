#[derive(Debug, thiserror::Error)]
pub enum ChanlunError {
    #[error("input shape error: {0}")]
    InputShape(String),

    #[error("input value error: {0}")]
    InputValue(String),

    #[error("data unavailable: {0}")]
    DataUnavailable(String),

    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("toml error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type ChanlunResult<T> = Result<T, ChanlunError>;
