use thiserror::Error;

pub type Result<T> = std::result::Result<T, SweepError>;

#[derive(Debug, Error)]
pub enum SweepError {
    /// A record failed its own documented shape. This is the one error that
    /// propagates to the caller; per-site failures never become errors.
    #[error("malformed report record: {0}")]
    MalformedRecord(String),

    #[error("{0}")]
    Other(String),
}

/* Conversions so `?` works smoothly */
impl From<std::io::Error> for SweepError {
    fn from(e: std::io::Error) -> Self {
        SweepError::Other(e.to_string())
    }
}
impl From<serde_json::Error> for SweepError {
    fn from(e: serde_json::Error) -> Self {
        SweepError::Other(e.to_string())
    }
}
impl From<reqwest::Error> for SweepError {
    fn from(e: reqwest::Error) -> Self {
        SweepError::Other(e.to_string())
    }
}
