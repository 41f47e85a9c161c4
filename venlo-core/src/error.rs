use thiserror::Error;

/// Why a forecast fetch produced no data.
///
/// Every variant is recoverable: the caller reports it and skips rendering for
/// the current cycle.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out after {0} s")]
    Timeout(u64),

    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Open-Meteo request failed with status {status}: {body}")]
    Status { status: reqwest::StatusCode, body: String },

    #[error("Failed to parse Open-Meteo JSON: {0}")]
    Decode(#[from] serde_json::Error),
}
