use thiserror::Error;

#[derive(Debug, Error)]
pub enum IpInfoError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("ipinfo returned error ({status}): {body}")]
    ApiError {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("ipinfo returned invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
