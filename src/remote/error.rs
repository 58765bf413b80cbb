use thiserror::Error;

/// Failures talking to the board service.
///
/// None of these touch the feed state: a failed fetch simply delivers no
/// new list.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("Invalid base URL '{url}': expected http:// or https://")]
    InvalidBaseUrl { url: String },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Board service returned {status}: {body}")]
    Status { status: u16, body: String },
}
