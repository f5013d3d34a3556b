use thiserror::Error;

/// Transport and payload failures of the outbound HTTP clients.
#[derive(Error, Debug)]
pub enum Error {
    #[error("{method} {url} failed")]
    Request { method: &'static str, url: String, source: reqwest::Error },

    #[error("Failed to build HTTP client")]
    Client { source: reqwest::Error },

    #[error("{method} {url} returned HTTP {status}: {body}")]
    Status { method: &'static str, url: String, status: u16, body: String },

    #[error("Failed to parse response from {url}")]
    Json { url: String, source: serde_json::Error },

    #[error("Response from {url} (HTTP {status}) is not a validation result: {body}")]
    InvalidValidation { url: String, status: u16, body: String, source: serde_json::Error },

    #[error("Content of {url} is not valid base64")]
    Base64 { url: String, source: base64::DecodeError },

    #[error("Content of {url} is not available inline (encoding '{encoding}')")]
    UnsupportedEncoding { url: String, encoding: String },

    #[error("URL parse error: {url} - {error}")]
    UrlParse { url: String, error: String },

    #[error("Access token contains characters that are not allowed in a header")]
    InvalidToken,
}

/// Result type alias for gallery_infra operations
pub type Result<T> = std::result::Result<T, Error>;

/// Shortens response bodies before they end up in error messages.
pub(crate) fn excerpt(body: &str) -> String {
    const LIMIT: usize = 500;
    match body.char_indices().nth(LIMIT) {
        Some((index, _)) => format!("{}...", &body[..index]),
        None => body.to_string(),
    }
}
