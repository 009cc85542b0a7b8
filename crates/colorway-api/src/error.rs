//! Transport and decoding failures raised by the API client.

use thiserror::Error;

/// Anything that can go wrong while talking to the Figma API.
///
/// All variants are fatal for the request that raised them; retry policy
/// is left to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (DNS, TLS, timeout, connection reset).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("figma returned HTTP {code} for {url}")]
    Status { code: u16, url: String },

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
