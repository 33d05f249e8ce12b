//! Error types for metadata client operations.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur while fetching metadata records.
///
/// A missing record is not represented here: queries report absence as
/// `Ok(None)`. These variants cover genuine failures of the transport or of
/// response decoding.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTTP request to the metadata service failed.
    #[error("Failed to reach the metadata service: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered, but the body was not a valid metadata record.
    #[error("Failed to deserialize metadata record: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The configured endpoint and record identifier do not form a valid URL.
    #[error("Invalid metadata record URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}
