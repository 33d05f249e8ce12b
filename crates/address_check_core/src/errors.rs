//! Error types for address resolution and validation.

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;

/// Errors that can occur while resolving metadata or validating an address.
///
/// Absent metadata is not represented here. A region without a record is a
/// normal value (`None`) everywhere except the global level, where validation
/// cannot proceed without it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A region key the operation depends on was blank.
    ///
    /// Raised before any fetch is issued; retrying cannot succeed without a
    /// different argument.
    #[error("Required {level} key was not provided")]
    MissingKey {
        /// The hierarchy level whose key was missing.
        level: String,
    },

    /// The global metadata record could not be resolved, so there is nothing
    /// to validate against.
    #[error("Global metadata is unavailable")]
    GlobalUnavailable,

    /// A failure reported by the metadata client, passed through unmodified.
    #[error(transparent)]
    Client(#[from] metadata_client::Error),
}

impl Error {
    /// Creates a missing-key error for the given hierarchy level.
    pub(crate) fn missing_key(level: &str) -> Self {
        Error::MissingKey {
            level: level.to_string(),
        }
    }
}
