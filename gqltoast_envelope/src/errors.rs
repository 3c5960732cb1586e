//! Error types for envelope decoding.

/// Errors that can occur when accepting an error envelope from the GraphQL layer.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The payload was not valid JSON or did not have the envelope's shape.
    #[error("Malformed error envelope: {0}")]
    Malformed(#[from] serde_json::Error),
    /// The envelope carried no string `message`.
    #[error("Error envelope has no summary message")]
    MissingSummary,
    /// An entry of `graphQLErrors` could not be read as a GraphQL error.
    #[error("Invalid GraphQL error at index {index}: {reason}")]
    InvalidGraphError { index: usize, reason: String },
}
