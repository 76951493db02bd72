//! Error types for jd-extract.
//!
//! Field extraction itself never fails; these errors only surface at the
//! edges, when reading input or serializing the extracted record.

/// Error type for input and output operations around extraction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading the job description failed.
    #[error("Failed to read job description: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing the extracted record failed.
    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
