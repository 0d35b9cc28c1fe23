//! Error types for the kpreport-core library.
//!
//! Every error is fatal to the batch: nothing here is retried or downgraded to
//! a per-item warning. The CLI prints the `Display` form and exits non-zero.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Sub-cause of a failed catalog lookup.
#[derive(Error, Debug)]
pub enum LookupFailure {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("encoding error: {0}")]
    Decode(String),

    #[error("JSON parse error: {0}")]
    Parse(String),

    /// The catalog answered but the title or the category was empty.
    #[error("could not get data from catalog")]
    Incomplete,
}

/// Custom error type for the kpreport-core library.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Failed to read input list '{path}': {source}")]
    InputListMissing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("\"{0}\" is empty")]
    InputListEmpty(PathBuf),

    #[error("Failed to create output file '{path}': {source}")]
    OutputCreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{0}: No such file or directory")]
    PathNotFound(PathBuf),

    #[error("File name '{file_name}' is wrong. MUST BE: {expected}")]
    MalformedFilename {
        file_name: String,
        expected: &'static str,
    },

    #[error("Client ID for the catalog API is not provided")]
    CredentialMissing,

    #[error("Catalog lookup for id {id} failed: {cause}")]
    CatalogLookupFailed { id: String, cause: LookupFailure },

    #[error("ffprobe: could not get metadata from '{path}': {reason}")]
    ProbeFailed { path: PathBuf, reason: String },

    #[error("Could not parse duration '{value}' of '{path}'")]
    DurationUnparsable { path: PathBuf, value: String },

    #[error("Failed to write report record: {0}")]
    WriteFailed(#[source] io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Path error: {0}")]
    PathError(String),

    #[error("{0}")]
    OperationFailed(String),
}

impl CoreError {
    /// True when the catalog answered without usable data, as opposed to a
    /// transport or protocol failure.
    #[must_use]
    pub fn is_incomplete_lookup(&self) -> bool {
        matches!(
            self,
            CoreError::CatalogLookupFailed {
                cause: LookupFailure::Incomplete,
                ..
            }
        )
    }
}

/// Result type alias used throughout kpreport-core.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_filename_names_pattern() {
        let err = CoreError::MalformedFilename {
            file_name: "randomfile.mp4".to_string(),
            expected: ".*coid(\\d+).*",
        };
        let msg = err.to_string();
        assert!(msg.contains("randomfile.mp4"));
        assert!(msg.contains("MUST BE: .*coid(\\d+).*"));
    }

    #[test]
    fn test_incomplete_lookup_detection() {
        let incomplete = CoreError::CatalogLookupFailed {
            id: "1".to_string(),
            cause: LookupFailure::Incomplete,
        };
        let network = CoreError::CatalogLookupFailed {
            id: "1".to_string(),
            cause: LookupFailure::Network("timed out".to_string()),
        };
        assert!(incomplete.is_incomplete_lookup());
        assert!(!network.is_incomplete_lookup());
        assert!(!CoreError::CredentialMissing.is_incomplete_lookup());
    }
}
