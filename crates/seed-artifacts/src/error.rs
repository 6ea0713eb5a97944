//! Error types for artifact reading and writing.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while exchanging artifacts between stages.
#[derive(Error, Debug)]
pub enum ArtifactError {
    /// The artifact file does not exist.
    #[error("Artifact '{}' not found; run the stage that produces it first", path.display())]
    Missing { path: PathBuf },

    /// IO error.
    #[error("IO error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// CSV error.
    #[error("CSV error in '{}': {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },

    /// The header row does not match the artifact's column contract.
    #[error("Unexpected header in '{}': expected {expected:?}, found {found:?}", path.display())]
    Header {
        path: PathBuf,
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// A data row could not be parsed.
    #[error("Malformed row in '{}' at line {line}: {message}", path.display())]
    Malformed {
        path: PathBuf,
        line: u64,
        message: String,
    },
}
