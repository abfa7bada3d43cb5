//! Error type shared by every step of header generation

use std::path::PathBuf;

/// Error that can occur while generating the 32-bit pointer header
///
/// None of these are recovered from locally. The I/O variants carry only the
/// path: the operating system cause is logged and then dropped, so callers see
/// one uniform message per failure kind.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    /// Input missing or output directory missing, raised before any I/O
    #[error("Invalid path {}: {reason}", .path.display())]
    PathValidation { path: PathBuf, reason: String },

    /// The input passed validation but could not be read
    #[error("Could not open file {}", .path.display())]
    Load { path: PathBuf },

    /// The output could not be opened for writing or the write failed
    #[error("Could not write to file {}", .path.display())]
    Save { path: PathBuf },

    /// A struct delimiter was not present in the source text
    #[error("Marker not found in source: `{marker}`")]
    MarkerNotFound { marker: &'static str },

    /// Configuration could not be loaded or deserialized
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GenerateError {
    pub(crate) fn path_validation(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        GenerateError::PathValidation {
            path: path.into(),
            reason: reason.into(),
        }
    }
}
