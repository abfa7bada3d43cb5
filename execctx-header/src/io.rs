//! Whole-file text loading and saving
//!
//! Both helpers collapse every underlying failure (missing file, permissions,
//! invalid UTF-8, bad path) into a single error naming the path.

use crate::error::GenerateError;
use std::fs;
use std::path::Path;

/// Read the full contents of `path` as UTF-8 text
pub fn load_string(path: impl AsRef<Path>) -> Result<String, GenerateError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|err| {
        tracing::debug!(path = %path.display(), error = %err, "load failed");
        GenerateError::Load {
            path: path.to_path_buf(),
        }
    })
}

/// Write `text` to `path`, truncating any existing content
pub fn save_string(path: impl AsRef<Path>, text: &str) -> Result<(), GenerateError> {
    let path = path.as_ref();
    fs::write(path, text).map_err(|err| {
        tracing::debug!(path = %path.display(), error = %err, "save failed");
        GenerateError::Save {
            path: path.to_path_buf(),
        }
    })
}
