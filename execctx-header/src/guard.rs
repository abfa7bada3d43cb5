//! Include guard derived from the output file name

use crate::error::GenerateError;
use std::path::Path;

/// `#ifndef`/`#define`/`#endif` wrapper for a generated header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeGuard {
    name: String,
}

impl IncludeGuard {
    /// Guard for a header file name: uppercased, with every `.` turned into `_`
    pub fn from_file_name(file_name: &str) -> Self {
        IncludeGuard {
            name: file_name.to_uppercase().replace('.', "_"),
        }
    }

    /// Guard for the file named by the last component of `path`
    pub fn from_output_path(path: impl AsRef<Path>) -> Result<Self, GenerateError> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .ok_or_else(|| GenerateError::path_validation(path, "output path has no file name"))?
            .to_str()
            .ok_or_else(|| {
                GenerateError::path_validation(path, "output file name is not valid UTF-8")
            })?;
        Ok(Self::from_file_name(file_name))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text placed before the struct block
    pub fn opening(&self) -> String {
        format!("\n#ifndef {0}\n#define {0}\n\n", self.name)
    }

    /// Text placed after the struct block, with no trailing newline
    pub fn closing(&self) -> String {
        format!("\n\n#endif // {}", self.name)
    }
}
