//! End-to-end generation of the 32-bit pointer header
//!
//! [`render_header`] is the pure text pipeline; [`generate`] wraps it with
//! path validation and file I/O.

use crate::banner::Banner;
use crate::error::GenerateError;
use crate::extract::extract_struct;
use crate::guard::IncludeGuard;
use crate::io::{load_string, save_string};
use crate::pointers::substitute_pointer_types;
use std::path::{Path, PathBuf};

/// Default input, relative to the generator's scripts directory
pub const DEFAULT_INPUT: &str = "../../AICMetadataExecCtx.h";
/// Default output, relative to the generator's scripts directory
pub const DEFAULT_OUTPUT: &str = "../deps-generated/execContextGenerated_32bitPointers.h";
/// Default scalar type replacing every pointer
pub const DEFAULT_POINTER_TYPE: &str = "uint32_t";

/// Inputs of a single generator run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub pointer_type: String,
    pub banner: Banner,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            pointer_type: DEFAULT_POINTER_TYPE.to_string(),
            banner: Banner::default(),
        }
    }
}

/// Build the complete header text from the source header contents
pub fn render_header(
    source: &str,
    guard: &IncludeGuard,
    pointer_type: &str,
    banner: &Banner,
) -> Result<String, GenerateError> {
    let extracted = extract_struct(source)?;
    let completed = substitute_pointer_types(&extracted, pointer_type);

    Ok(format!(
        "{}{}{}{}",
        banner.render(),
        guard.opening(),
        completed,
        guard.closing()
    ))
}

/// Check that the input exists and the output's directory exists
///
/// A bare file name has an empty parent, which stands for the current
/// directory.
pub fn validate_paths(input: &Path, output: &Path) -> Result<(), GenerateError> {
    if !input.exists() {
        return Err(GenerateError::path_validation(
            input,
            "input path does not exist",
        ));
    }

    let parent = match output.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
        Some(parent) => parent,
        None => {
            return Err(GenerateError::path_validation(
                output,
                "output path has no parent directory",
            ))
        }
    };
    if !parent.is_dir() {
        return Err(GenerateError::path_validation(
            output,
            "output directory does not exist",
        ));
    }
    Ok(())
}

/// Run the generator: validate, load, transform, write
///
/// Returns the path that was written. Nothing is written unless every step
/// before the save succeeds.
pub fn generate(options: &GenerateOptions) -> Result<PathBuf, GenerateError> {
    validate_paths(&options.input, &options.output)?;
    let guard = IncludeGuard::from_output_path(&options.output)?;

    tracing::debug!(input = %options.input.display(), "loading source header");
    let source = load_string(&options.input)?;

    let header = render_header(&source, &guard, &options.pointer_type, &options.banner)?;
    save_string(&options.output, &header)?;

    tracing::info!(
        output = %options.output.display(),
        guard = guard.name(),
        pointer_type = %options.pointer_type,
        "generated header"
    );
    Ok(options.output.clone())
}
