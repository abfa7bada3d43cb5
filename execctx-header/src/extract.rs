//! Struct block extraction
//!
//! The block is located with two literal delimiters rather than by parsing C.
//! Only the first opening delimiter, and the first closing delimiter after it,
//! are considered.

use crate::error::GenerateError;

/// Opening delimiter of the struct block
pub const OPENING_MARKER: &str = "typedef struct AICExecContext_ {";
/// Closing delimiter of the struct block
pub const CLOSING_MARKER: &str = "} AICExecContext;";

/// Struct tag and its 32-bit pointer rename
pub const TAG: &str = "AICExecContext_";
pub const TAG_RENAMED: &str = "AICExecContext_32bitPointers";

/// Typedef alias (with its terminating semicolon) and its rename
pub const ALIAS: &str = "AICExecContext;";
pub const ALIAS_RENAMED: &str = "AICExecContext32bitPointers;";

/// Extract the struct block from `source` and rename its tag and alias
///
/// The returned text runs from the opening delimiter through the closing
/// delimiter inclusive. Every occurrence of [`TAG`] and [`ALIAS`] inside the
/// block is renamed, including ones that appear in comments.
pub fn extract_struct(source: &str) -> Result<String, GenerateError> {
    let (_, after_opening) =
        source
            .split_once(OPENING_MARKER)
            .ok_or(GenerateError::MarkerNotFound {
                marker: OPENING_MARKER,
            })?;
    let (body, _) =
        after_opening
            .split_once(CLOSING_MARKER)
            .ok_or(GenerateError::MarkerNotFound {
                marker: CLOSING_MARKER,
            })?;

    tracing::debug!(body_len = body.len(), "extracted struct block");

    let block = format!("{OPENING_MARKER}{body}{CLOSING_MARKER}");
    Ok(block.replace(TAG, TAG_RENAMED).replace(ALIAS, ALIAS_RENAMED))
}
