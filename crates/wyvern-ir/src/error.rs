//! Conversion error types.

use thiserror::Error;

/// Errors produced by the conversion pipeline.
///
/// Only structural failures surface as errors; malformed CSS values and
/// unsupported selectors degrade to warnings or fallbacks instead.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input document was empty or whitespace-only.
    #[error("input document is empty")]
    EmptyInput,

    /// The input parsed but contained no element to convert.
    #[error("no root element found in input document")]
    NoRootElement,

    /// The emitted YAML failed to parse back, indicating an emitter bug
    /// or unrepresentable content.
    #[error("generated YAML failed validation: {message}")]
    Syntax {
        /// The parser's error message.
        message: String,
        /// The document that failed to validate, kept for diagnostics.
        document: String,
    },
}
