//! YAML validation for emitted documents.
//!
//! The emitter is hand-rolled, so every document is parsed back through
//! a real YAML parser before it leaves the pipeline. A failure here
//! means the emitter produced something structurally broken, surfaced as
//! [`ConvertError::Syntax`] with the offending document attached.

use crate::error::ConvertError;

/// Parse a YAML document, returning [`ConvertError::Syntax`] on failure.
///
/// Empty documents are valid; they parse as null.
pub fn validate(document: &str) -> Result<(), ConvertError> {
    match serde_yml::from_str::<serde_yml::Value>(document) {
        Ok(_) => Ok(()),
        Err(e) => Err(ConvertError::Syntax {
            message: e.to_string(),
            document: document.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_document_passes() {
        let yaml = "- DivControl:\n    Control: GroupContainer@1.4.0\n";
        assert!(validate(yaml).is_ok());
    }

    #[test]
    fn literal_block_scalar_passes() {
        let yaml = "- PControl:\n    Properties:\n      Text: |-\n        =\"Hi\"\n";
        assert!(validate(yaml).is_ok());
    }

    #[test]
    fn broken_indentation_fails() {
        let yaml = "- A:\n  B: [unclosed\n";
        let err = validate(yaml).unwrap_err();
        match err {
            ConvertError::Syntax { document, .. } => assert_eq!(document, yaml),
            other => panic!("expected syntax error, got {other:?}"),
        }
    }

    #[test]
    fn empty_document_passes() {
        assert!(validate("").is_ok());
    }
}
