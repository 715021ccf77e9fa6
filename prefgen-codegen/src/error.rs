use thiserror::Error;

use crate::Diagnostic;

/// Fatal errors that stop generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A label reduces to an empty key; the schema itself must be fixed.
    #[error("setting '{path}' derives an empty key from label '{label}'")]
    DerivationPrecondition { path: String, label: String },

    /// One or more lints reported an error.
    #[error("settings schema check failed with {} error(s)", .errors.len())]
    Validation { errors: Vec<Diagnostic> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivation_precondition_formats() {
        let err = GenerateError::DerivationPrecondition {
            path: "Video|(x)".into(),
            label: "(x)".into(),
        };
        assert_eq!(
            err.to_string(),
            "setting 'Video|(x)' derives an empty key from label '(x)'"
        );
    }

    #[test]
    fn test_validation_counts_errors() {
        let err = GenerateError::Validation {
            errors: vec![
                Diagnostic::error("key-collision", "a"),
                Diagnostic::error("key-collision", "b"),
            ],
        };
        assert!(err.to_string().contains("2 error(s)"));
    }
}
