//! Domain errors: everything that can stop a generation call.
//!
//! Generation is all-or-nothing; when one of these is returned no partial
//! text has been produced. Both variants are deterministic, so retrying with
//! the same input is pointless by construction.

use thiserror::Error;

use crate::domain::config::ComponentKind;

/// Root domain error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The configuration variant does not match the requested kind.
    ///
    /// This is a caller defect, not a recoverable condition: the dispatcher
    /// fails fast instead of guessing which of the two the caller meant.
    #[error("config carries '{found}' parameters but '{expected}' was requested")]
    ConfigMismatch {
        expected: ComponentKind,
        found: ComponentKind,
    },

    /// A numeric field falls outside its documented range.
    ///
    /// The caller is expected to validate upstream (the CLI does, at parse
    /// time); this is the defensive re-check so that malformed text can never
    /// reach the export sinks, which have no validation of their own.
    #[error("parameter '{parameter}' is {value}, outside the supported range {min}..={max}")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: u8,
        min: u8,
        max: u8,
    },
}

impl DomainError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigMismatch { expected, found } => vec![
                format!("The requested kind was '{expected}' but the config is for '{found}'"),
                "This is a bug in the calling code, please report it".into(),
            ],
            Self::ParameterOutOfRange {
                parameter,
                min,
                max,
                ..
            } => vec![
                format!("'{parameter}' must be between {min} and {max}"),
                "Run with --help to see the supported ranges".into(),
            ],
        }
    }

    /// Error category for display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigMismatch { .. } => ErrorCategory::Defect,
            Self::ParameterOutOfRange { .. } => ErrorCategory::Validation,
        }
    }
}

/// Coarse classification used by callers to pick styling and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input; the user can fix it.
    Validation,
    /// Programmer error in the caller.
    Defect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mismatch_is_a_defect() {
        let err = DomainError::ConfigMismatch {
            expected: ComponentKind::Mux,
            found: ComponentKind::Sram,
        };
        assert_eq!(err.category(), ErrorCategory::Defect);
        assert!(err.to_string().contains("mux"));
        assert!(err.to_string().contains("sram"));
    }

    #[test]
    fn out_of_range_is_validation_with_range_in_suggestions() {
        let err = DomainError::ParameterOutOfRange {
            parameter: "divisor",
            value: 65,
            min: 1,
            max: 64,
        };
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(err.suggestions().iter().any(|s| s.contains("1 and 64")));
    }
}
