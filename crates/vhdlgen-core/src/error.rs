//! Unified error handling for vhdlgen core.
//!
//! Wraps domain and application errors behind one type so callers get a
//! single surface with categories and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for core operations.
#[derive(Debug, Error)]
pub enum VhdlGenError {
    /// Errors from the domain layer (generation refused).
    #[error("generation error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (export failures).
    #[error("export error: {0}")]
    Application(#[from] ApplicationError),

    /// Unexpected internal errors (bugs).
    #[error("internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl VhdlGenError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in vhdlgen".into(),
                "Please report it with the command you ran".into(),
            ],
        }
    }

    /// Error category for display/exit-code purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Defect => ErrorCategory::Internal,
            },
            Self::Application(_) => ErrorCategory::Export,
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Export,
    Internal,
}

/// Convenient result type alias.
pub type VhdlGenResult<T> = Result<T, VhdlGenError>;
