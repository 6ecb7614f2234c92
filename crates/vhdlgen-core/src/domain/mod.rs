//! Core domain layer for vhdlgen.
//!
//! Pure generation logic with no I/O and no shared mutable state: a
//! [`ComponentConfig`] goes in, a [`GeneratedSource`] comes out, and nothing
//! else happens. All filesystem and display concerns live behind the
//! application ports.

// Public API - what the world sees
pub mod config;
pub mod error;
pub mod format;
pub mod generators;
pub mod source;

// Re-exports for convenience
pub use config::{
    ComponentConfig, ComponentKind, ComponentParams, Identity, ImplementationKeyword,
    ShiftVariant, UnknownKindError, ranges,
};
pub use error::{DomainError, ErrorCategory};
pub use generators::generate;
pub use source::GeneratedSource;
