//! Driven ports: traits implemented by the adapters crate.

use crate::application::error::ApplicationError;
use crate::domain::{ComponentKind, GeneratedSource};

/// A consumer of generated source text.
///
/// Sinks are pure consumers: they must write the text verbatim (a paginated
/// document may add page furniture around it, but never alter the code
/// itself) and must not hold on to it after `write` returns.
pub trait CodeSink {
    /// A short label for logging ("file", "stdout", ...).
    fn label(&self) -> &'static str;

    /// Consume one generated unit.
    fn write(&self, kind: ComponentKind, source: &GeneratedSource) -> Result<(), ApplicationError>;
}
