//! Application layer: orchestration around the pure generators.
//!
//! The only use case is "generate one unit and hand it to the export
//! sinks"; [`ExportService`] owns that workflow and talks to infrastructure
//! exclusively through the [`ports::CodeSink`] trait.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::ExportService;
