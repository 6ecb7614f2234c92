//! Vhdlgen Core - generation logic for standard digital building blocks.
//!
//! This crate holds the domain and application layers of the `vhdlgen` tool.
//! The domain layer is a stateless library of pure generator functions that
//! map a [`domain::ComponentConfig`] to a [`domain::GeneratedSource`] string
//! of VHDL; the application layer fans a generated unit out to export sinks
//! via the [`application::ports::CodeSink`] port.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          vhdlgen-cli (CLI)              │
//! │      (Implements Driving Ports)         │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │           (ExportService)               │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │          (Driven: CodeSink)             │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    vhdlgen-adapters (Infrastructure)    │
//! │  (FileSink, DocumentSink, StdoutSink)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (ComponentConfig, generators, format)  │
//! │        No I/O, no shared state          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use vhdlgen_core::domain::{
//!     ComponentConfig, ComponentKind, ComponentParams, Identity, generate,
//! };
//!
//! let config = ComponentConfig::new(
//!     Identity::named("mux4", "behavioral"),
//!     ComponentParams::Mux { input_count: 4 },
//! );
//! let source = generate(ComponentKind::Mux, &config).unwrap();
//! assert!(source.as_str().contains("entity mux4 is"));
//! ```

// Domain layer (stable, well-defined API)
pub mod domain;

// Application layer (orchestration + ports)
pub mod application;

// Unified error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{ExportService, ports::CodeSink};
    pub use crate::domain::{
        ComponentConfig, ComponentKind, ComponentParams, GeneratedSource, Identity,
        ImplementationKeyword, ShiftVariant, generate,
    };
    pub use crate::error::{VhdlGenError, VhdlGenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
