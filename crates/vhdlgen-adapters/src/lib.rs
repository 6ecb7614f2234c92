//! Infrastructure adapters for vhdlgen.
//!
//! Implementations of the core [`CodeSink`] port: plain file export,
//! fixed-width paginated document export, stdout, and an in-memory capture
//! for tests. Every sink writes the generated text verbatim; none of them
//! transform the code.
//!
//! [`CodeSink`]: vhdlgen_core::application::ports::CodeSink

pub mod sinks;

pub use sinks::{DocumentSink, FileSink, MemorySink, StdoutSink};
