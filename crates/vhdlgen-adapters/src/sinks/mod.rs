//! Export sinks.

mod document;
mod file;
mod memory;
mod stdout;

pub use document::DocumentSink;
pub use file::FileSink;
pub use memory::MemorySink;
pub use stdout::StdoutSink;
