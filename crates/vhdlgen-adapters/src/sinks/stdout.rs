//! Stdout export.

use std::io::Write;

use tracing::instrument;

use vhdlgen_core::application::error::ApplicationError;
use vhdlgen_core::application::ports::CodeSink;
use vhdlgen_core::domain::{ComponentKind, GeneratedSource};

/// Writes generated source verbatim to standard output.
///
/// The code goes to stdout with nothing added around it, so the output pipes
/// cleanly into files and other tools. Status messages belong on stderr and
/// are the caller's business.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Self {
        Self
    }
}

impl CodeSink for StdoutSink {
    fn label(&self) -> &'static str {
        "stdout"
    }

    #[instrument(skip_all)]
    fn write(&self, _kind: ComponentKind, source: &GeneratedSource) -> Result<(), ApplicationError> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(source.as_str().as_bytes())
            .and_then(|()| handle.flush())
            .map_err(|e| ApplicationError::Io {
                target: "stdout".to_owned(),
                source: e,
            })
    }
}
