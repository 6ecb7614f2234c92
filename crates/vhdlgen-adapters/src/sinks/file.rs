//! Plain file export.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use vhdlgen_core::application::error::ApplicationError;
use vhdlgen_core::application::ports::CodeSink;
use vhdlgen_core::domain::{ComponentKind, GeneratedSource};

/// Writes generated source verbatim to a user-chosen path.
///
/// Follows the `.vhdl`/`.vhd` extension convention: a path that already
/// carries one of the two is used as-is, anything else gets `.vhd` appended.
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: normalize_extension(path.into()),
        }
    }

    /// The path this sink will write to, after extension normalization.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn normalize_extension(path: PathBuf) -> PathBuf {
    match path.extension().and_then(|e| e.to_str()) {
        Some("vhd") | Some("vhdl") => path,
        _ => {
            let mut os = path.into_os_string();
            os.push(".vhd");
            PathBuf::from(os)
        }
    }
}

impl CodeSink for FileSink {
    fn label(&self) -> &'static str {
        "file"
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn write(&self, _kind: ComponentKind, source: &GeneratedSource) -> Result<(), ApplicationError> {
        fs::write(&self.path, source.as_str()).map_err(|e| ApplicationError::Io {
            target: self.path.display().to_string(),
            source: e,
        })?;
        info!("source written");
        Ok(())
    }
}
