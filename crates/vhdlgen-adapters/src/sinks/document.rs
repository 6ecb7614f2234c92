//! Fixed-width paginated document export.
//!
//! Plain-text counterpart of the original tool's PDF export: the code is
//! laid out in a fixed-width grid, wrapped at a fixed column, split into
//! numbered pages, and written as one text document. The code itself is
//! carried verbatim; only page furniture (headers, separators) is added
//! around it.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use vhdlgen_core::application::error::ApplicationError;
use vhdlgen_core::application::ports::CodeSink;
use vhdlgen_core::domain::{ComponentKind, GeneratedSource};

/// Columns per line before wrapping.
const PAGE_WIDTH: usize = 80;
/// Content lines per page, excluding the two header lines.
const PAGE_LINES: usize = 56;
/// Separator between pages.
const FORM_FEED: char = '\u{000C}';

/// Renders a paginated document around the generated source and writes it
/// to a file.
pub struct DocumentSink {
    path: PathBuf,
}

impl DocumentSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CodeSink for DocumentSink {
    fn label(&self) -> &'static str {
        "document"
    }

    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn write(&self, kind: ComponentKind, source: &GeneratedSource) -> Result<(), ApplicationError> {
        let document = paginate(kind, source);
        fs::write(&self.path, document).map_err(|e| ApplicationError::Io {
            target: self.path.display().to_string(),
            source: e,
        })?;
        info!("document written");
        Ok(())
    }
}

/// Lay the source out as numbered fixed-width pages.
fn paginate(kind: ComponentKind, source: &GeneratedSource) -> String {
    let lines = wrap_lines(source.as_str());
    let pages = lines.chunks(PAGE_LINES).collect::<Vec<_>>();
    let total = pages.len().max(1);

    let mut out = String::new();
    for (index, page) in pages.iter().enumerate() {
        if index > 0 {
            out.push(FORM_FEED);
            out.push('\n');
        }
        out.push_str(&format!("-- {kind} | page {} of {total}\n\n", index + 1));
        for line in page.iter() {
            out.push_str(line);
            out.push('\n');
        }
    }
    if pages.is_empty() {
        out.push_str(&format!("-- {kind} | page 1 of 1\n\n"));
    }
    out
}

/// Split lines longer than [`PAGE_WIDTH`] on character boundaries.
fn wrap_lines(text: &str) -> Vec<String> {
    let mut wrapped = Vec::new();
    for line in text.lines() {
        if line.chars().count() <= PAGE_WIDTH {
            wrapped.push(line.to_owned());
        } else {
            let chars: Vec<char> = line.chars().collect();
            for chunk in chars.chunks(PAGE_WIDTH) {
                wrapped.push(chunk.iter().collect());
            }
        }
    }
    wrapped
}
