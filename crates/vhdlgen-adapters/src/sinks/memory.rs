//! In-memory capture sink.

use std::sync::Mutex;

use vhdlgen_core::application::error::ApplicationError;
use vhdlgen_core::application::ports::CodeSink;
use vhdlgen_core::domain::{ComponentKind, GeneratedSource};

/// Captures every write in memory instead of performing I/O.
///
/// Intended for tests and for callers that want the generated text back
/// without touching the filesystem.
#[derive(Debug, Default)]
pub struct MemorySink {
    captured: Mutex<Vec<(ComponentKind, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, in write order.
    pub fn captured(&self) -> Vec<(ComponentKind, String)> {
        match self.captured.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// The most recent write, if any.
    pub fn last(&self) -> Option<String> {
        self.captured().last().map(|(_, text)| text.clone())
    }
}

impl CodeSink for MemorySink {
    fn label(&self) -> &'static str {
        "memory"
    }

    fn write(&self, kind: ComponentKind, source: &GeneratedSource) -> Result<(), ApplicationError> {
        let mut guard = self.captured.lock().map_err(|_| ApplicationError::ExportFailed {
            target: "memory".to_owned(),
            reason: "capture buffer poisoned by a previous panic".to_owned(),
        })?;
        guard.push((kind, source.as_str().to_owned()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vhdlgen_core::domain::{ComponentConfig, ComponentParams, Identity, generate};

    #[test]
    fn captures_writes_in_order() {
        let sink = MemorySink::new();
        for divisor in [2u8, 4] {
            let config = ComponentConfig::new(
                Identity::default(),
                ComponentParams::ClockDivider { divisor },
            );
            let source = generate(ComponentKind::ClockDivider, &config).unwrap();
            sink.write(ComponentKind::ClockDivider, &source).unwrap();
        }

        let captured = sink.captured();
        assert_eq!(captured.len(), 2);
        assert!(captured[0].1.contains("if counter = 1 then"));
        assert!(captured[1].1.contains("if counter = 3 then"));
        assert_eq!(sink.last().unwrap(), captured[1].1);
    }

    #[test]
    fn starts_empty() {
        let sink = MemorySink::new();
        assert!(sink.captured().is_empty());
        assert!(sink.last().is_none());
    }
}
