//! Application-layer errors (export orchestration failures).

use thiserror::Error;

/// Errors raised while handing generated text to export sinks.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A sink could not consume the generated text.
    #[error("export to {target} failed: {reason}")]
    ExportFailed { target: String, reason: String },

    /// An I/O operation inside a sink failed.
    #[error("I/O error while writing {target}")]
    Io {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

impl ApplicationError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ExportFailed { target, .. } => vec![
                format!("The export target '{target}' rejected the output"),
                "Check the target path and try again".into(),
            ],
            Self::Io { target, .. } => vec![
                format!("Could not write '{target}'"),
                "Check file permissions and available disk space".into(),
                "Ensure the parent directory exists".into(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_names_the_target() {
        let err = ApplicationError::Io {
            target: "out/mux4.vhd".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("out/mux4.vhd"));
        assert!(err.suggestions().iter().any(|s| s.contains("permissions")));
    }
}
