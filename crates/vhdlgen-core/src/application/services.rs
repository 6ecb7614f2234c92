//! Export service - the single application use case.

use tracing::{debug, info, instrument};

use crate::application::ports::CodeSink;
use crate::domain::{ComponentConfig, ComponentKind, GeneratedSource, generate};
use crate::error::VhdlGenResult;

/// Generates one design unit and fans it out to every configured sink.
///
/// Generation itself is pure; sinks are the only place side effects happen,
/// and they run strictly after generation succeeded, so a failed generation
/// never produces partial output anywhere.
pub struct ExportService {
    sinks: Vec<Box<dyn CodeSink>>,
}

impl ExportService {
    pub fn new(sinks: Vec<Box<dyn CodeSink>>) -> Self {
        Self { sinks }
    }

    /// Generate the unit for `kind` and write it to every sink, in order.
    #[instrument(skip_all, fields(kind = %kind))]
    pub fn export(
        &self,
        kind: ComponentKind,
        config: &ComponentConfig,
    ) -> VhdlGenResult<GeneratedSource> {
        let source = generate(kind, config)?;
        info!(
            entity = config.identity.entity(),
            lines = source.line_count(),
            "design unit generated"
        );

        for sink in &self.sinks {
            sink.write(kind, &source)?;
            debug!(sink = sink.label(), "sink written");
        }

        Ok(source)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::application::error::ApplicationError;
    use crate::domain::{ComponentParams, Identity};
    use crate::error::VhdlGenError;

    /// Minimal capturing sink; the adapters crate ships the real one.
    struct Capture(Mutex<Vec<String>>);

    impl CodeSink for Capture {
        fn label(&self) -> &'static str {
            "capture"
        }

        fn write(
            &self,
            _kind: ComponentKind,
            source: &GeneratedSource,
        ) -> Result<(), ApplicationError> {
            self.0.lock().unwrap().push(source.as_str().to_owned());
            Ok(())
        }
    }

    struct Failing;

    impl CodeSink for Failing {
        fn label(&self) -> &'static str {
            "failing"
        }

        fn write(
            &self,
            _kind: ComponentKind,
            _source: &GeneratedSource,
        ) -> Result<(), ApplicationError> {
            Err(ApplicationError::ExportFailed {
                target: "nowhere".into(),
                reason: "always fails".into(),
            })
        }
    }

    fn mux_config() -> ComponentConfig {
        ComponentConfig::new(
            Identity::named("mux2", "behavioral"),
            ComponentParams::Mux { input_count: 2 },
        )
    }

    #[test]
    fn export_writes_generated_text_verbatim_to_sinks() {
        let service = ExportService::new(vec![Box::new(Capture(Mutex::new(Vec::new())))]);
        let source = service.export(ComponentKind::Mux, &mux_config()).unwrap();
        assert!(source.as_str().contains("entity mux2 is"));
    }

    #[test]
    fn invalid_config_reaches_no_sink() {
        let service = ExportService::new(vec![Box::new(Failing)]);
        let bad = ComponentConfig::new(
            Identity::default(),
            ComponentParams::Mux { input_count: 99 },
        );
        // The domain error wins; the failing sink is never invoked.
        assert!(matches!(
            service.export(ComponentKind::Mux, &bad),
            Err(VhdlGenError::Domain(_))
        ));
    }

    #[test]
    fn sink_failure_surfaces_as_application_error() {
        let service = ExportService::new(vec![Box::new(Failing)]);
        assert!(matches!(
            service.export(ComponentKind::Mux, &mux_config()),
            Err(VhdlGenError::Application(_))
        ));
    }

    #[test]
    fn export_with_no_sinks_still_returns_the_source() {
        let service = ExportService::new(Vec::new());
        let source = service
            .export(ComponentKind::ClockDivider, &ComponentConfig::new(
                Identity::default(),
                ComponentParams::ClockDivider { divisor: 1 },
            ))
            .unwrap();
        assert!(source.as_str().contains("integer range 0 to 0"));
    }
}
