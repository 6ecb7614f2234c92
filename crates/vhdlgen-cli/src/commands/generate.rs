//! Shared handler for all component-generation subcommands.
//!
//! Responsibility: translate CLI arguments into a core `ComponentConfig`,
//! assemble the export sinks, and call the export service.  No generation
//! logic lives here.

use tracing::{debug, instrument};

use vhdlgen_adapters::{DocumentSink, FileSink, StdoutSink};
use vhdlgen_core::application::{ExportService, ports::CodeSink};
use vhdlgen_core::domain::{ComponentConfig, ComponentParams, Identity};

use crate::{
    cli::{EmitArgs, Implementation},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute one generation request.
///
/// Dispatch sequence:
/// 1. Resolve the design unit identity from flags and config defaults
/// 2. Warn about parameter choices with undefined corners
/// 3. Assemble sinks (`--out`, `--document`, or stdout when neither)
/// 4. Generate and export via `ExportService`
/// 5. Report written targets (skipped for stdout to keep pipes clean)
#[instrument(skip_all, fields(kind = %params.kind()))]
pub fn execute(
    params: ComponentParams,
    emit: EmitArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let kind = params.kind();
    let identity = resolve_identity(&emit, &config);

    warn_undefined_corners(&params, &output)?;

    let mut sinks: Vec<Box<dyn CodeSink>> = Vec::new();
    let mut targets: Vec<String> = Vec::new();
    if let Some(path) = &emit.out {
        let sink = FileSink::new(path);
        targets.push(sink.path().display().to_string());
        sinks.push(Box::new(sink));
    }
    if let Some(path) = &emit.document {
        targets.push(path.display().to_string());
        sinks.push(Box::new(DocumentSink::new(path)));
    }
    let to_stdout = sinks.is_empty();
    if to_stdout {
        sinks.push(Box::new(StdoutSink::new()));
    }

    let request = ComponentConfig::new(identity, params);
    let source = ExportService::new(sinks).export(kind, &request)?;

    debug!(lines = source.line_count(), "generation finished");

    if !to_stdout {
        for target in &targets {
            output.success(&format!("{kind} written to {target}"))?;
        }
    }

    Ok(())
}

/// Merge identity flags with config-file defaults.
///
/// Blank values are fine: the core applies the documented fallback names
/// when rendering.
fn resolve_identity(emit: &EmitArgs, config: &AppConfig) -> Identity {
    let entity = emit
        .entity
        .clone()
        .or_else(|| config.defaults.entity.clone())
        .unwrap_or_default();
    let architecture = emit
        .architecture
        .clone()
        .or_else(|| config.defaults.architecture.clone())
        .unwrap_or_default();
    let keyword = emit
        .implementation
        .map(Implementation::to_core)
        .unwrap_or_else(|| config.default_keyword());

    Identity::new(entity, architecture, keyword)
}

/// Point out parameter choices whose hardware behavior has undefined
/// corners.  These are warnings, not errors: the generated code is valid
/// either way.
fn warn_undefined_corners(params: &ComponentParams, output: &OutputManager) -> CliResult<()> {
    match *params {
        ComponentParams::Encoder { .. } => {
            output.warning(
                "encoder output is undefined when more than one input line is asserted",
            )?;
        }
        ComponentParams::Sram { depth, .. } if !depth.is_power_of_two() => {
            output.warning(&format!(
                "depth {depth} is not a power of two; addresses {depth} and above are unguarded"
            ))?;
        }
        _ => {}
    }
    Ok(())
}
