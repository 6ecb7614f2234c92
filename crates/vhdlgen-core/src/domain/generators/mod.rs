//! Per-kind VHDL generators and their dispatcher.
//!
//! Every generator is a pure function: no shared state, no I/O, and the same
//! configuration always yields byte-identical text. [`generate`] is the only
//! public entry point; it fails fast on a kind/variant mismatch and
//! re-validates parameter ranges before any text is assembled, so a domain
//! error always means zero output.

mod combinational;
mod sequential;

use tracing::debug;

use crate::domain::config::{ComponentConfig, ComponentKind, ComponentParams};
use crate::domain::error::DomainError;
use crate::domain::source::GeneratedSource;

/// Generate the design unit for `kind` from `config`.
pub fn generate(
    kind: ComponentKind,
    config: &ComponentConfig,
) -> Result<GeneratedSource, DomainError> {
    if config.kind() != kind {
        return Err(DomainError::ConfigMismatch {
            expected: kind,
            found: config.kind(),
        });
    }
    config.params.validate()?;

    debug!(kind = %kind, entity = config.identity.entity(), "generating design unit");

    let identity = &config.identity;
    let unit = match config.params {
        ComponentParams::Mux { input_count } => combinational::mux(identity, input_count),
        ComponentParams::Decoder { address_bits } => {
            combinational::decoder(identity, address_bits)
        }
        ComponentParams::Encoder { input_lines } => combinational::encoder(identity, input_lines),
        // The parallel port width is derived from the select width; see the
        // note on `ComponentParams::Demux`.
        ComponentParams::Demux { select_bits, .. } => combinational::demux(identity, select_bits),
        ComponentParams::ShiftRegister { length, variant } => {
            sequential::shift_register(identity, length, variant)
        }
        ComponentParams::Sram { depth, width } => sequential::sram(identity, depth, width),
        ComponentParams::ClockDivider { divisor } => sequential::clock_divider(identity, divisor),
    };

    Ok(unit.render())
}
