//! Component configuration types.
//!
//! A [`ComponentConfig`] is built fresh by the caller (CLI, or any other
//! shell) at generation time and discarded right after - there is no caching
//! and no history. The parameter union mirrors the seven supported component
//! kinds; each variant carries only the fields that kind needs, and the
//! shared identity fields live in [`Identity`].

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

// ── Component kinds ───────────────────────────────────────────────────────────

/// The statically enumerable set of supported component kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ComponentKind {
    Mux,
    Decoder,
    Encoder,
    Demux,
    ShiftRegister,
    Sram,
    ClockDivider,
}

impl ComponentKind {
    /// All kinds, in the order the original tool presented them.
    pub const ALL: [ComponentKind; 7] = [
        ComponentKind::Mux,
        ComponentKind::Decoder,
        ComponentKind::Encoder,
        ComponentKind::Demux,
        ComponentKind::ShiftRegister,
        ComponentKind::Sram,
        ComponentKind::ClockDivider,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mux => "mux",
            Self::Decoder => "decoder",
            Self::Encoder => "encoder",
            Self::Demux => "demux",
            Self::ShiftRegister => "shift-register",
            Self::Sram => "sram",
            Self::ClockDivider => "clock-divider",
        }
    }

    /// One-line description for listings.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Mux => "N-to-1 multiplexer with binary select",
            Self::Decoder => "binary-to-one-hot decoder",
            Self::Encoder => "one-hot-to-binary encoder",
            Self::Demux => "1-to-N demultiplexer with binary select",
            Self::ShiftRegister => "SIPO/PISO shift register",
            Self::Sram => "synchronous single-port write-first memory",
            Self::ClockDivider => "divide-by-N clock divider",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A kind name that matches no supported component.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown component kind '{0}'")]
pub struct UnknownKindError(String);

impl std::str::FromStr for ComponentKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKindError(s.to_owned()))
    }
}

// ── Value enums ───────────────────────────────────────────────────────────────

/// Shift register data-flow variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftVariant {
    /// Serial in, parallel out.
    Sipo,
    /// Parallel in, serial out (with a synchronous load control).
    Piso,
}

impl fmt::Display for ShiftVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sipo => f.write_str("sipo"),
            Self::Piso => f.write_str("piso"),
        }
    }
}

/// Wording used for the label of generated combinational bodies.
///
/// Purely surface-level: `process` and `function` produce semantically
/// identical logic, only the block label changes. Sequential components
/// (shift register, SRAM, clock divider) always emit `process`, matching the
/// original tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImplementationKeyword {
    #[default]
    Process,
    Function,
}

impl ImplementationKeyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Process => "process",
            Self::Function => "function",
        }
    }
}

impl fmt::Display for ImplementationKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Identity ──────────────────────────────────────────────────────────────────

/// Shared identity fields carried by every configuration.
///
/// Blank names are not an error: a name that is empty after trimming is
/// silently replaced with the documented default when the accessors are used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub entity_name: String,
    pub architecture_name: String,
    pub keyword: ImplementationKeyword,
}

impl Identity {
    pub const DEFAULT_ENTITY: &'static str = "my_entity";
    pub const DEFAULT_ARCHITECTURE: &'static str = "behavioral";

    pub fn new(
        entity_name: impl Into<String>,
        architecture_name: impl Into<String>,
        keyword: ImplementationKeyword,
    ) -> Self {
        Self {
            entity_name: entity_name.into(),
            architecture_name: architecture_name.into(),
            keyword,
        }
    }

    /// Identity with the default `process` keyword.
    pub fn named(entity_name: impl Into<String>, architecture_name: impl Into<String>) -> Self {
        Self::new(entity_name, architecture_name, ImplementationKeyword::Process)
    }

    /// Entity name, with the blank-identifier default applied.
    pub fn entity(&self) -> &str {
        let trimmed = self.entity_name.trim();
        if trimmed.is_empty() {
            Self::DEFAULT_ENTITY
        } else {
            trimmed
        }
    }

    /// Architecture name, with the blank-identifier default applied.
    pub fn architecture(&self) -> &str {
        let trimmed = self.architecture_name.trim();
        if trimmed.is_empty() {
            Self::DEFAULT_ARCHITECTURE
        } else {
            trimmed
        }
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_ENTITY,
            Self::DEFAULT_ARCHITECTURE,
            ImplementationKeyword::Process,
        )
    }
}

// ── Parameter union ───────────────────────────────────────────────────────────

/// Supported parameter ranges, one per numeric field.
///
/// These are the same bounds the original tool enforced in its input widgets;
/// the CLI enforces them at parse time and the dispatcher re-checks them
/// defensively before generating.
pub mod ranges {
    use std::ops::RangeInclusive;

    pub const MUX_INPUTS: RangeInclusive<u8> = 2..=16;
    pub const DECODER_ADDRESS_BITS: RangeInclusive<u8> = 1..=4;
    pub const ENCODER_LINES: RangeInclusive<u8> = 2..=16;
    pub const DEMUX_SELECT_BITS: RangeInclusive<u8> = 1..=4;
    pub const DEMUX_OUTPUT_LINES: RangeInclusive<u8> = 2..=16;
    pub const SHIFT_LENGTH: RangeInclusive<u8> = 1..=16;
    pub const SRAM_DEPTH: RangeInclusive<u8> = 1..=64;
    pub const SRAM_WIDTH: RangeInclusive<u8> = 1..=16;
    pub const CLOCK_DIVISOR: RangeInclusive<u8> = 1..=64;
}

/// Per-kind parameters, one variant per component kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "component", rename_all = "kebab-case")]
pub enum ComponentParams {
    Mux {
        input_count: u8,
    },
    Decoder {
        address_bits: u8,
    },
    Encoder {
        input_lines: u8,
    },
    Demux {
        select_bits: u8,
        /// Carried for interface compatibility with the original tool; the
        /// generated output vector is `2^select_bits` wide regardless.
        output_lines: u8,
    },
    ShiftRegister {
        length: u8,
        variant: ShiftVariant,
    },
    Sram {
        depth: u8,
        width: u8,
    },
    ClockDivider {
        divisor: u8,
    },
}

impl ComponentParams {
    /// The kind this parameter set belongs to.
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Mux { .. } => ComponentKind::Mux,
            Self::Decoder { .. } => ComponentKind::Decoder,
            Self::Encoder { .. } => ComponentKind::Encoder,
            Self::Demux { .. } => ComponentKind::Demux,
            Self::ShiftRegister { .. } => ComponentKind::ShiftRegister,
            Self::Sram { .. } => ComponentKind::Sram,
            Self::ClockDivider { .. } => ComponentKind::ClockDivider,
        }
    }

    /// Check every numeric field against its documented range.
    pub(crate) fn validate(&self) -> Result<(), DomainError> {
        use ranges::*;
        match *self {
            Self::Mux { input_count } => check("input_count", input_count, MUX_INPUTS),
            Self::Decoder { address_bits } => {
                check("address_bits", address_bits, DECODER_ADDRESS_BITS)
            }
            Self::Encoder { input_lines } => check("input_lines", input_lines, ENCODER_LINES),
            Self::Demux {
                select_bits,
                output_lines,
            } => {
                check("select_bits", select_bits, DEMUX_SELECT_BITS)?;
                check("output_lines", output_lines, DEMUX_OUTPUT_LINES)
            }
            Self::ShiftRegister { length, .. } => check("length", length, SHIFT_LENGTH),
            Self::Sram { depth, width } => {
                check("depth", depth, SRAM_DEPTH)?;
                check("width", width, SRAM_WIDTH)
            }
            Self::ClockDivider { divisor } => check("divisor", divisor, CLOCK_DIVISOR),
        }
    }
}

fn check(parameter: &'static str, value: u8, range: RangeInclusive<u8>) -> Result<(), DomainError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(DomainError::ParameterOutOfRange {
            parameter,
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

// ── Configuration record ──────────────────────────────────────────────────────

/// Complete configuration for one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentConfig {
    pub identity: Identity,
    pub params: ComponentParams,
}

impl ComponentConfig {
    pub fn new(identity: Identity, params: ComponentParams) -> Self {
        Self { identity, params }
    }

    pub fn kind(&self) -> ComponentKind {
        self.params.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display_is_kebab_case() {
        assert_eq!(ComponentKind::Mux.to_string(), "mux");
        assert_eq!(ComponentKind::ShiftRegister.to_string(), "shift-register");
        assert_eq!(ComponentKind::ClockDivider.to_string(), "clock-divider");
    }

    #[test]
    fn kind_round_trips_through_from_str() {
        for kind in ComponentKind::ALL {
            assert_eq!(kind.as_str().parse::<ComponentKind>(), Ok(kind));
        }
        assert!("counter".parse::<ComponentKind>().is_err());
    }

    #[test]
    fn all_kinds_are_listed_once() {
        for kind in ComponentKind::ALL {
            assert_eq!(
                ComponentKind::ALL.iter().filter(|k| **k == kind).count(),
                1
            );
        }
    }

    #[test]
    fn blank_entity_name_falls_back_to_default() {
        let identity = Identity::named("   ", "");
        assert_eq!(identity.entity(), "my_entity");
        assert_eq!(identity.architecture(), "behavioral");
    }

    #[test]
    fn entity_name_is_trimmed() {
        let identity = Identity::named("  mux4  ", " rtl ");
        assert_eq!(identity.entity(), "mux4");
        assert_eq!(identity.architecture(), "rtl");
    }

    #[test]
    fn params_report_their_kind() {
        assert_eq!(
            ComponentParams::Sram { depth: 16, width: 8 }.kind(),
            ComponentKind::Sram
        );
        assert_eq!(
            ComponentParams::ClockDivider { divisor: 2 }.kind(),
            ComponentKind::ClockDivider
        );
    }

    #[test]
    fn validate_accepts_range_endpoints() {
        assert!(ComponentParams::Mux { input_count: 2 }.validate().is_ok());
        assert!(ComponentParams::Mux { input_count: 16 }.validate().is_ok());
        assert!(ComponentParams::Sram { depth: 64, width: 1 }.validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range() {
        let err = ComponentParams::Mux { input_count: 17 }.validate().unwrap_err();
        assert_eq!(
            err,
            DomainError::ParameterOutOfRange {
                parameter: "input_count",
                value: 17,
                min: 2,
                max: 16,
            }
        );
        assert!(ComponentParams::Mux { input_count: 1 }.validate().is_err());
        assert!(ComponentParams::Decoder { address_bits: 5 }.validate().is_err());
        assert!(ComponentParams::ClockDivider { divisor: 0 }.validate().is_err());
    }

    #[test]
    fn demux_checks_both_fields() {
        let params = ComponentParams::Demux {
            select_bits: 2,
            output_lines: 17,
        };
        assert!(matches!(
            params.validate(),
            Err(DomainError::ParameterOutOfRange {
                parameter: "output_lines",
                ..
            })
        ));
    }

    #[test]
    fn config_serializes_with_component_tag() {
        let config = ComponentConfig::new(
            Identity::default(),
            ComponentParams::Decoder { address_bits: 3 },
        );
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"component\":\"decoder\""));
    }
}
