//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No generation logic lives here; each
//! component subcommand just converts its parsed arguments into a core
//! [`ComponentParams`] value.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use vhdlgen_core::domain::{ComponentParams, ImplementationKeyword, ShiftVariant};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "vhdlgen",
    bin_name = "vhdlgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} VHDL generator for standard digital building blocks",
    long_about = "Vhdlgen emits synthesizable VHDL design units for common \
                  digital components: multiplexers, decoders, encoders, \
                  demultiplexers, shift registers, SRAM and clock dividers.",
    after_help = "EXAMPLES:\n\
        \x20 vhdlgen mux --inputs 4 --entity mux4\n\
        \x20 vhdlgen sram --depth 32 --width 8 -o sram32x8.vhd\n\
        \x20 vhdlgen shift-register --length 8 --variant sipo\n\
        \x20 vhdlgen completions bash > /usr/share/bash-completion/completions/vhdlgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands: one per component kind, plus housekeeping.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate an N-to-1 multiplexer.
    #[command(
        about = "Generate an N-to-1 multiplexer",
        after_help = "EXAMPLES:\n\
            \x20 vhdlgen mux --inputs 4\n\
            \x20 vhdlgen mux --inputs 8 --entity mux8 -o mux8.vhd"
    )]
    Mux(MuxArgs),

    /// Generate a binary-to-one-hot decoder.
    #[command(about = "Generate a binary-to-one-hot decoder")]
    Decoder(DecoderArgs),

    /// Generate a one-hot-to-binary encoder.
    #[command(about = "Generate a one-hot-to-binary encoder")]
    Encoder(EncoderArgs),

    /// Generate a 1-to-N demultiplexer.
    #[command(about = "Generate a 1-to-N demultiplexer")]
    Demux(DemuxArgs),

    /// Generate a SIPO or PISO shift register.
    #[command(
        visible_alias = "shift",
        about = "Generate a shift register (SIPO or PISO)",
        after_help = "EXAMPLES:\n\
            \x20 vhdlgen shift-register --length 8 --variant sipo\n\
            \x20 vhdlgen shift --length 4 --variant piso -e piso4"
    )]
    ShiftRegister(ShiftRegisterArgs),

    /// Generate a synchronous single-port SRAM.
    #[command(about = "Generate a synchronous single-port SRAM (write-first)")]
    Sram(SramArgs),

    /// Generate a divide-by-N clock divider.
    #[command(visible_alias = "clkdiv", about = "Generate a clock divider")]
    ClockDivider(ClockDividerArgs),

    /// List supported component kinds.
    #[command(
        visible_alias = "ls",
        about = "List supported component kinds",
        after_help = "EXAMPLES:\n\
            \x20 vhdlgen list\n\
            \x20 vhdlgen list --format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 vhdlgen completions bash > ~/.local/share/bash-completion/completions/vhdlgen\n\
            \x20 vhdlgen completions zsh  > ~/.zfunc/_vhdlgen\n\
            \x20 vhdlgen completions fish > ~/.config/fish/completions/vhdlgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── Shared emit arguments ─────────────────────────────────────────────────────

/// Arguments shared by every component subcommand: identity of the design
/// unit and where to send the generated text.
///
/// With neither `--out` nor `--document`, the code goes to stdout.
#[derive(Debug, Args)]
pub struct EmitArgs {
    /// Entity name.  Blank or omitted falls back to the configured default.
    #[arg(short = 'e', long = "entity", value_name = "NAME", help = "Entity name")]
    pub entity: Option<String>,

    /// Architecture name.
    #[arg(
        short = 'a',
        long = "arch",
        value_name = "NAME",
        help = "Architecture name"
    )]
    pub architecture: Option<String>,

    /// Combinational body style.
    #[arg(
        long = "impl",
        value_name = "KEYWORD",
        value_enum,
        help = "Combinational body label (process or function)"
    )]
    pub implementation: Option<Implementation>,

    /// Write the code to a file instead of stdout.
    #[arg(
        short = 'o',
        long = "out",
        value_name = "FILE",
        help = "Write to FILE (.vhd is appended if needed)"
    )]
    pub out: Option<PathBuf>,

    /// Additionally write a paginated plain-text document.
    #[arg(
        long = "document",
        value_name = "FILE",
        help = "Also write a paginated fixed-width document"
    )]
    pub document: Option<PathBuf>,
}

/// CLI-facing mirror of the core implementation keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Implementation {
    Process,
    Function,
}

impl Implementation {
    pub fn to_core(self) -> ImplementationKeyword {
        match self {
            Self::Process => ImplementationKeyword::Process,
            Self::Function => ImplementationKeyword::Function,
        }
    }
}

// ── Per-component arguments ───────────────────────────────────────────────────
//
// The numeric ranges below mirror `vhdlgen_core::domain::ranges`; a unit test
// at the bottom keeps the two in sync.

/// Arguments for `vhdlgen mux`.
#[derive(Debug, Args)]
pub struct MuxArgs {
    /// Number of data inputs.
    #[arg(
        short = 'n',
        long = "inputs",
        value_name = "N",
        value_parser = clap::value_parser!(u8).range(2..=16),
        help = "Number of data inputs (2-16)"
    )]
    pub inputs: u8,

    #[command(flatten)]
    pub emit: EmitArgs,
}

impl MuxArgs {
    pub fn params(&self) -> ComponentParams {
        ComponentParams::Mux {
            input_count: self.inputs,
        }
    }
}

/// Arguments for `vhdlgen decoder`.
#[derive(Debug, Args)]
pub struct DecoderArgs {
    /// Address width; the decoder has `2^bits` one-hot outputs.
    #[arg(
        short = 'b',
        long = "bits",
        value_name = "BITS",
        value_parser = clap::value_parser!(u8).range(1..=4),
        help = "Address bits (1-4)"
    )]
    pub bits: u8,

    #[command(flatten)]
    pub emit: EmitArgs,
}

impl DecoderArgs {
    pub fn params(&self) -> ComponentParams {
        ComponentParams::Decoder {
            address_bits: self.bits,
        }
    }
}

/// Arguments for `vhdlgen encoder`.
#[derive(Debug, Args)]
pub struct EncoderArgs {
    /// Number of one-hot input lines.
    #[arg(
        short = 'n',
        long = "lines",
        value_name = "N",
        value_parser = clap::value_parser!(u8).range(2..=16),
        help = "Input lines (2-16)"
    )]
    pub lines: u8,

    #[command(flatten)]
    pub emit: EmitArgs,
}

impl EncoderArgs {
    pub fn params(&self) -> ComponentParams {
        ComponentParams::Encoder {
            input_lines: self.lines,
        }
    }
}

/// Arguments for `vhdlgen demux`.
#[derive(Debug, Args)]
pub struct DemuxArgs {
    /// Select width; the demux has `2^bits` output lines.
    #[arg(
        short = 's',
        long = "select",
        value_name = "BITS",
        value_parser = clap::value_parser!(u8).range(1..=4),
        help = "Select bits (1-4)"
    )]
    pub select: u8,

    /// Requested output line count.  The generated output vector is always
    /// `2^select` wide; this only needs to be given when it differs.
    #[arg(
        long = "outputs",
        value_name = "N",
        value_parser = clap::value_parser!(u8).range(2..=16),
        help = "Output lines (2-16, default 2^SELECT)"
    )]
    pub outputs: Option<u8>,

    #[command(flatten)]
    pub emit: EmitArgs,
}

impl DemuxArgs {
    pub fn params(&self) -> ComponentParams {
        ComponentParams::Demux {
            select_bits: self.select,
            output_lines: self.outputs.unwrap_or(1 << self.select),
        }
    }
}

/// Arguments for `vhdlgen shift-register`.
#[derive(Debug, Args)]
pub struct ShiftRegisterArgs {
    /// Register length in bits.
    #[arg(
        short = 'n',
        long = "length",
        value_name = "BITS",
        value_parser = clap::value_parser!(u8).range(1..=16),
        help = "Register length (1-16)"
    )]
    pub length: u8,

    /// Data-flow variant.
    #[arg(
        long = "variant",
        value_name = "VARIANT",
        value_enum,
        help = "Data-flow variant"
    )]
    pub variant: Variant,

    #[command(flatten)]
    pub emit: EmitArgs,
}

/// CLI-facing mirror of the core shift variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Variant {
    /// Serial in, parallel out.
    Sipo,
    /// Parallel in, serial out.
    Piso,
}

impl ShiftRegisterArgs {
    pub fn params(&self) -> ComponentParams {
        ComponentParams::ShiftRegister {
            length: self.length,
            variant: match self.variant {
                Variant::Sipo => ShiftVariant::Sipo,
                Variant::Piso => ShiftVariant::Piso,
            },
        }
    }
}

/// Arguments for `vhdlgen sram`.
#[derive(Debug, Args)]
pub struct SramArgs {
    /// Number of words.
    #[arg(
        short = 'd',
        long = "depth",
        value_name = "WORDS",
        value_parser = clap::value_parser!(u8).range(1..=64),
        help = "Memory depth in words (1-64)"
    )]
    pub depth: u8,

    /// Word width in bits.
    #[arg(
        short = 'w',
        long = "width",
        value_name = "BITS",
        value_parser = clap::value_parser!(u8).range(1..=16),
        help = "Word width in bits (1-16)"
    )]
    pub width: u8,

    #[command(flatten)]
    pub emit: EmitArgs,
}

impl SramArgs {
    pub fn params(&self) -> ComponentParams {
        ComponentParams::Sram {
            depth: self.depth,
            width: self.width,
        }
    }
}

/// Arguments for `vhdlgen clock-divider`.
#[derive(Debug, Args)]
pub struct ClockDividerArgs {
    /// The output toggles once every N input edges.
    #[arg(
        short = 'n',
        long = "divisor",
        value_name = "N",
        value_parser = clap::value_parser!(u8).range(1..=64),
        help = "Division factor (1-64)"
    )]
    pub divisor: u8,

    #[command(flatten)]
    pub emit: EmitArgs,
}

impl ClockDividerArgs {
    pub fn params(&self) -> ComponentParams {
        ComponentParams::ClockDivider {
            divisor: self.divisor,
        }
    }
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `vhdlgen list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One name per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `vhdlgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use vhdlgen_core::domain::ranges;

    #[test]
    fn parse_mux_command() {
        let cli = Cli::parse_from(["vhdlgen", "mux", "--inputs", "4", "-e", "mux4"]);
        let Commands::Mux(args) = cli.command else {
            panic!("expected mux command");
        };
        assert_eq!(args.inputs, 4);
        assert_eq!(args.emit.entity.as_deref(), Some("mux4"));
        assert_eq!(args.params(), ComponentParams::Mux { input_count: 4 });
    }

    #[test]
    fn mux_inputs_out_of_range_is_rejected_at_parse_time() {
        assert!(Cli::try_parse_from(["vhdlgen", "mux", "--inputs", "17"]).is_err());
        assert!(Cli::try_parse_from(["vhdlgen", "mux", "--inputs", "1"]).is_err());
    }

    #[test]
    fn clap_ranges_match_core_ranges() {
        // Parse each range's endpoints; if the clap bounds drift from the
        // core bounds, one of these fails.
        for (cmd, flag, range) in [
            ("mux", "--inputs", ranges::MUX_INPUTS),
            ("decoder", "--bits", ranges::DECODER_ADDRESS_BITS),
            ("encoder", "--lines", ranges::ENCODER_LINES),
            ("demux", "--select", ranges::DEMUX_SELECT_BITS),
            ("sram", "--depth", ranges::SRAM_DEPTH),
            ("clock-divider", "--divisor", ranges::CLOCK_DIVISOR),
        ] {
            for endpoint in [*range.start(), *range.end()] {
                let value = endpoint.to_string();
                let mut argv = vec!["vhdlgen", cmd, flag, value.as_str()];
                if cmd == "sram" {
                    argv.extend(["--width", "8"]);
                }
                assert!(
                    Cli::try_parse_from(&argv).is_ok(),
                    "{cmd} {flag} {endpoint} should parse"
                );
            }
            let below = (range.start() - 1).to_string();
            let mut argv = vec!["vhdlgen", cmd, flag, below.as_str()];
            if cmd == "sram" {
                argv.extend(["--width", "8"]);
            }
            assert!(
                Cli::try_parse_from(&argv).is_err(),
                "{cmd} {flag} {below} should be rejected"
            );
        }
    }

    #[test]
    fn shift_register_requires_variant() {
        assert!(Cli::try_parse_from(["vhdlgen", "shift-register", "--length", "8"]).is_err());
        let cli = Cli::parse_from([
            "vhdlgen",
            "shift",
            "--length",
            "8",
            "--variant",
            "piso",
        ]);
        let Commands::ShiftRegister(args) = cli.command else {
            panic!("expected shift-register command");
        };
        assert_eq!(
            args.params(),
            ComponentParams::ShiftRegister {
                length: 8,
                variant: ShiftVariant::Piso,
            }
        );
    }

    #[test]
    fn demux_outputs_default_to_full_decode() {
        let cli = Cli::parse_from(["vhdlgen", "demux", "--select", "3"]);
        let Commands::Demux(args) = cli.command else {
            panic!("expected demux command");
        };
        assert_eq!(
            args.params(),
            ComponentParams::Demux {
                select_bits: 3,
                output_lines: 8,
            }
        );
    }

    #[test]
    fn impl_keyword_maps_to_core() {
        let cli = Cli::parse_from(["vhdlgen", "mux", "--inputs", "2", "--impl", "function"]);
        let Commands::Mux(args) = cli.command else {
            panic!("expected mux command");
        };
        assert_eq!(
            args.emit.implementation.map(Implementation::to_core),
            Some(ImplementationKeyword::Function)
        );
    }

    #[test]
    fn clock_divider_alias() {
        let cli = Cli::parse_from(["vhdlgen", "clkdiv", "--divisor", "4"]);
        assert!(matches!(cli.command, Commands::ClockDivider(_)));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["vhdlgen", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
