//! Combinational components: mux, decoder, encoder, demux.
//!
//! All four share the same shape: a case statement over a binary-coded
//! select/input vector, one arm per code in `[0, n)` with a zero-padded
//! literal, and a default arm that drives a fully defined zero value so no
//! branch ever leaves a signal unassigned (latch-free by construction).

use crate::domain::config::Identity;
use crate::domain::format::{bin_literal, bit_length, one_hot_literal};
use crate::domain::source::{DesignUnit, Port, PortType};

/// N-to-1 multiplexer.
///
/// `select` is `bit_length(n-1)` bits wide; select codes at or beyond `n`
/// (possible when `n` is not a power of two) hit the default arm and drive
/// `'0'`.
pub(super) fn mux(identity: &Identity, input_count: u8) -> DesignUnit {
    let n = u32::from(input_count);
    let sel_bits = bit_length(n - 1);
    let kw = identity.keyword.as_str();

    let mut body = vec![
        format!("{kw} mux_{kw}(sel, inputs)"),
        "begin".to_owned(),
        "    case sel is".to_owned(),
    ];
    for i in 0..n {
        body.push(format!(
            "        when \"{}\" => output <= inputs({i});",
            bin_literal(i, sel_bits)
        ));
    }
    body.push("        when others => output <= '0';".to_owned());
    body.push("    end case;".to_owned());
    body.push(format!("end {kw};"));

    DesignUnit::new(identity)
        .with_port(Port::input("inputs", PortType::Vector(n)))
        .with_port(Port::input("sel", PortType::Vector(sel_bits)))
        .with_port(Port::output("output", PortType::Bit))
        .with_statements(body)
}

/// Binary-to-one-hot decoder over `2^address_bits` outputs.
///
/// Each arm clears the whole output vector and then sets exactly its own
/// bit. The clear-then-set pair per arm is the one-hot guarantee, not
/// redundancy.
pub(super) fn decoder(identity: &Identity, address_bits: u8) -> DesignUnit {
    let bits = u32::from(address_bits);
    let outputs = 1u32 << bits;
    let kw = identity.keyword.as_str();

    let mut body = vec![
        format!("{kw} decoder_{kw}(sel)"),
        "begin".to_owned(),
        "    case sel is".to_owned(),
    ];
    for i in 0..outputs {
        body.push(format!("        when \"{}\" =>", bin_literal(i, bits)));
        body.push("            output <= (others => '0');".to_owned());
        body.push(format!("            output({i}) <= '1';"));
    }
    body.push("        when others =>".to_owned());
    body.push("            output <= (others => '0');".to_owned());
    body.push("    end case;".to_owned());
    body.push(format!("end {kw};"));

    DesignUnit::new(identity)
        .with_port(Port::input("sel", PortType::Vector(bits)))
        .with_port(Port::output("output", PortType::Vector(outputs)))
        .with_statements(body)
}

/// One-hot-to-binary encoder.
///
/// Each arm matches the pattern with exactly bit `i` set and emits the
/// binary encoding of `i`. Anything else - no line asserted, or several at
/// once - hits the default arm and yields all-zero output. Priority between
/// simultaneously asserted lines is deliberately undefined; this generator
/// does not invent one.
pub(super) fn encoder(identity: &Identity, input_lines: u8) -> DesignUnit {
    let lines = u32::from(input_lines);
    let bits = bit_length(lines - 1);
    let kw = identity.keyword.as_str();

    let mut body = vec![
        format!("{kw} encoder_{kw}(input)"),
        "begin".to_owned(),
        "    case input is".to_owned(),
    ];
    for i in 0..lines {
        body.push(format!(
            "        when \"{}\" => output <= \"{}\";",
            one_hot_literal(i, lines),
            bin_literal(i, bits)
        ));
    }
    body.push("        when others => output <= (others => '0');".to_owned());
    body.push("    end case;".to_owned());
    body.push(format!("end {kw};"));

    DesignUnit::new(identity)
        .with_port(Port::input("input", PortType::Vector(lines)))
        .with_port(Port::output("output", PortType::Vector(bits)))
        .with_statements(body)
}

/// 1-to-N demultiplexer over `2^select_bits` output lines.
///
/// The vector is cleared up front, then the addressed line takes the input
/// bit; all other lines stay at `'0'`.
pub(super) fn demux(identity: &Identity, select_bits: u8) -> DesignUnit {
    let sel_bits = u32::from(select_bits);
    let outputs = 1u32 << sel_bits;
    let kw = identity.keyword.as_str();

    let mut body = vec![
        format!("{kw} demux_{kw}(sel, input)"),
        "begin".to_owned(),
        "    output <= (others => '0');".to_owned(),
        "    case sel is".to_owned(),
    ];
    for i in 0..outputs {
        body.push(format!(
            "        when \"{}\" => output({i}) <= input;",
            bin_literal(i, sel_bits)
        ));
    }
    body.push("        when others => output <= (others => '0');".to_owned());
    body.push("    end case;".to_owned());
    body.push(format!("end {kw};"));

    DesignUnit::new(identity)
        .with_port(Port::input("input", PortType::Bit))
        .with_port(Port::input("sel", PortType::Vector(sel_bits)))
        .with_port(Port::output("output", PortType::Vector(outputs)))
        .with_statements(body)
}
