//! Sequential components: shift register, SRAM, clock divider.
//!
//! All three register state on the rising clock edge. They always emit
//! `process` bodies regardless of the configured implementation keyword,
//! matching the original tool.

use crate::domain::config::{Identity, ShiftVariant};
use crate::domain::format::bit_length;
use crate::domain::source::{DesignUnit, Port, PortType};

/// Shift register, SIPO or PISO.
///
/// Length 1 degenerates to a register with an empty shift range
/// (`reg(-1 downto 0)` is a null slice in VHDL); that output is accepted
/// as-is rather than special-cased.
pub(super) fn shift_register(identity: &Identity, length: u8, variant: ShiftVariant) -> DesignUnit {
    match variant {
        ShiftVariant::Sipo => sipo(identity, length),
        ShiftVariant::Piso => piso(identity, length),
    }
}

/// Serial-in, parallel-out: shift left with serial fill at bit 0, full
/// register exposed combinationally.
fn sipo(identity: &Identity, length: u8) -> DesignUnit {
    let n = i64::from(length);

    DesignUnit::new(identity)
        .with_port(Port::input("clk", PortType::Bit))
        .with_port(Port::input("reset", PortType::Bit))
        .with_port(Port::input("data_in", PortType::Bit))
        .with_port(Port::output("data_out", PortType::Vector(u32::from(length))))
        .with_declaration(format!("signal reg : STD_LOGIC_VECTOR({} downto 0);", n - 1))
        .with_statements([
            "process(clk, reset)".to_owned(),
            "begin".to_owned(),
            "    if reset = '1' then".to_owned(),
            "        reg <= (others => '0');".to_owned(),
            "    elsif rising_edge(clk) then".to_owned(),
            format!("        reg <= reg({} downto 0) & data_in;", n - 2),
            "    end if;".to_owned(),
            "end process;".to_owned(),
            "data_out <= reg;".to_owned(),
        ])
}

/// Parallel-in, serial-out: synchronous load, otherwise shift left with zero
/// fill; serial output is always the top bit.
fn piso(identity: &Identity, length: u8) -> DesignUnit {
    let n = i64::from(length);

    DesignUnit::new(identity)
        .with_port(Port::input("clk", PortType::Bit))
        .with_port(Port::input("reset", PortType::Bit))
        .with_port(Port::input("load", PortType::Bit))
        .with_port(Port::input("data_in", PortType::Vector(u32::from(length))))
        .with_port(Port::output("data_out", PortType::Bit))
        .with_declaration(format!("signal reg : STD_LOGIC_VECTOR({} downto 0);", n - 1))
        .with_statements([
            "process(clk, reset)".to_owned(),
            "begin".to_owned(),
            "    if reset = '1' then".to_owned(),
            "        reg <= (others => '0');".to_owned(),
            "    elsif rising_edge(clk) then".to_owned(),
            "        if load = '1' then".to_owned(),
            "            reg <= data_in;".to_owned(),
            "        else".to_owned(),
            format!("            reg <= reg({} downto 0) & '0';", n - 2),
            "        end if;".to_owned(),
            "    end if;".to_owned(),
            "end process;".to_owned(),
            format!("data_out <= reg({});", n - 1),
        ])
}

/// Synchronous single-port memory with write-first ordering.
///
/// The write is committed before the registered read on the same edge, so a
/// coincident read and write to one address returns the new data. Addresses
/// at or beyond `depth` (possible when `depth` is not a power of two) are
/// not guarded; their behavior is undefined.
pub(super) fn sram(identity: &Identity, depth: u8, width: u8) -> DesignUnit {
    let d = i64::from(depth);
    let w = i64::from(width);
    let addr_bits = bit_length(u32::from(depth) - 1);

    DesignUnit::new(identity)
        .with_numeric_std()
        .with_port(Port::input("clk", PortType::Bit))
        .with_port(Port::input("we", PortType::Bit))
        .with_port(Port::input("addr", PortType::Vector(addr_bits)))
        .with_port(Port::input("data_in", PortType::Vector(u32::from(width))))
        .with_port(Port::output("data_out", PortType::Vector(u32::from(width))))
        .with_declaration(format!(
            "type mem_type is array (0 to {}) of STD_LOGIC_VECTOR({} downto 0);",
            d - 1,
            w - 1
        ))
        .with_declaration("signal memory : mem_type := (others => (others => '0'));")
        .with_statements([
            "process(clk)",
            "begin",
            "    if rising_edge(clk) then",
            "        if we = '1' then",
            "            memory(to_integer(unsigned(addr))) <= data_in;",
            "        end if;",
            "        data_out <= memory(to_integer(unsigned(addr)));",
            "    end if;",
            "end process;",
        ])
}

/// Divide-by-N clock divider: a bounded counter and a toggle flop, so the
/// output toggles once every `divisor` input edges.
pub(super) fn clock_divider(identity: &Identity, divisor: u8) -> DesignUnit {
    let div = i64::from(divisor);

    DesignUnit::new(identity)
        .with_port(Port::input("clk_in", PortType::Bit))
        .with_port(Port::output("clk_out", PortType::Bit))
        .with_declaration(format!("signal counter : integer range 0 to {} := 0;", div - 1))
        .with_declaration("signal clk_temp : STD_LOGIC := '0';")
        .with_statements([
            "process(clk_in)".to_owned(),
            "begin".to_owned(),
            "    if rising_edge(clk_in) then".to_owned(),
            format!("        if counter = {} then", div - 1),
            "            clk_temp <= not clk_temp;".to_owned(),
            "            counter <= 0;".to_owned(),
            "        else".to_owned(),
            "            counter <= counter + 1;".to_owned(),
            "        end if;".to_owned(),
            "    end if;".to_owned(),
            "end process;".to_owned(),
            "clk_out <= clk_temp;".to_owned(),
        ])
}
