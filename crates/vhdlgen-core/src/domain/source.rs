//! Structured assembly of one VHDL design unit.
//!
//! Generators never concatenate raw strings for the unit skeleton; they
//! describe ports, declarations and body statements on a [`DesignUnit`] and
//! let [`DesignUnit::render`] produce the final text. This keeps identifier
//! and bit-width substitution in one auditable place and makes golden-text
//! tests practical.

use std::fmt;

use crate::domain::config::Identity;

/// The full text of one generated hardware-description unit.
///
/// Immutable; produced fresh on every call and owned by the caller for
/// exactly as long as the display/export step needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource(String);

impl GeneratedSource {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Number of lines, used by sinks for pagination.
    pub fn line_count(&self) -> usize {
        self.0.lines().count()
    }
}

impl fmt::Display for GeneratedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GeneratedSource {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── Ports ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PortDirection {
    In,
    Out,
}

impl fmt::Display for PortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::In => f.write_str("in"),
            Self::Out => f.write_str("out"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PortType {
    /// A single `STD_LOGIC` bit.
    Bit,
    /// `STD_LOGIC_VECTOR(width-1 downto 0)`, descending by convention.
    Vector(u32),
}

impl fmt::Display for PortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bit => f.write_str("STD_LOGIC"),
            // i64 so a zero-width vector renders its degenerate empty range
            // (-1 downto 0) rather than underflowing.
            Self::Vector(width) => {
                write!(f, "STD_LOGIC_VECTOR({} downto 0)", i64::from(*width) - 1)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Port {
    name: &'static str,
    direction: PortDirection,
    ty: PortType,
}

impl Port {
    pub(crate) fn input(name: &'static str, ty: PortType) -> Self {
        Self {
            name,
            direction: PortDirection::In,
            ty,
        }
    }

    pub(crate) fn output(name: &'static str, ty: PortType) -> Self {
        Self {
            name,
            direction: PortDirection::Out,
            ty,
        }
    }
}

// ── Design unit ───────────────────────────────────────────────────────────────

/// One entity/architecture pair under construction.
#[derive(Debug, Clone)]
pub(crate) struct DesignUnit {
    entity: String,
    architecture: String,
    use_numeric_std: bool,
    ports: Vec<Port>,
    declarations: Vec<String>,
    statements: Vec<String>,
}

impl DesignUnit {
    pub(crate) fn new(identity: &Identity) -> Self {
        Self {
            entity: identity.entity().to_owned(),
            architecture: identity.architecture().to_owned(),
            use_numeric_std: false,
            ports: Vec::new(),
            declarations: Vec::new(),
            statements: Vec::new(),
        }
    }

    /// Also import `IEEE.NUMERIC_STD` (needed for address arithmetic).
    pub(crate) fn with_numeric_std(mut self) -> Self {
        self.use_numeric_std = true;
        self
    }

    pub(crate) fn with_port(mut self, port: Port) -> Self {
        self.ports.push(port);
        self
    }

    /// Add one architecture declaration line (signal, type, ...).
    pub(crate) fn with_declaration(mut self, line: impl Into<String>) -> Self {
        self.declarations.push(line.into());
        self
    }

    /// Add the architecture body, one line per entry, indentation relative to
    /// the architecture body.
    pub(crate) fn with_statements<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.statements.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Render the complete unit: library header, entity with column-aligned
    /// port block, then the architecture.
    pub(crate) fn render(&self) -> GeneratedSource {
        let mut out = String::new();

        out.push_str("library IEEE;\n");
        out.push_str("use IEEE.STD_LOGIC_1164.ALL;\n");
        if self.use_numeric_std {
            out.push_str("use IEEE.NUMERIC_STD.ALL;\n");
        }
        out.push('\n');

        out.push_str(&format!("entity {} is\n", self.entity));
        out.push_str("    Port(\n");
        let pad = self.ports.iter().map(|p| p.name.len()).max().unwrap_or(0);
        for (i, port) in self.ports.iter().enumerate() {
            let terminator = if i + 1 == self.ports.len() { "" } else { ";" };
            out.push_str(&format!(
                "        {:<pad$} : {} {}{}\n",
                port.name, port.direction, port.ty, terminator
            ));
        }
        out.push_str("    );\n");
        out.push_str(&format!("end {};\n\n", self.entity));

        out.push_str(&format!(
            "architecture {} of {} is\n",
            self.architecture, self.entity
        ));
        for declaration in &self.declarations {
            out.push_str("    ");
            out.push_str(declaration);
            out.push('\n');
        }
        out.push_str("begin\n");
        for statement in &self.statements {
            if statement.is_empty() {
                out.push('\n');
            } else {
                out.push_str("    ");
                out.push_str(statement);
                out.push('\n');
            }
        }
        out.push_str(&format!("end {};\n", self.architecture));

        GeneratedSource(out)
    }
}
