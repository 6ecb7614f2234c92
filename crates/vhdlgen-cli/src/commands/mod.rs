//! Command handlers, one module per subcommand family.

pub mod completions;
pub mod generate;
pub mod list;
