//! Implementation of the `vhdlgen list` command.

use serde::Serialize;

use vhdlgen_core::domain::ComponentKind;

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

#[derive(Serialize)]
struct KindRow {
    name: &'static str,
    description: &'static str,
}

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let rows: Vec<KindRow> = ComponentKind::ALL
        .iter()
        .map(|kind| KindRow {
            name: kind.as_str(),
            description: kind.description(),
        })
        .collect();

    match args.format {
        ListFormat::Table => {
            output.header("Supported components:")?;
            let width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
            for row in &rows {
                output.print(&format!("  {:<width$}  {}", row.name, row.description))?;
            }
        }

        ListFormat::List => {
            for row in &rows {
                println!("{}", row.name);
            }
        }

        ListFormat::Json => {
            // Serialised straight to stdout, bypassing the OutputManager:
            // JSON output must be parseable even in non-TTY pipes.
            let json = serde_json::to_string_pretty(&rows)
                .map_err(|e| std::io::Error::other(e.to_string()))?;
            println!("{json}");
        }

        ListFormat::Csv => {
            println!("name,description");
            for row in &rows {
                println!("{},{}", row.name, row.description);
            }
        }
    }

    Ok(())
}
