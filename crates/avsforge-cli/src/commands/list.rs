//! Implementation of the `avsforge list` command.

use avsforge_core::domain::TemplateKind;

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    match args.format {
        ListFormat::Table => {
            output.header("Available templates:")?;
            for kind in TemplateKind::ALL {
                output.print(&format!("  {:<12} {}", kind.as_str(), kind.describe()))?;
            }
        }

        ListFormat::List => {
            for kind in TemplateKind::ALL {
                println!("{kind}");
            }
        }

        ListFormat::Json => {
            // Serialise as a JSON array to stdout (bypasses OutputManager
            // because JSON output must be parseable even in non-TTY pipes).
            let entries: Vec<serde_json::Value> = TemplateKind::ALL
                .iter()
                .map(|kind| {
                    serde_json::json!({
                        "name": kind,
                        "description": kind.describe(),
                    })
                })
                .collect();
            let json = serde_json::to_string_pretty(&entries)
                .unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }
    }

    Ok(())
}
