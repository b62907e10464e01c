//! `copysmith types` -- list the copy types and tones the form accepts.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use copysmith_core::prompt;
use copysmith_types::copy::{CopyType, Tone};

use crate::http::handlers::copy_types::CopyOptions;

pub fn list_types(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&CopyOptions::all())?);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Type").fg(Color::White),
        Cell::new("Label").fg(Color::White),
        Cell::new("Asks for").fg(Color::White),
    ]);

    for copy_type in CopyType::ALL {
        table.add_row(vec![
            Cell::new(copy_type.tag()).fg(Color::Cyan),
            Cell::new(copy_type.label()),
            Cell::new(prompt::instruction(copy_type)),
        ]);
    }

    println!();
    println!("{table}");
    println!();

    let tones: Vec<String> = Tone::ALL.iter().map(|t| t.to_string()).collect();
    println!("  {} {}", style("Tones:").bold(), tones.join(", "));
    println!();

    Ok(())
}
