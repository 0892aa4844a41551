use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use facade::{MemoryTable, SortEngine, attribute_name};
use rankify::{ColumnKey, Row};
use tracing::info;
use vaultify::{Markup, Settings};

/// Sort a projects list the way the projects page does.
#[derive(Parser, Debug)]
#[command(name = "rankify", version)]
struct Args {
    /// JSON array of project rows, backend list format or plain column names.
    #[arg(long)]
    rows: PathBuf,
    /// Settings file; defaults to the per-user config file.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Header activations to replay, in order.
    #[arg(long = "click", value_name = "COLUMN")]
    clicks: Vec<ColumnKey>,
    /// Print the resulting table as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::load(args.config.as_deref())?;
    logger::init_logger(&settings.log_filter);

    let rows = load_rows(&args.rows)?;
    info!("loaded {} rows from {}", rows.len(), args.rows.display());

    let table = MemoryTable::projects(&settings.markup, &rows);
    let mut engine = SortEngine::new(table, settings.markup.clone());
    engine.start();

    let activations = engine.activations();
    for column in &args.clicks {
        activations.send(*column)?;
    }
    let handled = engine.pump();
    info!("replayed {handled} header activations");

    let table = engine.into_adapter();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        print!("{}", render(&table, &settings.markup));
    }
    Ok(())
}

fn load_rows(path: &Path) -> Result<Vec<Row>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read rows from {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid rows in {}", path.display()))
}

/// Plain-text rendering: one column per sortable header, active one marked.
fn render(table: &MemoryTable, markup: &Markup) -> String {
    let columns: Vec<(String, String)> = table
        .headers
        .iter()
        .filter_map(|header| {
            let key = header
                .attribute(&markup.sort_key_attribute)?
                .parse::<ColumnKey>()
                .ok()?;
            let marker = match header.attribute(&markup.direction_attribute) {
                Some("asc") => " ▲",
                Some("desc") => " ▼",
                _ => "",
            };
            let attribute = attribute_name(&markup.row_attributes, key);
            Some((format!("{}{marker}", header.label), attribute.to_string()))
        })
        .collect();

    let cells: Vec<Vec<&str>> = table
        .rows()
        .iter()
        .map(|row| {
            columns
                .iter()
                .map(|(_, attribute)| row.attributes.get(attribute).map_or("", String::as_str))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, (title, _))| {
            cells
                .iter()
                .map(|row| row[i].chars().count())
                .chain([title.chars().count()])
                .max()
                .unwrap_or_default()
        })
        .collect();

    let mut out = String::new();
    let titles: Vec<&str> = columns.iter().map(|(title, _)| title.as_str()).collect();
    for line in std::iter::once(&titles).chain(cells.iter()) {
        let padded: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(cell, width)| {
                let pad = width.saturating_sub(cell.chars().count());
                format!("{cell}{}", " ".repeat(pad))
            })
            .collect();
        out.push_str(padded.join("  ").trim_end());
        out.push('\n');
    }
    out
}
