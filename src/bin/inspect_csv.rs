use anyhow::{bail, Context, Result};
use std::fs;

use card_listings::parsers::{csv_to_records, is_active, record_to_listing};

/// Runs a saved sheet export through the parser and shows each stage.
fn main() -> Result<()> {
    let Some(path) = std::env::args().nth(1) else {
        bail!("usage: inspect_csv <sheet.csv>");
    };

    let text = fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path))?;
    let records = csv_to_records(&text);
    println!("Found {} data rows in {}", records.len(), path);

    let mut shown = 0;
    for (index, record) in records.iter().enumerate() {
        let mut columns: Vec<_> = record.0.iter().collect();
        columns.sort_by(|a, b| a.0.cmp(b.0));
        println!("\nRow {}: {:?}", index + 1, columns);

        if is_active(record) {
            println!("  -> {}", record_to_listing(record));
            shown += 1;
        } else {
            println!("  -> hidden (active = false)");
        }
    }

    println!("\n{} listings would be shown, {} hidden", shown, records.len() - shown);
    Ok(())
}
