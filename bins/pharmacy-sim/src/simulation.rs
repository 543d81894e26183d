//! Day-by-day driver around the one-day engine.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use pharmacy_core::traits::ShelfLifeCalculator;
use pharmacy_core::types::Item;
use serde::Serialize;
use tracing::{debug, info};

/// One line of simulator output.
#[derive(Debug, Serialize)]
struct DaySnapshot<'a> {
    drugs: &'a [Item],
}

/// The shelf used when no input file is given.
pub fn builtin_batch() -> Vec<Item> {
    vec![
        Item {
            name: "Doliprane".to_string(),
            expiry: 20,
            value: 30,
        },
        Item {
            name: "Herbal Tea".to_string(),
            expiry: 10,
            value: 5,
        },
        Item {
            name: "Fervex".to_string(),
            expiry: 12,
            value: 35,
        },
        Item {
            name: "Magic Pill".to_string(),
            expiry: 15,
            value: 40,
        },
    ]
}

/// Parse a JSON array of items and validate each one.
pub fn parse_batch(json: &str) -> Result<Vec<Item>> {
    let items: Vec<Item> = serde_json::from_str(json).context("batch is not a JSON item array")?;
    for (index, item) in items.iter().enumerate() {
        item.validate()
            .with_context(|| format!("invalid item at index {index}"))?;
    }
    Ok(items)
}

/// Read and validate a batch file.
pub fn load_batch(path: &Path) -> Result<Vec<Item>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read batch {}", path.display()))?;
    parse_batch(&json).with_context(|| format!("failed to load batch {}", path.display()))
}

/// Advance `items` once per day for `days` days, writing one JSON line
/// per day after that day's transition. Returns the final batch.
pub fn run<C, W>(calc: &C, mut items: Vec<Item>, days: u32, out: &mut W) -> Result<Vec<Item>>
where
    C: ShelfLifeCalculator + ?Sized,
    W: Write + ?Sized,
{
    info!(days, items = items.len(), "starting simulation");
    for day in 1..=days {
        calc.advance_in_place(&mut items);
        let line = serde_json::to_string(&DaySnapshot { drugs: &items })
            .context("failed to serialize snapshot")?;
        writeln!(out, "{line}").with_context(|| format!("failed to write day {day}"))?;
        debug!(day, "wrote snapshot");
    }
    out.flush().context("failed to flush output")?;
    Ok(items)
}
