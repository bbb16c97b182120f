use anyhow::{Context as _, Result};
use serde::de::DeserializeOwned;
use std::{fs::File, io::Read, path::Path};

use crate::moneytree::{BankTransaction, Expense};

pub fn load_bank_transactions(path: &Path) -> Result<Vec<BankTransaction>> {
    log::info!("Loading bank account histories from {}...", path.display());
    let records = load_file(path)?;
    log::info!("Loading bank account histories...done ({} rows)", records.len());
    Ok(records)
}

pub fn load_expenses(path: &Path) -> Result<Vec<Expense>> {
    log::info!("Loading expenses from {}...", path.display());
    let records = load_file(path)?;
    log::info!("Loading expenses...done ({} rows)", records.len());
    Ok(records)
}

fn load_file<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    load(file).with_context(|| format!("Failed to read {}", path.display()))
}

/// Parses a CSV document with a header row. Columns are matched by their header label.
pub fn load<T: DeserializeOwned>(mut input_stream: impl Read) -> Result<Vec<T>> {
    let mut content = String::new();
    input_stream.read_to_string(&mut content)?;
    let content = maybe_remove_byte_order_mark(content);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_reader(content.as_bytes());
    reader
        .deserialize::<T>()
        .enumerate()
        // Row 1 is the header
        .map(|(index, record)| record.with_context(|| format!("Invalid row {}", index + 2)))
        .collect()
}

fn maybe_remove_byte_order_mark(mut content: String) -> String {
    if content.starts_with('\u{FEFF}') {
        content.remove(0);
    }
    content
}
