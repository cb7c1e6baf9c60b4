//! Protocol reference table loading from the IANA protocol-numbers CSV.

use serde::Deserialize;
use tracing::info;

use segviz_core::{Error, ProtocolEntry, ProtocolTable, Result};

/// One CSV row. Only `Decimal` and `Keyword` matter; the table carries more
/// columns which are ignored.
#[derive(Debug, Deserialize)]
struct ProtocolRecord {
    #[serde(rename = "Decimal")]
    decimal: String,
    #[serde(rename = "Keyword", default)]
    keyword: String,
}

/// Load the protocol table from a CSV file.
///
/// Rows without a keyword (the unassigned ranges like `146-252`) and rows
/// that fail to deserialize are skipped: they become lookup misses and the
/// aggregator's `PROTO-<n>` fallback covers them. Only an unreadable file
/// is an error.
pub fn load_protocol_table(path: &str) -> Result<ProtocolTable> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| {
        Error::protocol_table_invalid(e.to_string())
            .with_operation("protocols::load_protocol_table")
            .with_context("path", path)
            .set_source(e)
    })?;

    let mut table = ProtocolTable::new();
    let mut skipped = 0usize;
    for record in reader.deserialize::<ProtocolRecord>() {
        match record {
            Ok(rec) if !rec.keyword.is_empty() => table.insert(ProtocolEntry {
                decimal: rec.decimal,
                keyword: rec.keyword,
            }),
            Ok(_) | Err(_) => skipped += 1,
        }
    }

    info!(
        "Loaded {} protocol keywords from {} ({} rows skipped)",
        table.len(),
        path,
        skipped
    );
    Ok(table)
}
