//! Configuration loading: application records from JSON files.
//!
//! A configuration file holds either a single application object or an
//! array of them. Records are returned as raw JSON values; turning each
//! one into an [`Application`](segviz_core::Application) happens later,
//! per record, so one malformed application cannot take down the rest of
//! the run.

use tracing::info;

use segviz_core::{Error, Result};

/// Read application records from a JSON configuration file.
pub fn read_applications(path: &str) -> Result<Vec<serde_json::Value>> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        Error::from(e)
            .with_operation("config::read_applications")
            .with_context("path", path)
    })?;

    let value: serde_json::Value = serde_json::from_str(&text).map_err(|e| {
        Error::config_invalid("configuration file is not valid JSON")
            .with_operation("config::read_applications")
            .with_context("path", path)
            .set_source(e)
    })?;

    let records = match value {
        serde_json::Value::Array(records) => records,
        record @ serde_json::Value::Object(_) => vec![record],
        _ => {
            return Err(Error::config_invalid(
                "expected an application object or an array of them",
            )
            .with_operation("config::read_applications")
            .with_context("path", path));
        }
    };

    info!("Loaded {} application record(s) from {}", records.len(), path);
    Ok(records)
}
