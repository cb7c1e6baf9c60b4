//! Per-application processing pipeline: deserialize → build graph → render
//! → write.
//!
//! Failure isolation is per application: a record that fails to deserialize
//! (missing `id`, `name`, `proto`, or a malformed value) is reported and
//! skipped, without partial output for it, and the remaining applications
//! still produce their diagrams.

use std::path::PathBuf;
use std::time::Instant;

use tracing::{error, info};

use segviz_core::{Application, Error, ProtocolTable, Result, build_graph};
use segviz_dot::render_graph;

use crate::SegvizOptions;
use crate::output;

/// Outcome of one run.
#[derive(Debug, Default)]
pub struct RunSummary {
    /// Paths of diagram files written, one per successful application.
    pub written: Vec<PathBuf>,
    /// Number of application records skipped because of upstream-data
    /// defects.
    pub failed: usize,
}

/// Process all application records, writing one diagram per application.
pub fn process_applications(
    opts: &SegvizOptions,
    records: &[serde_json::Value],
    table: Option<&ProtocolTable>,
) -> Result<RunSummary> {
    let start = Instant::now();
    let mut summary = RunSummary::default();

    for record in records {
        let name = record_name(record);
        match process_application(opts, record, table) {
            Ok(path) => {
                info!(application = %name, path = %path.display(), "diagram written");
                summary.written.push(path);
            }
            Err(e) => {
                error!(application = %name, error = %e, "skipping application");
                eprintln!("Skipping application '{name}': {e}");
                summary.failed += 1;
            }
        }
    }

    info!(
        "Processed {} application(s), {} skipped: {:.2}s",
        records.len(),
        summary.failed,
        start.elapsed().as_secs_f64()
    );
    Ok(summary)
}

/// Best-effort name for reporting, available even when the record is
/// otherwise malformed.
fn record_name(record: &serde_json::Value) -> &str {
    record
        .get("name")
        .and_then(|v| v.as_str())
        .unwrap_or("<unnamed>")
}

fn process_application(
    opts: &SegvizOptions,
    record: &serde_json::Value,
    table: Option<&ProtocolTable>,
) -> Result<PathBuf> {
    let app: Application = serde_json::from_value(record.clone()).map_err(|e| {
        Error::deserialize_failed(record_name(record), e.to_string())
            .with_operation("pipeline::process_application")
    })?;

    let graph = build_graph(&app, table);
    let dot = render_graph(&graph);

    let path = output::output_path(&opts.output_dir, &app.name, opts.include_ports);
    std::fs::write(&path, &dot).map_err(|e| {
        Error::from(e)
            .with_operation("pipeline::process_application")
            .with_context("path", path.display().to_string())
    })?;
    Ok(path)
}
