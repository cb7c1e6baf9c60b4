//! segviz command-line interface.
//!
pub mod config;
pub mod output;
pub mod pipeline;
pub mod protocols;

use segviz_core::{Error, Result};

pub use pipeline::{RunSummary, process_applications};

/// Options for running segviz.
pub struct SegvizOptions {
    /// JSON configuration files holding application records.
    pub configs: Vec<String>,
    /// Path to the protocol-number reference table (IANA CSV).
    pub protocols: String,
    /// Include aggregated port/protocol labels on edges.
    pub include_ports: bool,
    /// Directory the generated `.dot` files are written to.
    pub output_dir: String,
}

/// Main entry point
pub fn run_main(opts: &SegvizOptions) -> Result<RunSummary> {
    // The reference table is only consulted when labels are requested;
    // a no-ports run never reads the file.
    let table = if opts.include_ports {
        Some(protocols::load_protocol_table(&opts.protocols)?)
    } else {
        None
    };

    let mut records = Vec::new();
    for path in &opts.configs {
        records.extend(config::read_applications(path)?);
    }

    if records.is_empty() {
        return Err(Error::config_invalid("no application records found")
            .with_operation("run_main"));
    }

    process_applications(opts, &records, table.as_ref())
}
