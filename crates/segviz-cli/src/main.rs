use clap::Parser;

use segviz::{SegvizOptions, run_main};
use segviz_core::Result;

#[derive(Parser, Debug)]
#[command(
    name = "segviz",
    about = "segviz: render segmentation policies as DOT diagrams",
    version
)]
pub struct Cli {
    /// JSON configuration files with application records (repeatable)
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        num_args = 1..,
        action = clap::ArgAction::Append,
        required = true
    )]
    config: Vec<String>,

    /// Protocol-number reference table (IANA CSV)
    #[arg(long, value_name = "FILE", default_value = "protocol-numbers-1.csv")]
    protocols: String,

    /// Omit port/protocol labels from edges
    #[arg(long, default_value_t = false)]
    no_ports: bool,

    /// Directory for generated .dot files
    #[arg(short = 'o', long = "output-dir", value_name = "DIR", default_value = ".")]
    output_dir: String,
}

pub fn run(args: Cli) -> Result<()> {
    // Initialize tracing subscriber for logging
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }

    let opts = SegvizOptions {
        configs: args.config,
        protocols: args.protocols,
        include_ports: !args.no_ports,
        output_dir: args.output_dir,
    };

    let summary = run_main(&opts)?;

    for path in &summary.written {
        println!("{}", path.display());
    }
    if summary.failed > 0 {
        eprintln!("{} application(s) skipped", summary.failed);
    }
    Ok(())
}

pub fn main() -> Result<()> {
    let args = Cli::parse();
    run(args)
}
