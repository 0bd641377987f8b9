//! Regenerate the encoder opcode module and VM variants.
//!
//! Usage:
//!   cargo run -p otter-opgen --bin opgen

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::filter::EnvFilter;

use otter_opgen::GenConfig;

#[derive(Parser, Debug)]
#[command(name = "opgen", version)]
#[command(about = "Regenerate encoder opcode tables and VM variants")]
struct Args {}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let _args = Args::parse();

    let config = GenConfig::default();
    let report = otter_opgen::generate(&config)?;
    info!(
        ops = report.op_count,
        files = report.written.len(),
        "generation complete"
    );
    Ok(())
}
