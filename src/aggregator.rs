/*
cd data/satellite-imagery/rasters && cargo run --manifest-path ../../../Cargo.toml --bin aggregator
*/

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use raster_info::{index, logging};

/// Merge every summary JSON in the current directory into info.json
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose).context("initialising logger")?;

    let (out_path, count) =
        index::write_index(Path::new(".")).context("aggregating raster summaries")?;
    info!("Merged {count} summary file(s)");

    println!("All raster data saved at {}", out_path.display());
    Ok(())
}
