// cargo run --bin extractor -- \
//     2022-03-01_kharkiv \
//     data/satellite-imagery/rasters/2022-03-01_kharkiv.tif.gdalinfo.json
//
// for f in data/satellite-imagery/rasters/*.tif; do
//     gdalinfo -json "$f" > /tmp/gdalinfo.json
//     cargo run --bin extractor -- "$(basename "$f" .tif)" /tmp/gdalinfo.json
// done

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use raster_info::{logging, summary, RasterInfoError};

/// Keep `size` and `wgs84Extent` from a gdalinfo JSON file and write them to <IDENTIFIER>.json
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Name of the summary file to write (without the .json suffix)
    identifier: Option<String>,

    /// Raster metadata produced by `gdalinfo -json`
    #[arg(value_name = "SOURCE_PATH")]
    source: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose).context("initialising logger")?;

    let identifier = args
        .identifier
        .ok_or(RasterInfoError::MissingArgument("identifier"))?;
    let source = args
        .source
        .ok_or(RasterInfoError::MissingArgument("source-path"))?;
    info!("Started - identifier: {identifier}, source: {}", source.display());

    let out_path = summary::extract_summary(&identifier, &source, Path::new("."))
        .with_context(|| format!("extracting {}", source.display()))?;

    // Report the path as given, without the leading "./"
    let shown = out_path.strip_prefix(".").unwrap_or(&out_path);
    println!("{}", shown.display());
    Ok(())
}
