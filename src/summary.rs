use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use log::info;
use serde::Serialize;
use serde_json::Value;

use crate::error::{RasterInfoError, Result};

/// The part of a `gdalinfo -json` document kept for each raster.
///
/// Both values are passed through untouched; any other key of the source
/// document is dropped. A repeated key keeps its last value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RasterSummary {
    /// Raster dimensions, usually `[width, height]`
    pub size: Value,
    /// Footprint in WGS84 (a GeoJSON polygon in gdalinfo output)
    #[serde(rename = "wgs84Extent")]
    pub wgs84_extent: Value,
}

impl RasterSummary {
    /// Read raw raster metadata and keep `size` and `wgs84Extent`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read(path).map_err(|source| RasterInfoError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let json: Value =
            serde_json::from_slice(&raw).map_err(|e| RasterInfoError::malformed(path, e))?;
        let Value::Object(mut map) = json else {
            return Err(RasterInfoError::malformed(path, "top-level JSON is not an object"));
        };

        let mut take = |key: &str| {
            map.remove(key)
                .ok_or_else(|| RasterInfoError::malformed(path, format!("missing field `{key}`")))
        };
        Ok(Self {
            size: take("size")?,
            wgs84_extent: take("wgs84Extent")?,
        })
    }

    /// Write the summary as compact JSON, replacing any existing file.
    pub fn write(&self, path: &Path) -> Result<()> {
        let io_failure = |source: std::io::Error| RasterInfoError::IoFailure {
            path: path.to_path_buf(),
            source,
        };

        let mut out = BufWriter::new(File::create(path).map_err(io_failure)?);
        serde_json::to_writer(&mut out, self).map_err(|e| io_failure(e.into()))?;
        out.flush().map_err(io_failure)
    }
}

/// `<identifier>.json`, with the identifier used verbatim.
pub fn summary_file_name(identifier: &str) -> String {
    format!("{identifier}.json")
}

/// Project `source` down to a summary written as `<out_dir>/<identifier>.json`.
///
/// The source is parsed and checked before anything is created, so a bad
/// input leaves no output behind. Returns the written path.
pub fn extract_summary(identifier: &str, source: &Path, out_dir: &Path) -> Result<PathBuf> {
    if identifier.is_empty() {
        return Err(RasterInfoError::MissingArgument("identifier"));
    }
    if source.as_os_str().is_empty() {
        return Err(RasterInfoError::MissingArgument("source-path"));
    }

    let summary = RasterSummary::load(source)?;
    info!("Loaded {} (size: {})", source.display(), summary.size);

    let out_path = out_dir.join(summary_file_name(identifier));
    summary.write(&out_path)?;
    info!("Wrote summary {}", out_path.display());

    Ok(out_path)
}
