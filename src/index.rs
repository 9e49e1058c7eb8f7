use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use log::{debug, info, warn};
use serde_json::Value;

use crate::error::{RasterInfoError, Result};

/// Name of the aggregate index written next to the summaries.
pub const INDEX_FILE_NAME: &str = "info.json";

/// Any entry whose name contains this is treated as a summary.
const SUMMARY_MARKER: &str = ".json";

/// Key injected into every summary of the index.
const FILENAME_KEY: &str = "filename";

/// Text before the first `.` of a file name (`foo.bar.json` -> `foo`).
pub fn identifier_from_file_name(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}

/// Summary file names in `dir`, sorted ascending.
///
/// The match is a plain substring test, so `foo.jsonish` is picked up too.
/// The index itself and anything that is not a regular file are left out.
pub fn discover_summaries(dir: &Path) -> Result<Vec<String>> {
    let io_failure = |source: std::io::Error| RasterInfoError::IoFailure {
        path: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_failure)? {
        let entry = entry.map_err(io_failure)?;

        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            warn!("Skipping non UTF-8 file name {:?}", entry.file_name());
            continue;
        };
        if !name.contains(SUMMARY_MARKER) || name == INDEX_FILE_NAME {
            continue;
        }
        if !entry.path().is_file() {
            debug!("Skipping {name}: not a regular file");
            continue;
        }
        names.push(name);
    }

    names.sort();
    Ok(names)
}

/// Set `filename` on a loaded summary, replacing any value already there.
pub fn tag_summary(summary: Value, file_name: &str) -> Result<Value> {
    let Value::Object(mut map) = summary else {
        return Err(RasterInfoError::malformed(
            file_name,
            "top-level JSON is not an object",
        ));
    };

    map.insert(
        FILENAME_KEY.to_owned(),
        Value::String(identifier_from_file_name(file_name).to_owned()),
    );
    Ok(Value::Object(map))
}

fn load_summary(path: &Path) -> Result<Value> {
    let raw = fs::read(path).map_err(|source| RasterInfoError::FileNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&raw).map_err(|e| RasterInfoError::malformed(path, e))
}

/// Load and tag every summary in `dir`, in file name order.
///
/// The first unreadable or malformed file aborts the whole run.
pub fn build_index(dir: &Path) -> Result<Vec<Value>> {
    let names = discover_summaries(dir)?;
    info!("Found {} summary file(s) in {}", names.len(), dir.display());

    names
        .iter()
        .map(|name| {
            let summary = load_summary(&dir.join(name))?;
            debug!("Loaded {name}");
            tag_summary(summary, name)
        })
        .collect()
}

/// Build the index for `dir` and write it to `<dir>/info.json`.
///
/// Returns the written path and the number of entries.
pub fn write_index(dir: &Path) -> Result<(PathBuf, usize)> {
    let entries = build_index(dir)?;

    let out_path = dir.join(INDEX_FILE_NAME);
    let io_failure = |source: std::io::Error| RasterInfoError::IoFailure {
        path: out_path.clone(),
        source,
    };

    let mut out = BufWriter::new(File::create(&out_path).map_err(io_failure)?);
    serde_json::to_writer(&mut out, &entries).map_err(|e| io_failure(e.into()))?;
    out.flush().map_err(io_failure)?;

    info!("Wrote {} entries to {}", entries.len(), out_path.display());
    Ok((out_path, entries.len()))
}
