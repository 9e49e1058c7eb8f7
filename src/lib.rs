//! Extract and aggregate raster sidecar metadata.
//!
//! `summary` projects `size` and `wgs84Extent` out of a `gdalinfo -json`
//! document, `index` gathers the resulting summary files into `info.json`.

pub mod error;
pub mod index;
pub mod logging;
pub mod summary;

pub use error::{RasterInfoError, Result};
