//! Procedural tiling pattern generation
//!
//! Builds images from a grid of identical tiles, each filled with one solid
//! rectangle or split into two solid triangles. Colors come from a palette
//! indexed by a picker list consumed in row-major order, or (for rectangles)
//! from an independent random color per tile.

#![forbid(unsafe_code)]

/// Bitlists, colors, grid dimensions and the tiling generators
pub mod generation;
/// Input/output operations and error handling
pub mod io;
/// Raster canvas and fill primitives
pub mod raster;

pub use io::error::{Result, TilingError};
