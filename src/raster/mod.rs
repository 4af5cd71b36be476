//! Raster drawing surfaces
//!
//! This module contains:
//! - The `Surface` trait the generators draw through
//! - An RGBA canvas backed by a `tiny-skia` pixmap
//! - Triangle outline paths

/// Canvas type and the `Surface` drawing trait
pub mod canvas;
/// Triangle outline paths
pub mod triangle;

pub use canvas::{Canvas, PixelRect, Surface};
pub use triangle::{Point, triangle_path};
