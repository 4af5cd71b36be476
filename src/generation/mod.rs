//! Tiling pattern generation
//!
//! This module contains:
//! - Random palette index lists
//! - Colors, palettes and color modes
//! - Tile and grid dimensions with the row-major cell walk
//! - The rectangle and triangle tiling generators

/// Random palette index lists
pub mod bitlist;
/// Colors, palettes, pickers and color modes
pub mod color;
/// Tile and grid dimensions
pub mod dimensions;
/// Rectangle tiling generator
pub mod rectangle;
/// Triangle tiling generator
pub mod triangle;

pub use bitlist::generate_random_bitlist;
pub use color::{ColorMode, ColorPalette, ColorPicker, ColorSequence, Rgb};
pub use dimensions::{GridWalk, TileCell, TileDimensions, TilingDimensions};
pub use rectangle::generate_rectangle_tiling;
pub use triangle::generate_triangle_tiling;
