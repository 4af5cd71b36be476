//! Tile and grid dimensions and the row-major walk over grid cells

use crate::io::configuration::MAX_CANVAS_DIMENSION;
use crate::io::error::{Result, invalid_argument};
use std::fmt;

/// Size of a single tile in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileDimensions {
    /// Tile width in pixels
    pub width: u32,
    /// Tile height in pixels
    pub height: u32,
}

impl TileDimensions {
    /// Create tile dimensions
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for TileDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Shape of the tile grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TilingDimensions {
    /// Number of tiles across
    pub across: u32,
    /// Number of tiles down
    pub down: u32,
}

impl TilingDimensions {
    /// Create grid dimensions
    pub const fn new(across: u32, down: u32) -> Self {
        Self { across, down }
    }

    /// Number of cells in the grid
    pub const fn cell_count(&self) -> usize {
        self.across as usize * self.down as usize
    }
}

impl fmt::Display for TilingDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.across, self.down)
    }
}

/// Pixel size of the canvas that exactly fits the grid
///
/// # Errors
///
/// Returns `InvalidArgument` if either side overflows or exceeds `MAX_CANVAS_DIMENSION`
pub fn canvas_size(tile: TileDimensions, tiling: TilingDimensions) -> Result<(u32, u32)> {
    let width = checked_side("tile_width", tile.width, tiling.across)?;
    let height = checked_side("tile_height", tile.height, tiling.down)?;
    Ok((width, height))
}

fn checked_side(parameter: &'static str, tile_side: u32, count: u32) -> Result<u32> {
    tile_side
        .checked_mul(count)
        .filter(|&side| side <= MAX_CANVAS_DIMENSION)
        .ok_or_else(|| {
            invalid_argument(
                parameter,
                &format!("{tile_side} x {count}"),
                &format!("canvas side would exceed {MAX_CANVAS_DIMENSION} pixels"),
            )
        })
}

/// One grid cell with its top-left pixel position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCell {
    /// Grid row, top to bottom
    pub row: u32,
    /// Grid column, left to right
    pub col: u32,
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
    /// Tile width in pixels
    pub width: u32,
    /// Tile height in pixels
    pub height: u32,
}

/// Row-major iterator over grid cells
///
/// Rows are visited top to bottom and, within a row, columns left to right.
/// The pixel pointer advances by the tile width per column and resets to the
/// left edge, one tile height lower, at the start of each row.
#[derive(Debug, Clone)]
pub struct GridWalk {
    tile: TileDimensions,
    tiling: TilingDimensions,
    row: u32,
    col: u32,
}

impl GridWalk {
    /// Start a walk at the top-left cell
    pub const fn new(tile: TileDimensions, tiling: TilingDimensions) -> Self {
        Self {
            tile,
            tiling,
            row: 0,
            col: 0,
        }
    }
}

impl Iterator for GridWalk {
    type Item = TileCell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.row >= self.tiling.down || self.tiling.across == 0 {
            return None;
        }

        let cell = TileCell {
            row: self.row,
            col: self.col,
            x: self.col.saturating_mul(self.tile.width),
            y: self.row.saturating_mul(self.tile.height),
            width: self.tile.width,
            height: self.tile.height,
        };

        self.col += 1;
        if self.col == self.tiling.across {
            self.col = 0;
            self.row += 1;
        }

        Some(cell)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let visited = self.row as usize * self.tiling.across as usize + self.col as usize;
        let remaining = self.tiling.cell_count().saturating_sub(visited);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for GridWalk {}
