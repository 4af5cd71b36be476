//! Triangle tiling: two palette-colored triangles per grid cell
//!
//! Each cell is cut along the diagonal from its top-right to its bottom-left
//! corner. The upper-left triangle takes the next picker entry, then the
//! lower-right triangle takes the one after it.

use crate::generation::color::{ColorPalette, ColorPicker, ColorSequence};
use crate::generation::dimensions::{
    GridWalk, TileCell, TileDimensions, TilingDimensions, canvas_size,
};
use crate::io::configuration::TRIANGLES_PER_TILE;
use crate::io::error::{Result, invalid_argument};
use crate::raster::{Canvas, Point, Surface};

/// Picker length required for a grid: two entries per cell
pub const fn required_picker_length(tiling: TilingDimensions) -> usize {
    tiling.cell_count().saturating_mul(TRIANGLES_PER_TILE)
}

/// Render a triangle tiling onto a new canvas sized to fit the grid exactly
///
/// # Errors
///
/// Returns `InvalidArgument` if `picker` does not hold exactly
/// `2 * across * down` entries, if an entry is out of range for `palette`,
/// or if the canvas would be too large
pub fn generate_triangle_tiling(
    tile: TileDimensions,
    tiling: TilingDimensions,
    palette: &ColorPalette,
    picker: &ColorPicker,
) -> Result<Canvas> {
    validate_picker_length(tiling, picker.len())?;
    let sequence = picker.resolve(palette)?;
    let (width, height) = canvas_size(tile, tiling)?;

    let mut canvas = Canvas::new(width, height);
    paint(&mut canvas, tile, tiling, &sequence);
    Ok(canvas)
}

/// Paint a triangle tiling onto an existing surface
///
/// # Errors
///
/// Returns `InvalidArgument` if `sequence` does not hold exactly
/// `2 * across * down` colors
pub fn paint_triangle_tiling<S: Surface>(
    surface: &mut S,
    tile: TileDimensions,
    tiling: TilingDimensions,
    sequence: &ColorSequence,
) -> Result<()> {
    validate_picker_length(tiling, sequence.len())?;
    paint(surface, tile, tiling, sequence);
    Ok(())
}

fn validate_picker_length(tiling: TilingDimensions, length: usize) -> Result<()> {
    let required = required_picker_length(tiling);
    if length == required {
        Ok(())
    } else {
        Err(invalid_argument(
            "color_picker",
            &length,
            &format!(
                "expected {required} entries for a {}x{} triangle tiling",
                tiling.across, tiling.down
            ),
        ))
    }
}

fn paint<S: Surface>(
    surface: &mut S,
    tile: TileDimensions,
    tiling: TilingDimensions,
    sequence: &ColorSequence,
) {
    tracing::debug!(
        across = tiling.across,
        down = tiling.down,
        tile_width = tile.width,
        tile_height = tile.height,
        "painting triangle tiling"
    );

    let mut colors = sequence.iter();
    for cell in GridWalk::new(tile, tiling) {
        let [upper, lower] = cell_triangles(&cell);
        if let Some(color) = colors.next() {
            surface.fill_triangle(upper, color);
        }
        if let Some(color) = colors.next() {
            surface.fill_triangle(lower, color);
        }
    }
}

fn cell_triangles(cell: &TileCell) -> [[Point; 3]; 2] {
    let left = cell.x;
    let top = cell.y;
    let right = cell.x.saturating_add(cell.width);
    let bottom = cell.y.saturating_add(cell.height);

    let top_left = Point::from((left, top));
    let top_right = Point::from((right, top));
    let bottom_left = Point::from((left, bottom));
    let bottom_right = Point::from((right, bottom));

    [
        [top_left, top_right, bottom_left],
        [top_right, bottom_right, bottom_left],
    ]
}
