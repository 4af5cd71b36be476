//! Rectangle tiling: one solid rectangle per grid cell

use crate::generation::color::{ColorMode, ColorPalette, ColorPicker, Rgb};
use crate::generation::dimensions::{
    GridWalk, TileCell, TileDimensions, TilingDimensions, canvas_size,
};
use crate::io::configuration::RECTANGLE_PICKER_ENTRIES_PER_TILE;
use crate::io::error::{Result, invalid_argument};
use crate::raster::{Canvas, PixelRect, Surface};
use rand::Rng;

/// Picker length accepted in palette mode
///
/// This is twice the number of rectangles, matching the triangle tiling's
/// picker length. Only the first `across * down` entries are drawn from.
pub const fn required_picker_length(tiling: TilingDimensions) -> usize {
    tiling
        .cell_count()
        .saturating_mul(RECTANGLE_PICKER_ENTRIES_PER_TILE)
}

/// Render a rectangle tiling onto a new canvas sized to fit the grid exactly
///
/// # Errors
///
/// Returns `InvalidArgument` if the palette-mode picker length is not
/// `2 * across * down`, or if the canvas would be too large
pub fn generate_rectangle_tiling<R: Rng>(
    tile: TileDimensions,
    tiling: TilingDimensions,
    mode: &ColorMode,
    rng: &mut R,
) -> Result<Canvas> {
    validate_mode(tiling, mode)?;
    let (width, height) = canvas_size(tile, tiling)?;

    let mut canvas = Canvas::new(width, height);
    paint(&mut canvas, tile, tiling, mode, rng);
    Ok(canvas)
}

/// Render a rectangle tiling from an optional palette and picker
///
/// Without either, every tile gets an independent random color.
///
/// # Errors
///
/// Returns `InvalidArgument` if only one of `palette` and `picker` is given,
/// if a picker entry is out of range, or for any reason
/// [`generate_rectangle_tiling`] fails
pub fn generate_rectangle_tiling_from_parts<R: Rng>(
    tile: TileDimensions,
    tiling: TilingDimensions,
    palette: Option<&ColorPalette>,
    picker: Option<&ColorPicker>,
    rng: &mut R,
) -> Result<Canvas> {
    let mode = ColorMode::from_parts(palette, picker)?;
    generate_rectangle_tiling(tile, tiling, &mode, rng)
}

/// Paint a rectangle tiling onto an existing surface
///
/// # Errors
///
/// Returns `InvalidArgument` if the palette-mode picker length is wrong
pub fn paint_rectangle_tiling<S: Surface, R: Rng>(
    surface: &mut S,
    tile: TileDimensions,
    tiling: TilingDimensions,
    mode: &ColorMode,
    rng: &mut R,
) -> Result<()> {
    validate_mode(tiling, mode)?;
    paint(surface, tile, tiling, mode, rng);
    Ok(())
}

fn validate_mode(tiling: TilingDimensions, mode: &ColorMode) -> Result<()> {
    if let ColorMode::Palette(sequence) = mode {
        let required = required_picker_length(tiling);
        if sequence.len() != required {
            return Err(invalid_argument(
                "color_picker",
                &sequence.len(),
                &format!(
                    "expected {required} entries for a {}x{} rectangle tiling",
                    tiling.across, tiling.down
                ),
            ));
        }
    }
    Ok(())
}

fn paint<S: Surface, R: Rng>(
    surface: &mut S,
    tile: TileDimensions,
    tiling: TilingDimensions,
    mode: &ColorMode,
    rng: &mut R,
) {
    tracing::debug!(
        across = tiling.across,
        down = tiling.down,
        tile_width = tile.width,
        tile_height = tile.height,
        random = matches!(mode, ColorMode::Random),
        "painting rectangle tiling"
    );

    let cells = GridWalk::new(tile, tiling);
    match mode {
        ColorMode::Random => {
            for cell in cells {
                surface.fill_rect(tile_rect(&cell), Rgb::random(rng));
            }
        }
        ColorMode::Palette(sequence) => {
            for (cell, color) in cells.zip(sequence.iter()) {
                surface.fill_rect(tile_rect(&cell), color);
            }
        }
    }
}

const fn tile_rect(cell: &TileCell) -> PixelRect {
    PixelRect::new(cell.x, cell.y, cell.width, cell.height)
}
