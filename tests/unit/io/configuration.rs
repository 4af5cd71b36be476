//! Tests for generation constants and defaults

#[cfg(test)]
mod tests {
    use tilegen::generation::color::ColorPalette;
    use tilegen::io::configuration::{
        DEFAULT_IMAGE_COUNT, DEFAULT_LOG_FILTER, DEFAULT_PALETTE, DEFAULT_TILE_HEIGHT,
        DEFAULT_TILE_WIDTH, DEFAULT_TILES_ACROSS, DEFAULT_TILES_DOWN, MAX_CANVAS_DIMENSION,
        OUTPUT_EXTENSION, RECTANGLE_PICKER_ENTRIES_PER_TILE, TRIANGLES_PER_TILE,
        VERBOSE_LOG_FILTER,
    };

    // Tests both tilings expect the same picker length per cell
    // Verified by setting the rectangle factor to one
    #[test]
    fn test_picker_entries_per_tile() {
        assert_eq!(TRIANGLES_PER_TILE, 2);
        assert_eq!(RECTANGLE_PICKER_ENTRIES_PER_TILE, TRIANGLES_PER_TILE);
    }

    // Tests the default grid fits inside the canvas limit
    // Verified by lowering the limit below the default canvas
    #[test]
    fn test_default_canvas_within_limit() {
        assert_eq!((DEFAULT_TILE_WIDTH, DEFAULT_TILE_HEIGHT), (300, 200));
        assert_eq!((DEFAULT_TILES_ACROSS, DEFAULT_TILES_DOWN), (10, 8));
        assert!(DEFAULT_TILE_WIDTH * DEFAULT_TILES_ACROSS <= MAX_CANVAS_DIMENSION);
        assert!(DEFAULT_TILE_HEIGHT * DEFAULT_TILES_DOWN <= MAX_CANVAS_DIMENSION);
    }

    // Tests the canvas side limit matches the largest cairo image surface
    // Verified by raising the limit to 32768
    #[test]
    fn test_canvas_limit() {
        assert_eq!(MAX_CANVAS_DIMENSION, 32_767);
    }

    // Tests the default palette is a valid palette
    // Verified by pushing a channel above one
    #[test]
    fn test_default_palette_valid() {
        let palette = ColorPalette::from_channels(&DEFAULT_PALETTE).unwrap();
        assert_eq!(palette.len(), 3);
    }

    // Tests output and logging defaults
    // Verified by changing the extension
    #[test]
    fn test_output_and_logging_defaults() {
        assert_eq!(OUTPUT_EXTENSION, "png");
        assert_eq!(DEFAULT_IMAGE_COUNT, 1);
        assert_ne!(DEFAULT_LOG_FILTER, VERBOSE_LOG_FILTER);
    }
}
