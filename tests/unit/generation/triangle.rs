//! Tests for the triangle tiling generator

#[cfg(test)]
mod tests {
    use image::Rgba;
    use tilegen::generation::color::{ColorPalette, ColorPicker, Rgb};
    use tilegen::generation::dimensions::{TileDimensions, TilingDimensions};
    use tilegen::generation::triangle::{
        generate_triangle_tiling, paint_triangle_tiling, required_picker_length,
    };
    use tilegen::raster::{PixelRect, Point, Surface};

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);

    #[derive(Default)]
    struct RecordingSurface {
        triangles: Vec<([Point; 3], Rgb)>,
    }

    impl Surface for RecordingSurface {
        fn dimensions(&self) -> (u32, u32) {
            (0, 0)
        }

        fn fill_rect(&mut self, _rect: PixelRect, _color: Rgb) {
            unreachable!("triangle tilings never fill rectangles");
        }

        fn fill_triangle(&mut self, vertices: [Point; 3], color: Rgb) {
            self.triangles.push((vertices, color));
        }
    }

    fn red_green() -> ColorPalette {
        ColorPalette::from_channels(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]).unwrap()
    }

    fn point(x: u32, y: u32) -> Point {
        Point::from((x, y))
    }

    // Tests two picker entries are needed per cell
    // Verified by requiring one entry per cell
    #[test]
    fn test_required_picker_length() {
        assert_eq!(required_picker_length(TilingDimensions::new(10, 8)), 160);
        assert_eq!(required_picker_length(TilingDimensions::new(1, 1)), 2);
    }

    // Tests a single 2x2 cell gives the upper-left triangle the diagonal pixels
    // Verified by swapping the upper and lower picker entries
    #[test]
    fn test_single_cell_halves() {
        let canvas = generate_triangle_tiling(
            TileDimensions::new(2, 2),
            TilingDimensions::new(1, 1),
            &red_green(),
            &ColorPicker::new(vec![0, 1]),
        )
        .unwrap();

        assert_eq!((canvas.width(), canvas.height()), (2, 2));
        assert_eq!(canvas.pixel(0, 0), Some(RED));
        assert_eq!(canvas.pixel(1, 0), Some(RED));
        assert_eq!(canvas.pixel(0, 1), Some(RED));
        assert_eq!(canvas.pixel(1, 1), Some(GREEN));
    }

    // Tests an n by n cell splits n(n+1)/2 upper pixels from n(n-1)/2 lower ones
    // Verified by cutting along the other diagonal
    #[test]
    fn test_diagonal_partition_counts() {
        let canvas = generate_triangle_tiling(
            TileDimensions::new(4, 4),
            TilingDimensions::new(1, 1),
            &red_green(),
            &ColorPicker::new(vec![0, 1]),
        )
        .unwrap();

        for y in 0..4 {
            for x in 0..4 {
                let expected = if x + y < 4 { RED } else { GREEN };
                assert_eq!(canvas.pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }

        let image = canvas.to_image();
        let red = image.pixels().filter(|pixel| **pixel == RED).count();
        assert_eq!((red, 16 - red), (10, 6));
    }

    // Tests adjacent triangles leave no unpainted seams on non-square tiles
    // Verified by excluding on-edge pixel centres from both triangles
    #[test]
    fn test_no_seams() {
        let tiling = TilingDimensions::new(3, 2);
        let indices = (0..required_picker_length(tiling)).map(|i| i % 2).collect();
        let canvas = generate_triangle_tiling(
            TileDimensions::new(7, 5),
            tiling,
            &red_green(),
            &ColorPicker::new(indices),
        )
        .unwrap();

        assert_eq!((canvas.width(), canvas.height()), (21, 10));
        assert!(canvas.to_image().pixels().all(|pixel| pixel.0[3] == 255));
    }

    // Tests any picker length other than two per cell is rejected
    // Verified by only rejecting short pickers
    #[test]
    fn test_picker_length_mismatch() {
        let palette = red_green();
        for indices in [vec![0], vec![0, 1, 0], vec![], vec![0, 1, 0, 1, 0, 1, 0, 1, 0]] {
            let err = generate_triangle_tiling(
                TileDimensions::new(2, 2),
                TilingDimensions::new(2, 2),
                &palette,
                &ColorPicker::new(indices),
            )
            .unwrap_err();
            assert!(err.is_invalid_argument());
        }
    }

    // Tests picker entries beyond the palette are rejected
    // Verified by wrapping indices modulo the palette size
    #[test]
    fn test_picker_index_out_of_range() {
        let err = generate_triangle_tiling(
            TileDimensions::new(2, 2),
            TilingDimensions::new(1, 1),
            &red_green(),
            &ColorPicker::new(vec![0, 5]),
        )
        .unwrap_err();
        assert!(err.is_invalid_argument());
    }

    // Tests each cell draws its upper triangle before its lower one, in row-major order
    // Verified by drawing the lower triangle first
    #[test]
    fn test_paint_order_and_vertices() {
        let palette = red_green();
        let sequence = ColorPicker::new(vec![0, 1, 1, 0]).resolve(&palette).unwrap();
        let mut surface = RecordingSurface::default();

        paint_triangle_tiling(
            &mut surface,
            TileDimensions::new(4, 3),
            TilingDimensions::new(2, 1),
            &sequence,
        )
        .unwrap();

        let red = Rgb::new(1.0, 0.0, 0.0).unwrap();
        let green = Rgb::new(0.0, 1.0, 0.0).unwrap();
        assert_eq!(
            surface.triangles,
            vec![
                ([point(0, 0), point(4, 0), point(0, 3)], red),
                ([point(4, 0), point(4, 3), point(0, 3)], green),
                ([point(4, 0), point(8, 0), point(4, 3)], green),
                ([point(8, 0), point(8, 3), point(4, 3)], red),
            ]
        );
    }

    // Tests identical inputs render identical canvases
    // Verified by seeding colors from entropy
    #[test]
    fn test_idempotent() {
        let render = || {
            generate_triangle_tiling(
                TileDimensions::new(6, 4),
                TilingDimensions::new(2, 3),
                &red_green(),
                &ColorPicker::new(vec![0, 1, 1, 1, 0, 0, 1, 0, 1, 1, 0, 1]),
            )
            .unwrap()
        };
        assert_eq!(render(), render());
    }
}
