//! Tests for the setup-then-draw host sequence

#[cfg(test)]
mod tests {
    use towerfield::BoardError;
    use towerfield::io::configuration::{
        BACKGROUND_COLOR, DEFAULT_FIELD_MAP, FIELD_TILE_SIZE, PATH_STROKE_COLOR,
    };
    use towerfield::render::raster::RasterSurface;
    use towerfield::render::sketch::Sketch;
    use towerfield::render::surface::{DrawCommand, RecordingSurface};

    // Tests setup sizes the canvas from the layout and clears it
    // Verified by sizing the canvas from rows twice
    #[test]
    fn test_setup_sizes_and_clears_surface() {
        let Ok(sketch) = Sketch::setup(RecordingSurface::new(), &DEFAULT_FIELD_MAP, FIELD_TILE_SIZE)
        else {
            unreachable!("sample map should build");
        };

        assert_eq!(
            sketch.surface().commands(),
            &[
                DrawCommand::SurfaceSize {
                    width: 500,
                    height: 350
                },
                DrawCommand::Background(BACKGROUND_COLOR),
            ]
        );
        assert_eq!(sketch.grid().rows(), 7);
    }

    // Tests draw appends every path stroke after setup
    // Verified by drawing only the first row
    #[test]
    fn test_draw_renders_all_segments() {
        let Ok(mut sketch) =
            Sketch::setup(RecordingSurface::new(), &DEFAULT_FIELD_MAP, FIELD_TILE_SIZE)
        else {
            unreachable!("sample map should build");
        };
        sketch.draw();

        let surface = sketch.into_surface();
        assert_eq!(surface.lines().len(), 17);
    }

    // Tests drawing twice repeats the same commands
    // Verified by clearing the grid after the first draw
    #[test]
    fn test_draw_twice_repeats_commands() {
        let Ok(mut sketch) = Sketch::setup(RecordingSurface::new(), &[[4u8, 5], [6, 7]], 10)
        else {
            unreachable!("corner map should build");
        };
        sketch.draw();
        let first = sketch.surface().commands().to_vec();
        sketch.draw();
        let all = sketch.surface().commands();

        let setup_len = 2;
        let draw_len = first.len() - setup_len;
        assert_eq!(all.len(), first.len() + draw_len);
        assert_eq!(all.get(setup_len..first.len()), all.get(first.len()..));
    }

    // Tests setup failure reports the layout error
    // Verified by swallowing grid errors in setup
    #[test]
    fn test_setup_propagates_layout_errors() {
        let result = Sketch::setup(RecordingSurface::new(), &[[0u8, 8]], 10);
        assert!(matches!(
            result,
            Err(BoardError::InvalidTileCode {
                row: 0,
                column: 1,
                code: 8
            })
        ));
    }

    // Tests a raster sketch paints the path in white over black
    // Verified by skipping the background fill
    #[test]
    fn test_raster_sketch_pixels() {
        let Ok(mut sketch) = Sketch::setup(RasterSurface::new(), &DEFAULT_FIELD_MAP, 50) else {
            unreachable!("sample map should build");
        };
        sketch.draw();
        let surface = sketch.into_surface();

        // Horizontal entry on row 3, column 0
        assert_eq!(surface.pixel(10, 175), Some(PATH_STROKE_COLOR));
        // Vertical piece on row 3, column 6
        assert_eq!(surface.pixel(325, 160), Some(PATH_STROKE_COLOR));
        // Placeable tile stays empty
        assert_eq!(surface.pixel(75, 75), Some(BACKGROUND_COLOR));
    }
}
