//! Command-line interface for rendering a board layout to PNG

use crate::io::configuration::{DEFAULT_OUTPUT_PATH, FIELD_TILE_SIZE, default_field_rows};
use crate::io::error::Result;
use crate::io::image::export_surface_as_png;
use crate::io::layout::load_layout;
use crate::render::raster::RasterSurface;
use crate::render::sketch::Sketch;
use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "towerfield")]
#[command(
    author,
    version,
    about = "Render a tower-defense board and its enemy path to PNG"
)]
/// Command-line arguments for the board renderer
pub struct Cli {
    /// Layout file to render; the built-in sample board is used when omitted
    #[arg(value_name = "LAYOUT")]
    pub layout: Option<PathBuf>,

    /// Output PNG path (defaults to the layout path with a .png extension)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Tile edge length in pixels
    #[arg(short, long, default_value_t = FIELD_TILE_SIZE)]
    pub tile_size: u32,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Overwrite the output if it already exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if an existing output file should be left alone
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Default log filter for this invocation
    pub const fn log_level(&self) -> &'static str {
        if self.quiet { "warn" } else { "info" }
    }

    /// Where the rendered image will be written
    pub fn output_path(&self) -> PathBuf {
        match (&self.output, &self.layout) {
            (Some(output), _) => output.clone(),
            (None, Some(layout)) => layout.with_extension("png"),
            (None, None) => PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Runs one render: load the layout, draw it once, export the image
pub struct BoardProcessor {
    cli: Cli,
}

impl BoardProcessor {
    /// Create a processor for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Render according to CLI arguments
    ///
    /// Returns `Ok(None)` when the output already exists and skipping is on,
    /// otherwise the path that was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the layout cannot be read or is invalid, or if
    /// the image cannot be written
    pub fn run(&self) -> Result<Option<PathBuf>> {
        let output_path = self.cli.output_path();

        if self.cli.skip_existing() && output_path.exists() {
            info!("Skipping: {} (output exists)", output_path.display());
            return Ok(None);
        }

        let rows = self.layout_rows()?;
        let mut sketch = Sketch::setup(RasterSurface::new(), &rows, self.cli.tile_size)?;
        sketch.draw();

        let (width, height) = sketch.grid().canvas_size();
        let segments = sketch.grid().segment_count();
        export_surface_as_png(sketch.surface(), &output_path)?;

        info!(
            "Rendered {width}x{height} board with {segments} path segments to {}",
            output_path.display()
        );
        Ok(Some(output_path))
    }

    /// Render and discard the written path
    ///
    /// # Errors
    ///
    /// See [`BoardProcessor::run`]
    pub fn process(&self) -> Result<()> {
        self.run().map(|_| ())
    }

    fn layout_rows(&self) -> Result<Vec<Vec<u8>>> {
        self.cli
            .layout
            .as_deref()
            .map_or_else(|| Ok(default_field_rows()), Self::read_layout)
    }

    fn read_layout(path: &Path) -> Result<Vec<Vec<u8>>> {
        info!("Loading layout from {}", path.display());
        load_layout(path)
    }
}
