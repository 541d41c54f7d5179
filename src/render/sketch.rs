//! The host sequence: set up the canvas once, then draw once

use log::debug;

use crate::board::grid::Grid;
use crate::io::configuration::BACKGROUND_COLOR;
use crate::io::error::Result;
use crate::render::surface::Surface;

/// A board bound to the surface it draws on
///
/// [`Sketch::setup`] sizes and clears the surface and builds the grid;
/// [`Sketch::draw`] renders every tile. There is no frame loop: callers draw
/// when they want a picture, and drawing again repeats the same commands.
#[derive(Debug)]
pub struct Sketch<S: Surface> {
    grid: Grid,
    surface: S,
}

impl<S: Surface> Sketch<S> {
    /// Build the grid from layout rows and prepare the surface for it
    ///
    /// # Errors
    ///
    /// Returns an error if the layout or tile size is rejected by
    /// [`Grid::from_rows`]; the surface is left untouched in that case.
    pub fn setup<R: AsRef<[u8]>>(surface: S, rows: &[R], tile_size: u32) -> Result<Self> {
        let grid = Grid::from_rows(rows, tile_size)?;
        Ok(Self::with_grid(surface, grid))
    }

    /// Prepare the surface for an already built grid
    pub fn with_grid(mut surface: S, grid: Grid) -> Self {
        let (width, height) = grid.canvas_size();
        surface.set_surface_size(width, height);
        surface.background(BACKGROUND_COLOR);
        debug!("Canvas set up at {width}x{height}");

        Self { grid, surface }
    }

    /// Render the whole board once
    pub fn draw(&mut self) {
        self.grid.render(&mut self.surface);
        debug!("Drew {} path segments", self.grid.segment_count());
    }

    /// The board being drawn
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The surface in its current state
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Release the surface, e.g. to export it
    pub fn into_surface(self) -> S {
        self.surface
    }
}
