//! The board as a fixed matrix of tiles
//!
//! Built once from a matrix of layout codes and never mutated afterwards.
//! Construction fails fast on ragged rows and unknown codes so that a bad
//! layout is reported with its row and column instead of rendering a gap.

use log::debug;
use ndarray::Array2;

use crate::board::tile::{Tile, TileType};
use crate::io::configuration::{MAX_CANVAS_DIMENSION, MAX_GRID_DIMENSION, MAX_TILE_SIZE};
use crate::io::error::{BoardError, Result, invalid_parameter};
use crate::render::surface::Surface;

/// Every tile of a board, indexed `[row, column]`
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    tiles: Array2<Tile>,
    tile_size: u32,
}

impl Grid {
    /// Build a grid from rows of layout codes
    ///
    /// Row `r`, column `c` of the input becomes the tile at `(c, r)`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `tile_size` is zero or larger than [`MAX_TILE_SIZE`]
    /// - the layout has no rows or no columns
    /// - either dimension exceeds [`MAX_GRID_DIMENSION`]
    /// - the canvas would be wider or taller than [`MAX_CANVAS_DIMENSION`]
    /// - a row differs in length from the first row
    /// - a cell holds a code outside 0-7
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R], tile_size: u32) -> Result<Self> {
        validate_tile_size(tile_size)?;

        let row_count = rows.len();
        let column_count = rows.first().map_or(0, |row| row.as_ref().len());
        validate_dimensions(row_count, column_count)?;
        validate_canvas(row_count, column_count, tile_size)?;

        let mut tiles = Vec::with_capacity(row_count * column_count);
        for (row, codes) in rows.iter().enumerate() {
            let codes = codes.as_ref();
            if codes.len() != column_count {
                return Err(BoardError::RaggedRow {
                    row,
                    expected: column_count,
                    found: codes.len(),
                });
            }
            for (column, &code) in codes.iter().enumerate() {
                tiles.push(build_tile(row, column, code, tile_size)?);
            }
        }

        Self::assemble(tiles, row_count, column_count, tile_size)
    }

    /// Build a grid from a code matrix
    ///
    /// # Errors
    ///
    /// Same conditions as [`Grid::from_rows`], except that an array is
    /// always rectangular.
    pub fn from_codes(codes: &Array2<u8>, tile_size: u32) -> Result<Self> {
        validate_tile_size(tile_size)?;

        let (row_count, column_count) = codes.dim();
        validate_dimensions(row_count, column_count)?;
        validate_canvas(row_count, column_count, tile_size)?;

        let mut tiles = Vec::with_capacity(codes.len());
        for ((row, column), &code) in codes.indexed_iter() {
            tiles.push(build_tile(row, column, code, tile_size)?);
        }

        Self::assemble(tiles, row_count, column_count, tile_size)
    }

    fn assemble(
        tiles: Vec<Tile>,
        row_count: usize,
        column_count: usize,
        tile_size: u32,
    ) -> Result<Self> {
        let tiles = Array2::from_shape_vec((row_count, column_count), tiles).map_err(|e| {
            invalid_parameter("layout", &format!("{row_count}x{column_count}"), &e)
        })?;

        let grid = Self { tiles, tile_size };
        debug!(
            "Built {}x{} grid with {} path tiles",
            grid.rows(),
            grid.columns(),
            grid.path_tile_count()
        );
        Ok(grid)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.tiles.nrows()
    }

    /// Number of columns
    pub fn columns(&self) -> usize {
        self.tiles.ncols()
    }

    /// Edge length shared by every tile
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Tile at `(row, column)`, if inside the grid
    pub fn tile(&self, row: usize, column: usize) -> Option<&Tile> {
        self.tiles.get((row, column))
    }

    /// Tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Total tile count (rows × columns)
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Always false for a constructed grid
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Canvas `(width, height)` that fits the whole board
    pub fn canvas_size(&self) -> (u32, u32) {
        (
            self.columns() as u32 * self.tile_size,
            self.rows() as u32 * self.tile_size,
        )
    }

    /// Tiles that draw part of the enemy path
    pub fn path_tile_count(&self) -> usize {
        self.tiles
            .iter()
            .filter(|tile| tile.tile_type().is_path())
            .count()
    }

    /// Strokes one [`Grid::render`] pass draws
    pub fn segment_count(&self) -> usize {
        self.tiles
            .iter()
            .map(|tile| tile.tile_type().segment_count())
            .sum()
    }

    /// Layout codes, row by row
    pub fn codes(&self) -> Array2<u8> {
        self.tiles.map(|tile| tile.tile_type().code())
    }

    /// Render every tile, top to bottom and left to right
    ///
    /// Nothing is mutated, so repeated calls issue identical commands.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        for tile in &self.tiles {
            tile.render(&mut *surface);
        }
    }
}

fn build_tile(row: usize, column: usize, code: u8, tile_size: u32) -> Result<Tile> {
    let tile_type =
        TileType::from_code(code).ok_or(BoardError::InvalidTileCode { row, column, code })?;
    Ok(Tile::new(column, row, tile_size, tile_type))
}

fn validate_tile_size(tile_size: u32) -> Result<()> {
    if tile_size == 0 {
        return Err(invalid_parameter(
            "tile_size",
            &tile_size,
            &"must be positive",
        ));
    }
    if tile_size > MAX_TILE_SIZE {
        return Err(invalid_parameter(
            "tile_size",
            &tile_size,
            &format!("must not exceed {MAX_TILE_SIZE}"),
        ));
    }
    Ok(())
}

fn validate_dimensions(rows: usize, columns: usize) -> Result<()> {
    if rows == 0 || columns == 0 {
        return Err(BoardError::EmptyLayout);
    }
    if rows > MAX_GRID_DIMENSION || columns > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            "layout",
            &format!("{rows}x{columns}"),
            &format!("dimensions must not exceed {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}

fn validate_canvas(rows: usize, columns: usize, tile_size: u32) -> Result<()> {
    let extent = |count: usize| {
        u32::try_from(count)
            .ok()
            .and_then(|count| count.checked_mul(tile_size))
            .filter(|&pixels| pixels <= MAX_CANVAS_DIMENSION)
    };

    if extent(columns).is_none() || extent(rows).is_none() {
        return Err(invalid_parameter(
            "canvas",
            &format!("{rows}x{columns} tiles at {tile_size}px"),
            &format!("width and height must not exceed {MAX_CANVAS_DIMENSION}px"),
        ));
    }
    Ok(())
}
