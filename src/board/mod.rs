//! Board model: tile kinds and the grid that holds them

/// Grid construction, validation and row-major rendering
pub mod grid;
/// Tile kinds, geometry and per-tile drawing
pub mod tile;

pub use grid::Grid;
pub use tile::{Tile, TileType};
