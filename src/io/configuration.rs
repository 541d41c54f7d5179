//! Board constants and runtime configuration defaults

use crate::render::surface::Color;

/// Edge length of one tile in pixels
pub const FIELD_TILE_SIZE: u32 = 50;

/// Number of distinct tile codes (0 through 7)
pub const TILE_TYPE_COUNT: usize = 8;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed rows or columns in a layout
pub const MAX_GRID_DIMENSION: usize = 1_000;

/// Largest accepted tile edge length in pixels
pub const MAX_TILE_SIZE: u32 = 1_000;

// Bounds the RGBA buffer a raster canvas allocates
/// Maximum canvas width or height in pixels
pub const MAX_CANVAS_DIMENSION: u32 = 16_384;

/// Stroke colour for enemy path segments
pub const PATH_STROKE_COLOR: Color = Color::gray(255);

/// Canvas fill painted before any tile is drawn
pub const BACKGROUND_COLOR: Color = Color::gray(0);

/// Output file written when none is given
pub const DEFAULT_OUTPUT_PATH: &str = "field.png";

/// Sample board: a path entering on the left and leaving on the right
///
/// ```text
/// 0 -> blank            4 -> right to bottom
/// 1 -> placeable        5 -> bottom to left
/// 2 -> horizontal path  6 -> right to top
/// 3 -> vertical path    7 -> top to left
/// ```
pub const DEFAULT_FIELD_MAP: [[u8; 10]; 7] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [0, 1, 1, 1, 1, 1, 4, 2, 2, 2],
    [2, 2, 5, 1, 1, 1, 3, 1, 1, 0],
    [0, 1, 6, 2, 2, 2, 7, 1, 1, 0],
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

/// The sample board as owned rows
pub fn default_field_rows() -> Vec<Vec<u8>> {
    DEFAULT_FIELD_MAP.iter().map(|row| row.to_vec()).collect()
}
