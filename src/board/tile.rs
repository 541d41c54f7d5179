//! Tile kinds and the strokes each kind contributes to the enemy path
//!
//! Every path stroke runs between a tile's centre and the midpoint of one of
//! its edges (straight tiles join two opposite midpoints directly). Two path
//! tiles sharing an edge therefore meet at that edge's midpoint, which is what
//! turns a well-authored layout into one continuous line. Neighbours are never
//! checked against each other: a mismatched layout simply shows a gap.

use crate::io::configuration::{PATH_STROKE_COLOR, TILE_TYPE_COUNT};
use crate::math::geometry::{Point, Segment};
use crate::render::surface::Surface;

/// What a grid cell holds, keyed by its layout code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileType {
    /// `0`: empty ground
    Blank,
    /// `1`: empty ground where units may be placed
    Placeable,
    /// `2`: path crossing from the left edge to the right edge
    HorizontalPath,
    /// `3`: path crossing from the top edge to the bottom edge
    VerticalPath,
    /// `4`: path turning between the right and bottom edges
    CornerRightBottom,
    /// `5`: path turning between the bottom and left edges
    CornerBottomLeft,
    /// `6`: path turning between the right and top edges
    CornerRightTop,
    /// `7`: path turning between the top and left edges
    CornerTopLeft,
}

impl TileType {
    /// All kinds, ordered by code
    pub const ALL: [Self; TILE_TYPE_COUNT] = [
        Self::Blank,
        Self::Placeable,
        Self::HorizontalPath,
        Self::VerticalPath,
        Self::CornerRightBottom,
        Self::CornerBottomLeft,
        Self::CornerRightTop,
        Self::CornerTopLeft,
    ];

    /// Kind for a layout code, if the code is known
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Blank),
            1 => Some(Self::Placeable),
            2 => Some(Self::HorizontalPath),
            3 => Some(Self::VerticalPath),
            4 => Some(Self::CornerRightBottom),
            5 => Some(Self::CornerBottomLeft),
            6 => Some(Self::CornerRightTop),
            7 => Some(Self::CornerTopLeft),
            _ => None,
        }
    }

    /// Layout code for this kind
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Whether the tile draws part of the enemy path
    pub const fn is_path(self) -> bool {
        !matches!(self, Self::Blank | Self::Placeable)
    }

    /// Whether the tile joins two perpendicular edges
    pub const fn is_corner(self) -> bool {
        matches!(
            self,
            Self::CornerRightBottom
                | Self::CornerBottomLeft
                | Self::CornerRightTop
                | Self::CornerTopLeft
        )
    }

    /// Number of strokes a tile of this kind draws
    pub const fn segment_count(self) -> usize {
        match self {
            Self::Blank | Self::Placeable => 0,
            Self::HorizontalPath | Self::VerticalPath => 1,
            Self::CornerRightBottom
            | Self::CornerBottomLeft
            | Self::CornerRightTop
            | Self::CornerTopLeft => 2,
        }
    }
}

impl TryFrom<u8> for TileType {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(code)
    }
}

impl From<TileType> for u8 {
    fn from(tile_type: TileType) -> Self {
        tile_type.code()
    }
}

/// One cell of the board
///
/// Position and kind are fixed at construction; pixel coordinates are derived
/// on demand from the column, row and tile size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    column: usize,
    row: usize,
    size: u32,
    tile_type: TileType,
}

impl Tile {
    /// Create a tile at `(column, row)` with edge length `size`
    pub const fn new(column: usize, row: usize, size: u32, tile_type: TileType) -> Self {
        Self {
            column,
            row,
            size,
            tile_type,
        }
    }

    /// Column index within the grid
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Row index within the grid
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Edge length in pixels
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Kind of tile
    pub const fn tile_type(&self) -> TileType {
        self.tile_type
    }

    /// Top-left corner in pixels
    pub const fn origin(&self) -> Point {
        let size = self.size as f32;
        Point::new(self.column as f32 * size, self.row as f32 * size)
    }

    /// Centre in pixels
    pub const fn center(&self) -> Point {
        let half = self.size as f32 / 2.0;
        self.origin().offset(half, half)
    }

    const fn top_mid(&self) -> Point {
        Point::new(self.center().x, self.origin().y)
    }

    const fn bottom_mid(&self) -> Point {
        Point::new(self.center().x, self.origin().y + self.size as f32)
    }

    const fn left_mid(&self) -> Point {
        Point::new(self.origin().x, self.center().y)
    }

    const fn right_mid(&self) -> Point {
        Point::new(self.origin().x + self.size as f32, self.center().y)
    }

    /// Strokes this tile draws, in drawing order
    pub fn segments(&self) -> Vec<Segment> {
        let center = self.center();
        match self.tile_type {
            TileType::Blank | TileType::Placeable => Vec::new(),
            TileType::HorizontalPath => vec![Segment::new(self.left_mid(), self.right_mid())],
            TileType::VerticalPath => vec![Segment::new(self.top_mid(), self.bottom_mid())],
            TileType::CornerRightBottom => vec![
                Segment::new(center, self.right_mid()),
                Segment::new(center, self.bottom_mid()),
            ],
            TileType::CornerBottomLeft => vec![
                Segment::new(center, self.bottom_mid()),
                Segment::new(center, self.left_mid()),
            ],
            TileType::CornerRightTop => vec![
                Segment::new(center, self.top_mid()),
                Segment::new(center, self.right_mid()),
            ],
            TileType::CornerTopLeft => vec![
                Segment::new(center, self.top_mid()),
                Segment::new(center, self.left_mid()),
            ],
        }
    }

    /// Draw this tile's strokes in the path colour
    ///
    /// Blank and placeable tiles issue no commands at all.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let segments = self.segments();
        if segments.is_empty() {
            return;
        }

        surface.set_stroke_color(PATH_STROKE_COLOR);
        for segment in segments {
            surface.draw_line(segment);
        }
    }
}
